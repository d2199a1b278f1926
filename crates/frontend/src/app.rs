use crate::pages::{CoursePage, HomePage, NotFoundPage, SignInPage, SignUpPage};
use catalog_frontend_common::{AuthProvider, Navbar};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/courses/:slug")]
    Course { slug: String },
    #[at("/signin")]
    SignIn,
    #[at("/signup")]
    SignUp,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Course { slug } => html! { <CoursePage {slug} /> },
        Route::SignIn => html! { <SignInPage /> },
        Route::SignUp => html! { <SignUpPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <AuthProvider>
            <BrowserRouter>
                <Navbar />
                <main class="container mx-auto px-8 py-10">
                    <Switch<Route> render={switch} />
                </main>
            </BrowserRouter>
        </AuthProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(
            Route::Course {
                slug: "rust-basics".into()
            }
            .to_path(),
            "/courses/rust-basics"
        );
        assert_eq!(Route::SignIn.to_path(), "/signin");
        assert_eq!(Route::SignUp.to_path(), "/signup");
    }

    #[test]
    fn test_route_recognition() {
        assert_eq!(
            Route::recognize("/courses/async-rust"),
            Some(Route::Course {
                slug: "async-rust".into()
            })
        );
        assert_eq!(Route::recognize("/signin"), Some(Route::SignIn));
    }
}
