use crate::app::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="text-center py-20">
            <h1 class="text-3xl font-bold text-gray-900 mb-4">{"Page not found"}</h1>
            <Link<Route> to={Route::Home} classes="text-primary hover:underline">
                {"Back to all courses"}
            </Link<Route>>
        </div>
    }
}
