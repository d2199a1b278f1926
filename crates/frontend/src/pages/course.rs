//! Single course view

use crate::app::Route;
use catalog_core::{format_date, format_duration};
use catalog_frontend_common::components::LoadingSpinner;
use catalog_frontend_common::services::CourseService;
use catalog_http::types::{Author, Course};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, PartialEq)]
enum LoadState {
    Loading,
    Loaded(Option<Course>),
    Failed(String),
}

fn author_item(author: &Author) -> Html {
    html! {
        <li key={author.id}>{author.attributes.name.clone()}</li>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct CoursePageProps {
    pub slug: String,
}

#[function_component(CoursePage)]
pub fn course_page(props: &CoursePageProps) -> Html {
    let state = use_state(|| LoadState::Loading);

    {
        let state = state.clone();
        use_effect_with(props.slug.clone(), move |slug| {
            let slug = slug.clone();
            state.set(LoadState::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                match CourseService::new().by_slug(&slug).await {
                    Ok(course) => state.set(LoadState::Loaded(course)),
                    Err(e) => state.set(LoadState::Failed(e.to_string())),
                }
            });
        });
    }

    let back = html! {
        <Link<Route> to={Route::Home} classes="text-primary hover:underline">
            {"← All courses"}
        </Link<Route>>
    };

    match &*state {
        LoadState::Loading => html! { <LoadingSpinner text={Some("Loading course...".to_string())} /> },
        LoadState::Failed(message) => html! {
            <div>
                <div class="mb-6 rounded border border-red-200 bg-red-50 p-6 text-red-700">{message.clone()}</div>
                {back}
            </div>
        },
        LoadState::Loaded(None) => html! {
            <div>
                <p class="mb-6 text-gray-700">{"Course not found."}</p>
                {back}
            </div>
        },
        LoadState::Loaded(Some(course)) => {
            let course = &course.attributes;
            let created = format_date(&course.creation_date)
                .unwrap_or_else(|_| course.creation_date.clone());

            html! {
                <article class="max-w-3xl">
                    {back}
                    <h1 class="mt-6 text-3xl font-bold text-gray-900">{course.title.clone()}</h1>
                    <p class="mt-2 text-sm text-gray-500">
                        {format!("{} · {} · {}", course.course_id, created, format_duration(course.duration))}
                    </p>
                    <p class="mt-6 text-gray-700 leading-relaxed">{course.description.clone()}</p>
                    if !course.authors.data.is_empty() {
                        <section class="mt-8">
                            <h2 class="text-lg font-semibold text-gray-900 mb-2">{"Authors"}</h2>
                            <ul class="list-disc pl-5 text-gray-700">
                                { for course.authors.data.iter().map(author_item) }
                            </ul>
                        </section>
                    }
                </article>
            }
        }
    }
}
