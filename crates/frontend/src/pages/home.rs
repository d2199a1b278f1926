//! Course catalog listing

use catalog_frontend_common::components::{CourseCard, LoadingSpinner};
use catalog_frontend_common::services::CourseService;
use catalog_http::types::{CourseCollection, Pagination};
use yew::prelude::*;

const NAV_BUTTON_CLASSES: &str =
    "px-4 py-2 rounded bg-gray-100 hover:bg-gray-200 disabled:opacity-50";

pub fn pagination_summary(pagination: &Pagination) -> String {
    let noun = if pagination.total == 1 { "course" } else { "courses" };
    format!(
        "Page {} of {} · {} {noun}",
        pagination.page,
        pagination.page_count.max(1),
        pagination.total
    )
}

#[derive(Properties, Clone, PartialEq)]
pub struct CourseListViewProps {
    /// Last successfully loaded page
    pub courses: Option<CourseCollection>,
    #[prop_or_default]
    pub error: Option<String>,
    /// Requested page number
    pub on_page: Callback<u32>,
    /// Reload the requested page
    pub on_retry: Callback<()>,
}

/// Course grid with pagination. A failed load is shown above the last good
/// page so navigation stays available.
#[function_component(CourseListView)]
pub fn course_list_view(props: &CourseListViewProps) -> Html {
    let error = props.error.as_ref().map(|message| {
        html! {
            <div class="mb-6 flex items-center justify-between rounded border border-red-200 bg-red-50 p-4 text-red-700">
                <span>{message.clone()}</span>
                <button
                    class={NAV_BUTTON_CLASSES}
                    onclick={props.on_retry.reform(|_: MouseEvent| ())}
                >
                    {"Retry"}
                </button>
            </div>
        }
    });

    let Some(collection) = &props.courses else {
        return html! { <section>{error}</section> };
    };

    let pagination = collection.meta.pagination;
    let current = pagination.page;

    html! {
        <section>
            <h1 class="text-3xl font-bold text-gray-900 mb-8">{"Courses"}</h1>
            {error}
            if collection.data.is_empty() {
                <p class="text-gray-600">{"No courses published yet."}</p>
            } else {
                <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                    { for collection.data.iter().map(|course| html! {
                        <CourseCard key={course.id} course={course.clone()} />
                    }) }
                </div>
            }
            <div class="mt-10 flex items-center justify-between text-sm text-gray-700">
                <button
                    class={NAV_BUTTON_CLASSES}
                    disabled={!pagination.has_previous()}
                    onclick={props.on_page.reform(move |_: MouseEvent| current.saturating_sub(1).max(1))}
                >
                    {"Previous"}
                </button>
                <span>{pagination_summary(&pagination)}</span>
                <button
                    class={NAV_BUTTON_CLASSES}
                    disabled={!pagination.has_next()}
                    onclick={props.on_page.reform(move |_: MouseEvent| current + 1)}
                >
                    {"Next"}
                </button>
            </div>
        </section>
    }
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let page = use_state(|| 1_u32);
    let attempt = use_state(|| 0_u32);
    let courses = use_state(|| Option::<CourseCollection>::None);
    let is_loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);

    // Load courses whenever the page changes or a retry is requested
    {
        let courses = courses.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();

        use_effect_with((*page, *attempt), move |(page, _)| {
            let page = *page;
            is_loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match CourseService::new().list(page).await {
                    Ok(collection) => {
                        courses.set(Some(collection));
                        error.set(None);
                    }
                    Err(e) => {
                        error.set(Some(format!("Failed to load courses: {e}")));
                    }
                }
                is_loading.set(false);
            });
        });
    }

    let on_page = {
        let page = page.clone();
        Callback::from(move |target: u32| page.set(target))
    };

    let on_retry = {
        let attempt = attempt.clone();
        Callback::from(move |()| attempt.set(attempt.wrapping_add(1)))
    };

    if *is_loading && courses.is_none() && error.is_none() {
        return html! { <LoadingSpinner text={Some("Loading courses...".to_string())} /> };
    }

    html! {
        <CourseListView
            courses={(*courses).clone()}
            error={(*error).clone()}
            {on_page}
            {on_retry}
        />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use catalog_http::types::Meta;
    use yew::LocalServerRenderer;

    fn empty_page(page: u32, page_count: u32) -> CourseCollection {
        CourseCollection {
            data: Vec::new(),
            meta: Meta {
                pagination: Pagination {
                    page,
                    page_size: 9,
                    page_count,
                    total: 0,
                },
            },
        }
    }

    async fn render(props: CourseListViewProps) -> String {
        LocalServerRenderer::<CourseListView>::with_props(props)
            .hydratable(false)
            .render()
            .await
    }

    #[test]
    fn test_pagination_summary() {
        let pagination = Pagination {
            page: 2,
            page_size: 9,
            page_count: 3,
            total: 25,
        };
        assert_eq!(pagination_summary(&pagination), "Page 2 of 3 · 25 courses");

        let single = Pagination {
            page: 1,
            page_size: 9,
            page_count: 1,
            total: 1,
        };
        assert_eq!(pagination_summary(&single), "Page 1 of 1 · 1 course");

        let empty = Pagination {
            page: 1,
            page_size: 9,
            page_count: 0,
            total: 0,
        };
        assert_eq!(pagination_summary(&empty), "Page 1 of 1 · 0 courses");
    }

    #[tokio::test]
    async fn test_failed_page_keeps_navigation() {
        let html = render(CourseListViewProps {
            courses: Some(empty_page(2, 3)),
            error: Some("Failed to load courses: Error fetching data: 500".into()),
            on_page: Callback::from(|_: u32| ()),
            on_retry: Callback::from(|()| ()),
        })
        .await;

        assert!(html.contains("Failed to load courses: Error fetching data: 500"));
        assert!(html.contains("Previous"));
        assert!(html.contains("Next"));
        assert!(html.contains("Page 2 of 3"));
    }

    #[tokio::test]
    async fn test_failed_first_load_offers_retry() {
        let html = render(CourseListViewProps {
            courses: None,
            error: Some("Failed to load courses: No response received".into()),
            on_page: Callback::from(|_: u32| ()),
            on_retry: Callback::from(|()| ()),
        })
        .await;

        assert!(html.contains("No response received"));
        assert!(html.contains("Retry"));
        assert!(!html.contains("Next"));
    }
}
