use catalog_core::{format_date, format_duration};
use catalog_http::types::Course;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct CourseCardProps {
    pub course: Course,
}

/// Creation date for display; unparseable dates are shown as stored
pub fn display_date(raw: &str) -> String {
    format_date(raw).unwrap_or_else(|_| raw.to_string())
}

#[function_component(CourseCard)]
pub fn course_card(props: &CourseCardProps) -> Html {
    let course = &props.course.attributes;
    let authors = course.author_names();

    html! {
        <article class="flex flex-col gap-3 rounded bg-white p-6 shadow-md">
            <a href={format!("/courses/{}", course.slug)}>
                <h2 class="text-xl font-bold text-gray-900 hover:text-primary">{course.title.clone()}</h2>
            </a>
            <p class="text-gray-600 text-sm">{course.description.clone()}</p>
            <dl class="grid grid-cols-2 gap-1 text-sm text-gray-700">
                <dt class="font-semibold">{"Created"}</dt>
                <dd>{display_date(&course.creation_date)}</dd>
                <dt class="font-semibold">{"Duration"}</dt>
                <dd>{format_duration(course.duration)}</dd>
                if !authors.is_empty() {
                    <>
                        <dt class="font-semibold">{"Authors"}</dt>
                        <dd>{authors}</dd>
                    </>
                }
            </dl>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("2024-01-05"), "05.01.2024");
        assert_eq!(display_date("soon"), "soon");
    }
}
