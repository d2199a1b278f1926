//! Primary button rendered either as a link or as a click button

use yew::prelude::*;

const BASE_CLASSES: &str = "inline-flex items-center justify-center rounded bg-primary hover:bg-primary-hover text-white font-bold leading-normal transition-colors duration-300";

/// Icons available on icon-only buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Trash,
    Edit,
}

impl IconKind {
    pub const fn src(self) -> &'static str {
        match self {
            Self::Trash => "/trash.svg",
            Self::Edit => "/edit-pencil.svg",
        }
    }

    pub const fn alt(self) -> &'static str {
        match self {
            Self::Trash => "Delete",
            Self::Edit => "Edit",
        }
    }
}

/// What the button shows
#[derive(Clone, Debug, PartialEq)]
pub enum ButtonContent {
    Text(AttrValue),
    Icon(IconKind),
}

impl ButtonContent {
    pub fn text(text: impl Into<AttrValue>) -> Self {
        Self::Text(text.into())
    }

    /// Tailwind classes for this content
    pub fn classes(&self) -> String {
        let padding = match self {
            Self::Text(_) => "py-3.5 px-9",
            Self::Icon(_) => "p-3.5",
        };
        format!("{BASE_CLASSES} {padding}")
    }
}

/// What pressing the button does
#[derive(Clone, Debug, PartialEq)]
pub enum ButtonAction {
    /// Navigate to a URL; rendered as `<a>`
    Link(AttrValue),
    /// Run a callback; rendered as `<button>`
    Click(Callback<MouseEvent>),
}

impl Default for ButtonAction {
    fn default() -> Self {
        Self::Link(AttrValue::Static("#"))
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct PrimaryButtonProps {
    pub content: ButtonContent,
    #[prop_or_default]
    pub action: ButtonAction,
}

#[function_component(PrimaryButton)]
pub fn primary_button(props: &PrimaryButtonProps) -> Html {
    let class = props.content.classes();

    let inner = match &props.content {
        ButtonContent::Text(text) => html! {
            <span class="uppercase font-bold text-white text-sm lg:text-base">{text.to_string()}</span>
        },
        ButtonContent::Icon(icon) => html! {
            <img src={icon.src()} alt={icon.alt()} width="24" height="24" />
        },
    };

    match &props.action {
        ButtonAction::Click(onclick) => html! {
            <button onclick={onclick.clone()} {class}>{inner}</button>
        },
        ButtonAction::Link(href) => html! {
            <a href={href.clone()} {class}>{inner}</a>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_depends_on_content() {
        let text = ButtonContent::text("Login").classes();
        assert!(text.starts_with(BASE_CLASSES));
        assert!(text.ends_with("py-3.5 px-9"));

        let icon = ButtonContent::Icon(IconKind::Trash).classes();
        assert!(icon.ends_with(" p-3.5"));
    }

    #[test]
    fn test_icon_assets() {
        assert_eq!(IconKind::Trash.src(), "/trash.svg");
        assert_eq!(IconKind::Trash.alt(), "Delete");
        assert_eq!(IconKind::Edit.src(), "/edit-pencil.svg");
        assert_eq!(IconKind::Edit.alt(), "Edit");
    }

    #[test]
    fn test_default_action_is_placeholder_link() {
        assert_eq!(ButtonAction::default(), ButtonAction::Link("#".into()));
    }
}
