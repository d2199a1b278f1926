mod button;
mod course_card;
mod logo;
mod navbar;
mod spinner;

pub use button::{ButtonAction, ButtonContent, IconKind, PrimaryButton};
pub use course_card::CourseCard;
pub use logo::Logo;
pub use navbar::Navbar;
pub use spinner::LoadingSpinner;
