mod course;
mod form;
mod home;
mod not_found;
mod signin;
mod signup;

pub use course::CoursePage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use signin::SignInPage;
pub use signup::SignUpPage;
