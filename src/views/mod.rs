//! One component per routed page.

mod about;
mod blog;
mod contact;
mod home;
mod legal;
mod not_found;
mod projects;
mod services;

pub use about::About;
pub use blog::{Blog, BlogArticle};
pub use contact::Contact;
pub use home::Home;
pub use legal::{Cookies, Privacy, Terms};
pub use not_found::{NotFound, NotFoundContent};
pub use projects::Projects;
pub use services::Services;
