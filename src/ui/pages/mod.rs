//! Application pages module
//!
//! This module contains all the page components for the application:
//! - Home page (application root, post-login target)
//! - Login page (sign-in / sign-up tabs)
//! - Not found page

mod home;
mod login;
mod not_found;

pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
