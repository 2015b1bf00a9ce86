pub mod form;
pub mod tabs;

pub use form::{FormField, PasswordField};
pub use tabs::{TabItem, TabPanel, Tabs};
