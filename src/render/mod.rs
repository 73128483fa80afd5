//! HTML pages.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating, so
//! every provider string is escaped on the way out.

mod detail;
mod home;
mod layout;
mod listing;

pub use detail::recipe_page;
pub use home::home_page;
pub use layout::{layout, message_page};
pub use listing::recipes_page;
