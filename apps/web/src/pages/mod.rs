//! Static pages. Content only; no state beyond what the router hands in.

mod about;
mod books;
mod home;

pub use about::About;
pub use books::{Books, CATALOGUE};
pub use home::Home;
