//! Helper functions shared by the page composer and the post index

mod date;
mod html;

pub use date::*;
pub use html::*;
