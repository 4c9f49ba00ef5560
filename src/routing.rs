pub mod api;
pub mod catchers;
mod general;

pub use general::*;
