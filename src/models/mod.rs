//! Data models for the photo-sales demo backend.
//!
//! These models match the frontend JSON shapes exactly for seamless
//! interoperability.

mod cart;
mod catalog;
mod gallery;
mod session;

pub use cart::*;
pub use catalog::*;
pub use gallery::*;
pub use session::*;
