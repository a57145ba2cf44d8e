//! Data models for Lectio

mod roster;
mod session;

pub use roster::*;
pub use session::*;
