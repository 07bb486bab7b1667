//! Sessions Entity Module

pub mod session;

pub use session::*;
