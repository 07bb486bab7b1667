//! Accounts Entity Module

pub mod account;

pub use account::*;
