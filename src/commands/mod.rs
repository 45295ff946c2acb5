//! Command handlers

pub mod context;
pub mod interactive;
pub mod list;
pub mod search;
