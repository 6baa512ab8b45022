//! Main module for syntax test authoring functionality

pub mod align;
pub mod classifier;
pub mod commands;
pub mod context;
pub mod error;
pub mod grammar;
pub mod highlight;
pub mod host;
pub mod selector;
pub mod suggest;
pub mod testing;
pub mod walker;
