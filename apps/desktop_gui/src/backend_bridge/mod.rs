//! Worker thread that runs resume fetches off the UI thread.

pub mod commands;
pub mod runtime;
