//! Bridge between the UI command queue and order simulator workers.

pub mod commands;
pub mod runtime;
