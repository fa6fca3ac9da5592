//! Serenity CLI library.
//!
//! Request loading, logging setup, and the command implementations behind
//! the `serenity` binary.

pub mod commands;
pub mod input;
pub mod logging;
