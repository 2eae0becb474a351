//! # Interface Layer
//!
//! Handlers invoked by the event router, one module per user-facing interaction.

pub mod commands;
