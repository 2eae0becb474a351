//! # Command Handlers
//!
//! Contains specific handler functions for each supported interaction
//! (`/start`, `/help`, `/time`, `/fact`, inline search, review button).
//! These handlers are invoked by the Router.

pub mod fact;
pub mod help;
pub mod inline;
pub mod reviews;
pub mod start;
pub mod time;
