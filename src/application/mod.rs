//! # Application Layer
//!
//! Contains the core logic of the bot: table loading, querying, formatting and event routing.

pub mod dataset;
pub mod formatter;
pub mod query;
pub mod router;
