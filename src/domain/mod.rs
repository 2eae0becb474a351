//! # Domain Layer
//!
//! Core definitions, types, and traits that define the business domain of the application.
//! Independent of the Telegram framework, serving as the contract for other layers.

pub mod config;
pub mod events;
pub mod records;
pub mod traits;
pub mod types;
