//! # Infrastructure Layer
//!
//! Handles interactions with external systems and services.
//! Implements the traits defined in the Domain layer (`Messenger`, `FactSource`).

pub mod facts;
pub mod telegram;
