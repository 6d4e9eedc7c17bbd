//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - errors: Error classification and display messages
//! - formatting: Sanitising and truncating server-supplied strings
//! - search: Query validation, response mapping, stale response detection
//! - ui: Pane cycling, toast lifetime, busy indicator animation
//! - upload: Form validation and response mapping

pub mod errors;
pub mod formatting;
pub mod search;
pub mod ui;
pub mod upload;
