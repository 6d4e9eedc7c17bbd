//! External Services
//!
//! This module contains services that interact with external systems:
//! - api: Background worker running upload/search/download/receive requests

pub mod api;
