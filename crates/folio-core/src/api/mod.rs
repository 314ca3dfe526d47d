//! REST client module for the upstream data providers.
//!
//! This module provides the `ApiClient` used by the GitHub and Medium
//! sources, and the `ApiError` taxonomy every fetch failure maps onto.
//! All endpoints are public and unauthenticated.

pub mod client;
pub mod error;

pub use client::{ApiClient, ACCEPT_GITHUB, ACCEPT_JSON};
pub use error::ApiError;
