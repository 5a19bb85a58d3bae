//! This module contains an implementation of a client for the Airtable record storage API. The
//! client accepts a custom base URL so it can be pointed at compatible gateways or mock servers
//! if the implementors so desire.
//!
//! Ongoing use and support is only guaranteed to work against the hosted Airtable service.

pub mod models;
pub mod records;

pub(crate) mod client;

pub use client::{ApiClient, ApiClientError, ApiError, DEFAULT_API_URL};
