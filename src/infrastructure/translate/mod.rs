//! Translation API client.

mod client;
mod dto;

pub use client::{DEFAULT_API_KEY, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, HttpTranslationClient};
