//! HTTP transport layer — `JsonHttp` with per-request retry policies.

pub mod client;
pub mod retry;

pub use client::JsonHttp;
pub use retry::{RetryConfig, RetryPolicy};
