//! REST API client for the Fastly control-plane API.
//!
//! [`FastlyClient`] wraps the [`HttpClient`](crate::clients::HttpClient) and
//! offers `get()`, `post()`, `put()`, `delete()`, `post_form()`, `put_form()`
//! and `post_json()`, each taking a path and [`RequestOptions`].
//!
//! # Path Normalization
//!
//! Leading slashes are stripped: `/stats/regions` -> `stats/regions`. A path
//! that is empty afterwards is rejected before any request is sent.

mod client;

pub use client::{FastlyClient, RequestOptions};
