//! HTTP layer for request/response handling.
//!
//! Translates HTTP requests into validator and reporter calls and formats
//! responses according to the API contract.
//!
//! # Modules
//!
//! - [`dto`] - Response payloads
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Hit counting and tracing middleware
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
