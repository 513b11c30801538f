//! REST API surface and the session bootstrap resolver.

pub mod api;
pub mod bootstrap;
pub mod types;
