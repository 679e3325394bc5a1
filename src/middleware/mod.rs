// ABOUTME: HTTP middleware for CORS, request ids and request tracing
// ABOUTME: Layers applied around every route of the recipe API
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

/// CORS configuration
pub mod cors;

/// Request id and span middleware
pub mod tracing;

pub use cors::setup_cors;
pub use self::tracing::{propagate_request_id_layer, set_request_id_layer, trace_layer, RequestSpan};
