// ABOUTME: Configuration management module for server settings
// ABOUTME: Re-exports environment-driven server, database and CORS configuration
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Configuration module
//!
//! All settings come from environment variables (optionally a `.env` file);
//! there is no configuration file.

/// Environment and server configuration
pub mod environment;

pub use environment::{
    CorsConfig, DatabaseConfig, DatabaseUrl, Environment, PostgresParts, ServerConfig,
};
