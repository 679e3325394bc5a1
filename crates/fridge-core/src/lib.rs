// ABOUTME: Core types and constants for the My Fridge Food recipe finder
// ABOUTME: Foundation crate with error handling, catalog and recipe models, and constants
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![deny(unsafe_code)]

//! # Fridge Core
//!
//! Foundation crate shared by the recipe service, the seeder and the
//! terminal client. It changes rarely, so the main crate can recompile
//! independently of it.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode` and the JSON error body
//! - **models**: `Catalog`, `Ingredient`, `Recipe` and the matcher request
//! - **constants**: route paths, user-facing messages and defaults

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Catalog and recipe data models
pub mod models;
