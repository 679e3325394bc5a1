// ABOUTME: Re-exports command modules for fridge-cli
// ABOUTME: Provides the catalog listing and recipe finding commands

pub mod find;
pub mod ingredients;
