// crates/aggregate-calc-config/src/lib.rs
// ============================================================================
// Module: Aggregate Calculator Config Library
// Description: Canonical config model and validation.
// Purpose: Single source of truth for aggregate-calc.toml semantics.
// Dependencies: serde, thiserror, toml
// ============================================================================

//! ## Overview
//! `aggregate-calc-config` defines the configuration model for the aggregate
//! calculator tooling. Loading is strict and fail-closed: oversized, non-UTF-8,
//! malformed, or out-of-range configuration is rejected rather than clamped.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
