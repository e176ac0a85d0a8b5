// crates/aggregate-calc-cli/src/lib.rs
// ============================================================================
// Module: Aggregate Calculator CLI Library
// Description: Shared helpers for the aggregate-calc binary.
// Purpose: Keep input parsing, reporting, and audit logging testable.
// Dependencies: aggregate-calc-core, aggregate-calc-config, serde, serde_json
// ============================================================================

//! ## Overview
//! The `aggregate-calc` binary is a thin dispatcher over this library. Input
//! parsing, result rendering, and audit logging live here so they can be
//! exercised without spawning the process.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod input;
pub mod report;
