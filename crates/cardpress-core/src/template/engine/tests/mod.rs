//! Tests for template engine
//!
//! Organized into focused submodules: plain substitution, image expansion
//! and error reporting.

use super::*;

// Test helper functions
mod helpers;


// Error and edge case tests
mod errors;
