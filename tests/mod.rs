//! Test suite for CodeShare
//!
//! This module organizes all tests

#[cfg(feature = "ssr")]
pub mod common;
