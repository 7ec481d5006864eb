//! Integration tests for trash-by-url
//!
//! These tests verify the interaction between multiple components:
//! configuration, the admin endpoints and the batch driver.

pub mod driver_tests;
pub mod endpoint_tests;
pub mod end_to_end_tests;
