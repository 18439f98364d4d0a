//! Test suite for the intern portal
//!
//! This module organizes all tests

pub mod integration;
pub mod property;
