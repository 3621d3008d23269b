//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - File categorization by suffix chain
//! - Best-effort text reading
//! - Path normalization utilities

pub mod category;
pub mod file_reader;
pub mod paths;
