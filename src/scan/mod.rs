//! Scan module - Filesystem discovery
//!
//! This module provides:
//! - Project root location by conventional folder markers
//! - Recursive frontend file discovery grouped by suffix chain

pub mod discover;
pub mod locate;
