//! Utility modules for common functionality
//!
//! This module provides logging and progress reporting used by the commands.

pub mod logger;
pub mod progress;
