//! Error types and error handling for the lexer.
//!
//! This module defines the error produced when tokenization fails.
//! It includes:
//!
//! - An error structure with source position information
//! - Specific error variants for each way a scan can fail
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
