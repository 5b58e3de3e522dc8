//! Lexical analysis module for the snip language.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a flat stream of tokens. It handles:
//!
//! - Single-pass scanning with bounded lookahead
//! - Recognition of keywords, identifiers, literals, operators and punctuation
//! - Line, column and offset tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
