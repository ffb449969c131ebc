//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Lexer struct and the dispatch loop
//! - `number` - Binary, octal, hexadecimal and decimal literals
//! - `identifier` - Bare, signed and dotted identifiers
//! - `string` - Quoted and raw strings
//! - `keyword` - `#`-prefixed keyword literals
//! - `comment` - Line comments, nested block comments and slashdash

mod comment;
mod core;
mod identifier;
mod keyword;
mod number;
mod string;

pub(crate) use self::core::Lexer;
