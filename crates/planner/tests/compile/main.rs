//! Filter compilation tests
//!
//! These tests compile whole filter documents and check the exact SQL text
//! produced, including the quoting of hostile input.

mod errors;
mod parameterized;
