//! Page list search.
//!
//! # Responsibility
//! - Filter index summaries by a case-insensitive name substring.
//! - Tell "no pages at all" apart from "nothing matched".

pub mod filter;
