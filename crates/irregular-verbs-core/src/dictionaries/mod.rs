//! Curated word data.
//!
//! Provides the built-in irregular verb list that seeds every generated table.

pub mod irregular_verbs;
