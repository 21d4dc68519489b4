//! Finglish-to-Persian conversion engine.
//!
//! Latin-transliterated Persian words are segmented into letter tokens,
//! expanded through position-dependent conversion tables, scored against
//! a word-frequency index and composed into ranked phrase candidates.

pub mod converter;
pub mod dict;
pub mod segment;
pub mod settings;
