//! Character-transition word transformation library.
//!
//! This crate provides a first-order Markov chain over adjacent character
//! pairs, including:
//! - Bigram extraction and count accumulation from line-oriented corpora
//! - Two-pass normalization into bounded relative weights
//! - A versioned binary persistence format
//! - Guided stochastic word transformation preserving vowel/consonant patterns
//! - Internal utilities for I/O
//!
//! Only the high-level API is exposed publicly. Low-level helpers are kept
//! internal to ensure consistency and prevent misuse.

/// Core chain model, training and generation logic.
pub mod model;

/// Vowel/consonant classification table, loadable from JSON.
pub mod alphabet;

/// Versioned binary encoding and decoding of chain models.
pub mod codec;

/// Error types shared across training and persistence.
pub mod error;

/// I/O utilities (file loading).
///
/// Not exposed
pub(crate) mod io;
