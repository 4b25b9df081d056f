//! Top-level module for the character-transition model.
//!
//! This module provides a first-order character Markov chain, including:
//! - Bigram extraction (`bigram`)
//! - Per-source transition rows (`Row`)
//! - The full transition model (`ChainModel`)
//! - Corpus training with optional parallel sharding (`ChainTrainer`)
//! - Guided character sampling (`GuidedSampler`)
//! - Word and line transformation (`WordTransformer`)

/// Bigram extraction from a single word.
///
/// Pure functions, no filtering: every adjacent pair is emitted.
pub mod bigram;

/// The full chain model: source character to transition row.
///
/// Built once by training, read-only afterwards. Lookups never insert.
pub mod chain;

/// A single transition row: destination character to bounded weight.
///
/// Deterministic iteration order; supports descending-sorted snapshots
/// for the sampler.
pub mod row;

/// Corpus training: count accumulation, shard merging and the two-pass
/// normalization into a `ChainModel`.
pub mod trainer;

/// Guided weighted sampling of the next character.
///
/// Implements the half-threshold biased draw under the class-matching
/// constraint.
pub mod sampler;

/// Word-level and line-level transformation built on the sampler.
pub mod transformer;
