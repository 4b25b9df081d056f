use thiserror::Error;

/// Training invariant violations.
///
/// These are unrecoverable: a partially-normalized model cannot satisfy the
/// weight invariants, so the whole training run aborts.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TrainError {
	/// A completed row had a zero total count at normalization time.
	/// Rows are only created by observed increments, so this is a logic
	/// error, not an input problem.
	#[error("transition row for {source_symbol:?} has a zero total count")]
	ZeroRowSum { source_symbol: char },
}

/// Model persistence failures.
///
/// Any decode failure is fatal for the operation: a partially-decoded model
/// is never returned.
#[derive(Debug, Error)]
pub enum CodecError {
	#[error("bad magic bytes: expected {expected:?}, got {found:?}")]
	BadMagic { expected: [u8; 4], found: [u8; 4] },

	/// The stream ended before the declared counts were satisfied.
	#[error("model stream truncated")]
	Truncated,

	#[error("declared count {0} exceeds the sane upper bound")]
	CountTooLarge(u32),

	#[error("invalid code point {0:#x}")]
	BadCodePoint(u32),

	#[error("weight {0} outside [0, 1]")]
	WeightOutOfRange(f64),

	#[error("i/o failure: {0}")]
	Io(#[from] std::io::Error),
}
