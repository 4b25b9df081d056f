use std::collections::BTreeMap;

use super::row::Row;

/// The full first-order character-transition model.
///
/// A `ChainModel` maps each source character to its transition `Row`.
/// It is built exactly once by the trainer, then consumed read-only by the
/// generation path and the codec.
///
/// # Responsibilities
/// - Read-only row lookup during generation
/// - Deterministic iteration for encoding
///
/// # Invariants
/// - Every weight is in `[0, 1]` after training
/// - The maximum weight across all rows is exactly 1 for a non-empty model
/// - Lookup never mutates the model: unseen source characters simply have
///   no row, there is no insert-on-miss
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChainModel {
	rows: BTreeMap<char, Row>,
}

impl ChainModel {
	/// Creates an empty model.
	pub fn new() -> Self {
		Self { rows: BTreeMap::new() }
	}

	/// Returns the transition row for `source`, if any was observed.
	///
	/// This is a pure lookup: a miss returns `None` and leaves the model
	/// untouched, so the model can be shared freely during generation.
	pub fn row(&self, source: char) -> Option<&Row> {
		self.rows.get(&source)
	}

	/// Inserts a fully-built row. Used by the trainer and the decoder only.
	pub(crate) fn insert_row(&mut self, source: char, row: Row) {
		self.rows.insert(source, row);
	}

	/// Number of source characters with at least one observed transition.
	pub fn len(&self) -> usize {
		self.rows.len()
	}

	/// Whether the model has no rows at all.
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	/// Iterates over `(source, row)` pairs in deterministic order.
	pub fn iter(&self) -> impl Iterator<Item = (char, &Row)> + '_ {
		self.rows.iter().map(|(c, r)| (*c, r))
	}

	/// Largest weight anywhere in the model, or `None` if empty.
	pub fn max_weight(&self) -> Option<f64> {
		self.rows
			.values()
			.flat_map(|row| row.iter().map(|(_, w)| w))
			.max_by(|a, b| a.total_cmp(b))
	}
}
