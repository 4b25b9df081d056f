use std::collections::BTreeMap;

/// Represents one transition row of the chain model.
///
/// A `Row` belongs to a single source character and maps each observed
/// destination character to a bounded relative weight.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their normalized observation frequency.
///
/// ## Responsibilities:
/// - Hold the normalized weight of each destination character
/// - Provide a descending-sorted snapshot for the sampler
///
/// ## Invariants
/// - After training, every weight is in `[0, 1]`
/// - Iteration order is deterministic (ascending destination character),
///   so sort ties resolve the same way on every run
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
	/// Outgoing transitions indexed by the destination character.
	/// Example: { 'e' => 1.0, 'a' => 0.07 }
	weights: BTreeMap<char, f64>,
}

impl Row {
	/// Creates a new empty row.
	pub fn new() -> Self {
		Self { weights: BTreeMap::new() }
	}

	/// Sets the weight of a transition toward `dest`.
	pub(crate) fn set(&mut self, dest: char, weight: f64) {
		self.weights.insert(dest, weight);
	}

	/// Returns the weight of the transition toward `dest`, if observed.
	pub fn get(&self, dest: char) -> Option<f64> {
		self.weights.get(&dest).copied()
	}

	/// Number of destination entries in this row.
	pub fn len(&self) -> usize {
		self.weights.len()
	}

	/// Whether this row has no entries.
	pub fn is_empty(&self) -> bool {
		self.weights.is_empty()
	}

	/// Iterates over `(destination, weight)` pairs in deterministic order.
	pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
		self.weights.iter().map(|(c, w)| (*c, *w))
	}

	/// Returns the row entries sorted by descending weight.
	///
	/// The sort is stable, so entries of equal weight keep the row's
	/// deterministic iteration order.
	pub fn sorted_by_weight(&self) -> Vec<(char, f64)> {
		let mut copy: Vec<(char, f64)> = self.iter().collect();
		copy.sort_by(|a, b| b.1.total_cmp(&a.1));
		copy
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_sorted_descending() {
		let mut row = Row::new();
		row.set('a', 0.2);
		row.set('b', 1.0);
		row.set('c', 0.5);

		let sorted = row.sorted_by_weight();
		assert_eq!(sorted, vec![('b', 1.0), ('c', 0.5), ('a', 0.2)]);
	}

	#[test]
	fn test_sorted_ties_keep_iteration_order() {
		let mut row = Row::new();
		row.set('z', 1.0);
		row.set('a', 1.0);
		row.set('m', 1.0);

		// Ties resolve in ascending-character (iteration) order
		let sorted = row.sorted_by_weight();
		assert_eq!(sorted, vec![('a', 1.0), ('m', 1.0), ('z', 1.0)]);
	}

	#[test]
	fn test_get_missing() {
		let row = Row::new();
		assert!(row.get('x').is_none());
		assert!(row.is_empty());
	}
}
