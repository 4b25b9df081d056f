use rand::Rng;

use crate::alphabet::{Alphabet, CharClass};
use super::chain::ChainModel;

/// Draws the next generated character from the chain, guided by the
/// character the original word carries at the same position.
///
/// # Responsibilities
/// - Walk the current character's row in descending weight order
/// - Apply the half-threshold biased draw with the class-matching constraint
/// - Fall back to the guide character when no candidate matches
///
/// # Notes
/// The sampler holds the model and alphabet by shared reference; only the
/// random generator is mutated. The model itself is never written to, so one
/// model can back any number of samplers.
pub struct GuidedSampler<'a, R: Rng> {
	chain: &'a ChainModel,
	alphabet: &'a Alphabet,
	rng: R,
}

impl<'a, R: Rng> GuidedSampler<'a, R> {
	pub fn new(chain: &'a ChainModel, alphabet: &'a Alphabet, rng: R) -> Self {
		Self { chain, alphabet, rng }
	}

	/// Picks the next character after `current`, constrained by `guide`.
	///
	/// # Behavior
	/// 1. Copy `current`'s row and sort it by descending weight (stable, so
	///    ties keep the row's deterministic order). A missing row is an empty
	///    list; the model is not touched.
	/// 2. Draw `pie` uniformly from `[0, total]` where `total` is the sum of
	///    the (globally rescaled) weights.
	/// 3. Walk the sorted list accumulating weights and return the first
	///    entry whose running sum reaches `pie / 2` *and* whose class matches
	///    the guide: vowel guides need vowels, non-vowel guides need
	///    consonants (never `Other`).
	/// 4. If nothing qualifies, return `guide` unchanged.
	///
	/// The `pie / 2` threshold is half the sampled point, which biases
	/// selection strongly toward the heaviest matching entries. This is the
	/// defining behavior of the generator; it is not an inverse-CDF draw and
	/// must not be "corrected" into one.
	pub fn next(&mut self, current: char, guide: char) -> char {
		let entries = match self.chain.row(current) {
			Some(row) => row.sorted_by_weight(),
			None => Vec::new(),
		};
		if entries.is_empty() {
			return guide;
		}

		// Post-rescale weights: the total is row-dependent, not a fixed range
		let total: f64 = entries.iter().map(|(_, weight)| weight).sum();
		let pie = if total > 0.0 {
			self.rng.random_range(0.0..=total)
		} else {
			0.0
		};

		let guide_is_vowel = self.alphabet.is_vowel(guide);

		let mut running = 0.0;
		for (candidate, weight) in entries {
			running += weight;
			if running < pie / 2.0 {
				continue;
			}
			let matches = match self.alphabet.classify(candidate) {
				CharClass::Vowel => guide_is_vowel,
				CharClass::Consonant => !guide_is_vowel,
				CharClass::Other => false,
			};
			if matches {
				return candidate;
			}
		}

		guide
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::trainer::ChainTrainer;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn rng(seed: u64) -> StdRng {
		StdRng::seed_from_u64(seed)
	}

	#[test]
	fn test_consonant_guide_always_picks_consonant() {
		// Row for 'a' is {a: 1.0, b: 1.0}; 'b' is the only consonant, so the
		// second character of "ac" is 'b' for every possible draw.
		let model = ChainTrainer::train_lines(["aa", "ab"], None).unwrap();
		let alphabet = Alphabet::default();

		for seed in 0..64 {
			let mut sampler = GuidedSampler::new(&model, &alphabet, rng(seed));
			assert_eq!(sampler.next('a', 'c'), 'b');
		}
	}

	#[test]
	fn test_never_returns_opposite_class() {
		let model = ChainTrainer::train_lines(
			["banana", "bandana", "cabana", "arcana", "verona"],
			None,
		)
		.unwrap();
		let alphabet = Alphabet::default();
		let mut sampler = GuidedSampler::new(&model, &alphabet, rng(7));

		for (current, guide) in [('a', 'e'), ('b', 'a'), ('n', 'o'), ('a', 'n')] {
			for _ in 0..200 {
				let next = sampler.next(current, guide);
				if next != guide {
					assert_eq!(
						alphabet.is_vowel(next),
						alphabet.is_vowel(guide),
						"sampled {:?} against guide {:?}",
						next,
						guide
					);
				}
			}
		}
	}

	#[test]
	fn test_missing_row_falls_back_to_guide() {
		let model = ChainTrainer::train_lines(["aa", "ab"], None).unwrap();
		let alphabet = Alphabet::default();
		let mut sampler = GuidedSampler::new(&model, &alphabet, rng(1));

		assert_eq!(sampler.next('z', 'x'), 'x');
	}

	#[test]
	fn test_missing_row_lookup_is_read_only() {
		let model = ChainTrainer::train_lines(["aa", "ab"], None).unwrap();
		let before = model.clone();
		let alphabet = Alphabet::default();

		let mut sampler = GuidedSampler::new(&model, &alphabet, rng(2));
		sampler.next('z', 'x');
		drop(sampler);

		assert_eq!(model, before);
	}

	#[test]
	fn test_no_matching_class_falls_back_to_guide() {
		// 'b' only ever transitions to vowels, so a consonant guide has no
		// matching candidate and comes back unchanged.
		let model = ChainTrainer::train_lines(["ba", "be"], None).unwrap();
		let alphabet = Alphabet::default();
		let mut sampler = GuidedSampler::new(&model, &alphabet, rng(3));

		for _ in 0..100 {
			assert_eq!(sampler.next('b', 't'), 't');
		}
	}
}
