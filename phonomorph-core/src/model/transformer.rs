use rand::Rng;

use crate::alphabet::Alphabet;
use super::chain::ChainModel;
use super::sampler::GuidedSampler;

/// Transforms tokens and whole lines by walking the chain model.
///
/// # Responsibilities
/// - Token transformation: keep the first character, then generate each
///   following character with the original one as guide
/// - Line orchestration: case-fold, split on whitespace, transform each
///   token, re-join with single spaces
///
/// # Invariants
/// - The first character of a token is always preserved
/// - Output tokens have exactly the input token's character count
pub struct WordTransformer<'a, R: Rng> {
	sampler: GuidedSampler<'a, R>,
}

impl<'a, R: Rng> WordTransformer<'a, R> {
	pub fn new(chain: &'a ChainModel, alphabet: &'a Alphabet, rng: R) -> Self {
		Self { sampler: GuidedSampler::new(chain, alphabet, rng) }
	}

	/// Transforms a single token.
	///
	/// The first character passes through unchanged. Every later position is
	/// sampled from the chain with the previously generated character as the
	/// chain state and the original character as the guide.
	///
	/// Empty input produces empty output.
	pub fn transform_token(&mut self, token: &str) -> String {
		let mut chars = token.chars();
		let first = match chars.next() {
			Some(c) => c,
			None => return String::new(),
		};

		let mut output = String::with_capacity(token.len());
		output.push(first);

		let mut last = first;
		for guide in chars {
			last = self.sampler.next(last, guide);
			output.push(last);
		}

		output
	}

	/// Transforms one input line into one output line.
	///
	/// The line is case-folded, split on whitespace, each non-empty token is
	/// transformed independently, and the results are joined with single
	/// spaces.
	pub fn transform_line(&mut self, line: &str) -> String {
		let folded: String = line.chars().flat_map(|c| c.to_lowercase()).collect();

		folded
			.split_whitespace()
			.map(|token| self.transform_token(token))
			.collect::<Vec<_>>()
			.join(" ")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::trainer::ChainTrainer;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn fixture() -> (ChainModel, Alphabet) {
		let model = ChainTrainer::train_lines(
			["banana", "bandana", "cabana", "arcana"],
			None,
		)
		.unwrap();
		(model, Alphabet::default())
	}

	#[test]
	fn test_first_char_and_length_preserved() {
		let (model, alphabet) = fixture();
		let mut transformer =
			WordTransformer::new(&model, &alphabet, StdRng::seed_from_u64(11));

		for token in ["banana", "ba", "cabana"] {
			let out = transformer.transform_token(token);
			assert_eq!(out.chars().next(), token.chars().next());
			assert_eq!(out.chars().count(), token.chars().count());
		}
	}

	#[test]
	fn test_single_char_token_unchanged() {
		let (model, alphabet) = fixture();
		let mut transformer =
			WordTransformer::new(&model, &alphabet, StdRng::seed_from_u64(12));
		assert_eq!(transformer.transform_token("b"), "b");
	}

	#[test]
	fn test_empty_token() {
		let (model, alphabet) = fixture();
		let mut transformer =
			WordTransformer::new(&model, &alphabet, StdRng::seed_from_u64(13));
		assert_eq!(transformer.transform_token(""), "");
	}

	#[test]
	fn test_guided_scenario_ac() {
		// Model from ["aa", "ab"]: 'c' guides to the only consonant, 'b'
		let model = ChainTrainer::train_lines(["aa", "ab"], None).unwrap();
		let alphabet = Alphabet::default();
		let mut transformer =
			WordTransformer::new(&model, &alphabet, StdRng::seed_from_u64(14));

		for _ in 0..32 {
			assert_eq!(transformer.transform_token("ac"), "ab");
		}
	}

	#[test]
	fn test_line_is_folded_split_and_rejoined() {
		let (model, alphabet) = fixture();
		let mut transformer =
			WordTransformer::new(&model, &alphabet, StdRng::seed_from_u64(15));

		let out = transformer.transform_line("  Ba \t ba  ");
		let tokens: Vec<&str> = out.split(' ').collect();
		assert_eq!(tokens.len(), 2);
		for token in tokens {
			assert_eq!(token.chars().count(), 2);
			assert!(token.starts_with('b'), "case folding lost: {:?}", token);
		}
	}

	#[test]
	fn test_empty_line() {
		let (model, alphabet) = fixture();
		let mut transformer =
			WordTransformer::new(&model, &alphabet, StdRng::seed_from_u64(16));
		assert_eq!(transformer.transform_line("   "), "");
	}
}
