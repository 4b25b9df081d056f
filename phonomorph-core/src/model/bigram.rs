/// An ordered pair of adjacent characters within one input word.
pub type Bigram = (char, char);

/// Extracts the ordered list of adjacent character pairs from a word.
///
/// # Behavior
/// - Words with fewer than 2 characters produce an empty list.
/// - A word of `n` characters produces exactly `n - 1` pairs, left to right.
/// - No filtering: every adjacent pair is emitted regardless of character
///   class. Acceptance predicates are applied by the trainer, not here.
///
/// # Notes
/// - UTF-8 safe: operates on characters, not bytes.
pub fn bigram_list(word: &str) -> Vec<Bigram> {
	let chars: Vec<char> = word.chars().collect();
	if chars.len() < 2 {
		return Vec::new();
	}

	let mut list = Vec::with_capacity(chars.len() - 1);
	for i in 1..chars.len() {
		list.push((chars[i - 1], chars[i]));
	}

	list
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_word() {
		assert!(bigram_list("").is_empty());
	}

	#[test]
	fn test_single_char() {
		assert!(bigram_list("a").is_empty());
	}

	#[test]
	fn test_two_chars() {
		assert_eq!(bigram_list("ab"), vec![('a', 'b')]);
	}

	#[test]
	fn test_pairs_in_order() {
		assert_eq!(
			bigram_list("abcd"),
			vec![('a', 'b'), ('b', 'c'), ('c', 'd')]
		);
	}

	#[test]
	fn test_length_minus_one_pairs() {
		let word = "normalization";
		assert_eq!(bigram_list(word).len(), word.chars().count() - 1);
	}

	#[test]
	fn test_multibyte_characters() {
		assert_eq!(bigram_list("äöü"), vec![('ä', 'ö'), ('ö', 'ü')]);
	}

	#[test]
	fn test_no_filtering() {
		// Non-alphabetic characters pass through untouched
		assert_eq!(bigram_list("a1"), vec![('a', '1')]);
	}
}
