use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Classification of a single character for guided generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
	Vowel,
	Consonant,
	/// Neither vowel nor consonant (digits, punctuation, ...).
	Other,
}

/// The vowel/consonant classification table.
///
/// Classification is a data set, not a language-level concept: the table is
/// injected into the generation path and can be swapped without touching the
/// sampling algorithm.
///
/// # Behavior
/// - A character listed in `vowels` is a `Vowel`.
/// - If `consonants` is present, only listed characters are `Consonant`s.
/// - Otherwise any alphabetic non-vowel is a `Consonant`.
/// - Everything else is `Other`.
///
/// # Notes
/// - The default table reproduces the historical alphabet: Latin vowels with
///   umlauts plus Cyrillic vowels.
/// - Loadable from a JSON file, e.g. `{"vowels": ["a", "e", "å"]}`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Alphabet {
	vowels: BTreeSet<char>,
	#[serde(default)]
	consonants: Option<BTreeSet<char>>,
}

impl Default for Alphabet {
	fn default() -> Self {
		let vowels = [
			'a', 'e', 'i', 'o', 'u', 'ä', 'ö', 'ü', 'A', 'Э', 'У', 'О', 'Ы',
			'Я', 'Е', 'Ё', 'Ю', 'И',
		];
		Self {
			vowels: vowels.into_iter().collect(),
			consonants: None,
		}
	}
}

impl Alphabet {
	/// Builds a table from explicit vowel and (optional) consonant sets.
	pub fn new(vowels: BTreeSet<char>, consonants: Option<BTreeSet<char>>) -> Self {
		Self { vowels, consonants }
	}

	/// Loads a table from a JSON file.
	///
	/// # Errors
	/// Returns an error if the file cannot be read or does not parse.
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
		let reader = BufReader::new(File::open(path)?);
		Ok(serde_json::from_reader(reader)?)
	}

	/// Classifies a single character.
	pub fn classify(&self, c: char) -> CharClass {
		if self.vowels.contains(&c) {
			return CharClass::Vowel;
		}
		match &self.consonants {
			Some(set) if set.contains(&c) => CharClass::Consonant,
			Some(_) => CharClass::Other,
			None if c.is_alphabetic() => CharClass::Consonant,
			None => CharClass::Other,
		}
	}

	/// Whether `c` is classified as a vowel.
	pub fn is_vowel(&self, c: char) -> bool {
		self.classify(c) == CharClass::Vowel
	}
}
