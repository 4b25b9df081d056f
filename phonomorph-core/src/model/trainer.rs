use std::collections::BTreeMap;
use std::path::Path;
use std::sync::mpsc;
use std::thread;

use crate::error::TrainError;
use crate::io::read_file;
use super::bigram::bigram_list;
use super::chain::ChainModel;
use super::row::Row;

/// Per-character acceptance predicate applied during accumulation.
///
/// When set, a bigram is counted only if both of its characters pass.
/// The default is no filtering at all, which corresponds to leaving the
/// hook unset.
pub type CharAcceptor = fn(char) -> bool;

/// Accumulates bigram counts from a line-oriented corpus and converts them
/// into a normalized `ChainModel`.
///
/// # Responsibilities
/// - Count `(prev, next)` transitions for each input line (one token per line)
/// - Merge with other trainers (shard reduction for parallel training)
/// - Apply the two-pass normalization producing bounded relative weights
///
/// # Invariants
/// - Every counted row has a strictly positive total; a zero-sum row at
///   normalization time is a logic error and fails the training run
/// - Training is fully deterministic for a given line sequence
#[derive(Clone, Debug, Default)]
pub struct ChainTrainer {
	counts: BTreeMap<char, BTreeMap<char, u64>>,
	acceptor: Option<CharAcceptor>,
}

impl ChainTrainer {
	/// Creates a trainer with no acceptance predicate: every bigram counts.
	pub fn new() -> Self {
		Self { counts: BTreeMap::new(), acceptor: None }
	}

	/// Creates a trainer that only counts bigrams whose characters pass `acceptor`.
	pub fn with_acceptor(acceptor: CharAcceptor) -> Self {
		Self { counts: BTreeMap::new(), acceptor: Some(acceptor) }
	}

	/// Adds one corpus line to the count table.
	///
	/// Extracts every adjacent pair of the line and increments its counter.
	/// Lines shorter than 2 characters contribute nothing.
	pub fn observe(&mut self, line: &str) {
		for (prev, next) in bigram_list(line) {
			if let Some(accept) = self.acceptor {
				if !accept(prev) || !accept(next) {
					continue;
				}
			}
			*self
				.counts
				.entry(prev)
				.or_default()
				.entry(next)
				.or_insert(0) += 1;
		}
	}

	/// Merges another trainer's counts into this one.
	///
	/// Intended for parallel training, where per-shard trainers are reduced
	/// into a single one before normalization.
	pub fn merge(&mut self, other: &Self) {
		for (prev, row) in &other.counts {
			let target = self.counts.entry(*prev).or_default();
			for (next, count) in row {
				*target.entry(*next).or_insert(0) += count;
			}
		}
	}

	/// Consumes the trainer and produces the normalized model.
	///
	/// # Behavior
	/// Two passes over the accumulated counts:
	/// 1. Row normalization: each weight becomes `count / row_total`, so each
	///    row sums to 1.
	/// 2. Global rescale: every weight is divided by the largest weight found
	///    in pass 1, so the model-wide maximum is exactly 1.
	///
	/// Row sums are *not* 1 after pass 2; the sampler depends on the rescaled
	/// weights, not on a probability distribution.
	///
	/// # Errors
	/// Fails with `TrainError::ZeroRowSum` if a row has a zero total count.
	/// This cannot happen when rows are only created by `observe`, so it
	/// signals a logic error rather than a recoverable condition.
	pub fn finish(self) -> Result<ChainModel, TrainError> {
		let mut model = ChainModel::new();
		let mut max_relative = 0.0f64;

		for (source, row_counts) in &self.counts {
			let sum: u64 = row_counts.values().sum();
			if sum == 0 {
				return Err(TrainError::ZeroRowSum { source_symbol: *source });
			}

			let mut row = Row::new();
			for (dest, count) in row_counts {
				let weight = *count as f64 / sum as f64;
				max_relative = max_relative.max(weight);
				row.set(*dest, weight);
			}
			model.insert_row(*source, row);
		}

		if model.is_empty() {
			// No bigrams observed; an empty model is valid
			return Ok(model);
		}

		let mut rescaled = ChainModel::new();
		for (source, row) in model.iter() {
			let mut new_row = Row::new();
			for (dest, weight) in row.iter() {
				new_row.set(dest, weight / max_relative);
			}
			rescaled.insert_row(source, new_row);
		}

		Ok(rescaled)
	}

	/// Trains a model from an iterator of lines, sequentially.
	pub fn train_lines<I, S>(lines: I, acceptor: Option<CharAcceptor>) -> Result<ChainModel, TrainError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut trainer = match acceptor {
			Some(accept) => Self::with_acceptor(accept),
			None => Self::new(),
		};
		for line in lines {
			trainer.observe(line.as_ref());
		}
		trainer.finish()
	}

	/// Trains a model from owned lines using shard-local accumulation.
	///
	/// # Behavior
	/// - Splits the lines into chunks (based on CPU cores * factor).
	/// - Spawns threads that each count bigrams for one chunk.
	/// - Reduces all partial trainers sequentially, then normalizes once.
	///
	/// Counts are integers and the reduction is a plain sum, so the result
	/// is identical to sequential training regardless of thread scheduling.
	///
	/// # Notes
	/// - Uses MPSC channels to collect partial trainers from threads.
	pub fn train_parallel(lines: Vec<String>, acceptor: Option<CharAcceptor>) -> Result<ChainModel, TrainError> {
		if lines.is_empty() {
			return Ok(ChainModel::new());
		}

		let cpus = num_cpus::get();
		let factor = 8;
		let chunks = cpus * factor;
		let chunk_size = (lines.len() + chunks - 1) / chunks;

		let (tx, rx) = mpsc::channel();
		for chunk in lines.chunks(chunk_size) {
			let tx = tx.clone();
			let chunk: Vec<String> = chunk.to_vec();

			thread::spawn(move || {
				let mut partial = match acceptor {
					Some(accept) => ChainTrainer::with_acceptor(accept),
					None => ChainTrainer::new(),
				};
				for line in &chunk {
					partial.observe(line);
				}
				tx.send(partial).expect("Failed to send from thread");
			});
		}
		drop(tx);

		let mut final_trainer = match acceptor {
			Some(accept) => ChainTrainer::with_acceptor(accept),
			None => ChainTrainer::new(),
		};
		for partial in rx.iter() {
			final_trainer.merge(&partial);
		}

		final_trainer.finish()
	}

	/// Trains a model from a corpus file, one token per line.
	pub fn train_file<P: AsRef<Path>>(path: P, acceptor: Option<CharAcceptor>) -> Result<ChainModel, Box<dyn std::error::Error>> {
		let lines = read_file(path)?;
		Ok(Self::train_parallel(lines, acceptor)?)
	}
}
