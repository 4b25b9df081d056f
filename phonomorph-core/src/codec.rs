//! Versioned binary persistence of chain models.
//!
//! The layout is explicit and little-endian so models are portable across
//! platforms and independently testable:
//!
//! ```text
//! MAGIC/VERSION        4 bytes ("PMC1")
//! row_count            u32
//! repeated row_count times:
//!   source_char        u32 (code point)
//!   entry_count        u32
//!   repeated entry_count times:
//!     dest_char        u32 (code point)
//!     weight           f64
//! ```
//!
//! `decode(encode(m)) == m` holds bit-exactly: weights travel as raw IEEE 754
//! bytes and rows iterate in deterministic order.

use std::io::{self, Read, Write};

use crate::error::CodecError;
use crate::model::chain::ChainModel;
use crate::model::row::Row;

/// Magic bytes, last byte doubling as the format version.
pub const MAGIC: [u8; 4] = *b"PMC1";

/// Upper bound on row and entry counts: the Unicode code-point space.
/// A declared count above this cannot come from a valid model.
const MAX_COUNT: u32 = 0x0011_0000;

/// Tolerance for floating error when validating decoded weights.
const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Encodes a model into `writer` using the versioned layout.
///
/// # Errors
/// Fails only on I/O errors from the underlying writer.
pub fn encode<W: Write>(model: &ChainModel, writer: &mut W) -> Result<(), CodecError> {
	writer.write_all(&MAGIC)?;
	writer.write_all(&(model.len() as u32).to_le_bytes())?;

	for (source, row) in model.iter() {
		writer.write_all(&(source as u32).to_le_bytes())?;
		writer.write_all(&(row.len() as u32).to_le_bytes())?;
		for (dest, weight) in row.iter() {
			writer.write_all(&(dest as u32).to_le_bytes())?;
			writer.write_all(&weight.to_le_bytes())?;
		}
	}

	Ok(())
}

/// Encodes a model into a fresh byte vector.
pub fn encode_to_vec(model: &ChainModel) -> Result<Vec<u8>, CodecError> {
	let mut bytes = Vec::new();
	encode(model, &mut bytes)?;
	Ok(bytes)
}

/// Decodes a model from `reader`.
///
/// # Errors
/// - `Truncated` if the stream ends before the declared counts are satisfied
/// - `BadMagic` if the stream does not start with the expected header
/// - `CountTooLarge` if a declared count exceeds the code-point space
/// - `BadCodePoint` if a stored character is not a valid scalar value
/// - `WeightOutOfRange` if a weight falls outside `[0, 1]` beyond tolerance
///
/// A failed decode never returns a partially-populated model.
pub fn decode<R: Read>(reader: &mut R) -> Result<ChainModel, CodecError> {
	let mut magic = [0u8; 4];
	read_exact(reader, &mut magic)?;
	if magic != MAGIC {
		return Err(CodecError::BadMagic { expected: MAGIC, found: magic });
	}

	let row_count = read_u32(reader)?;
	if row_count > MAX_COUNT {
		return Err(CodecError::CountTooLarge(row_count));
	}

	let mut model = ChainModel::new();
	for _ in 0..row_count {
		let source = read_char(reader)?;

		let entry_count = read_u32(reader)?;
		if entry_count > MAX_COUNT {
			return Err(CodecError::CountTooLarge(entry_count));
		}

		let mut row = Row::new();
		for _ in 0..entry_count {
			let dest = read_char(reader)?;
			let weight = read_f64(reader)?;
			if weight < -WEIGHT_TOLERANCE || weight > 1.0 + WEIGHT_TOLERANCE {
				return Err(CodecError::WeightOutOfRange(weight));
			}
			row.set(dest, weight);
		}
		model.insert_row(source, row);
	}

	Ok(model)
}

/// Decodes a model from an in-memory byte slice.
pub fn decode_from_slice(bytes: &[u8]) -> Result<ChainModel, CodecError> {
	decode(&mut io::Cursor::new(bytes))
}

fn read_exact<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<(), CodecError> {
	reader.read_exact(buf).map_err(|e| match e.kind() {
		io::ErrorKind::UnexpectedEof => CodecError::Truncated,
		_ => CodecError::Io(e),
	})
}

fn read_u32<R: Read>(reader: &mut R) -> Result<u32, CodecError> {
	let mut buf = [0u8; 4];
	read_exact(reader, &mut buf)?;
	Ok(u32::from_le_bytes(buf))
}

fn read_f64<R: Read>(reader: &mut R) -> Result<f64, CodecError> {
	let mut buf = [0u8; 8];
	read_exact(reader, &mut buf)?;
	Ok(f64::from_le_bytes(buf))
}

fn read_char<R: Read>(reader: &mut R) -> Result<char, CodecError> {
	let raw = read_u32(reader)?;
	char::from_u32(raw).ok_or(CodecError::BadCodePoint(raw))
}
