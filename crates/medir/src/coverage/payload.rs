//! Payload decoding: hex blob → typed coverage hit.
//!
//! Event data is ABI-encoded in 32-byte words. Line, function, and
//! statement hits carry `(string fileRef, uint256 index)`; branch hits add
//! a third `uint256` for the outcome slot. The string is dynamic: its head
//! word holds a byte offset to a `(length, padded bytes)` tail.
//!
//! Indices travel as 256-bit words but the index domain here is `u32`;
//! anything wider is rejected rather than truncated.

use crate::result::{MedirError, MedirResult};

use super::event::{strip_hex_prefix, EventKind};

const WORD: usize = 32;

/// Maximum accepted value for any decoded index, line number, or offset.
pub(crate) const MAX_INDEX: u64 = u32::MAX as u64;

/// A decoded coverage event, ready to be applied to a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverageHit {
    /// A runnable line executed
    Line {
        /// File reference recorded at instrumentation time
        file_ref: String,
        /// Source line number
        line: u32,
    },
    /// A function was entered
    Function {
        /// File reference recorded at instrumentation time
        file_ref: String,
        /// 1-based function index
        index: u32,
    },
    /// A branch outcome was taken
    Branch {
        /// File reference recorded at instrumentation time
        file_ref: String,
        /// 1-based branch-group index
        index: u32,
        /// Outcome slot: 0 = false-ish arm, 1 = true-ish arm
        outcome: usize,
    },
    /// A statement executed
    Statement {
        /// File reference recorded at instrumentation time
        file_ref: String,
        /// 1-based statement index
        index: u32,
    },
}

impl CoverageHit {
    /// Decode a hex data blob for its classified event kind.
    pub fn decode(kind: EventKind, data: &str) -> MedirResult<Self> {
        let bytes = decode_hex(data)?;
        let file_ref = decode_string_at(&bytes, 0)?;
        let index = decode_index(&bytes, 1)?;
        match kind {
            EventKind::Line => Ok(Self::Line { file_ref, line: index }),
            EventKind::Function => Ok(Self::Function { file_ref, index }),
            EventKind::Statement => Ok(Self::Statement { file_ref, index }),
            EventKind::Branch => {
                let outcome = decode_index(&bytes, 2)?;
                if outcome > 1 {
                    return Err(MedirError::ValueOutOfRange {
                        value: outcome.to_string(),
                        max: 1,
                    });
                }
                Ok(Self::Branch {
                    file_ref,
                    index,
                    outcome: outcome as usize,
                })
            }
        }
    }

    /// File reference embedded in the event.
    #[must_use]
    pub fn file_ref(&self) -> &str {
        match self {
            Self::Line { file_ref, .. }
            | Self::Function { file_ref, .. }
            | Self::Branch { file_ref, .. }
            | Self::Statement { file_ref, .. } => file_ref,
        }
    }
}

fn decode_hex(data: &str) -> MedirResult<Vec<u8>> {
    let hex = strip_hex_prefix(data);
    if hex.len() % 2 != 0 {
        return Err(MedirError::MalformedPayload {
            message: format!("odd-length hex blob ({} digits)", hex.len()),
        });
    }
    hex.as_bytes()
        .chunks_exact(2)
        .map(|pair| {
            let hi = hex_digit(pair[0])?;
            let lo = hex_digit(pair[1])?;
            Ok((hi << 4) | lo)
        })
        .collect()
}

fn hex_digit(c: u8) -> MedirResult<u8> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(MedirError::MalformedPayload {
            message: format!("invalid hex digit {:?}", c as char),
        }),
    }
}

/// The 32-byte word at word position `pos`.
fn word_at(bytes: &[u8], pos: usize) -> MedirResult<&[u8]> {
    let start = pos * WORD;
    bytes
        .get(start..start + WORD)
        .ok_or_else(|| MedirError::MalformedPayload {
            message: format!(
                "payload truncated: need word {pos}, have {} bytes",
                bytes.len()
            ),
        })
}

/// Decode the word at `pos` as an index in the supported `u32` domain.
fn decode_index(bytes: &[u8], pos: usize) -> MedirResult<u32> {
    let word = word_at(bytes, pos)?;
    decode_word_u64(word).map(|v| v as u32)
}

/// A 256-bit word narrowed to `u64`, rejecting anything above [`MAX_INDEX`].
fn decode_word_u64(word: &[u8]) -> MedirResult<u64> {
    if word[..WORD - 8].iter().any(|&b| b != 0) {
        return Err(MedirError::ValueOutOfRange {
            value: format!("0x{}", to_hex(word)),
            max: MAX_INDEX,
        });
    }
    let mut tail = [0u8; 8];
    tail.copy_from_slice(&word[WORD - 8..]);
    let value = u64::from_be_bytes(tail);
    if value > MAX_INDEX {
        return Err(MedirError::ValueOutOfRange {
            value: value.to_string(),
            max: MAX_INDEX,
        });
    }
    Ok(value)
}

/// Decode the dynamic string whose head word sits at word position `pos`.
fn decode_string_at(bytes: &[u8], pos: usize) -> MedirResult<String> {
    let offset = decode_word_u64(word_at(bytes, pos)?)? as usize;
    if offset % WORD != 0 {
        return Err(MedirError::MalformedPayload {
            message: format!("string offset {offset} is not word-aligned"),
        });
    }
    let len = decode_word_u64(word_at(bytes, offset / WORD)?)? as usize;
    let start = offset + WORD;
    let raw = bytes
        .get(start..start + len)
        .ok_or_else(|| MedirError::MalformedPayload {
            message: format!(
                "string tail truncated: need {len} bytes at offset {start}, have {}",
                bytes.len()
            ),
        })?;
    String::from_utf8(raw.to_vec()).map_err(|e| MedirError::MalformedPayload {
        message: format!("file reference is not valid UTF-8: {e}"),
    })
}

fn to_hex(bytes: &[u8]) -> String {
    use std::fmt::Write;
    bytes.iter().fold(String::new(), |mut out, b| {
        let _ = write!(out, "{b:02x}");
        out
    })
}
