//! Snapshot encoding for handing boards to outer layers.
//!
//! Provides postcard encode/decode of a [`Board`], along with
//! length-prefix framing variants for stream-based consumers. Decoding
//! does not validate invariants; callers adopting a decoded board should
//! run [`Board::check_invariants`] first.

use crate::board::Board;

/// Error type for codec encode/decode operations.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),
    /// Frame is incomplete or has an invalid length prefix.
    #[error("invalid frame: {0}")]
    InvalidFrame(String),
}

/// Encodes a [`Board`] snapshot into bytes using postcard.
///
/// # Errors
///
/// Returns `CodecError::Serialization` if the board cannot be serialized.
pub fn encode_board(board: &Board) -> Result<Vec<u8>, CodecError> {
    postcard::to_allocvec(board).map_err(|e| CodecError::Serialization(e.to_string()))
}

/// Decodes a [`Board`] snapshot from bytes using postcard.
///
/// # Errors
///
/// Returns `CodecError::Serialization` if the bytes cannot be deserialized.
pub fn decode_board(bytes: &[u8]) -> Result<Board, CodecError> {
    postcard::from_bytes(bytes).map_err(|e| CodecError::Serialization(e.to_string()))
}

/// Encodes a [`Board`] with a 4-byte little-endian length prefix.
///
/// Wire format: `[u32 length (LE)][payload bytes]`
///
/// # Errors
///
/// Returns `CodecError::Serialization` if the board cannot be serialized,
/// or `CodecError::InvalidFrame` if the payload exceeds `u32::MAX` bytes.
pub fn encode_board_framed(board: &Board) -> Result<Vec<u8>, CodecError> {
    let payload = encode_board(board)?;
    let len = u32::try_from(payload.len()).map_err(|_| {
        CodecError::InvalidFrame(format!(
            "payload too large for framing: {} bytes",
            payload.len()
        ))
    })?;
    let mut frame = Vec::with_capacity(4 + payload.len());
    frame.extend_from_slice(&len.to_le_bytes());
    frame.extend_from_slice(&payload);
    Ok(frame)
}

/// Decodes a length-prefixed frame back into a [`Board`].
///
/// Returns the decoded board and the total number of bytes consumed from
/// the input, including the 4-byte length prefix.
///
/// # Errors
///
/// Returns `CodecError::InvalidFrame` if the input is too short or the
/// length prefix indicates more data than available, or
/// `CodecError::Serialization` if the payload cannot be deserialized.
pub fn decode_board_framed(bytes: &[u8]) -> Result<(Board, usize), CodecError> {
    let Some((prefix, rest)) = bytes.split_first_chunk::<4>() else {
        return Err(CodecError::InvalidFrame(format!(
            "need at least 4 bytes for length prefix, got {}",
            bytes.len()
        )));
    };
    let payload_len = u32::from_le_bytes(*prefix) as usize;

    let Some(payload) = rest.get(..payload_len) else {
        return Err(CodecError::InvalidFrame(format!(
            "frame indicates {payload_len} bytes but only {} available",
            rest.len()
        )));
    };

    let board = decode_board(payload)?;
    Ok((board, 4 + payload_len))
}
