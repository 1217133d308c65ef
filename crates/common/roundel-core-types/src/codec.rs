use thiserror::Error;

use crate::{NodeIdentity, RoundHash};

/// Errors produced when decoding textual identifiers into their binary forms.
#[derive(Error, Debug)]
pub enum IdentifierError {
    #[error("identifier must be {expected} hex characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("identifier is not valid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Decode a textual node identity (64 hex characters).
pub fn parse_node_identity(text: &str) -> Result<NodeIdentity, IdentifierError> {
    Ok(NodeIdentity::from(decode_32(text)?))
}

/// Decode a textual round hash (64 hex characters).
pub fn parse_round_hash(text: &str) -> Result<RoundHash, IdentifierError> {
    Ok(RoundHash::from(decode_32(text)?))
}

fn decode_32(text: &str) -> Result<[u8; 32], IdentifierError> {
    if text.len() != 64 {
        return Err(IdentifierError::InvalidLength {
            expected: 64,
            actual: text.len(),
        });
    }
    let bytes = hex::decode(text)?;
    let mut array = [0u8; 32];
    array.copy_from_slice(&bytes);
    Ok(array)
}
