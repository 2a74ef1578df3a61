use log::{debug, warn};

use super::{DecodeOptions, Header, TrailingBytes, DIM_LEN, MAGIC};
use crate::buffer::Buffer;
use crate::error::TensError;
use crate::tensor::Tensor;
use crate::types::{self, DType};

/// Cursor over an input slice that reports shortfalls as `TruncatedInput`.
struct ByteReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        ByteReader { bytes, pos: 0 }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], TensError> {
        let available = self.bytes.len();
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= available)
            .ok_or(TensError::TruncatedInput {
                needed: self.pos.saturating_add(n),
                available,
            })?;
        let chunk = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(chunk)
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }
}

pub(crate) fn check_magic(bytes: &[u8]) -> Result<(), TensError> {
    if bytes != MAGIC {
        return Err(TensError::BadMagic {
            found: bytes.to_vec(),
        });
    }
    Ok(())
}

/// `bytes` must be 2 bytes long.
pub(crate) fn parse_type_code(bytes: &[u8]) -> Result<DType, TensError> {
    let code = u16::from_le_bytes([bytes[0], bytes[1]]);
    types::resolve_by_code(code).ok_or_else(|| TensError::unknown_code(code))
}

/// `bytes` must be 4 bytes long.
pub(crate) fn parse_u32(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

pub(crate) fn parse_shape(bytes: &[u8]) -> Vec<usize> {
    bytes
        .chunks_exact(DIM_LEN)
        .map(|chunk| parse_u32(chunk) as usize)
        .collect()
}

/// Byte length of the shape array for `ndim` dimensions.
pub(crate) fn shape_len(ndim: usize, available: usize) -> Result<usize, TensError> {
    ndim.checked_mul(DIM_LEN).ok_or(TensError::TruncatedInput {
        needed: usize::MAX,
        available,
    })
}

/// Decodes a payload of exactly `header.payload_len()` bytes that starts at
/// `payload_offset` in the original input.
pub(crate) fn decode_payload(
    header: &Header,
    payload: &[u8],
    payload_offset: usize,
    options: &DecodeOptions,
) -> Result<Buffer, TensError> {
    if header.dtype == DType::Bool && options.strict_bool {
        if let Some((i, &value)) = payload.iter().enumerate().find(|&(_, &b)| b > 1) {
            return Err(TensError::InvalidBool {
                offset: payload_offset + i,
                value,
            });
        }
    }
    Ok(Buffer::read_le(header.dtype, payload))
}

/// Decodes a tens byte sequence with the default options.
///
/// Trailing bytes after the payload are ignored; see [`decode_with`] to
/// reject them.
pub fn decode(bytes: &[u8]) -> Result<Tensor, TensError> {
    decode_with(bytes, &DecodeOptions::default())
}

/// Decodes a tens byte sequence.
///
/// # Errors
/// * `BadMagic` if the first two bytes are not `"Cc"`.
/// * `UnsupportedType` for type code 0 or any code outside the registry.
/// * `TruncatedInput` if the header or payload is cut short.
/// * `TrailingBytes`, `InvalidBool`, `TooManyElements` depending on `options`.
pub fn decode_with(bytes: &[u8], options: &DecodeOptions) -> Result<Tensor, TensError> {
    let mut reader = ByteReader::new(bytes);

    check_magic(reader.take(2)?)?;
    let dtype = parse_type_code(reader.take(2)?)?;
    let ndim = parse_u32(reader.take(4)?) as usize;
    let shape = parse_shape(reader.take(shape_len(ndim, bytes.len())?)?);
    let header = Header { dtype, shape };

    let payload_len = header.checked_payload_len(options, bytes.len())?;
    let payload_offset = reader.pos;
    let payload = reader.take(payload_len)?;
    let buffer = decode_payload(&header, payload, payload_offset, options)?;

    let trailing = reader.remaining();
    if trailing > 0 {
        match options.trailing_bytes {
            TrailingBytes::Ignore => {
                warn!("decode: ignoring {} trailing bytes", trailing);
            }
            TrailingBytes::Reject => {
                return Err(TensError::TrailingBytes { count: trailing });
            }
        }
    }

    debug!(
        "decode: dtype={}, shape={:?}, {} payload bytes",
        header.dtype, header.shape, payload_len
    );
    Tensor::from_buffer(buffer, header.shape)
}

#[cfg(test)]
#[path = "decode_test.rs"]
mod tests;
