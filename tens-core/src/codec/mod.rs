//! Reading and writing the tens container format.
//!
//! Layout (all integers little-endian, unsigned):
//!
//! | offset   | size       | field                          |
//! |----------|------------|--------------------------------|
//! | 0        | 2          | magic, ASCII `"Cc"`            |
//! | 2        | 2          | type code (`u16`)              |
//! | 4        | 4          | number of dimensions `n` (`u32`) |
//! | 8        | 4 × n      | dimension sizes (`u32` each)   |
//! | 8 + 4n   | size × w   | payload, flat row-major        |
//!
//! `size` is the product of the dimensions (1 when `n == 0`) and `w` the
//! fixed width of the element type.

use crate::error::TensError;
use crate::tensor_data::TensorData;
use crate::types::DType;

mod decode;
mod encode;
mod io;
mod options;

pub use decode::{decode, decode_with};
pub use encode::{encode, encode_into, encoded_len};
pub use io::{load, load_with, read_from, read_from_with, save, write_to};
pub use options::{DecodeOptions, TrailingBytes};

/// Magic tag at offset 0.
pub const MAGIC: [u8; 2] = *b"Cc";

/// Bytes before the shape array: magic, type code, ndim.
pub const HEADER_PREFIX_LEN: usize = 8;

/// Bytes per dimension entry.
pub const DIM_LEN: usize = 4;

/// Header length for a tensor of rank `ndim`.
pub fn header_len(ndim: usize) -> usize {
    HEADER_PREFIX_LEN + DIM_LEN * ndim
}

/// Decoded header fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub dtype: DType,
    pub shape: Vec<usize>,
}

impl Header {
    /// Number of elements the header declares, `None` if it overflows `usize`.
    pub fn numel(&self) -> Option<usize> {
        TensorData::checked_numel(&self.shape)
    }

    /// Payload size in bytes, `None` if it overflows `usize`.
    pub fn payload_len(&self) -> Option<usize> {
        self.numel()?.checked_mul(self.dtype.size_of())
    }

    pub fn header_len(&self) -> usize {
        header_len(self.shape.len())
    }

    /// Resolves the payload size under `options`.
    ///
    /// A size that overflows `usize` can never be backed by real input, so it
    /// is reported as truncation.
    pub(crate) fn checked_payload_len(
        &self,
        options: &DecodeOptions,
        available: usize,
    ) -> Result<usize, TensError> {
        let numel = self.numel().ok_or(TensError::TruncatedInput {
            needed: usize::MAX,
            available,
        })?;
        if let Some(limit) = options.max_elements {
            if numel > limit {
                return Err(TensError::TooManyElements {
                    declared: numel,
                    limit,
                });
            }
        }
        self.payload_len().ok_or(TensError::TruncatedInput {
            needed: usize::MAX,
            available,
        })
    }
}
