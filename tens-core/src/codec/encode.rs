use log::debug;

use super::{header_len, MAGIC};
use crate::error::TensError;
use crate::tensor::Tensor;

/// Number of bytes `encode` produces for `tensor`.
pub fn encoded_len(tensor: &Tensor) -> usize {
    header_len(tensor.rank()) + tensor.buffer().byte_len()
}

/// Encodes a tensor into a new byte vector.
///
/// # Errors
/// `TensError::RankOverflow` / `TensError::DimensionOverflow` when the rank or
/// a dimension does not fit the format's `u32` fields.
pub fn encode(tensor: &Tensor) -> Result<Vec<u8>, TensError> {
    let mut out = Vec::with_capacity(encoded_len(tensor));
    encode_into(tensor, &mut out)?;
    Ok(out)
}

/// Appends the encoding of `tensor` to `out`.
///
/// All checks run before the first byte is pushed, so `out` is left untouched
/// on error.
pub fn encode_into(tensor: &Tensor, out: &mut Vec<u8>) -> Result<(), TensError> {
    let data = tensor.read_data();
    let info = data.dtype().info();
    let shape = tensor.shape();

    let ndim = u32::try_from(shape.len()).map_err(|_| TensError::RankOverflow {
        rank: shape.len(),
    })?;
    let dims = shape
        .iter()
        .enumerate()
        .map(|(dim, &value)| {
            u32::try_from(value).map_err(|_| TensError::DimensionOverflow { dim, value })
        })
        .collect::<Result<Vec<u32>, TensError>>()?;

    out.reserve(encoded_len(tensor));
    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(&info.code.to_le_bytes());
    out.extend_from_slice(&ndim.to_le_bytes());
    for dim in dims {
        out.extend_from_slice(&dim.to_le_bytes());
    }
    data.buffer().write_le(out);

    debug!(
        "encode: dtype={} (code {}), shape={:?}, {} payload bytes",
        info.name,
        info.code,
        shape,
        data.buffer().byte_len()
    );
    Ok(())
}

#[cfg(test)]
#[path = "encode_test.rs"]
mod tests;
