use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use log::debug;

use super::decode::{check_magic, decode_payload, parse_shape, parse_type_code, parse_u32, shape_len};
use super::{encode, DecodeOptions, Header, TrailingBytes, HEADER_PREFIX_LEN};
use crate::error::TensError;
use crate::tensor::Tensor;

/// Appends exactly `n` bytes from `reader` to `buf`, or reports how far the
/// stream got.
fn read_exactly<R: Read>(reader: &mut R, buf: &mut Vec<u8>, n: usize) -> Result<(), TensError> {
    let start = buf.len();
    let got = reader.by_ref().take(n as u64).read_to_end(buf)?;
    if got < n {
        return Err(TensError::TruncatedInput {
            needed: start + n,
            available: start + got,
        });
    }
    Ok(())
}

/// Encodes `tensor` and writes it to `writer` with a single `write_all`.
///
/// Encoding finishes before the writer is touched, so a codec error never
/// leaves partial output behind. Errors from the writer are returned as
/// `TensError::Io`.
pub fn write_to<W: Write>(tensor: &Tensor, writer: &mut W) -> Result<(), TensError> {
    let bytes = encode(tensor)?;
    writer.write_all(&bytes)?;
    Ok(())
}

/// Reads one tensor from `reader` with the default options.
pub fn read_from<R: Read>(reader: &mut R) -> Result<Tensor, TensError> {
    read_from_with(reader, &DecodeOptions::default())
}

/// Reads one tensor from `reader`.
///
/// The stream is consumed only up to the end of the payload, so with
/// `TrailingBytes::Ignore` any following data stays readable. With
/// `TrailingBytes::Reject` the rest of the stream is drained and must be
/// empty.
pub fn read_from_with<R: Read>(reader: &mut R, options: &DecodeOptions) -> Result<Tensor, TensError> {
    let mut bytes = Vec::with_capacity(HEADER_PREFIX_LEN);

    read_exactly(reader, &mut bytes, 2)?;
    check_magic(&bytes[0..2])?;
    read_exactly(reader, &mut bytes, 2)?;
    let dtype = parse_type_code(&bytes[2..4])?;
    read_exactly(reader, &mut bytes, 4)?;
    let ndim = parse_u32(&bytes[4..8]) as usize;

    let shape_bytes = shape_len(ndim, bytes.len())?;
    read_exactly(reader, &mut bytes, shape_bytes)?;
    let header = Header {
        dtype,
        shape: parse_shape(&bytes[HEADER_PREFIX_LEN..]),
    };

    let payload_len = header.checked_payload_len(options, bytes.len())?;
    let payload_offset = bytes.len();
    read_exactly(reader, &mut bytes, payload_len)?;
    let buffer = decode_payload(&header, &bytes[payload_offset..], payload_offset, options)?;

    if options.trailing_bytes == TrailingBytes::Reject {
        let mut rest = Vec::new();
        let count = reader.read_to_end(&mut rest)?;
        if count > 0 {
            return Err(TensError::TrailingBytes { count });
        }
    }

    debug!(
        "read_from: dtype={}, shape={:?}, {} bytes consumed",
        header.dtype,
        header.shape,
        bytes.len()
    );
    Tensor::from_buffer(buffer, header.shape)
}

/// Saves `tensor` to `path`, creating or truncating the file.
///
/// The tensor is fully encoded before the file is created, so a codec error
/// leaves the filesystem untouched.
pub fn save<P: AsRef<Path>>(tensor: &Tensor, path: P) -> Result<(), TensError> {
    let path = path.as_ref();
    let bytes = encode(tensor)?;
    let mut file = File::create(path)?;
    file.write_all(&bytes)?;
    file.flush()?;
    debug!("save: wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Loads a tensor from `path` with the default options.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Tensor, TensError> {
    load_with(path, &DecodeOptions::default())
}

/// Loads a tensor from `path`.
pub fn load_with<P: AsRef<Path>>(path: P, options: &DecodeOptions) -> Result<Tensor, TensError> {
    let path = path.as_ref();
    debug!("load: reading {}", path.display());
    let mut reader = BufReader::new(File::open(path)?);
    read_from_with(&mut reader, options)
}
