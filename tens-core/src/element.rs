use num_traits::{FromBytes, ToBytes};
use std::fmt::Debug;

use crate::buffer::Buffer;
use crate::types::DType;

/// A Rust scalar type that can be stored in a tens file.
///
/// Each implementor is tied to exactly one [`DType`] and knows its fixed-width
/// little-endian rule. Implemented for `u8`, `i8`, `i32`, `f32`, `i64`, `f64`,
/// `u32`, `u64` and `bool`.
pub trait Element: Copy + Debug + PartialEq + Send + Sync + 'static {
    /// Registry type this Rust type maps to.
    const DTYPE: DType;

    /// Appends `values` to `out`, `DTYPE.size_of()` bytes each.
    fn write_le(values: &[Self], out: &mut Vec<u8>);

    /// Decodes a run of elements. `bytes.len()` must be a multiple of the
    /// element width; a trailing partial chunk is not decoded.
    fn read_le(bytes: &[u8]) -> Vec<Self>;

    /// Wraps owned values in the matching buffer variant.
    fn into_buffer(values: Vec<Self>) -> Buffer;

    /// Borrows the values if `buffer` holds this type.
    fn slice_of(buffer: &Buffer) -> Option<&[Self]>;
}

fn write_numeric<T: ToBytes>(values: &[T], out: &mut Vec<u8>) {
    out.reserve(std::mem::size_of_val(values));
    for value in values {
        out.extend_from_slice(value.to_le_bytes().as_ref());
    }
}

fn read_numeric<T>(bytes: &[u8]) -> Vec<T>
where
    T: FromBytes,
    <T as FromBytes>::Bytes: Default,
{
    let width = std::mem::size_of::<T>();
    bytes
        .chunks_exact(width)
        .map(|chunk| {
            let mut raw = <<T as FromBytes>::Bytes as Default>::default();
            raw.as_mut().copy_from_slice(chunk);
            T::from_le_bytes(&raw)
        })
        .collect()
}

macro_rules! numeric_element {
    ($ty:ty, $variant:ident) => {
        impl Element for $ty {
            const DTYPE: DType = DType::$variant;

            fn write_le(values: &[Self], out: &mut Vec<u8>) {
                write_numeric(values, out)
            }

            fn read_le(bytes: &[u8]) -> Vec<Self> {
                read_numeric(bytes)
            }

            fn into_buffer(values: Vec<Self>) -> Buffer {
                Buffer::$variant(values)
            }

            fn slice_of(buffer: &Buffer) -> Option<&[Self]> {
                match buffer {
                    Buffer::$variant(values) => Some(values.as_slice()),
                    _ => None,
                }
            }
        }
    };
}

numeric_element!(u8, U8);
numeric_element!(i8, I8);
numeric_element!(i32, I32);
numeric_element!(f32, F32);
numeric_element!(i64, I64);
numeric_element!(f64, F64);
numeric_element!(u32, U32);
numeric_element!(u64, U64);

impl Element for bool {
    const DTYPE: DType = DType::Bool;

    fn write_le(values: &[Self], out: &mut Vec<u8>) {
        out.extend(values.iter().map(|&b| u8::from(b)));
    }

    // Any non-zero byte reads as true; strict 0/1 checking lives in the decoder.
    fn read_le(bytes: &[u8]) -> Vec<Self> {
        bytes.iter().map(|&b| b != 0).collect()
    }

    fn into_buffer(values: Vec<Self>) -> Buffer {
        Buffer::Bool(values)
    }

    fn slice_of(buffer: &Buffer) -> Option<&[Self]> {
        match buffer {
            Buffer::Bool(values) => Some(values.as_slice()),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "element_test.rs"]
mod tests;
