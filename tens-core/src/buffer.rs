use std::any::{type_name, Any};

use crate::element::Element;
use crate::error::TensError;
use crate::types::DType;

/// Typed flat storage for a tensor, one variant per registered [`DType`].
///
/// The variant is the tensor's runtime element type: a `Buffer` can only hold
/// types the registry knows about.
#[derive(Debug, Clone)]
pub enum Buffer {
    U8(Vec<u8>),
    I8(Vec<i8>),
    I32(Vec<i32>),
    F32(Vec<f32>),
    I64(Vec<i64>),
    F64(Vec<f64>),
    U32(Vec<u32>),
    U64(Vec<u64>),
    Bool(Vec<bool>),
}

/// Runs `$body` with `$values` bound to the inner `Vec` of any variant.
macro_rules! with_values {
    ($buffer:expr, $values:ident => $body:expr) => {
        match $buffer {
            Buffer::U8($values) => $body,
            Buffer::I8($values) => $body,
            Buffer::I32($values) => $body,
            Buffer::F32($values) => $body,
            Buffer::I64($values) => $body,
            Buffer::F64($values) => $body,
            Buffer::U32($values) => $body,
            Buffer::U64($values) => $body,
            Buffer::Bool($values) => $body,
        }
    };
}

impl Buffer {
    /// The element type held by this buffer.
    pub fn dtype(&self) -> DType {
        match self {
            Buffer::U8(_) => DType::U8,
            Buffer::I8(_) => DType::I8,
            Buffer::I32(_) => DType::I32,
            Buffer::F32(_) => DType::F32,
            Buffer::I64(_) => DType::I64,
            Buffer::F64(_) => DType::F64,
            Buffer::U32(_) => DType::U32,
            Buffer::U64(_) => DType::U64,
            Buffer::Bool(_) => DType::Bool,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        with_values!(self, values => values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Size of the encoded payload in bytes.
    pub fn byte_len(&self) -> usize {
        self.len() * self.dtype().size_of()
    }

    /// A zero-filled buffer (`false` for bool) of `len` elements.
    pub fn zeros(dtype: DType, len: usize) -> Buffer {
        match dtype {
            DType::U8 => Buffer::U8(vec![0; len]),
            DType::I8 => Buffer::I8(vec![0; len]),
            DType::I32 => Buffer::I32(vec![0; len]),
            DType::F32 => Buffer::F32(vec![0.0; len]),
            DType::I64 => Buffer::I64(vec![0; len]),
            DType::F64 => Buffer::F64(vec![0.0; len]),
            DType::U32 => Buffer::U32(vec![0; len]),
            DType::U64 => Buffer::U64(vec![0; len]),
            DType::Bool => Buffer::Bool(vec![false; len]),
        }
    }

    /// Builds a buffer from a `Vec<T>` whose element type is only known at
    /// runtime. `dtype` must be the registry entry resolved for `T`.
    pub(crate) fn from_any<T: 'static>(dtype: DType, data: Vec<T>) -> Result<Buffer, TensError> {
        let boxed: Box<dyn Any> = Box::new(data);
        let buffer = match dtype {
            DType::U8 => boxed.downcast::<Vec<u8>>().map(|v| Buffer::U8(*v)),
            DType::I8 => boxed.downcast::<Vec<i8>>().map(|v| Buffer::I8(*v)),
            DType::I32 => boxed.downcast::<Vec<i32>>().map(|v| Buffer::I32(*v)),
            DType::F32 => boxed.downcast::<Vec<f32>>().map(|v| Buffer::F32(*v)),
            DType::I64 => boxed.downcast::<Vec<i64>>().map(|v| Buffer::I64(*v)),
            DType::F64 => boxed.downcast::<Vec<f64>>().map(|v| Buffer::F64(*v)),
            DType::U32 => boxed.downcast::<Vec<u32>>().map(|v| Buffer::U32(*v)),
            DType::U64 => boxed.downcast::<Vec<u64>>().map(|v| Buffer::U64(*v)),
            DType::Bool => boxed.downcast::<Vec<bool>>().map(|v| Buffer::Bool(*v)),
        };
        buffer.map_err(|_| {
            TensError::InternalError(format!(
                "Vec<{}> does not downcast to the {} buffer",
                type_name::<T>(),
                dtype
            ))
        })
    }

    /// Appends the little-endian encoding of every element to `out`.
    pub(crate) fn write_le(&self, out: &mut Vec<u8>) {
        with_values!(self, values => Element::write_le(values.as_slice(), out))
    }

    /// Decodes `bytes` (exactly `len * dtype.size_of()` of them) into a buffer.
    pub(crate) fn read_le(dtype: DType, bytes: &[u8]) -> Buffer {
        match dtype {
            DType::U8 => Buffer::U8(u8::read_le(bytes)),
            DType::I8 => Buffer::I8(i8::read_le(bytes)),
            DType::I32 => Buffer::I32(i32::read_le(bytes)),
            DType::F32 => Buffer::F32(f32::read_le(bytes)),
            DType::I64 => Buffer::I64(i64::read_le(bytes)),
            DType::F64 => Buffer::F64(f64::read_le(bytes)),
            DType::U32 => Buffer::U32(u32::read_le(bytes)),
            DType::U64 => Buffer::U64(u64::read_le(bytes)),
            DType::Bool => Buffer::Bool(bool::read_le(bytes)),
        }
    }

    /// Exact equality: same type, same length, and bit-identical elements.
    /// Floats compare by bit pattern, so `NaN == NaN` (same payload) and
    /// `0.0 != -0.0`.
    pub fn bit_eq(&self, other: &Buffer) -> bool {
        match (self, other) {
            (Buffer::F32(a), Buffer::F32(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.to_bits() == y.to_bits())
            }
            (Buffer::F64(a), Buffer::F64(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.to_bits() == y.to_bits())
            }
            (Buffer::U8(a), Buffer::U8(b)) => a == b,
            (Buffer::I8(a), Buffer::I8(b)) => a == b,
            (Buffer::I32(a), Buffer::I32(b)) => a == b,
            (Buffer::I64(a), Buffer::I64(b)) => a == b,
            (Buffer::U32(a), Buffer::U32(b)) => a == b,
            (Buffer::U64(a), Buffer::U64(b)) => a == b,
            (Buffer::Bool(a), Buffer::Bool(b)) => a == b,
            _ => false,
        }
    }
}
