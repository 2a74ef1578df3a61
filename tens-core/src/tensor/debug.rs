// src/tensor/debug.rs
use crate::buffer::Buffer;
use crate::tensor::Tensor;
use std::fmt;

/// Elements shown in the `Debug` preview.
const PREVIEW_LEN: usize = 8;

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.read_data();
        write!(
            f,
            "Tensor(shape={:?}, dtype={}, numel={}, data=",
            data.shape,
            data.dtype(),
            data.numel()
        )?;
        macro_rules! preview {
            ($values:expr) => {{
                let values = $values;
                let shown = &values[..values.len().min(PREVIEW_LEN)];
                write!(f, "{:?}", shown)?;
                if values.len() > PREVIEW_LEN {
                    write!(f, "[..{} more]", values.len() - PREVIEW_LEN)?;
                }
            }};
        }
        match data.buffer() {
            Buffer::U8(v) => preview!(v),
            Buffer::I8(v) => preview!(v),
            Buffer::I32(v) => preview!(v),
            Buffer::F32(v) => preview!(v),
            Buffer::I64(v) => preview!(v),
            Buffer::F64(v) => preview!(v),
            Buffer::U32(v) => preview!(v),
            Buffer::U64(v) => preview!(v),
            Buffer::Bool(v) => preview!(v),
        }
        write!(f, ")")
    }
}
