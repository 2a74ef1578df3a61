// src/tensor/traits.rs

use crate::tensor::Tensor;
use std::sync::Arc;

impl Clone for Tensor {
    /// Shallow clone: both handles share the same storage.
    fn clone(&self) -> Self {
        Tensor {
            data: Arc::clone(&self.data),
        }
    }
}

impl PartialEq for Tensor {
    /// Exact equality: same dtype, same shape and bit-identical elements.
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.data, &other.data) {
            return true;
        }
        self.data.shape == other.data.shape && self.data.buffer.bit_eq(&other.data.buffer)
    }
}
