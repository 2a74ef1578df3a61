// src/tensor_data.rs
use crate::buffer::Buffer;
use crate::error::TensError;
use crate::types::DType;

/// Internal storage and metadata for a Tensor.
///
/// Holds the flat row-major element buffer and the shape. The buffer length
/// always equals the product of the shape (1 for an empty shape), which is
/// checked once here and relied on by the codec.
#[derive(Debug, Clone)]
pub struct TensorData {
    pub(crate) buffer: Buffer,
    pub(crate) shape: Vec<usize>,
}

impl TensorData {
    /// Creates a new `TensorData` from a typed buffer and a shape.
    ///
    /// # Errors
    /// Returns `TensError::TensorCreationError` if the buffer length does not
    /// match the number of elements implied by `shape`, including when that
    /// product overflows `usize`.
    pub fn new(buffer: Buffer, shape: Vec<usize>) -> Result<Self, TensError> {
        let data_len = buffer.len();
        match Self::checked_numel(&shape) {
            Some(numel) if numel == data_len => Ok(TensorData { buffer, shape }),
            _ => Err(TensError::TensorCreationError { data_len, shape }),
        }
    }

    /// Product of the dimensions, `None` on overflow. Empty shape gives 1.
    ///
    /// Any zero dimension gives 0, however large the other dimensions are.
    pub fn checked_numel(shape: &[usize]) -> Option<usize> {
        if shape.contains(&0) {
            return Some(0);
        }
        shape.iter().try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
    }

    pub fn numel(&self) -> usize {
        self.buffer.len()
    }

    pub fn dtype(&self) -> DType {
        self.buffer.dtype()
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Calculates the strides of a contiguous row-major tensor of `shape`.
    pub fn calculate_contiguous_strides(shape: &[usize]) -> Vec<usize> {
        let mut strides = vec![0; shape.len()];
        if shape.is_empty() {
            return strides;
        }
        strides[shape.len() - 1] = 1;
        for i in (0..shape.len() - 1).rev() {
            strides[i] = strides[i + 1] * shape[i + 1];
        }
        strides
    }

    /// Flat (row-major) position of a multi-dimensional index.
    pub fn flat_index(&self, indices: &[usize]) -> Result<usize, TensError> {
        if indices.len() != self.shape.len()
            || indices.iter().zip(&self.shape).any(|(&i, &dim)| i >= dim)
        {
            return Err(TensError::IndexOutOfBounds {
                index: indices.to_vec(),
                shape: self.shape.clone(),
            });
        }
        let strides = Self::calculate_contiguous_strides(&self.shape);
        Ok(indices.iter().zip(&strides).map(|(i, s)| i * s).sum())
    }
}
