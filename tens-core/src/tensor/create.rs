// src/tensor/create.rs

use std::any::type_name;

use crate::buffer::Buffer;
use crate::element::Element;
use crate::error::TensError;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;
use crate::types::{self, DType};

impl Tensor {
    /// Creates a new Tensor from typed data and a shape.
    ///
    /// `data` is taken in row-major order and must hold exactly
    /// `shape.iter().product()` elements (1 for an empty shape).
    ///
    /// # Errors
    /// `TensError::TensorCreationError` on a length/shape mismatch.
    pub fn new<T: Element>(data: Vec<T>, shape: Vec<usize>) -> Result<Self, TensError> {
        Self::from_buffer(T::into_buffer(data), shape)
    }

    /// Creates a new Tensor from data whose element type is checked at runtime.
    ///
    /// The element type is looked up in the registry by exact type identity, so
    /// `Vec<i16>` or `Vec<usize>` are rejected rather than coerced to a type of
    /// the same width.
    ///
    /// # Errors
    /// `TensError::UnsupportedType` if `T` has no registry entry,
    /// `TensError::TensorCreationError` on a length/shape mismatch.
    pub fn from_vec<T: 'static>(data: Vec<T>, shape: Vec<usize>) -> Result<Self, TensError> {
        let dtype = types::resolve_by_runtime_type::<T>().ok_or_else(|| {
            TensError::UnsupportedType {
                type_code: None,
                type_name: type_name::<T>().to_string(),
            }
        })?;
        Self::from_buffer(Buffer::from_any(dtype, data)?, shape)
    }

    /// Creates a new Tensor from an existing buffer.
    pub fn from_buffer(buffer: Buffer, shape: Vec<usize>) -> Result<Self, TensError> {
        Ok(Tensor::from_data(TensorData::new(buffer, shape)?))
    }

    /// Creates a 0-dimensional tensor holding a single value.
    pub fn scalar<T: Element>(value: T) -> Self {
        Tensor::from_data(TensorData {
            buffer: T::into_buffer(vec![value]),
            shape: Vec::new(),
        })
    }
}

/// Creates a tensor of `dtype` filled with zeros (`false` for bool).
pub fn zeros(dtype: DType, shape: &[usize]) -> Result<Tensor, TensError> {
    let numel = TensorData::checked_numel(shape).ok_or_else(|| TensError::TensorCreationError {
        data_len: 0,
        shape: shape.to_vec(),
    })?;
    Tensor::from_buffer(Buffer::zeros(dtype, numel), shape.to_vec())
}

/// Creates a tensor filled with `value`.
pub fn full<T: Element>(shape: &[usize], value: T) -> Result<Tensor, TensError> {
    let numel = TensorData::checked_numel(shape).ok_or_else(|| TensError::TensorCreationError {
        data_len: 0,
        shape: shape.to_vec(),
    })?;
    Tensor::new(vec![value; numel], shape.to_vec())
}

/// Creates a zero-filled tensor with the same dtype and shape as `tensor`.
pub fn zeros_like(tensor: &Tensor) -> Result<Tensor, TensError> {
    zeros(tensor.dtype(), tensor.shape())
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
