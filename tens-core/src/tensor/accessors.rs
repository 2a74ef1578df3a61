// src/tensor/accessors.rs
use crate::{
    buffer::Buffer, element::Element, error::TensError, tensor::Tensor,
    tensor_data::TensorData, types::DType,
};

impl Tensor {
    /// Returns the tensor's shape (dimensions).
    pub fn shape(&self) -> &[usize] {
        &self.data.shape
    }

    /// Returns the contiguous row-major strides for the shape.
    pub fn strides(&self) -> Vec<usize> {
        TensorData::calculate_contiguous_strides(&self.data.shape)
    }

    /// Returns the data type (`DType`) of the tensor elements.
    pub fn dtype(&self) -> DType {
        self.data.dtype()
    }

    /// Returns the rank (number of dimensions) of the tensor.
    pub fn rank(&self) -> usize {
        self.data.shape.len()
    }

    /// Returns the total number of elements in the tensor.
    pub fn numel(&self) -> usize {
        self.data.numel()
    }

    /// Returns the typed flat storage.
    pub fn buffer(&self) -> &Buffer {
        &self.data.buffer
    }

    /// Borrows the flat row-major values as `&[T]`.
    ///
    /// # Errors
    /// `TensError::DataTypeMismatch` if the tensor does not hold `T`.
    pub fn as_slice<T: Element>(&self) -> Result<&[T], TensError> {
        T::slice_of(&self.data.buffer).ok_or_else(|| TensError::DataTypeMismatch {
            expected: T::DTYPE,
            actual: self.dtype(),
            operation: "as_slice".to_string(),
        })
    }

    /// Copies the flat row-major values into a new `Vec<T>`.
    pub fn to_vec<T: Element>(&self) -> Result<Vec<T>, TensError> {
        self.as_slice::<T>().map(<[T]>::to_vec)
    }

    /// Reads the element at a multi-dimensional index.
    pub fn get<T: Element>(&self, indices: &[usize]) -> Result<T, TensError> {
        let flat = self.data.flat_index(indices)?;
        Ok(self.as_slice::<T>()?[flat])
    }

    /// Extracts the value of a single-element tensor.
    pub fn item<T: Element>(&self) -> Result<T, TensError> {
        let values = self.as_slice::<T>()?;
        match values {
            [value] => Ok(*value),
            _ => Err(TensError::ShapeMismatch {
                expected: "1 element".to_string(),
                actual: format!("{} elements (shape {:?})", values.len(), self.shape()),
                operation: "item".to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "accessors_test.rs"]
mod tests;
