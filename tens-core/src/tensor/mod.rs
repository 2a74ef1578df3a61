// src/tensor/mod.rs

use crate::tensor_data::TensorData;
use std::sync::Arc;

mod accessors;
pub mod create;
mod debug;
mod traits;

// Re-export creation functions to make them public
pub use create::{full, zeros, zeros_like};

/// Represents a multi-dimensional array (tensor).
///
/// `Tensor` wraps its `TensorData` in an `Arc`, so clones are cheap and share
/// the same immutable storage. A tensor is never modified after creation,
/// which makes it `Send + Sync` without any locking.
///
/// Elements are stored flat in row-major order.
pub struct Tensor {
    pub(crate) data: Arc<TensorData>,
}

impl Tensor {
    pub(crate) fn from_data(data: TensorData) -> Self {
        Tensor {
            data: Arc::new(data),
        }
    }

    /// Shared reference to the underlying storage.
    pub fn read_data(&self) -> &TensorData {
        &self.data
    }
}
