//! Reader and writer for the tens binary tensor container.
//!
//! A tens file stores one tensor: a 2-byte `"Cc"` magic tag, a `u16` element
//! type code, a `u32` rank, one `u32` per dimension and the flat row-major
//! payload, all little-endian. See [`codec`] for the exact layout and
//! [`types`] for the type code table.
//!
//! ```
//! use tens_core::{decode, encode, Tensor};
//!
//! let t = Tensor::new(vec![1i32, -2, 3], vec![3]).unwrap();
//! let bytes = encode(&t).unwrap();
//! assert_eq!(bytes.len(), 24);
//! assert_eq!(decode(&bytes).unwrap(), t);
//! ```

pub mod buffer;
pub mod codec;
pub mod element;
pub mod error;
pub mod tensor;
pub mod tensor_data;
pub mod types;

pub use buffer::Buffer;
pub use codec::{
    decode, decode_with, encode, encode_into, load, load_with, read_from, read_from_with, save,
    write_to, DecodeOptions, TrailingBytes,
};
pub use element::Element;
pub use error::TensError;
pub use tensor::Tensor;
pub use types::DType;
