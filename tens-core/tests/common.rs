use tens_core::{Tensor, DType};

// Each test crate only uses part of these helpers.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// One small tensor per registered element type.
#[allow(dead_code)]
pub fn one_of_each_dtype() -> Vec<Tensor> {
    vec![
        Tensor::new(vec![0u8, 1, 254, 255], vec![2, 2]).unwrap(),
        Tensor::new(vec![i8::MIN, -1, 0, i8::MAX], vec![4]).unwrap(),
        Tensor::new(vec![i32::MIN, -2, 0, 3, i32::MAX, 7], vec![2, 3]).unwrap(),
        Tensor::new(vec![1.5f32, -0.0, f32::MIN_POSITIVE, f32::MAX], vec![1, 4]).unwrap(),
        Tensor::new(vec![i64::MIN, 0, i64::MAX], vec![3, 1]).unwrap(),
        Tensor::new(vec![std::f64::consts::PI, -1e300, 5e-324], vec![3]).unwrap(),
        Tensor::new(vec![0u32, u32::MAX], vec![2]).unwrap(),
        Tensor::new(vec![u64::MAX, 42], vec![1, 1, 2]).unwrap(),
        Tensor::new(vec![true, false, true, true], vec![2, 1, 2]).unwrap(),
    ]
}

#[allow(dead_code)]
pub fn all_dtypes() -> Vec<DType> {
    tens_core::types::registry().iter().map(|info| info.dtype).collect()
}
