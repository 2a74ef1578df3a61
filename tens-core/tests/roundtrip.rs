use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};
use tens_core::tensor::create::zeros;
use tens_core::{decode, encode, DType, Tensor};

mod common;
use common::{all_dtypes, init_logger, one_of_each_dtype};

fn assert_round_trip(t: &Tensor) {
    let bytes = encode(t).unwrap();
    let back = decode(&bytes).unwrap();
    assert_eq!(&back, t, "round trip changed {:?}", t);
    assert_eq!(back.dtype(), t.dtype());
    assert_eq!(back.shape(), t.shape());
}

#[test]
fn test_round_trip_every_dtype() {
    init_logger();
    let tensors = one_of_each_dtype();
    assert_eq!(tensors.len(), all_dtypes().len());
    for t in &tensors {
        assert_round_trip(t);
    }
}

#[test]
fn test_round_trip_scalars_and_empty_shapes() {
    for dtype in all_dtypes() {
        for shape in [vec![], vec![0], vec![2, 0, 3], vec![1, 1, 1, 1]] {
            let t = zeros(dtype, &shape).unwrap();
            assert_round_trip(&t);
        }
    }
    assert_round_trip(&Tensor::scalar(true));
    assert_round_trip(&Tensor::scalar(-7i64));
}

#[test]
fn test_round_trip_float_special_values_bit_exact() {
    let f32_values = vec![
        0.0f32,
        -0.0,
        f32::INFINITY,
        f32::NEG_INFINITY,
        f32::NAN,
        f32::from_bits(0x7FA0_0001),
        f32::from_bits(0xFFC0_0000),
        f32::from_bits(1),
    ];
    let t = Tensor::new(f32_values.clone(), vec![2, 4]).unwrap();
    let back = decode(&encode(&t).unwrap()).unwrap();
    let bits: Vec<u32> = back.as_slice::<f32>().unwrap().iter().map(|v| v.to_bits()).collect();
    let expected: Vec<u32> = f32_values.iter().map(|v| v.to_bits()).collect();
    assert_eq!(bits, expected);

    let f64_values = vec![-0.0f64, f64::NAN, f64::from_bits(0x7FF0_0000_0000_0001), f64::MAX];
    let t = Tensor::new(f64_values.clone(), vec![4]).unwrap();
    let back = decode(&encode(&t).unwrap()).unwrap();
    let bits: Vec<u64> = back.as_slice::<f64>().unwrap().iter().map(|v| v.to_bits()).collect();
    let expected: Vec<u64> = f64_values.iter().map(|v| v.to_bits()).collect();
    assert_eq!(bits, expected);
}

fn random_shape(rng: &mut StdRng) -> Vec<usize> {
    let rank = rng.gen_range(0..4usize);
    (0..rank).map(|_| rng.gen_range(0..5usize)).collect()
}

fn random_tensor(rng: &mut StdRng, dtype: DType) -> Tensor {
    let shape = random_shape(rng);
    let numel: usize = shape.iter().product();
    let tensor = match dtype {
        DType::U8 => Tensor::new((0..numel).map(|_| rng.gen::<u8>()).collect(), shape),
        DType::I8 => Tensor::new((0..numel).map(|_| rng.gen::<i8>()).collect(), shape),
        DType::I32 => Tensor::new((0..numel).map(|_| rng.gen::<i32>()).collect(), shape),
        DType::F32 => Tensor::new(
            (0..numel).map(|_| StandardNormal.sample(&mut *rng)).collect::<Vec<f32>>(),
            shape,
        ),
        DType::I64 => Tensor::new((0..numel).map(|_| rng.gen::<i64>()).collect(), shape),
        DType::F64 => Tensor::new(
            (0..numel).map(|_| StandardNormal.sample(&mut *rng)).collect::<Vec<f64>>(),
            shape,
        ),
        DType::U32 => Tensor::new((0..numel).map(|_| rng.gen::<u32>()).collect(), shape),
        DType::U64 => Tensor::new((0..numel).map(|_| rng.gen::<u64>()).collect(), shape),
        DType::Bool => Tensor::new((0..numel).map(|_| rng.gen::<bool>()).collect(), shape),
    };
    tensor.unwrap()
}

#[test]
fn test_round_trip_random_tensors() {
    let mut rng = StdRng::seed_from_u64(0x7E45);
    for _ in 0..50 {
        for dtype in all_dtypes() {
            let t = random_tensor(&mut rng, dtype);
            assert_round_trip(&t);
        }
    }
}

#[test]
fn test_row_major_flat_order() {
    let t = Tensor::new((0..24).map(|i| i as u32).collect(), vec![2, 3, 4]).unwrap();
    let bytes = encode(&t).unwrap();
    let payload = &bytes[8 + 3 * 4..];
    // Element [1, 2, 3] is the last one in row-major order.
    assert_eq!(&payload[23 * 4..], &23u32.to_le_bytes());
    // Element [0, 1, 0] sits right after the first row of 4.
    assert_eq!(&payload[4 * 4..5 * 4], &4u32.to_le_bytes());
    assert_eq!(decode(&bytes).unwrap().get::<u32>(&[1, 2, 3]).unwrap(), 23);
}
