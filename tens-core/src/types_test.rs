use super::*;
use std::collections::HashSet;

#[test]
fn test_codes_are_positional() {
    for (i, info) in registry().iter().enumerate() {
        assert_eq!(info.code as usize, i + 1);
        assert_eq!(info.dtype.code(), info.code);
    }
}

#[test]
fn test_codes_and_names_unique() {
    let codes: HashSet<u16> = registry().iter().map(|i| i.code).collect();
    let names: HashSet<&str> = registry().iter().map(|i| i.name).collect();
    assert_eq!(codes.len(), registry().len());
    assert_eq!(names.len(), registry().len());
    assert!(!codes.contains(&UNKNOWN_TYPE_CODE));
}

#[test]
fn test_resolve_by_code_table() {
    let expected = [
        (1, DType::U8, 1),
        (2, DType::I8, 1),
        (3, DType::I32, 4),
        (4, DType::F32, 4),
        (5, DType::I64, 8),
        (6, DType::F64, 8),
        (7, DType::U32, 4),
        (8, DType::U64, 8),
        (9, DType::Bool, 1),
    ];
    for (code, dtype, width) in expected {
        assert_eq!(resolve_by_code(code), Some(dtype));
        assert_eq!(dtype.size_of(), width);
    }
}

#[test]
fn test_resolve_by_code_unknown() {
    assert_eq!(resolve_by_code(UNKNOWN_TYPE_CODE), None);
    assert_eq!(resolve_by_code(10), None);
    assert_eq!(resolve_by_code(u16::MAX), None);
}

#[test]
fn test_resolve_by_runtime_type_exact_identity() {
    assert_eq!(resolve_by_runtime_type::<u8>(), Some(DType::U8));
    assert_eq!(resolve_by_runtime_type::<i8>(), Some(DType::I8));
    assert_eq!(resolve_by_runtime_type::<i32>(), Some(DType::I32));
    assert_eq!(resolve_by_runtime_type::<f32>(), Some(DType::F32));
    assert_eq!(resolve_by_runtime_type::<i64>(), Some(DType::I64));
    assert_eq!(resolve_by_runtime_type::<f64>(), Some(DType::F64));
    assert_eq!(resolve_by_runtime_type::<u32>(), Some(DType::U32));
    assert_eq!(resolve_by_runtime_type::<u64>(), Some(DType::U64));
    assert_eq!(resolve_by_runtime_type::<bool>(), Some(DType::Bool));

    // Same width as a registered type, still not registered.
    assert_eq!(resolve_by_runtime_type::<i16>(), None);
    assert_eq!(resolve_by_runtime_type::<u16>(), None);
    assert_eq!(resolve_by_runtime_type::<char>(), None);
    assert_eq!(resolve_by_runtime_type::<usize>(), None);
    assert_eq!(resolve_by_runtime_type::<isize>(), None);
    assert_eq!(resolve_by_runtime_type::<String>(), None);
}

#[test]
fn test_type_id_matches_width() {
    for info in registry() {
        let dtype = info.dtype;
        let size = match dtype {
            DType::U8 => std::mem::size_of::<u8>(),
            DType::I8 => std::mem::size_of::<i8>(),
            DType::I32 => std::mem::size_of::<i32>(),
            DType::F32 => std::mem::size_of::<f32>(),
            DType::I64 => std::mem::size_of::<i64>(),
            DType::F64 => std::mem::size_of::<f64>(),
            DType::U32 => std::mem::size_of::<u32>(),
            DType::U64 => std::mem::size_of::<u64>(),
            DType::Bool => std::mem::size_of::<bool>(),
        };
        assert_eq!(info.width, size, "width mismatch for {}", dtype);
    }
}

#[test]
fn test_names_round_trip() {
    for info in registry() {
        assert_eq!(DType::from_name(info.name), Some(info.dtype));
        assert_eq!(info.dtype.to_string(), info.name);
    }
    assert_eq!(DType::from_name("float16"), None);
    assert_eq!(DType::from_name(""), None);
}
