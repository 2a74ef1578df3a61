use std::any::TypeId;
use std::fmt;

/// Defines the possible data types for Tensor elements.
///
/// The set is closed: each variant has a stable on-disk type code, a semantic
/// name and a fixed byte width (see [`TypeInfo`]). Codes are assigned by
/// position in the registry and must never be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    /// Unsigned byte (`u8`), code 1.
    U8,
    /// Signed byte (`i8`), code 2.
    I8,
    /// 32-bit signed integer, code 3.
    I32,
    /// 32-bit IEEE-754 float, code 4.
    F32,
    /// 64-bit signed integer, code 5.
    I64,
    /// 64-bit IEEE-754 float, code 6.
    F64,
    /// 32-bit unsigned integer, code 7.
    U32,
    /// 64-bit unsigned integer, code 8.
    U64,
    /// Boolean stored as a single `0x00`/`0x01` byte, code 9.
    Bool,
}

/// Reserved "unknown/special" code. Never written to a file; a header carrying
/// it is rejected.
pub const UNKNOWN_TYPE_CODE: u16 = 0;

/// One row of the type registry.
#[derive(Debug, Clone, Copy)]
pub struct TypeInfo {
    pub dtype: DType,
    pub code: u16,
    pub name: &'static str,
    pub width: usize,
    type_id: fn() -> TypeId,
}

impl TypeInfo {
    /// `TypeId` of the Rust scalar type backing this entry.
    pub fn rust_type_id(&self) -> TypeId {
        (self.type_id)()
    }
}

// Ordered by code: REGISTRY[i].code == i + 1.
static REGISTRY: [TypeInfo; 9] = [
    TypeInfo { dtype: DType::U8, code: 1, name: "uint8", width: 1, type_id: TypeId::of::<u8> },
    TypeInfo { dtype: DType::I8, code: 2, name: "int8", width: 1, type_id: TypeId::of::<i8> },
    TypeInfo { dtype: DType::I32, code: 3, name: "int32", width: 4, type_id: TypeId::of::<i32> },
    TypeInfo { dtype: DType::F32, code: 4, name: "float32", width: 4, type_id: TypeId::of::<f32> },
    TypeInfo { dtype: DType::I64, code: 5, name: "int64", width: 8, type_id: TypeId::of::<i64> },
    TypeInfo { dtype: DType::F64, code: 6, name: "float64", width: 8, type_id: TypeId::of::<f64> },
    TypeInfo { dtype: DType::U32, code: 7, name: "uint32", width: 4, type_id: TypeId::of::<u32> },
    TypeInfo { dtype: DType::U64, code: 8, name: "uint64", width: 8, type_id: TypeId::of::<u64> },
    TypeInfo { dtype: DType::Bool, code: 9, name: "bool", width: 1, type_id: TypeId::of::<bool> },
];

/// Returns the full registry, ordered by type code.
pub fn registry() -> &'static [TypeInfo] {
    &REGISTRY
}

/// Looks up an on-disk type code.
///
/// Returns `None` for the reserved code 0 and for any code outside the
/// registry. Never fails otherwise; callers decide what `None` means.
pub fn resolve_by_code(code: u16) -> Option<DType> {
    REGISTRY.iter().find(|info| info.code == code).map(|info| info.dtype)
}

/// Finds the `DType` whose backing Rust type is exactly `T`.
///
/// Matching is by type identity, never by width: `i16`, `u16`, `usize` or
/// `char` all resolve to `None` even though some share a width with a
/// registered type.
pub fn resolve_by_runtime_type<T: 'static>() -> Option<DType> {
    let wanted = TypeId::of::<T>();
    REGISTRY
        .iter()
        .find(|info| info.rust_type_id() == wanted)
        .map(|info| info.dtype)
}

/// Looks up a semantic type name such as `"float32"`.
pub fn resolve_by_name(name: &str) -> Option<DType> {
    REGISTRY.iter().find(|info| info.name == name).map(|info| info.dtype)
}

impl DType {
    /// Registry entry for this type.
    pub fn info(self) -> &'static TypeInfo {
        let index = match self {
            DType::U8 => 0,
            DType::I8 => 1,
            DType::I32 => 2,
            DType::F32 => 3,
            DType::I64 => 4,
            DType::F64 => 5,
            DType::U32 => 6,
            DType::U64 => 7,
            DType::Bool => 8,
        };
        &REGISTRY[index]
    }

    /// Stable on-disk type code (1..=9).
    pub fn code(self) -> u16 {
        self.info().code
    }

    /// Semantic name, e.g. `"int32"`.
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Fixed width of one element in bytes.
    pub fn size_of(self) -> usize {
        self.info().width
    }

    pub fn from_code(code: u16) -> Option<DType> {
        resolve_by_code(code)
    }

    pub fn from_name(name: &str) -> Option<DType> {
        resolve_by_name(name)
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
