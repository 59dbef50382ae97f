//! Concrete scalar types.
//!
//! `ScalarType` enumerates every scalar a dtype can be built from: the
//! fixed-width numeric types, the platform extended-precision floats, the
//! temporal types, and the flexible (variable-width) storage types.
//!
//! Each variant answers three queries that the naming tables are built on:
//! its canonical name, its [`Kind`] code, and its byte width.

use crate::kind::Kind;

/// Byte width of the platform's `long double`.
///
/// x86-64 System V pads the 80-bit extended format to 16 bytes; AArch64
/// Linux uses IEEE binary128. Windows and Apple targets alias `long double`
/// to `double`.
pub const LONG_DOUBLE_SIZE: usize = if cfg!(all(
    target_arch = "x86_64",
    not(target_os = "windows"),
    not(target_vendor = "apple")
)) {
    16
} else if cfg!(all(
    target_arch = "aarch64",
    not(target_os = "windows"),
    not(target_vendor = "apple")
)) {
    16
} else {
    8
};

static_assertions::const_assert!(LONG_DOUBLE_SIZE == 8 || LONG_DOUBLE_SIZE == 16);

/// A concrete scalar type: the "type handle" stored in the naming tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float16,
    Float32,
    Float64,
    /// Platform extended-precision float (`long double`).
    LongDouble,
    Complex64,
    Complex128,
    /// Platform extended-precision complex (a pair of `long double`s).
    CLongDouble,
    Datetime64,
    Timedelta64,
    /// Variable-width byte string. Width lives on the dtype instance, so the
    /// unsized scalar reports a byte width of zero.
    Bytes,
    /// Variable-width unicode string. Unsized, like [`ScalarType::Bytes`].
    Str,
    /// Raw untyped storage, unsized.
    Void,
    /// Reference to an arbitrary host object.
    Object,
}

impl ScalarType {
    /// Every concrete scalar type, in canonical registry order.
    pub const ALL: [ScalarType; 22] = [
        ScalarType::Bool,
        ScalarType::Int8,
        ScalarType::Int16,
        ScalarType::Int32,
        ScalarType::Int64,
        ScalarType::UInt8,
        ScalarType::UInt16,
        ScalarType::UInt32,
        ScalarType::UInt64,
        ScalarType::Float16,
        ScalarType::Float32,
        ScalarType::Float64,
        ScalarType::LongDouble,
        ScalarType::Complex64,
        ScalarType::Complex128,
        ScalarType::CLongDouble,
        ScalarType::Datetime64,
        ScalarType::Timedelta64,
        ScalarType::Bytes,
        ScalarType::Str,
        ScalarType::Void,
        ScalarType::Object,
    ];

    /// The canonical (sized) name of this scalar type.
    ///
    /// Names that would collide with host-language builtins carry a trailing
    /// underscore; the un-suffixed spellings exist only as lookup aliases in
    /// the broad naming table.
    pub fn name(self) -> &'static str {
        match self {
            ScalarType::Bool => "bool_",
            ScalarType::Int8 => "int8",
            ScalarType::Int16 => "int16",
            ScalarType::Int32 => "int32",
            ScalarType::Int64 => "int64",
            ScalarType::UInt8 => "uint8",
            ScalarType::UInt16 => "uint16",
            ScalarType::UInt32 => "uint32",
            ScalarType::UInt64 => "uint64",
            ScalarType::Float16 => "float16",
            ScalarType::Float32 => "float32",
            ScalarType::Float64 => "float64",
            ScalarType::LongDouble => "longdouble",
            ScalarType::Complex64 => "complex64",
            ScalarType::Complex128 => "complex128",
            ScalarType::CLongDouble => "clongdouble",
            ScalarType::Datetime64 => "datetime64",
            ScalarType::Timedelta64 => "timedelta64",
            ScalarType::Bytes => "bytes_",
            ScalarType::Str => "str_",
            ScalarType::Void => "void",
            ScalarType::Object => "object_",
        }
    }

    /// The storage-family kind code of this scalar type.
    pub fn kind(self) -> Kind {
        match self {
            ScalarType::Bool => Kind::Bool,
            ScalarType::Int8 | ScalarType::Int16 | ScalarType::Int32 | ScalarType::Int64 => {
                Kind::SignedInt
            }
            ScalarType::UInt8 | ScalarType::UInt16 | ScalarType::UInt32 | ScalarType::UInt64 => {
                Kind::UnsignedInt
            }
            ScalarType::Float16
            | ScalarType::Float32
            | ScalarType::Float64
            | ScalarType::LongDouble => Kind::Float,
            ScalarType::Complex64 | ScalarType::Complex128 | ScalarType::CLongDouble => {
                Kind::Complex
            }
            ScalarType::Datetime64 => Kind::Datetime,
            ScalarType::Timedelta64 => Kind::Timedelta,
            ScalarType::Bytes => Kind::Bytes,
            ScalarType::Str => Kind::Str,
            ScalarType::Void => Kind::Void,
            ScalarType::Object => Kind::Object,
        }
    }

    /// Byte width of one scalar of this type.
    ///
    /// Flexible types (bytes, str, void) are unsized and report zero; the
    /// extended-precision types report the platform width.
    pub fn itemsize(self) -> usize {
        match self {
            ScalarType::Bool | ScalarType::Int8 | ScalarType::UInt8 => 1,
            ScalarType::Int16 | ScalarType::UInt16 | ScalarType::Float16 => 2,
            ScalarType::Int32 | ScalarType::UInt32 | ScalarType::Float32 => 4,
            ScalarType::Int64
            | ScalarType::UInt64
            | ScalarType::Float64
            | ScalarType::Complex64 => 8,
            ScalarType::LongDouble => LONG_DOUBLE_SIZE,
            ScalarType::Complex128 => 16,
            ScalarType::CLongDouble => 2 * LONG_DOUBLE_SIZE,
            ScalarType::Datetime64 | ScalarType::Timedelta64 => 8,
            ScalarType::Bytes | ScalarType::Str | ScalarType::Void => 0,
            ScalarType::Object => core::mem::size_of::<usize>(),
        }
    }
}
