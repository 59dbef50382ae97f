//! The scalar type registry.
//!
//! The registry is the single input of the naming-table builders: an ordered
//! list of `(symbolic name, kind code, concrete type)` records. It is built
//! once for the native platform and read-only afterwards.
//!
//! Two families of symbols live side by side:
//!
//! - public names (`int32`, `longdouble`, C-heritage spellings like `short`
//!   and `intc`) that the alias builder exposes as lookup keys, and
//! - reserved `ND_`-prefixed names (`ND_LONG`, `ND_CDOUBLE`, ...) that carry
//!   the C-ABI naming and are diverted into a side table instead of the
//!   public maps.

use crate::kind::Kind;
use crate::scalar::ScalarType;

/// Prefix marking registry entries that describe C-ABI names rather than
/// public scalar type names.
pub const C_NAME_PREFIX: &str = "ND_";

/// The platform's C `long`: 4 bytes on Windows and 32-bit targets, 8 bytes
/// elsewhere.
pub const C_LONG: ScalarType = if cfg!(any(windows, target_pointer_width = "32")) {
    ScalarType::Int32
} else {
    ScalarType::Int64
};

/// Unsigned counterpart of [`C_LONG`].
pub const C_ULONG: ScalarType = if cfg!(any(windows, target_pointer_width = "32")) {
    ScalarType::UInt32
} else {
    ScalarType::UInt64
};

/// Pointer-sized signed integer.
pub const INTP: ScalarType = if cfg!(target_pointer_width = "32") {
    ScalarType::Int32
} else {
    ScalarType::Int64
};

/// Pointer-sized unsigned integer.
pub const UINTP: ScalarType = if cfg!(target_pointer_width = "32") {
    ScalarType::UInt32
} else {
    ScalarType::UInt64
};

/// One registry record: a symbolic name bound to a concrete scalar type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeInfo {
    pub symbol: &'static str,
    pub kind: Kind,
    pub scalar: ScalarType,
}

impl TypeInfo {
    /// Build a record for `symbol`, deriving the kind code from the scalar.
    pub fn new(symbol: &'static str, scalar: ScalarType) -> TypeInfo {
        TypeInfo {
            symbol,
            kind: scalar.kind(),
            scalar,
        }
    }

    /// Byte width of the bound scalar type.
    pub fn itemsize(&self) -> usize {
        self.scalar.itemsize()
    }

    /// Whether this record carries the reserved C-ABI name prefix.
    pub fn is_c_name(&self) -> bool {
        self.symbol.starts_with(C_NAME_PREFIX)
    }
}

/// Ordered, read-only collection of [`TypeInfo`] records.
///
/// Iteration order is the insertion order; the alias builder relies on it
/// for its last-write-wins overwrite semantics.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    entries: Vec<TypeInfo>,
}

impl TypeRegistry {
    /// Build a registry from explicit records.
    pub fn from_entries(entries: impl IntoIterator<Item = TypeInfo>) -> TypeRegistry {
        TypeRegistry {
            entries: entries.into_iter().collect(),
        }
    }

    /// Build a registry of the given scalars under their canonical names.
    pub fn from_scalars(scalars: impl IntoIterator<Item = ScalarType>) -> TypeRegistry {
        TypeRegistry::from_entries(
            scalars
                .into_iter()
                .map(|scalar| TypeInfo::new(scalar.name(), scalar)),
        )
    }

    /// The registry for the native platform.
    ///
    /// Canonical sized names come first, then the C-heritage spellings
    /// (resolved for the target's `long` and pointer widths), then the
    /// reserved-prefix C-ABI names.
    pub fn native() -> TypeRegistry {
        let mut entries = Vec::new();

        for scalar in ScalarType::ALL {
            entries.push(TypeInfo::new(scalar.name(), scalar));
        }

        for (symbol, scalar) in [
            ("byte", ScalarType::Int8),
            ("ubyte", ScalarType::UInt8),
            ("short", ScalarType::Int16),
            ("ushort", ScalarType::UInt16),
            ("intc", ScalarType::Int32),
            ("uintc", ScalarType::UInt32),
            ("int_", C_LONG),
            ("uint", C_ULONG),
            ("longlong", ScalarType::Int64),
            ("ulonglong", ScalarType::UInt64),
            ("intp", INTP),
            ("uintp", UINTP),
        ] {
            entries.push(TypeInfo::new(symbol, scalar));
        }

        for (symbol, scalar) in [
            ("ND_BOOL", ScalarType::Bool),
            ("ND_BYTE", ScalarType::Int8),
            ("ND_UBYTE", ScalarType::UInt8),
            ("ND_SHORT", ScalarType::Int16),
            ("ND_USHORT", ScalarType::UInt16),
            ("ND_INT", ScalarType::Int32),
            ("ND_UINT", ScalarType::UInt32),
            ("ND_LONG", C_LONG),
            ("ND_ULONG", C_ULONG),
            ("ND_LONGLONG", ScalarType::Int64),
            ("ND_ULONGLONG", ScalarType::UInt64),
            ("ND_HALF", ScalarType::Float16),
            ("ND_FLOAT", ScalarType::Float32),
            ("ND_DOUBLE", ScalarType::Float64),
            ("ND_LONGDOUBLE", ScalarType::LongDouble),
            ("ND_CFLOAT", ScalarType::Complex64),
            ("ND_CDOUBLE", ScalarType::Complex128),
            ("ND_CLONGDOUBLE", ScalarType::CLongDouble),
            ("ND_DATETIME", ScalarType::Datetime64),
            ("ND_TIMEDELTA", ScalarType::Timedelta64),
            ("ND_STRING", ScalarType::Bytes),
            ("ND_UNICODE", ScalarType::Str),
            ("ND_VOID", ScalarType::Void),
            ("ND_OBJECT", ScalarType::Object),
        ] {
            entries.push(TypeInfo::new(symbol, scalar));
        }

        TypeRegistry { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeInfo> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a TypeRegistry {
    type Item = &'a TypeInfo;
    type IntoIter = core::slice::Iter<'a, TypeInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
