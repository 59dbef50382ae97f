//! ndtype - scalar type naming tables for n-dimensional arrays
//!
//! # Overview
//!
//! ndtype resolves the many names a scalar type answers to — canonical sized
//! names, C-heritage spellings, host-language builtins, platform-probed
//! extended-precision names — and partitions the concrete types into groups
//! by family. The tables are built once per process and are immutable
//! afterwards, so lookups are plain map reads with no locking.
//!
//! # Quick Start
//!
//! ```
//! use ndtype::{ScalarType, TypeGroup, scalar_groups, scalar_type};
//!
//! // "double" is an alias for the 64-bit float.
//! assert_eq!(scalar_type("double").unwrap(), ScalarType::Float64);
//! assert_eq!(scalar_type("float64").unwrap(), ScalarType::Float64);
//!
//! // Unknown names fail with an error naming the offender.
//! assert!(scalar_type("float9000").is_err());
//!
//! // The float group lists the real floating types by ascending width.
//! let floats = scalar_groups().group(TypeGroup::Float);
//! assert_eq!(floats[0], ScalarType::Float16);
//! assert_eq!(floats[1], ScalarType::Float32);
//! assert_eq!(floats[2], ScalarType::Float64);
//! ```
//!
//! # Custom registries
//!
//! The process-wide tables cover the native platform. Embedders with their
//! own scalar sets can run the same builders over a hand-rolled registry:
//!
//! ```
//! use ndtype::{ScalarType, TypeRegistry, TypeTables};
//!
//! let registry = TypeRegistry::from_scalars([ScalarType::Float32, ScalarType::Float64]);
//! let tables = TypeTables::from_registry(&registry);
//! assert_eq!(
//!     tables.lookup("single").and_then(|h| h.as_scalar()),
//!     Some(ScalarType::Float32),
//! );
//! ```

// Re-export the public API from ndtype_core
pub use ndtype_core::{
    AbstractType, GroupTable, Kind, ScalarType, TypeGroup, TypeHandle, TypeInfo, TypeRegistry,
    TypeTables, UnknownTypeName,
};

pub use ndtype_core::{
    attribute_type, c_name, native_registry, native_tables, scalar_groups, scalar_type,
    type_handle,
};
