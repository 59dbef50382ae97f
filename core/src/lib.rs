//! Core scalar-type naming tables for the ndtype array library.
//!
//! Scalar types answer to a convoluted set of names accumulated for
//! compatibility, and this crate builds the dictionaries that resolve them:
//!
//! - the **broad** table ([`aliases::TypeTables::lookup`]): every name a
//!   dtype string may use, including builtin-shadowing spellings like
//!   `"float"` and `"int"`,
//! - the **narrow** table ([`aliases::TypeTables::lookup_attribute`]): the
//!   names exposed as attributes of the library namespace, abstract
//!   categories included,
//! - the **C-name** side table ([`aliases::TypeTables::lookup_c_name`]):
//!   C-ABI names for internal kind lookups,
//! - the **group** table ([`groups::GroupTable`]): concrete types per
//!   family, sorted by byte width.
//!
//! All four are built once per process from [`registry::TypeRegistry`] and
//! immutable afterwards; see [`tables`] for the process-wide accessors.

pub mod aliases;
pub mod groups;
pub mod hierarchy;
pub mod kind;
pub mod registry;
pub mod scalar;
pub mod tables;

pub use aliases::{TypeHandle, TypeTables};
pub use groups::{GroupTable, TypeGroup};
pub use hierarchy::AbstractType;
pub use kind::Kind;
pub use registry::{TypeInfo, TypeRegistry};
pub use scalar::ScalarType;
pub use tables::{
    UnknownTypeName, attribute_type, c_name, native_registry, native_tables, scalar_groups,
    scalar_type, type_handle,
};
