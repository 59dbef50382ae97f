//! Process-wide naming tables for the native platform.
//!
//! The tables are built on first use from [`TypeRegistry::native`] and are
//! immutable afterwards, so every accessor hands out shared references with
//! no locking.

use once_cell::sync::Lazy;

use crate::aliases::{TypeHandle, TypeTables};
use crate::groups::GroupTable;
use crate::registry::{TypeInfo, TypeRegistry};
use crate::scalar::ScalarType;

static NATIVE_REGISTRY: Lazy<TypeRegistry> = Lazy::new(TypeRegistry::native);
static TYPE_TABLES: Lazy<TypeTables> =
    Lazy::new(|| TypeTables::from_registry(&NATIVE_REGISTRY));
static SCALAR_GROUPS: Lazy<GroupTable> =
    Lazy::new(|| GroupTable::from_registry(&NATIVE_REGISTRY));

/// A name that resolves to no concrete scalar type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized scalar type name: {name:?}")]
pub struct UnknownTypeName {
    pub name: String,
}

/// The native platform's type registry.
pub fn native_registry() -> &'static TypeRegistry {
    &NATIVE_REGISTRY
}

/// The native naming tables.
pub fn native_tables() -> &'static TypeTables {
    &TYPE_TABLES
}

/// The native scalar type groups.
pub fn scalar_groups() -> &'static GroupTable {
    &SCALAR_GROUPS
}

/// Resolve a dtype name to a concrete scalar type.
///
/// Looks the name up in the broad table; abstract category names are not
/// concrete types and fail like unknown names do.
pub fn scalar_type(name: &str) -> Result<ScalarType, UnknownTypeName> {
    match TYPE_TABLES.lookup(name) {
        Some(TypeHandle::Concrete(scalar)) => Ok(scalar),
        _ => Err(UnknownTypeName {
            name: name.to_owned(),
        }),
    }
}

/// Resolve a name in the broad table.
pub fn type_handle(name: &str) -> Option<TypeHandle> {
    TYPE_TABLES.lookup(name)
}

/// Resolve a name in the narrow (attribute) table.
pub fn attribute_type(name: &str) -> Option<TypeHandle> {
    TYPE_TABLES.lookup_attribute(name)
}

/// Resolve a stripped C-ABI name in the side table.
pub fn c_name(name: &str) -> Option<&'static TypeInfo> {
    TYPE_TABLES.lookup_c_name(name)
}
