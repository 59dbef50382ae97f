//! Integration tests for the public API.
//!
//! These tests validate that the public surface works end-to-end: building
//! tables from a registry, resolving names through the process-wide
//! accessors, and walking the group table.

use ndtype_core::{
    AbstractType, Kind, ScalarType, TypeGroup, TypeHandle, native_registry, scalar_groups,
    scalar_type, type_handle,
};

#[test]
fn test_basic_name_resolution() {
    // Canonical names, C-heritage spellings, and convenience synonyms all
    // resolve through the same lookup.
    assert_eq!(scalar_type("int8").unwrap(), ScalarType::Int8);
    assert_eq!(scalar_type("byte").unwrap(), ScalarType::Int8);
    assert_eq!(scalar_type("uint16").unwrap(), ScalarType::UInt16);
    assert_eq!(scalar_type("ushort").unwrap(), ScalarType::UInt16);
    assert_eq!(scalar_type("str").unwrap(), ScalarType::Str);
    assert_eq!(scalar_type("bool").unwrap(), ScalarType::Bool);
}

#[test]
fn test_resolved_types_answer_queries() {
    let scalar = scalar_type("complex64").expect("complex64 should resolve");
    assert_eq!(scalar.kind(), Kind::Complex);
    assert_eq!(scalar.itemsize(), 8);
    assert!(scalar.is_instance_of(AbstractType::ComplexFloating));
    assert!(scalar.is_instance_of(AbstractType::Number));
    assert!(!scalar.is_instance_of(AbstractType::Floating));
}

#[test]
fn test_handles_expose_names() {
    let handle = type_handle("double").expect("double should resolve");
    assert_eq!(handle.name(), "float64");
    assert_eq!(handle, TypeHandle::Concrete(ScalarType::Float64));
}

#[test]
fn test_groups_align_with_hierarchy() {
    let table = scalar_groups();
    for scalar in table.group(TypeGroup::SignedInt) {
        assert!(scalar.is_instance_of(AbstractType::SignedInteger));
    }
    for scalar in table.group(TypeGroup::UnsignedInt) {
        assert!(scalar.is_instance_of(AbstractType::UnsignedInteger));
    }
    for scalar in table.group(TypeGroup::Float) {
        assert!(scalar.is_instance_of(AbstractType::Floating));
    }
    for scalar in table.group(TypeGroup::Complex) {
        assert!(scalar.is_instance_of(AbstractType::ComplexFloating));
    }
}

#[test]
fn test_registry_is_deterministic() {
    // Two builds of the native registry agree entry for entry, so the
    // process-wide tables are reproducible.
    let first: Vec<_> = native_registry().iter().collect();
    let second = ndtype_core::TypeRegistry::native();
    let second: Vec<_> = second.iter().collect();
    assert_eq!(first, second);
}
