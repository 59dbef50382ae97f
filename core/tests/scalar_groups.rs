use expect_test::expect;
use ndtype_core::{GroupTable, ScalarType, TypeGroup, TypeRegistry, scalar_groups};
use pretty_assertions::assert_eq;

// =============================================================================
// Native group table
// =============================================================================

#[test]
fn groups_are_mutually_exclusive() {
    let table = scalar_groups();
    for (group, members) in table.iter() {
        for (other, other_members) in table.iter() {
            if group == other {
                continue;
            }
            for scalar in members {
                assert!(
                    !other_members.contains(scalar),
                    "{scalar:?} appears in both {group:?} and {other:?}"
                );
            }
        }
    }
}

#[test]
fn temporal_types_are_excluded() {
    let table = scalar_groups();
    for (_, members) in table.iter() {
        assert!(!members.contains(&ScalarType::Datetime64));
        assert!(!members.contains(&ScalarType::Timedelta64));
    }
}

#[test]
fn groups_cover_every_non_temporal_scalar() {
    let table = scalar_groups();
    for scalar in ScalarType::ALL {
        let found = TypeGroup::ALL
            .iter()
            .any(|&group| table.group(group).contains(&scalar));
        assert_eq!(found, !scalar.kind().is_temporal(), "{scalar:?}");
    }
}

#[test]
fn widths_are_non_decreasing_within_each_group() {
    for (group, members) in scalar_groups().iter() {
        for pair in members.windows(2) {
            assert!(
                pair[0].itemsize() <= pair[1].itemsize(),
                "{group:?}: {:?} before {:?}",
                pair[0],
                pair[1]
            );
        }
    }
}

#[test]
fn native_group_membership_snapshot() {
    let mut listing = String::new();
    for (group, members) in scalar_groups().iter() {
        listing.push_str(group.name());
        listing.push(':');
        for scalar in members {
            listing.push(' ');
            listing.push_str(scalar.name());
        }
        listing.push('\n');
    }
    // Stable across platforms: ties in byte width keep registry order, and
    // the only platform-dependent widths (longdouble, object) never change
    // their relative position.
    expect![[r#"
        int: int8 int16 int32 int64
        uint: uint8 uint16 uint32 uint64
        float: float16 float32 float64 longdouble
        complex: complex64 complex128 clongdouble
        others: bytes_ str_ void bool_ object_
    "#]]
    .assert_eq(&listing);
}

// =============================================================================
// Custom registries
// =============================================================================

#[test]
fn five_type_registry_float_group_ordering() {
    let registry = TypeRegistry::from_scalars([
        ScalarType::Float64,
        ScalarType::Float32,
        ScalarType::Int32,
        ScalarType::UInt8,
        ScalarType::Complex128,
    ]);
    let table = GroupTable::from_registry(&registry);

    // float64 was registered first but sorts after float32 by width.
    assert_eq!(
        table.group(TypeGroup::Float),
        &[ScalarType::Float32, ScalarType::Float64]
    );
    assert_eq!(table.group(TypeGroup::SignedInt), &[ScalarType::Int32]);
    assert_eq!(table.group(TypeGroup::UnsignedInt), &[ScalarType::UInt8]);
    assert_eq!(table.group(TypeGroup::Complex), &[ScalarType::Complex128]);
    assert_eq!(table.group(TypeGroup::Other), &[] as &[ScalarType]);
}

#[test]
fn equal_widths_keep_registration_order() {
    // The unsized flexible types all report width zero, so the sort is a
    // pure tie and registration order decides.
    let registry = TypeRegistry::from_scalars([
        ScalarType::Str,
        ScalarType::Bytes,
        ScalarType::Void,
        ScalarType::Bool,
    ]);
    let table = GroupTable::from_registry(&registry);
    assert_eq!(
        table.group(TypeGroup::Other),
        &[
            ScalarType::Str,
            ScalarType::Bytes,
            ScalarType::Void,
            ScalarType::Bool,
        ]
    );
}
