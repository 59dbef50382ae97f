//! Scalar type groups.
//!
//! Consumers that iterate "all the float types" or "all the unsigned
//! integer types" do it through the group table: five fixed groups, each
//! holding the concrete types of one family sorted by byte width. Temporal
//! types are excluded entirely; everything else lands in exactly one group.

use hashbrown::HashSet;
use smallvec::SmallVec;
use tracing::debug;

use crate::hierarchy::AbstractType;
use crate::registry::TypeRegistry;
use crate::scalar::ScalarType;

/// The five scalar type groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeGroup {
    SignedInt,
    UnsignedInt,
    Float,
    Complex,
    Other,
}

impl TypeGroup {
    /// Every group, in presentation order.
    pub const ALL: [TypeGroup; 5] = [
        TypeGroup::SignedInt,
        TypeGroup::UnsignedInt,
        TypeGroup::Float,
        TypeGroup::Complex,
        TypeGroup::Other,
    ];

    /// The group's conventional short name.
    pub fn name(self) -> &'static str {
        match self {
            TypeGroup::SignedInt => "int",
            TypeGroup::UnsignedInt => "uint",
            TypeGroup::Float => "float",
            TypeGroup::Complex => "complex",
            TypeGroup::Other => "others",
        }
    }

    fn index(self) -> usize {
        match self {
            TypeGroup::SignedInt => 0,
            TypeGroup::UnsignedInt => 1,
            TypeGroup::Float => 2,
            TypeGroup::Complex => 3,
            TypeGroup::Other => 4,
        }
    }
}

/// Ancestry checks driving classification, in order. A type matching none of
/// these is never dropped; it falls through to [`TypeGroup::Other`].
const GROUP_CATEGORIES: [(TypeGroup, AbstractType); 4] = [
    (TypeGroup::SignedInt, AbstractType::SignedInteger),
    (TypeGroup::UnsignedInt, AbstractType::UnsignedInteger),
    (TypeGroup::Float, AbstractType::Floating),
    (TypeGroup::Complex, AbstractType::ComplexFloating),
];

type GroupList = SmallVec<[ScalarType; 8]>;

/// Concrete scalar types partitioned into the five groups, each group
/// sorted ascending by byte width.
#[derive(Debug, Clone, Default)]
pub struct GroupTable {
    groups: [GroupList; 5],
}

impl GroupTable {
    /// Classify the registry's concrete types.
    ///
    /// Registry entries are deduplicated by concrete type (first occurrence
    /// keeps its position), temporal kinds are skipped, and each group is
    /// stable-sorted by byte width so that equal widths keep encounter
    /// order.
    pub fn from_registry(registry: &TypeRegistry) -> GroupTable {
        let mut table = GroupTable::default();
        let mut seen: HashSet<ScalarType> = HashSet::new();

        for info in registry {
            if !seen.insert(info.scalar) {
                continue;
            }
            if info.kind.is_temporal() {
                continue;
            }

            let group = GROUP_CATEGORIES
                .iter()
                .find(|(_, category)| info.scalar.is_instance_of(*category))
                .map(|&(group, _)| group)
                .unwrap_or(TypeGroup::Other);
            table.groups[group.index()].push(info.scalar);
        }

        for group in &mut table.groups {
            group.sort_by_key(|scalar| scalar.itemsize());
        }

        debug!(
            int = table.group(TypeGroup::SignedInt).len(),
            uint = table.group(TypeGroup::UnsignedInt).len(),
            float = table.group(TypeGroup::Float).len(),
            complex = table.group(TypeGroup::Complex).len(),
            others = table.group(TypeGroup::Other).len(),
            "classified scalar type groups"
        );
        table
    }

    /// The members of one group, sorted ascending by byte width.
    pub fn group(&self, group: TypeGroup) -> &[ScalarType] {
        &self.groups[group.index()]
    }

    /// Iterate all five groups in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (TypeGroup, &[ScalarType])> {
        TypeGroup::ALL
            .iter()
            .map(move |&group| (group, self.group(group)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_native_groups_are_exclusive_and_exhaustive() {
        let registry = TypeRegistry::native();
        let table = GroupTable::from_registry(&registry);

        let mut classified = 0;
        for (_, members) in table.iter() {
            classified += members.len();
        }

        let mut expected = 0;
        let mut seen = HashSet::new();
        for info in &registry {
            if seen.insert(info.scalar) && !info.kind.is_temporal() {
                expected += 1;
            }
        }
        assert_eq!(classified, expected);

        for scalar in ScalarType::ALL {
            let homes = TypeGroup::ALL
                .iter()
                .filter(|&&group| table.group(group).contains(&scalar))
                .count();
            if scalar.kind().is_temporal() {
                assert_eq!(homes, 0, "{scalar:?} should be excluded");
            } else {
                assert_eq!(homes, 1, "{scalar:?} should be in exactly one group");
            }
        }
    }

    #[test]
    fn test_groups_are_sorted_by_itemsize() {
        let table = GroupTable::from_registry(&TypeRegistry::native());
        for (group, members) in table.iter() {
            for pair in members.windows(2) {
                assert!(
                    pair[0].itemsize() <= pair[1].itemsize(),
                    "group {:?} not sorted: {:?}",
                    group,
                    members
                );
            }
        }
    }

    #[test]
    fn test_bool_and_flexible_land_in_others() {
        let table = GroupTable::from_registry(&TypeRegistry::native());
        let others = table.group(TypeGroup::Other);
        for scalar in [
            ScalarType::Bool,
            ScalarType::Bytes,
            ScalarType::Str,
            ScalarType::Void,
            ScalarType::Object,
        ] {
            assert!(others.contains(&scalar), "{scalar:?} missing from others");
        }
    }

    #[test]
    fn test_duplicate_entries_are_classified_once() {
        let registry = TypeRegistry::from_scalars([
            ScalarType::Int32,
            ScalarType::Int32,
            ScalarType::Int8,
        ]);
        let table = GroupTable::from_registry(&registry);
        assert_eq!(
            table.group(TypeGroup::SignedInt),
            &[ScalarType::Int8, ScalarType::Int32]
        );
    }
}
