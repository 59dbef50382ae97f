//! The naming tables: names to type handles.
//!
//! Scalar types answer to a large set of names accumulated for
//! compatibility: canonical sized names (`float64`), C-heritage spellings
//! (`double`, `short`), host-language builtins (`float`, `int`), and
//! platform-probed extended-precision names (`float128`). This module builds
//! the maps that resolve all of them:
//!
//! - the **broad** table: every name a dtype string may use,
//! - the **narrow** table: the names exposed as attributes of the library
//!   namespace (abstract categories plus concrete types, but never the
//!   builtin-shadowing spellings),
//! - the **C-name** side table: reserved-prefix registry records under their
//!   stripped names, for internal C-ABI lookups.
//!
//! Construction is strictly ordered and every insert is last-write-wins;
//! nothing here fails. A malformed registry shows up as an odd table, not as
//! an error.

use hashbrown::HashMap;
use tracing::debug;

use crate::hierarchy::AbstractType;
use crate::registry::{C_NAME_PREFIX, TypeInfo, TypeRegistry};
use crate::scalar::ScalarType;

/// A name resolves either to an abstract category or to a concrete type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeHandle {
    Abstract(AbstractType),
    Concrete(ScalarType),
}

impl TypeHandle {
    /// The canonical name of the referenced type.
    pub fn name(self) -> &'static str {
        match self {
            TypeHandle::Abstract(category) => category.name(),
            TypeHandle::Concrete(scalar) => scalar.name(),
        }
    }

    /// Byte width, for concrete handles. Abstract categories have none.
    pub fn itemsize(self) -> Option<usize> {
        match self {
            TypeHandle::Abstract(_) => None,
            TypeHandle::Concrete(scalar) => Some(scalar.itemsize()),
        }
    }

    pub fn as_scalar(self) -> Option<ScalarType> {
        match self {
            TypeHandle::Concrete(scalar) => Some(scalar),
            TypeHandle::Abstract(_) => None,
        }
    }

    pub fn as_abstract(self) -> Option<AbstractType> {
        match self {
            TypeHandle::Abstract(category) => Some(category),
            TypeHandle::Concrete(_) => None,
        }
    }
}

/// Cross-precision synonyms, inserted into both tables. Each resolves
/// through the name it points at, so they follow whatever the registry bound
/// that name to.
const PRECISION_ALIASES: [(&str, &str); 5] = [
    ("double", "float64"),
    ("cdouble", "complex128"),
    ("single", "float32"),
    ("csingle", "complex64"),
    ("half", "float16"),
];

/// Convenience spellings matching host-language builtins. These go into the
/// broad table only: they must resolve as dtype names but must not appear as
/// attributes, where they would shadow the builtins.
const CONVENIENCE_ALIASES: [(&str, &str); 11] = [
    ("bool", "bool_"),
    ("float", "float64"),
    ("complex", "complex128"),
    ("object", "object_"),
    ("bytes", "bytes_"),
    ("a", "bytes_"),
    ("int", "int_"),
    ("long", "int_"),
    ("ulong", "uint"),
    ("str", "str_"),
    ("unicode", "str_"),
];

/// The three naming tables, built once from a [`TypeRegistry`].
#[derive(Debug, Clone, Default)]
pub struct TypeTables {
    broad: HashMap<String, TypeHandle>,
    narrow: HashMap<String, TypeHandle>,
    c_names: HashMap<String, TypeInfo>,
}

impl TypeTables {
    /// Build the naming tables from a registry.
    ///
    /// The five phases run in a fixed order, later writes overwriting
    /// earlier ones on the same key:
    ///
    /// 1. abstract category names (narrow table only),
    /// 2. registry entries, with reserved-prefix records diverted to the
    ///    side table,
    /// 3. cross-precision synonyms (both tables),
    /// 4. convenience synonyms (broad table only),
    /// 5. extended-precision `float{bits}` / `complex{bits}` names, added
    ///    only when the platform width produced a name not already taken.
    pub fn from_registry(registry: &TypeRegistry) -> TypeTables {
        let mut tables = TypeTables::default();

        for category in AbstractType::ALL {
            tables
                .narrow
                .insert(category.name().to_owned(), TypeHandle::Abstract(category));
        }

        for info in registry {
            if info.is_c_name() {
                let stripped = &info.symbol[C_NAME_PREFIX.len()..];
                tables.c_names.insert(stripped.to_owned(), *info);
            } else {
                let handle = TypeHandle::Concrete(info.scalar);
                tables.broad.insert(info.symbol.to_owned(), handle);
                tables.narrow.insert(info.symbol.to_owned(), handle);
            }
        }

        for (alias, target) in PRECISION_ALIASES {
            // Aliases only materialize when their target name is registered.
            if let Some(&handle) = tables.narrow.get(target) {
                tables.broad.insert(alias.to_owned(), handle);
                tables.narrow.insert(alias.to_owned(), handle);
            }
        }

        for (alias, target) in CONVENIENCE_ALIASES {
            if let Some(&handle) = tables.narrow.get(target) {
                tables.broad.insert(alias.to_owned(), handle);
            }
        }

        for (base, extended) in [("float", "longdouble"), ("complex", "clongdouble")] {
            let Some(&handle) = tables.narrow.get(extended) else {
                continue;
            };
            let Some(itemsize) = handle.itemsize() else {
                continue;
            };
            let sized_name = format!("{}{}", base, itemsize * 8);
            if !tables.narrow.contains_key(&sized_name) {
                debug!(name = %sized_name, "registering extended-precision name");
                tables.broad.insert(sized_name.clone(), handle);
                tables.narrow.insert(sized_name, handle);
            }
        }

        debug!(
            broad = tables.broad.len(),
            narrow = tables.narrow.len(),
            c_names = tables.c_names.len(),
            "built scalar naming tables"
        );
        tables
    }

    /// Resolve a name in the broad table.
    pub fn lookup(&self, name: &str) -> Option<TypeHandle> {
        self.broad.get(name).copied()
    }

    /// Resolve a name in the narrow (attribute) table.
    pub fn lookup_attribute(&self, name: &str) -> Option<TypeHandle> {
        self.narrow.get(name).copied()
    }

    /// Resolve a stripped C-ABI name in the side table.
    pub fn lookup_c_name(&self, name: &str) -> Option<&TypeInfo> {
        self.c_names.get(name)
    }

    /// Iterate the broad table.
    pub fn broad(&self) -> impl Iterator<Item = (&str, TypeHandle)> {
        self.broad.iter().map(|(name, &handle)| (name.as_str(), handle))
    }

    /// Iterate the narrow (attribute) table.
    pub fn narrow(&self) -> impl Iterator<Item = (&str, TypeHandle)> {
        self.narrow.iter().map(|(name, &handle)| (name.as_str(), handle))
    }

    /// Iterate the C-ABI side table.
    pub fn c_names(&self) -> impl Iterator<Item = (&str, &TypeInfo)> {
        self.c_names.iter().map(|(name, info)| (name.as_str(), info))
    }
}
