//! Abstract scalar categories and the ancestry relation over them.
//!
//! Concrete scalar types hang off a small lattice of abstract categories:
//!
//! ```text
//! generic
//! ├── number
//! │   ├── integer
//! │   │   ├── signedinteger      (int8..int64, timedelta64)
//! │   │   └── unsignedinteger    (uint8..uint64)
//! │   └── inexact
//! │       ├── floating           (float16..float64, longdouble)
//! │       └── complexfloating    (complex64..clongdouble)
//! ├── flexible
//! │   ├── character              (bytes_, str_)
//! │   └── (void)
//! └── (bool_, object_, datetime64)
//! ```
//!
//! The group classifier only ever asks "is this scalar an instance of that
//! category", so the relation is exposed as a single predicate plus the
//! parent walk it is built from.

use crate::scalar::ScalarType;

/// Abstract scalar categories. These carry no storage; they exist so that
/// names like `signedinteger` resolve in the attribute table and so that
/// concrete types can be grouped by ancestry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbstractType {
    Generic,
    Number,
    Integer,
    SignedInteger,
    UnsignedInteger,
    Inexact,
    Floating,
    ComplexFloating,
    Flexible,
    Character,
}

impl AbstractType {
    /// Every abstract category, in table-seeding order.
    pub const ALL: [AbstractType; 10] = [
        AbstractType::Generic,
        AbstractType::Number,
        AbstractType::Integer,
        AbstractType::SignedInteger,
        AbstractType::UnsignedInteger,
        AbstractType::Inexact,
        AbstractType::Floating,
        AbstractType::ComplexFloating,
        AbstractType::Flexible,
        AbstractType::Character,
    ];

    /// The category's name as it appears in the attribute table.
    pub fn name(self) -> &'static str {
        match self {
            AbstractType::Generic => "generic",
            AbstractType::Number => "number",
            AbstractType::Integer => "integer",
            AbstractType::SignedInteger => "signedinteger",
            AbstractType::UnsignedInteger => "unsignedinteger",
            AbstractType::Inexact => "inexact",
            AbstractType::Floating => "floating",
            AbstractType::ComplexFloating => "complexfloating",
            AbstractType::Flexible => "flexible",
            AbstractType::Character => "character",
        }
    }

    /// The immediate parent category; `None` for the root.
    pub fn parent(self) -> Option<AbstractType> {
        match self {
            AbstractType::Generic => None,
            AbstractType::Number => Some(AbstractType::Generic),
            AbstractType::Integer => Some(AbstractType::Number),
            AbstractType::SignedInteger => Some(AbstractType::Integer),
            AbstractType::UnsignedInteger => Some(AbstractType::Integer),
            AbstractType::Inexact => Some(AbstractType::Number),
            AbstractType::Floating => Some(AbstractType::Inexact),
            AbstractType::ComplexFloating => Some(AbstractType::Inexact),
            AbstractType::Flexible => Some(AbstractType::Generic),
            AbstractType::Character => Some(AbstractType::Flexible),
        }
    }

    /// Whether `self` is `ancestor` or sits below it in the lattice.
    pub fn is_descendant_of(self, ancestor: AbstractType) -> bool {
        let mut current = Some(self);
        while let Some(category) = current {
            if category == ancestor {
                return true;
            }
            current = category.parent();
        }
        false
    }
}

impl ScalarType {
    /// The abstract category this concrete type hangs directly under.
    pub fn category(self) -> AbstractType {
        match self {
            ScalarType::Bool | ScalarType::Object | ScalarType::Datetime64 => {
                AbstractType::Generic
            }
            ScalarType::Int8 | ScalarType::Int16 | ScalarType::Int32 | ScalarType::Int64 => {
                AbstractType::SignedInteger
            }
            // Timedelta is integer-like: it supports integer arithmetic and
            // sits under signedinteger despite its temporal kind code.
            ScalarType::Timedelta64 => AbstractType::SignedInteger,
            ScalarType::UInt8 | ScalarType::UInt16 | ScalarType::UInt32 | ScalarType::UInt64 => {
                AbstractType::UnsignedInteger
            }
            ScalarType::Float16
            | ScalarType::Float32
            | ScalarType::Float64
            | ScalarType::LongDouble => AbstractType::Floating,
            ScalarType::Complex64 | ScalarType::Complex128 | ScalarType::CLongDouble => {
                AbstractType::ComplexFloating
            }
            ScalarType::Bytes | ScalarType::Str => AbstractType::Character,
            ScalarType::Void => AbstractType::Flexible,
        }
    }

    /// Whether this concrete type is an instance of the given category.
    pub fn is_instance_of(self, category: AbstractType) -> bool {
        self.category().is_descendant_of(category)
    }
}
