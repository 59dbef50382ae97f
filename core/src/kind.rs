//! Kind codes for scalar types.
//!
//! Every concrete scalar type carries a one-character kind code describing
//! its storage family. The codes follow the array-protocol convention:
//!
//! - `b`: boolean
//! - `i` / `u`: signed / unsigned integer
//! - `f` / `c`: real / complex floating point
//! - `M` / `m`: datetime / timedelta
//! - `S` / `U`: byte string / unicode string
//! - `V`: void (raw, untyped storage)
//! - `O`: opaque object reference

/// Storage-family classification for a concrete scalar type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    SignedInt,
    UnsignedInt,
    Float,
    Complex,
    Datetime,
    Timedelta,
    Bytes,
    Str,
    Void,
    Object,
}

impl Kind {
    /// The one-character code used in dtype strings and the type registry.
    pub fn code(self) -> char {
        match self {
            Kind::Bool => 'b',
            Kind::SignedInt => 'i',
            Kind::UnsignedInt => 'u',
            Kind::Float => 'f',
            Kind::Complex => 'c',
            Kind::Datetime => 'M',
            Kind::Timedelta => 'm',
            Kind::Bytes => 'S',
            Kind::Str => 'U',
            Kind::Void => 'V',
            Kind::Object => 'O',
        }
    }

    /// Parse a kind code character.
    pub fn from_code(code: char) -> Option<Kind> {
        Some(match code {
            'b' => Kind::Bool,
            'i' => Kind::SignedInt,
            'u' => Kind::UnsignedInt,
            'f' => Kind::Float,
            'c' => Kind::Complex,
            'M' => Kind::Datetime,
            'm' => Kind::Timedelta,
            'S' => Kind::Bytes,
            'U' => Kind::Str,
            'V' => Kind::Void,
            'O' => Kind::Object,
            _ => return None,
        })
    }

    /// Whether this kind represents a datetime or timedelta type.
    ///
    /// Temporal kinds are excluded from the scalar type groups: their byte
    /// width says nothing about numeric precision, so sorting them alongside
    /// the numeric types would be meaningless.
    pub fn is_temporal(self) -> bool {
        matches!(self, Kind::Datetime | Kind::Timedelta)
    }
}
