// 🔎 Lookup - turn a symbolic name or a raw code into a registry entry
//
// Every registry resolves strings the same way:
// 1. exact match on the symbolic name ("fluxys_lng", "zeebrugge", "BE")
// 2. otherwise the first entry, in declaration order, whose code matches

use crate::error::{MappingError, Result};
use std::collections::BTreeMap;

/// Query parameters exported by an entry, keyed by parameter name
pub type Params = BTreeMap<&'static str, &'static str>;

// ============================================================================
// ENTRY TRAIT
// ============================================================================

/// A member of one of the fixed reference registries
pub trait Entry: Copy + Eq + 'static {
    /// Registry name used in error messages
    const KIND: &'static str;

    /// All entries, in declaration order
    fn all() -> impl Iterator<Item = Self>;

    /// Symbolic name, unique within the registry
    fn name(&self) -> &'static str;

    /// Formal code, unique within the registry
    fn code(&self) -> &'static str;

    /// Query parameters identifying this entry
    fn get_params(&self) -> Params;
}

/// Two-stage resolution shared by all registries
pub fn resolve<E: Entry>(s: &str) -> Result<E> {
    E::all()
        .find(|entry| entry.name() == s)
        .or_else(|| E::all().find(|entry| entry.code() == s))
        .ok_or_else(|| MappingError::invalid(E::KIND, s))
}

// ============================================================================
// LOOKUP INPUT
// ============================================================================

/// Anything a resolver accepts: an entry (passed through) or a string
pub trait Lookup<E> {
    fn lookup(self) -> Result<E>;
}

impl<E: Entry> Lookup<E> for &str {
    fn lookup(self) -> Result<E> {
        resolve(self)
    }
}

impl<E: Entry> Lookup<E> for &String {
    fn lookup(self) -> Result<E> {
        resolve(self)
    }
}

impl<E: Entry> Lookup<E> for String {
    fn lookup(self) -> Result<E> {
        resolve(&self)
    }
}

// ============================================================================
// SHARED IMPLS
// ============================================================================

/// Wires an entry type into the registry machinery.
///
/// The type must have inherent `all`, `name`, `code` and `get_params`. Generates
/// the `Entry` impl, the resolver function, pass-through `Lookup`, `Display`
/// (the code), `FromStr` and code-string serde.
macro_rules! entry_impls {
    ($entry:ident, $kind:literal, $resolver:ident) => {
        impl $crate::lookup::Entry for $entry {
            const KIND: &'static str = $kind;

            fn all() -> impl Iterator<Item = Self> {
                $entry::all()
            }

            fn name(&self) -> &'static str {
                $entry::name(self)
            }

            fn code(&self) -> &'static str {
                $entry::code(self)
            }

            fn get_params(&self) -> $crate::lookup::Params {
                $entry::get_params(self)
            }
        }

        #[doc = concat!(
            "Resolve a `", stringify!($entry), "` from an entry, its symbolic name or its code"
        )]
        pub fn $resolver<L: $crate::lookup::Lookup<$entry>>(
            id: L,
        ) -> ::std::result::Result<$entry, $crate::error::MappingError> {
            $crate::lookup::Lookup::lookup(id)
        }

        impl $crate::lookup::Lookup<$entry> for $entry {
            fn lookup(self) -> $crate::error::Result<$entry> {
                Ok(self)
            }
        }

        impl ::std::fmt::Display for $entry {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.code())
            }
        }

        impl ::std::str::FromStr for $entry {
            type Err = $crate::error::MappingError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                $crate::lookup::resolve(s)
            }
        }

        impl ::serde::Serialize for $entry {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.code())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $entry {
            fn deserialize<D: ::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                let s = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                $crate::lookup::resolve(&s).map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use entry_impls;
