//! Closed enums whose wire form is their canonical name.
//!
//! [`string_enum!`] declares a `#[repr(u8)]` enum from `Variant = value => "NAME"`
//! lines. Both directions of the name/value mapping are generated as `match`
//! tables, so the declaration is the only source of truth:
//!
//! - `as_str` / [`Display`](std::fmt::Display) / `Serialize` emit the canonical name.
//! - `from_name` / [`FromStr`](std::str::FromStr) / `Deserialize` accept only a
//!   declared name. `Deserialize` rejects anything that is not a string.
//! - `from_value` / [`TryFrom<u8>`] and `name_of` reject integers outside the
//!   declared set. Members start at 1, so zero is always rejected and "unset"
//!   has to be modeled as `Option::None`.
//!
//! serde only carries a message through its error type, so a failed `Deserialize`
//! also records the [`EnumError`] in a per-thread slot. Response decoding clears
//! the slot, decodes, then takes it to tell enum failures apart from other
//! shape mismatches.

use std::cell::RefCell;

use crate::error::EnumError;

thread_local! {
    static LAST_FAILURE: RefCell<Option<EnumError>> = const { RefCell::new(None) };
}

/// Stores `err` as the latest enum decode failure on this thread and returns it.
pub(crate) fn record_failure(err: EnumError) -> EnumError {
    LAST_FAILURE.with(|slot| *slot.borrow_mut() = Some(err.clone()));
    err
}

/// Takes the latest enum decode failure recorded on this thread, if any.
pub(crate) fn take_failure() -> Option<EnumError> {
    LAST_FAILURE.with(|slot| slot.borrow_mut().take())
}

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:literal => $wire:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[non_exhaustive]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant = $value,
            )+
        }

        impl $name {
            /// Every declared member with its canonical name, in declaration order.
            pub const ALL: &'static [(Self, &'static str)] = &[$((Self::$variant, $wire),)+];

            /// Canonical wire name.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }

            /// Internal integer value.
            #[must_use]
            pub const fn value(self) -> u8 {
                self as u8
            }

            pub fn from_name(name: &str) -> ::std::result::Result<Self, $crate::error::EnumError> {
                match name {
                    $($wire => Ok(Self::$variant),)+
                    _ => Err($crate::error::EnumError::InvalidName {
                        type_name: stringify!($name),
                        name: name.to_owned(),
                    }),
                }
            }

            pub fn from_value(value: u8) -> ::std::result::Result<Self, $crate::error::EnumError> {
                match value {
                    $($value => Ok(Self::$variant),)+
                    _ => Err($crate::error::EnumError::InvalidValue {
                        type_name: stringify!($name),
                        value,
                    }),
                }
            }

            /// Encodes a raw integer straight to its canonical name.
            pub fn name_of(value: u8) -> ::std::result::Result<&'static str, $crate::error::EnumError> {
                Self::from_value(value).map(Self::as_str)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::EnumError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Self::from_name(s)
            }
        }

        impl ::std::convert::TryFrom<u8> for $name {
            type Error = $crate::error::EnumError;

            fn try_from(value: u8) -> ::std::result::Result<Self, Self::Error> {
                Self::from_value(value)
            }
        }

        impl ::std::convert::From<$name> for u8 {
            fn from(value: $name) -> Self {
                value.value()
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                use ::serde::de::Unexpected;

                struct NameVisitor;

                impl NameVisitor {
                    fn wrong_shape<E: ::serde::de::Error>(&self, found: Unexpected<'_>) -> E {
                        $crate::codec::record_failure($crate::error::EnumError::InvalidShape {
                            type_name: stringify!($name),
                            found: found.to_string(),
                        });
                        E::invalid_type(found, self)
                    }
                }

                impl<'de> ::serde::de::Visitor<'de> for NameVisitor {
                    type Value = $name;

                    fn expecting(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                        f.write_str(concat!(stringify!($name), " as a string"))
                    }

                    fn visit_str<E: ::serde::de::Error>(
                        self,
                        v: &str,
                    ) -> ::std::result::Result<Self::Value, E> {
                        $name::from_name(v).map_err(|e| E::custom($crate::codec::record_failure(e)))
                    }

                    fn visit_bool<E: ::serde::de::Error>(
                        self,
                        v: bool,
                    ) -> ::std::result::Result<Self::Value, E> {
                        Err(self.wrong_shape(Unexpected::Bool(v)))
                    }

                    fn visit_i64<E: ::serde::de::Error>(
                        self,
                        v: i64,
                    ) -> ::std::result::Result<Self::Value, E> {
                        Err(self.wrong_shape(Unexpected::Signed(v)))
                    }

                    fn visit_u64<E: ::serde::de::Error>(
                        self,
                        v: u64,
                    ) -> ::std::result::Result<Self::Value, E> {
                        Err(self.wrong_shape(Unexpected::Unsigned(v)))
                    }

                    fn visit_f64<E: ::serde::de::Error>(
                        self,
                        v: f64,
                    ) -> ::std::result::Result<Self::Value, E> {
                        Err(self.wrong_shape(Unexpected::Float(v)))
                    }

                    fn visit_unit<E: ::serde::de::Error>(self) -> ::std::result::Result<Self::Value, E> {
                        Err(self.wrong_shape(Unexpected::Unit))
                    }

                    fn visit_seq<A: ::serde::de::SeqAccess<'de>>(
                        self,
                        _seq: A,
                    ) -> ::std::result::Result<Self::Value, A::Error> {
                        Err(self.wrong_shape(Unexpected::Seq))
                    }

                    fn visit_map<A: ::serde::de::MapAccess<'de>>(
                        self,
                        _map: A,
                    ) -> ::std::result::Result<Self::Value, A::Error> {
                        Err(self.wrong_shape(Unexpected::Map))
                    }
                }

                deserializer.deserialize_any(NameVisitor)
            }
        }
    };
}

pub(crate) use string_enum;
