//! `wire_enum!`: closed enumerations with a canonical wire text.
//!
//! Services add values over time, so every enumeration carries an
//! `Unknown(UnknownValue)` fallback instead of rejecting text it does not
//! recognise. Conversion from text always picks the known variant when there is
//! one, which keeps `Enum::Variant` and its canonical text interchangeable:
//!
//! ```ignore
//! assert_eq!(InstanceStateName::from("running"), InstanceStateName::Running);
//! assert_eq!(InstanceStateName::Running.as_str(), "running");
//! assert!(!InstanceStateName::from("hibernating").is_known());
//! ```

use core::fmt;

/// Text of an enumeration value this client does not know about.
///
/// Only produced by the generated `From<&str>` conversions, so it never holds the
/// canonical text of a known variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownValue(String);

impl UnknownValue {
    #[doc(hidden)]
    pub fn __new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnknownValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )*
            /// A value introduced after this client was generated.
            Unknown($crate::UnknownValue),
        }

        impl $name {
            /// Canonical wire text.
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )*
                    Self::Unknown(value) => value.as_str(),
                }
            }

            /// Canonical texts of every known variant, in declaration order.
            pub const fn values() -> &'static [&'static str] {
                &[$( $wire ),*]
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Unknown(_))
            }

            /// Strict conversion: unknown text is an error instead of a fallback.
            pub fn try_parse(value: &str) -> $crate::ModelResult<Self> {
                match Self::from(value) {
                    Self::Unknown(_) => Err($crate::ModelError::unknown_variant(
                        stringify!($name),
                        value,
                    )),
                    known => Ok(known),
                }
            }
        }

        impl ::core::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $wire => Self::$variant, )*
                    other => {
                        $crate::__private::tracing::trace!(
                            enumeration = stringify!($name),
                            value = other,
                            "unrecognised enumeration value"
                        );
                        Self::Unknown($crate::UnknownValue::__new(other))
                    }
                }
            }
        }

        impl ::core::convert::From<::std::string::String> for $name {
            fn from(value: ::std::string::String) -> Self {
                Self::from(value.as_str())
            }
        }

        impl ::core::convert::From<&::std::string::String> for $name {
            fn from(value: &::std::string::String) -> Self {
                Self::from(value.as_str())
            }
        }

        impl ::core::convert::From<&$name> for $name {
            fn from(value: &$name) -> Self {
                ::core::clone::Clone::clone(value)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = ::core::convert::Infallible;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }

        impl ::core::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::render::Render for $name {
            fn render(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let text = <::std::string::String as $crate::__private::serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from(text.as_str()))
            }
        }
    };
}
