//! `shape!`: the code-generation template for records.
//!
//! A shape declaration is pure data: one line per field naming its kind, its
//! getter, its builder setters, its Rust type and its wire name.
//!
//! ```ignore
//! shape! {
//!     /// A filter name and values pair.
//!     pub struct Filter => FilterBuilder {
//!         string name, set_name: String => "Name";
//!         list values, set_values, extend_values: String => "Values";
//!     }
//! }
//! ```
//!
//! Field kinds:
//!
//! | kind     | storage             | getter            | builder                                       |
//! |----------|---------------------|-------------------|-----------------------------------------------|
//! | `copy`   | `Option<T>`         | `Option<T>`       | `field(impl Into<T>)`, `set_field(Option<T>)` |
//! | `string` | `Option<String>`    | `Option<&str>`    | `field(impl Into<String>)`, `set_field(..)`   |
//! | `value`  | `Option<T>`         | `Option<&T>`      | `field(impl Into<T>)`, `set_field(Option<T>)` |
//! | `list`   | `Option<Vec<T>>`    | `Option<&[T]>`    | `field(item)` appends, `extend_field(iter)`, `set_field(Option<Vec<T>>)` |
//!
//! The expansion derives `Debug`, `Clone`, `Default`, `PartialEq`, `Eq`, `Hash`,
//! `Serialize` and `Deserialize`, implements `Display` via [`render`](crate::render)
//! and [`ValueObject`](crate::ValueObject). The calling crate must depend on `serde`.

#[macro_export]
macro_rules! shape {
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $builder:ident {
            $(
                $(#[$fmeta:meta])*
                $kind:ident $field:ident $(, $setter:ident)* : $ty:ty => $wire:literal;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Default, PartialEq, Eq, Hash,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        pub struct $name {
            $(
                #[serde(rename = $wire, default, skip_serializing_if = "Option::is_none")]
                $field: $crate::__shape_storage!($kind $ty),
            )*
        }

        impl $name {
            /// Start an empty builder (every field absent).
            pub fn builder() -> $builder {
                $builder::default()
            }

            /// Builder pre-populated with a copy of this record.
            pub fn to_builder(&self) -> $builder {
                $builder {
                    $( $field: ::core::clone::Clone::clone(&self.$field), )*
                }
            }

            /// Builder taking over this record's fields.
            pub fn into_builder(self) -> $builder {
                $builder {
                    $( $field: self.$field, )*
                }
            }

            $(
                $crate::__shape_getter!($(#[$fmeta])* $kind $field : $ty);
            )*
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::render::shape(f)
                    $( .field($wire, self.$field.as_ref()) )*
                    .finish()
            }
        }

        impl $crate::render::Render for $name {
            fn render(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(self, f)
            }
        }

        impl $crate::ValueObject for $name {
            const SHAPE_NAME: &'static str = stringify!($name);
        }

        impl ::core::convert::From<&$name> for $name {
            fn from(value: &$name) -> Self {
                ::core::clone::Clone::clone(value)
            }
        }

        impl ::core::convert::From<$builder> for $name {
            fn from(builder: $builder) -> Self {
                builder.build()
            }
        }

        #[doc = concat!("Builder for [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $builder {
            $( $field: $crate::__shape_storage!($kind $ty), )*
        }

        impl $builder {
            $(
                $crate::__shape_setters!($(#[$fmeta])* $kind $field $(, $setter)* : $ty);
            )*

            #[doc = concat!("Finish the [`", stringify!($name), "`].")]
            pub fn build(self) -> $name {
                $name {
                    $( $field: self.$field, )*
                }
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __shape_storage {
    (list $ty:ty) => { ::core::option::Option<::std::vec::Vec<$ty>> };
    ($kind:ident $ty:ty) => { ::core::option::Option<$ty> };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __shape_getter {
    ($(#[$m:meta])* copy $field:ident : $ty:ty) => {
        $(#[$m])*
        pub fn $field(&self) -> ::core::option::Option<$ty> {
            self.$field
        }
    };
    ($(#[$m:meta])* string $field:ident : $ty:ty) => {
        $(#[$m])*
        pub fn $field(&self) -> ::core::option::Option<&str> {
            self.$field.as_deref()
        }
    };
    ($(#[$m:meta])* value $field:ident : $ty:ty) => {
        $(#[$m])*
        pub fn $field(&self) -> ::core::option::Option<&$ty> {
            self.$field.as_ref()
        }
    };
    ($(#[$m:meta])* list $field:ident : $ty:ty) => {
        $(#[$m])*
        pub fn $field(&self) -> ::core::option::Option<&[$ty]> {
            self.$field.as_deref()
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __shape_setters {
    ($(#[$m:meta])* list $field:ident, $set:ident, $extend:ident : $ty:ty) => {
        $(#[$m])*
        ///
        /// Appends one element, creating the list when absent.
        pub fn $field(mut self, input: impl ::core::convert::Into<$ty>) -> Self {
            self.$field
                .get_or_insert_with(::std::vec::Vec::new)
                .push(input.into());
            self
        }

        $(#[$m])*
        ///
        /// Appends every element in order, creating the list when absent (even if
        /// `inputs` is empty).
        pub fn $extend<I>(mut self, inputs: I) -> Self
        where
            I: ::core::iter::IntoIterator,
            I::Item: ::core::convert::Into<$ty>,
        {
            self.$field
                .get_or_insert_with(::std::vec::Vec::new)
                .extend(inputs.into_iter().map(::core::convert::Into::into));
            self
        }

        $(#[$m])*
        ///
        /// Replaces the whole list; `None` makes the field absent.
        pub fn $set(mut self, input: ::core::option::Option<::std::vec::Vec<$ty>>) -> Self {
            self.$field = input;
            self
        }
    };
    ($(#[$m:meta])* $kind:ident $field:ident, $set:ident : $ty:ty) => {
        $(#[$m])*
        pub fn $field(mut self, input: impl ::core::convert::Into<$ty>) -> Self {
            self.$field = ::core::option::Option::Some(input.into());
            self
        }

        $(#[$m])*
        pub fn $set(mut self, input: ::core::option::Option<$ty>) -> Self {
            self.$field = input;
            self
        }
    };
}
