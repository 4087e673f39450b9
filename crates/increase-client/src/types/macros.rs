/*
[INPUT]:  Wire literal tables and tagged-union layouts
[OUTPUT]: String enums and category-tagged source enums with serde impls
[POS]:    Data layer - code generation helpers for API types
[UPDATE]: When the shape of generated enums changes
*/

/// String enum over a fixed set of wire literals.
///
/// Unknown literals deserialize into `Unrecognized` and serialize back
/// verbatim, so new server-side values never break decoding. `FromStr` is
/// strict and rejects them.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $wire:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )*
            /// Literal this client version does not know, kept verbatim.
            Unrecognized(String),
        }

        impl $name {
            /// Every literal this client version knows.
            pub const KNOWN: &'static [&'static str] = &[$($wire),*];

            /// Wire literal for this value
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)*
                    Self::Unrecognized(raw) => raw.as_str(),
                }
            }

            pub fn is_recognized(&self) -> bool {
                !matches!(self, Self::Unrecognized(_))
            }

            /// Lenient conversion, never fails
            pub fn from_wire(raw: &str) -> Self {
                $(
                    if raw == $wire {
                        return Self::$variant;
                    }
                )*
                Self::Unrecognized(raw.to_string())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::types::wire::UnknownValue;

            fn from_str(raw: &str) -> ::std::result::Result<Self, Self::Err> {
                match Self::from_wire(raw) {
                    Self::Unrecognized(value) => Err($crate::types::wire::UnknownValue::new(
                        stringify!($name),
                        value,
                        Self::KNOWN,
                    )),
                    known => Ok(known),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from_wire(&raw))
            }
        }
    };
}

/// Tagged union in the `{"category": "x", "x": {...}}` layout.
///
/// The payload is read from the slot named after the category. Null slots of
/// the other categories are dropped; any other key of the source object is
/// kept next to the payload and written back on serialization. An
/// unmodelled category keeps the whole object in `Unrecognized::raw`.
macro_rules! tagged_source {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $category:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident($payload:ty) = $slot:ident
            ),* $(,)?
        }
    ) => {
        wire_enum! {
            #[doc = concat!("Category discriminator of [`", stringify!($name), "`].")]
            pub enum $category {
                $($variant = stringify!($slot),)*
                Other = "other",
            }
        }

        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant($payload, $crate::types::wire::Extras),
            )*
            /// Category `other`. Any `other` payload stays in the extras.
            Other($crate::types::wire::Extras),
            /// Category not modelled by this client version.
            Unrecognized {
                category: String,
                raw: $crate::types::wire::Extras,
            },
        }

        impl $name {
            pub fn category(&self) -> $category {
                match self {
                    $(Self::$variant(..) => $category::$variant,)*
                    Self::Other(_) => $category::Other,
                    Self::Unrecognized { category, .. } => {
                        $category::Unrecognized(category.clone())
                    }
                }
            }
        }

        impl $crate::types::wire::Extensible for $name {
            fn extra(&self) -> &$crate::types::wire::Extras {
                match self {
                    $(Self::$variant(_, extra) => extra,)*
                    Self::Other(extra) => extra,
                    Self::Unrecognized { raw, .. } => raw,
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                use ::serde::ser::SerializeMap;

                match self {
                    $(
                        Self::$variant(payload, extra) => {
                            let mut map = serializer.serialize_map(Some(2 + extra.len()))?;
                            map.serialize_entry("category", stringify!($slot))?;
                            map.serialize_entry(stringify!($slot), payload)?;
                            for (key, value) in extra {
                                map.serialize_entry(key, value)?;
                            }
                            map.end()
                        }
                    )*
                    Self::Other(extra) => {
                        let mut map = serializer.serialize_map(Some(1 + extra.len()))?;
                        map.serialize_entry("category", "other")?;
                        for (key, value) in extra {
                            map.serialize_entry(key, value)?;
                        }
                        map.end()
                    }
                    Self::Unrecognized { raw, .. } => ::serde::Serialize::serialize(raw, serializer),
                }
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                use ::serde::de::Error as _;

                let mut raw = <$crate::types::wire::Extras as ::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                let category = match raw.get("category").and_then(|value| value.as_str()) {
                    Some(category) => $category::from_wire(category),
                    None => return Err(D::Error::custom("source object has no `category` string")),
                };

                match category {
                    $(
                        $category::$variant => {
                            let payload = $crate::types::wire::take_slot(&mut raw, stringify!($slot))
                                .map_err(D::Error::custom)?;
                            Ok(Self::$variant(
                                payload,
                                $crate::types::wire::source_extras(raw, $category::KNOWN),
                            ))
                        }
                    )*
                    $category::Other => Ok(Self::Other($crate::types::wire::source_extras(
                        raw,
                        $category::KNOWN,
                    ))),
                    $category::Unrecognized(category) => Ok(Self::Unrecognized { category, raw }),
                }
            }
        }
    };
}

/// Implements [`Extensible`](crate::types::wire::Extensible) for structs
/// with an `extra` catch-all field.
macro_rules! impl_extensible {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::types::wire::Extensible for $ty {
                fn extra(&self) -> &$crate::types::wire::Extras {
                    &self.extra
                }
            }
        )*
    };
}
