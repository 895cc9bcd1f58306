//! Declarative helpers for the generated parts of the Marquee schema.

/// Declares an enum mirroring a Marquee wire enumeration.
///
/// Every variant is paired with its wire string. The generated type carries an extra
/// `Unknown(String)` variant capturing values this SDK does not know about, so newly added
/// server-side values never fail a whole response. Parsing goes through
/// [`WireEnum::fuzzy_match`](crate::base::WireEnum::fuzzy_match), which means `"usd"`,
/// `"Usd"` and `"USD"` all resolve to the same variant.
///
/// ```ignore
/// wire_enum! {
///     /// Asset classes.
///     pub enum AssetClass {
///         Equity => "Equity",
///         Fx => "FX",
///     }
/// }
/// ```
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
            /// Unknown value from the API (captures the raw value for debugging).
            Unknown(::std::string::String),
        }

        impl $crate::base::WireEnum for $name {
            const VARIANTS: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Unknown(value) => value.as_str(),
                }
            }

            fn variant_name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                    Self::Unknown(value) => value.as_str(),
                }
            }

            fn unknown(value: ::std::string::String) -> Self {
                Self::Unknown(value)
            }

            fn is_unknown(&self) -> bool {
                matches!(self, Self::Unknown(_))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::base::WireEnum::as_str(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                ::std::result::Result::Ok(<Self as $crate::base::WireEnum>::from_wire(s))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str($crate::base::WireEnum::as_str(self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value: ::std::string::String = ::serde::Deserialize::deserialize(deserializer)?;
                ::std::result::Result::Ok(<Self as $crate::base::WireEnum>::from_wire(&value))
            }
        }
    };
}
