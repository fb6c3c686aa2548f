//! The [`api_enum!`](crate::api_enum) macro for string-valued API enums.
//!
//! Statuses, kinds and event types are strings on the wire. Each one is declared as a
//! closed Rust enum with an extra `Other(String)` variant, so values introduced by the
//! server after this SDK was released still decode and re-encode unchanged.

/// Declares a string-backed enum with a forward compatible `Other(String)` variant.
///
/// ```
/// martianpay_core::api_enum! {
///     /// Status of a hypothetical job.
///     pub enum JobStatus {
///         Queued => "queued",
///         Done => "done",
///     }
/// }
///
/// let done: JobStatus = serde_json::from_value(serde_json::json!("done")).unwrap();
/// assert_eq!(done, JobStatus::Done);
///
/// let later: JobStatus = serde_json::from_value(serde_json::json!("archived")).unwrap();
/// assert_eq!(later, JobStatus::Other("archived".to_string()));
/// assert!(!later.is_known());
/// assert_eq!(serde_json::to_value(&later).unwrap(), serde_json::json!("archived"));
/// ```
#[macro_export]
macro_rules! api_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
            /// A value not known to this version of the SDK, kept verbatim.
            Other(::std::string::String),
        }

        impl $name {
            /// The wire string for this value.
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $wire, )*
                    $name::Other(value) => value.as_str(),
                }
            }

            /// `false` for [`Self::Other`].
            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Other(_))
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $wire => $name::$variant, )*
                    other => $name::Other(other.to_string()),
                }
            }
        }

        impl ::std::convert::From<::std::string::String> for $name {
            fn from(value: ::std::string::String) -> Self {
                match value.as_str() {
                    $( $wire => $name::$variant, )*
                    _ => $name::Other(value),
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Ok($name::from(s))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::__serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__serde::Deserializer<'de>,
            {
                let value = <::std::string::String as $crate::__serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                Ok($name::from(value))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    crate::api_enum! {
        enum Color {
            Red => "red",
            DeepBlue => "deep_blue",
        }
    }

    #[test]
    fn known_values_map_to_variants() {
        assert_eq!(Color::from("deep_blue"), Color::DeepBlue);
        assert_eq!(Color::DeepBlue.as_str(), "deep_blue");
        assert_eq!(Color::Red.to_string(), "red");
        assert!(Color::Red.is_known());
    }

    #[test]
    fn unknown_values_round_trip() {
        let color: Color = serde_json::from_value(json!("ultraviolet")).unwrap();
        assert_eq!(color, Color::Other("ultraviolet".into()));
        assert_eq!(serde_json::to_value(&color).unwrap(), json!("ultraviolet"));
    }

    #[test]
    fn non_string_is_a_decode_error() {
        assert!(serde_json::from_value::<Color>(json!(3)).is_err());
    }
}
