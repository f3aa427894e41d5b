//! Wire models mirroring the Cribl management API JSON shapes

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A string that is not one of an enumeration's wire values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {type_name} '{value}', expected one of: {}", expected.join(", "))]
pub struct UnknownVariant {
    pub type_name: &'static str,
    pub value: String,
    pub expected: &'static [&'static str],
}

/// Closed, string-backed enumeration with serde renames and `FromStr`.
macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every accepted wire value, in declaration order
            pub const VARIANTS: &'static [&'static str] = &[$($wire),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::models::UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    other => Err($crate::models::UnknownVariant {
                        type_name: stringify!($name),
                        value: other.to_string(),
                        expected: Self::VARIANTS,
                    }),
                }
            }
        }
    };
}

mod auth;
mod input_datagen;
mod output_s3;
mod pipeline;
mod system;

pub use auth::{AuthToken, LoginRequest};
pub use input_datagen::{DatagenSample, InputDatagen, InputDatagenType, InputSummary};
pub use output_s3::*;
pub use pipeline::{Pipeline, PipelineConf};
pub use system::{BuildInfo, SystemInfo};

/// Envelope used by every list and GET-by-id response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Items<T> {
    #[serde(default)]
    pub count: usize,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> Items<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            count: items.len(),
            items,
        }
    }

    /// The single record a GET-by-id returns, if any
    pub fn into_first(self) -> Option<T> {
        self.items.into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn string_enum_round_trips_wire_values() {
        assert_eq!(ObjectAcl::from_str("public-read"), Ok(ObjectAcl::PublicRead));
        assert_eq!(ObjectAcl::PublicRead.to_string(), "public-read");
        assert_eq!(
            serde_json::to_string(&ServerSideEncryption::AwsKms).unwrap(),
            "\"aws:kms\""
        );
    }

    #[test]
    fn unknown_variant_lists_expected_values() {
        let err = Compress::from_str("zstd").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid Compress 'zstd', expected one of: none, gzip"
        );
    }

    #[test]
    fn items_envelope_tolerates_missing_fields() {
        let items: Items<Pipeline> = serde_json::from_str("{}").unwrap();
        assert_eq!(items.count, 0);
        assert!(items.into_first().is_none());
    }
}
