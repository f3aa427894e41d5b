//! Conversion between attribute values and typed config fields

use std::collections::HashMap;

use cribl_client::models::{
    AwsAuthenticationMethod, Compress, CompressionLevel, Format, InputDatagenType, ObjectAcl,
    OnBackpressure, OnDiskFullBackpressure, OutputS3Type, ParquetDataPageVersion, ParquetVersion,
    ServerSideEncryption, SignatureVersion, StorageClass,
};
use cribl_core::provider::{ProviderError, ProviderResult};
use cribl_core::resource::{ResourceId, Value};

/// A type that has a single attribute value representation
pub trait AttrValue: Sized + Clone {
    fn from_value(value: &Value) -> Result<Self, String>;
    fn to_value(&self) -> Value;
}

impl AttrValue for String {
    fn from_value(value: &Value) -> Result<Self, String> {
        match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(format!("expected string, got {:?}", other)),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl AttrValue for i64 {
    fn from_value(value: &Value) -> Result<Self, String> {
        match value {
            Value::Int(i) => Ok(*i),
            other => Err(format!("expected integer, got {:?}", other)),
        }
    }

    fn to_value(&self) -> Value {
        Value::Int(*self)
    }
}

impl AttrValue for f64 {
    fn from_value(value: &Value) -> Result<Self, String> {
        match value {
            Value::Float(f) => Ok(*f),
            Value::Int(i) => Ok(*i as f64),
            other => Err(format!("expected number, got {:?}", other)),
        }
    }

    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl AttrValue for bool {
    fn from_value(value: &Value) -> Result<Self, String> {
        match value {
            Value::Bool(b) => Ok(*b),
            other => Err(format!("expected bool, got {:?}", other)),
        }
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl<T: AttrValue> AttrValue for Vec<T> {
    fn from_value(value: &Value) -> Result<Self, String> {
        match value {
            Value::List(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| T::from_value(item).map_err(|e| format!("item {}: {}", i, e)))
                .collect(),
            other => Err(format!("expected list, got {:?}", other)),
        }
    }

    fn to_value(&self) -> Value {
        Value::List(self.iter().map(AttrValue::to_value).collect())
    }
}

macro_rules! string_enum_attr {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl AttrValue for $ty {
                fn from_value(value: &Value) -> Result<Self, String> {
                    match value {
                        Value::String(s) => s.parse::<$ty>().map_err(|e| format!("{}", e)),
                        other => Err(format!("expected string, got {:?}", other)),
                    }
                }

                fn to_value(&self) -> Value {
                    Value::String(self.as_str().to_string())
                }
            }
        )+
    };
}

string_enum_attr!(
    AwsAuthenticationMethod,
    Compress,
    CompressionLevel,
    Format,
    InputDatagenType,
    ObjectAcl,
    OnBackpressure,
    OnDiskFullBackpressure,
    OutputS3Type,
    ParquetDataPageVersion,
    ParquetVersion,
    ServerSideEncryption,
    SignatureVersion,
    StorageClass,
);

/// A config struct field: required (`T`) or optional (`Option<T>`)
pub trait AttributeField: Sized {
    fn read(id: &ResourceId, attrs: &HashMap<String, Value>, key: &str) -> ProviderResult<Self>;
    fn write(&self, attrs: &mut HashMap<String, Value>, key: &str);
    /// Prefer `remote`; fall back to `prior` where the remote value is absent.
    /// Optional fields absent from `prior` are not tracked and stay absent.
    fn merge(remote: Self, prior: &Self) -> Self;
}

fn invalid(id: &ResourceId, key: &str, message: String) -> ProviderError {
    ProviderError::new(format!("Invalid attribute '{}': {}", key, message)).for_resource(id.clone())
}

impl<T: AttrValue> AttributeField for T {
    fn read(id: &ResourceId, attrs: &HashMap<String, Value>, key: &str) -> ProviderResult<Self> {
        let value = attrs.get(key).ok_or_else(|| {
            ProviderError::new(format!("Required attribute '{}' is missing", key))
                .for_resource(id.clone())
        })?;
        T::from_value(value).map_err(|e| invalid(id, key, e))
    }

    fn write(&self, attrs: &mut HashMap<String, Value>, key: &str) {
        attrs.insert(key.to_string(), self.to_value());
    }

    fn merge(remote: Self, _prior: &Self) -> Self {
        remote
    }
}

impl<T: AttrValue> AttributeField for Option<T> {
    fn read(id: &ResourceId, attrs: &HashMap<String, Value>, key: &str) -> ProviderResult<Self> {
        attrs
            .get(key)
            .map(|value| T::from_value(value).map_err(|e| invalid(id, key, e)))
            .transpose()
    }

    fn write(&self, attrs: &mut HashMap<String, Value>, key: &str) {
        if let Some(value) = self {
            attrs.insert(key.to_string(), value.to_value());
        }
    }

    fn merge(remote: Self, prior: &Self) -> Self {
        prior.as_ref().map(|held| remote.unwrap_or_else(|| held.clone()))
    }
}

/// Declare a config struct whose fields map one-to-one onto attributes of
/// the same name.
///
/// Generates `from_attributes`, `to_attributes` and `merge`. A field may
/// name its attribute explicitly with `as "key"`.
macro_rules! attribute_struct {
    (@key $field:ident) => {
        stringify!($field)
    };
    (@key $field:ident $key:literal) => {
        $key
    };
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                pub $field:ident $(as $key:literal)? : $ty:ty
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )+
        }

        impl $name {
            pub fn from_attributes(
                id: &cribl_core::resource::ResourceId,
                attrs: &std::collections::HashMap<String, cribl_core::resource::Value>,
            ) -> cribl_core::provider::ProviderResult<Self> {
                Ok(Self {
                    $(
                        $field: <$ty as $crate::utils::AttributeField>::read(
                            id,
                            attrs,
                            $crate::utils::attribute_struct!(@key $field $($key)?),
                        )?,
                    )+
                })
            }

            pub fn to_attributes(
                &self,
            ) -> std::collections::HashMap<String, cribl_core::resource::Value> {
                let mut attrs = std::collections::HashMap::new();
                $(
                    $crate::utils::AttributeField::write(
                        &self.$field,
                        &mut attrs,
                        $crate::utils::attribute_struct!(@key $field $($key)?),
                    );
                )+
                attrs
            }

            /// Field-wise merge over the fields `prior` holds: remote values
            /// win, absent ones keep `prior`
            pub fn merge(prior: &Self, remote: Self) -> Self {
                Self {
                    $(
                        $field: $crate::utils::AttributeField::merge(remote.$field, &prior.$field),
                    )+
                }
            }
        }
    };
}

pub(crate) use attribute_struct;

#[cfg(test)]
mod tests {
    use super::*;

    attribute_struct! {
        pub struct Sample {
            pub name: String,
            pub rate: Option<f64>,
            pub tags: Option<Vec<String>>,
            pub format: Option<Format>,
        }
    }

    fn id() -> ResourceId {
        ResourceId::new("test", "sample")
    }

    #[test]
    fn read_and_write_attributes() {
        let mut attrs = HashMap::new();
        attrs.insert("name".to_string(), Value::from("a"));
        attrs.insert("rate".to_string(), Value::Int(3));
        attrs.insert("tags".to_string(), Value::List(vec![]));

        let sample = Sample::from_attributes(&id(), &attrs).unwrap();
        assert_eq!(sample.rate, Some(3.0));
        assert_eq!(sample.tags, Some(vec![]));
        assert_eq!(sample.format, None);

        let written = sample.to_attributes();
        assert_eq!(written.get("rate"), Some(&Value::Float(3.0)));
        assert_eq!(written.get("tags"), Some(&Value::List(vec![])));
        assert!(!written.contains_key("format"));
    }

    #[test]
    fn missing_required_attribute() {
        let err = Sample::from_attributes(&id(), &HashMap::new()).unwrap_err();
        assert!(err.to_string().contains("'name'"));
    }

    #[test]
    fn unknown_enum_value_lists_choices() {
        let mut attrs = HashMap::new();
        attrs.insert("name".to_string(), Value::from("a"));
        attrs.insert("format".to_string(), Value::from("xml"));

        let err = Sample::from_attributes(&id(), &attrs).unwrap_err();
        assert_eq!(
            err.to_string(),
            "[test.sample] Invalid attribute 'format': Invalid Format 'xml', expected one of: json, raw, parquet"
        );
    }

    #[test]
    fn merge_tracks_fields_held_by_prior() {
        let prior = Sample {
            name: "a".to_string(),
            rate: Some(1.0),
            tags: Some(vec!["x".to_string()]),
            format: None,
        };
        let remote = Sample {
            name: "b".to_string(),
            rate: None,
            tags: Some(vec![]),
            format: Some(Format::Json),
        };

        let merged = Sample::merge(&prior, remote);
        assert_eq!(merged.name, "b");
        assert_eq!(merged.rate, Some(1.0));
        assert_eq!(merged.tags, Some(vec![]));
        assert_eq!(merged.format, None);
    }
}
