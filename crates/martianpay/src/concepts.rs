//! Core traits shared by MartianPay resources.

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use martianpay_core::{
    errors::{Error, Result},
    types::{AnyJson, IdKind},
};

/// A top-level API resource: it has an `id` and an `object` discriminator.
pub trait ApiResource: Serialize + DeserializeOwned {
    /// The value the API puts in this resource's `object` field.
    const OBJECT: &'static str;

    fn id(&self) -> &str;

    fn object(&self) -> Option<&str>;

    /// Decodes a JSON document, refusing documents that declare another `object`.
    ///
    /// A missing `object` field is accepted.
    fn from_json(value: &AnyJson) -> Result<Self> {
        if let Some(found) = value.get("object").and_then(AnyJson::as_str) {
            if found != Self::OBJECT {
                return Err(Error::ObjectMismatch {
                    expected: Self::OBJECT,
                    found: found.to_string(),
                });
            }
        }
        Ok(Self::deserialize(value)?)
    }

    fn to_json(&self) -> Result<AnyJson> {
        Ok(serde_json::to_value(self)?)
    }
}

/// A resource whose ID may be generated on the client.
pub trait GeneratedId: ApiResource {
    const ID_KIND: IdKind;

    fn generate_id() -> String {
        Self::ID_KIND.generate()
    }

    fn is_generated_id(id: &str) -> bool {
        Self::ID_KIND.matches(id)
    }
}

/// Implements [`ApiResource`] for a struct with `id: String` and `object: Option<String>`.
macro_rules! api_resource {
    ($ty:ty, $object:literal) => {
        impl $crate::concepts::ApiResource for $ty {
            const OBJECT: &'static str = $object;

            fn id(&self) -> &str {
                &self.id
            }

            fn object(&self) -> Option<&str> {
                self.object.as_deref()
            }
        }
    };
}

/// Implements [`GeneratedId`] and a `new()` constructor that fills `id` and `object`.
macro_rules! generated_id {
    ($ty:ident, $prefix:literal, $random_len:literal) => {
        impl $crate::concepts::GeneratedId for $ty {
            const ID_KIND: ::martianpay_core::types::IdKind =
                ::martianpay_core::types::IdKind::new($prefix, $random_len);
        }

        impl $ty {
            /// Creates an empty record with a freshly generated ID.
            pub fn new() -> Self {
                use $crate::concepts::{ApiResource, GeneratedId};

                $ty {
                    id: <$ty as GeneratedId>::generate_id(),
                    object: Some(<$ty as ApiResource>::OBJECT.to_string()),
                    ..Default::default()
                }
            }
        }
    };
}

pub(crate) use api_resource;
pub(crate) use generated_id;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Debug, Default, Serialize, Deserialize)]
    struct Widget {
        id: String,
        object: Option<String>,
        name: Option<String>,
    }

    api_resource!(Widget, "widget");
    generated_id!(Widget, "wdg_", 12);

    #[test]
    fn from_json_checks_the_discriminator() {
        let widget = Widget::from_json(&json!({"id": "wdg_1", "object": "widget"})).unwrap();
        assert_eq!(widget.id(), "wdg_1");
        assert_eq!(widget.object(), Some("widget"));

        let err = Widget::from_json(&json!({"id": "cus_1", "object": "customer"})).unwrap_err();
        assert!(matches!(
            err,
            Error::ObjectMismatch { expected: "widget", ref found } if found == "customer"
        ));
    }

    #[test]
    fn from_json_accepts_missing_object() {
        let widget = Widget::from_json(&json!({"id": "wdg_1"})).unwrap();
        assert_eq!(widget.object(), None);
        assert_eq!(widget.name, None);
    }

    #[test]
    fn new_generates_an_id() {
        let widget = Widget::new();
        assert!(Widget::is_generated_id(&widget.id));
        assert_eq!(widget.id.len(), 16);
        assert_eq!(widget.object(), Some("widget"));
        assert_eq!(widget.to_json().unwrap()["object"], json!("widget"));
    }
}
