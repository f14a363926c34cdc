//! Core-owned DTOs for policy server operations.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::{PsPortError, PsPortResult};
use crate::wire::optional_field;

/// Acknowledgement returned by every policy server endpoint.
///
/// Instances are populated by deserialization; application code only ever
/// builds the empty default. `error: true` is a normal outcome, not a failed
/// call, and must be checked by the caller.
///
/// Only a JSON object decodes. A missing or `null` `error` reads as `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct PsEmptyResponse {
    #[serde(rename = "error")]
    error: bool,
    #[serde(rename = "message", skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl TryFrom<Map<String, Value>> for PsEmptyResponse {
    type Error = serde_json::Error;

    fn try_from(object: Map<String, Value>) -> Result<Self, Self::Error> {
        Ok(Self {
            error: optional_field(&object, "error")?.unwrap_or_default(),
            message: optional_field(&object, "message")?,
        })
    }
}

impl PsEmptyResponse {
    pub const fn is_error(&self) -> bool {
        self.error
    }

    /// Human-readable explanation, usually present when [`is_error`](Self::is_error) is true.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Turn a soft `error: true` answer into [`PsPortError::Application`].
    pub fn ensure_ok(self) -> PsPortResult<Self> {
        if self.error {
            Err(PsPortError::Application {
                message: self.message,
            })
        } else {
            Ok(self)
        }
    }
}

macro_rules! opaque_request {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        ///
        /// The body shape is owned by the policy server and is supplied by
        /// the integrator; it is sent verbatim.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Value);

        impl $name {
            /// An empty JSON object.
            pub fn new() -> Self {
                Self(Value::Object(Map::new()))
            }

            pub const fn from_value(value: Value) -> Self {
                Self(value)
            }

            /// Serialize any value into the request body.
            pub fn from_body<T: Serialize + ?Sized>(body: &T) -> serde_json::Result<Self> {
                serde_json::to_value(body).map(Self)
            }

            /// Set a top-level field. A non-object body is replaced by an object.
            #[must_use]
            pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
                if !self.0.is_object() {
                    self.0 = Value::Object(Map::new());
                }
                if let Value::Object(map) = &mut self.0 {
                    map.insert(key.into(), value.into());
                }
                self
            }

            pub const fn as_value(&self) -> &Value {
                &self.0
            }

            pub fn into_value(self) -> Value {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<Value> for $name {
            fn from(value: Value) -> Self {
                Self(value)
            }
        }
    };
}

opaque_request!(
    /// Body of the `clearPolicyList` call.
    PsClearPolicyListRequest
);

opaque_request!(
    /// Body of the `delegatePolicy` call.
    PsDelegatePolicyRequest
);
