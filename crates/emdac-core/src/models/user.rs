use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::wire::optional_field;

/// Response carrying the user identifier resolved by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct GetUserIdResponse {
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
}

impl TryFrom<Map<String, Value>> for GetUserIdResponse {
    type Error = serde_json::Error;

    fn try_from(object: Map<String, Value>) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: optional_field(&object, "userId")?,
        })
    }
}

impl GetUserIdResponse {
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Replace the identifier, e.g. when building fixtures by hand.
    pub fn set_user_id(&mut self, user_id: impl Into<String>) {
        self.user_id = Some(user_id.into());
    }
}
