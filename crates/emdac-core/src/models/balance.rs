use serde::{Deserialize, Serialize};

/// Body sent when requesting a user's token balance.
///
/// The address is fixed at construction; there is no mutator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceRequest {
    #[serde(rename = "address")]
    address: String,
}

impl BalanceRequest {
    /// Create a balance request for the given wallet address.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }

    /// The wallet address this request is for.
    pub fn address(&self) -> &str {
        &self.address
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_only_address_key() {
        let request = BalanceRequest::new("0x8f2a55949038a9610f50fb23b5883af3b4ecb3c3");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({"address": "0x8f2a55949038a9610f50fb23b5883af3b4ecb3c3"})
        );
        assert_eq!(value.as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_empty_and_unicode_addresses_are_kept_verbatim() {
        for address in ["", "adresse-ü", "  padded  "] {
            let value = serde_json::to_value(BalanceRequest::new(address)).unwrap();
            assert_eq!(value["address"], address);
        }
    }

    #[test]
    fn test_round_trip_preserves_address() {
        let original = BalanceRequest::new("0xabc");
        let text = serde_json::to_string(&original).unwrap();
        let decoded: BalanceRequest = serde_json::from_str(&text).unwrap();

        assert_eq!(decoded, original);
        assert_eq!(decoded.address(), "0xabc");
    }

    #[test]
    fn test_missing_address_is_rejected() {
        let result: Result<BalanceRequest, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }
}
