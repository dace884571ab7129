//! The federation record returned by a lookup.

use serde::{Deserialize, Serialize};

/// Response payload of a federation lookup, passed through from the server.
///
/// The record is not validated: every field is optional, unknown fields are
/// preserved in [`extra`](Self::extra), and serializing a record reproduces
/// the body the server sent. For `name` lookups a server is expected to fill
/// in at least `stellar_address` and `account_id`, but nothing here enforces
/// that; the record belongs to the caller.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FederationRecord {
    /// `name*domain` address this record describes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stellar_address: Option<String>,
    /// Account ID the address maps to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// Memo discriminator (`text`, `id`, or `hash`) when the server asks for
    /// an attached memo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo_type: Option<String>,
    /// Memo value to attach; its JSON type depends on `memo_type` and is
    /// passed through as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<serde_json::Value>,
    /// Any further fields the server returned, preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_lookup_record() {
        let record: FederationRecord = serde_json::from_str(
            r#"{
                "stellar_address": "bob*stellar.org",
                "account_id": "GD6WU64OEP5C4LRBH6NK3MHYIA2ADN6K6II6EXPNVUR3ERBXT4AN4ACD",
                "memo_type": "text",
                "memo": "bob account"
            }"#,
        )
        .unwrap();

        assert_eq!(record.stellar_address.as_deref(), Some("bob*stellar.org"));
        assert_eq!(
            record.account_id.as_deref(),
            Some("GD6WU64OEP5C4LRBH6NK3MHYIA2ADN6K6II6EXPNVUR3ERBXT4AN4ACD")
        );
        assert_eq!(record.memo_type.as_deref(), Some("text"));
        assert_eq!(record.memo, Some(serde_json::json!("bob account")));
        assert!(record.extra.is_empty());
    }

    #[test]
    fn test_unknown_fields_pass_through() {
        let record: FederationRecord = serde_json::from_str(
            r#"{"account_id": "GABC", "kyc_url": "https://example.com/kyc", "nonsense": 7}"#,
        )
        .unwrap();

        assert_eq!(record.extra["kyc_url"], serde_json::json!("https://example.com/kyc"));
        assert_eq!(record.extra["nonsense"], serde_json::json!(7));

        // Round-tripping keeps the server's fields, known and unknown alike.
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["account_id"], serde_json::json!("GABC"));
        assert_eq!(json["nonsense"], serde_json::json!(7));
    }

    #[test]
    fn test_empty_record() {
        let record: FederationRecord = serde_json::from_str("{}").unwrap();
        assert!(record.stellar_address.is_none());
        assert!(record.account_id.is_none());
        assert!(record.extra.is_empty());
    }

    #[test]
    fn test_numeric_memo_passes_through() {
        let record: FederationRecord =
            serde_json::from_str(r#"{"memo_type": "id", "memo": 1234}"#).unwrap();
        assert_eq!(record.memo, Some(serde_json::json!(1234)));
    }
}
