//! Tags on the wire

use classifier::{classify, Tag};
use core_types::JsValue;

#[cfg(test)]
mod serde_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tags_serialize_as_plain_strings() {
        let tags = vec![Tag::NaN, Tag::RegExp, Tag::Other("myclass".to_string())];
        let json = serde_json::to_string(&tags).unwrap();
        assert_eq!(json, r#"["NaN","regexp","myclass"]"#);
    }

    #[test]
    fn test_tags_deserialize_to_canonical_variants() {
        let tags: Vec<Tag> = serde_json::from_str(r#"["Infinity","array","noop"]"#).unwrap();
        assert!(matches!(tags[0], Tag::Infinity));
        assert!(matches!(tags[1], Tag::Array));
        assert_eq!(tags[2], Tag::Other("noop".to_string()));
    }

    #[test]
    fn test_classification_report_round_trip() {
        let values = [JsValue::null(), JsValue::boxed_number(f64::INFINITY), JsValue::array()];
        let report: Vec<Tag> = values.iter().map(classify).collect();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json, serde_json::json!(["null", "Infinity", "array"]));
        let back: Vec<Tag> = serde_json::from_value(json).unwrap();
        assert_eq!(back, report);
    }
}
