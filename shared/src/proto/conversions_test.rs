//! Tests for protobuf conversions.

#[cfg(test)]
mod tests {
    use crate::config::WireEncoding;
    use crate::models::CustomMetric;
    use crate::proto;
    use crate::proto::conversions::*;

    #[test]
    fn test_to_proto_copies_fields() {
        let metric = CustomMetric::new("precision", 0.87, "v1");
        let message = metric.to_proto();

        assert_eq!(message.name, "precision");
        assert_eq!(message.value.to_bits(), 0.87_f64.to_bits());
        assert_eq!(message.version, "v1");
    }

    #[test]
    fn test_from_proto_copies_fields() {
        let message = proto::CustomMetric {
            name: "recall".to_string(),
            value: 0.9,
            version: "v2".to_string(),
        };

        let metric = CustomMetric::from_proto(message);
        assert_eq!(metric, CustomMetric::new("recall", 0.9, "v2"));
    }

    #[test]
    fn test_proto_roundtrip() {
        let metric = CustomMetric::new("f1_score", -12.25, "2024-01-15");
        let restored = CustomMetric::from(proto::CustomMetric::from(&metric));

        assert_eq!(restored.name(), metric.name());
        assert_eq!(restored.value().to_bits(), metric.value().to_bits());
        assert_eq!(restored.version(), metric.version());
    }

    #[test]
    fn test_from_proto_unset_name_uses_default() {
        let message = proto::CustomMetric {
            value: 0.5,
            version: "v1".to_string(),
            ..Default::default()
        };

        let metric = CustomMetric::from_proto(message);
        assert_eq!(metric.name(), "");
        assert_eq!(metric.version(), "v1");
    }

    #[test]
    fn test_decode_empty_bytes_yields_defaults() {
        let metric = decode_custom_metric(&[]).unwrap();

        assert_eq!(metric.name(), "");
        assert_eq!(metric.value().to_bits(), 0);
        assert_eq!(metric.version(), "");
    }

    #[test]
    fn test_bytes_roundtrip() {
        let metric = CustomMetric::new("recall", 0.9, "v2");
        let bytes = encode_custom_metric(&metric);

        assert_eq!(decode_custom_metric(&bytes).unwrap(), metric);
    }

    #[test]
    fn test_bytes_roundtrip_keeps_nan() {
        let metric = CustomMetric::new("loss", f64::NAN, "v9");
        let restored = decode_custom_metric(&encode_custom_metric(&metric)).unwrap();

        assert!(restored.value().is_nan());
    }

    #[test]
    fn test_bytes_negative_zero_comes_back_positive() {
        let metric = CustomMetric::new("a", -0.0, "v");
        let bytes = encode_custom_metric(&metric);

        // proto3 skips a double equal to the default, sign included.
        assert_eq!(bytes, vec![0x0a, 0x01, b'a', 0x1a, 0x01, b'v']);
        assert_eq!(decode_custom_metric(&bytes).unwrap().value().to_bits(), 0);
    }

    #[test]
    fn test_decode_truncated_message() {
        // Field 1 declares 5 bytes but only 1 follows.
        let result = decode_custom_metric(&[0x0a, 0x05, b'a']);
        assert!(matches!(result, Err(WireError::Decode(_))));
    }

    #[test]
    fn test_hex_layout() {
        let metric = CustomMetric::new("recall", 0.9, "v2");
        let text = encode_text(&metric, WireEncoding::Hex);

        // tag 1 (len 6) "recall", then tag 2 as a fixed64 double
        assert!(text.starts_with("0a06726563616c6c11"));
        // tag 3 (len 2) "v2"
        assert!(text.ends_with("1a027632"));
    }

    #[test]
    fn test_text_roundtrip_both_encodings() {
        let metric = CustomMetric::new("accuracy", 0.93, "7");

        for encoding in [WireEncoding::Base64, WireEncoding::Hex] {
            let text = encode_text(&metric, encoding);
            let restored = decode_text(&format!("  {text}\n"), encoding).unwrap();
            assert_eq!(restored, metric, "encoding {encoding}");
        }
    }

    #[test]
    fn test_decode_text_invalid_base64() {
        let result = decode_text("not base64!", WireEncoding::Base64);
        assert!(matches!(result, Err(WireError::Base64(_))));
    }

    #[test]
    fn test_decode_text_invalid_hex() {
        let result = decode_text("zz", WireEncoding::Hex);
        assert!(matches!(result, Err(WireError::Hex(_))));
    }
}
