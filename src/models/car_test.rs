#[cfg(test)]
mod tests {
    use crate::models::CarPayload;
    use rust_decimal::Decimal;

    fn valid_payload() -> CarPayload {
        CarPayload {
            make: Some("Ford".to_string()),
            model: Some("Focus".to_string()),
            year: Some(2022),
            price: Some(Decimal::new(1_699_500, 2)),
            description: None,
            image_url: None,
        }
    }

    #[test]
    fn payload_with_all_required_fields_passes() {
        assert!(valid_payload().has_required_fields());
    }

    #[test]
    fn missing_make_fails() {
        let payload = CarPayload {
            make: None,
            ..valid_payload()
        };
        assert!(!payload.has_required_fields());
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let payload = CarPayload {
            model: Some(String::new()),
            ..valid_payload()
        };
        assert!(!payload.has_required_fields());
    }

    #[test]
    fn zero_year_and_zero_price_count_as_missing() {
        let payload = CarPayload {
            year: Some(0),
            ..valid_payload()
        };
        assert!(!payload.has_required_fields());

        let payload = CarPayload {
            price: Some(Decimal::ZERO),
            ..valid_payload()
        };
        assert!(!payload.has_required_fields());
    }

    #[test]
    fn optional_fields_are_not_required() {
        let payload = CarPayload {
            description: None,
            image_url: None,
            ..valid_payload()
        };
        assert!(payload.has_required_fields());
    }

    #[test]
    fn payload_deserializes_numeric_price_and_ignores_absent_fields() {
        let payload: CarPayload = serde_json::from_value(serde_json::json!({
            "make": "Ford",
            "model": "Focus",
            "year": 2022,
            "price": 16995
        }))
        .unwrap();
        assert!(payload.has_required_fields());
        assert_eq!(payload.price, Some(Decimal::from(16995)));
        assert_eq!(payload.description, None);
    }
}
