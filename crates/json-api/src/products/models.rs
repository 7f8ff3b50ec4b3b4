//! Product request and response models.

use rust_decimal::{Decimal, prelude::ToPrimitive};
use salvo::{http::StatusError, oapi::ToSchema};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

use storefront_app::domain::products::models::Product;

use crate::extensions::*;

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub image: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.uuid.into_uuid(),
            name: product.name,
            price: product.price.to_f64().unwrap_or_default(),
            image: product.image,
        }
    }
}

/// Deserialize a field that may be absent, `null` or set.
///
/// Paired with `#[serde(default)]`: absent is `None`, `null` is `Some(None)`.
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Parse a price given as a JSON number or a numeric string.
pub(crate) fn parse_price(value: &Value) -> Result<Decimal, StatusError> {
    let text = match value {
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.trim().to_string(),
        _ => return Err(StatusError::bad_request().brief("Invalid price")),
    };

    let price = text
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(&text))
        .or_400("Invalid price")?;

    if price < Decimal::ZERO {
        return Err(StatusError::bad_request().brief("Invalid price"));
    }

    Ok(price)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_numbers_and_numeric_strings() -> TestResult {
        assert_eq!(parse_price(&json!(9.99))?, Decimal::new(999, 2));
        assert_eq!(parse_price(&json!(12))?, Decimal::from(12));
        assert_eq!(parse_price(&json!(" 9.99 "))?, Decimal::new(999, 2));
        assert_eq!(parse_price(&json!("1e2"))?, Decimal::from(100));
        assert_eq!(parse_price(&json!(0))?, Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn rejects_negative_and_non_numeric_prices() {
        assert!(parse_price(&json!(-1)).is_err(), "negative number");
        assert!(parse_price(&json!("-0.01")).is_err(), "negative string");
        assert!(parse_price(&json!("abc")).is_err(), "non-numeric string");
        assert!(parse_price(&json!(true)).is_err(), "boolean");
        assert!(parse_price(&json!(null)).is_err(), "null");
    }

    #[test]
    fn response_exposes_price_as_number() -> TestResult {
        let product = Product {
            uuid: Uuid::nil().into(),
            name: "Shoe".to_string(),
            price: Decimal::new(999, 2),
            image: None,
            created_at: jiff::Timestamp::UNIX_EPOCH,
            updated_at: jiff::Timestamp::UNIX_EPOCH,
        };

        let json = serde_json::to_value(ProductResponse::from(product))?;

        assert_eq!(json, json!({ "id": Uuid::nil(), "name": "Shoe", "price": 9.99, "image": null }));

        Ok(())
    }
}
