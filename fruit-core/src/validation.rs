//! Create and update payload rules.
//!
//! A field counts as present only when its value is truthy: `null`, `false`, `0` and
//! `""` are treated as absent. This is why a stock of zero cannot be created.

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::types::{Fruit, FruitField};

/// Whether a JSON value counts as provided.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn provided<'a>(body: &'a Map<String, Value>, field: FruitField) -> Option<&'a Value> {
    body.get(field.key()).filter(|v| is_truthy(v))
}

/// A validated create payload, waiting for an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFruit {
    pub image: Value,
    pub name: Value,
    pub amount: Value,
    pub stock: Value,
    pub extra: Map<String, Value>,
}

impl NewFruit {
    /// Validates a create body.
    ///
    /// Fields are checked in [`FruitField::ALL`] order and the first missing one is
    /// reported. Values are taken as sent, whatever their JSON type. A client `id` is
    /// dropped.
    pub fn from_body(body: &Map<String, Value>) -> Result<Self, ValidationError> {
        let take = |field: FruitField| {
            provided(body, field)
                .cloned()
                .ok_or(ValidationError::MissingField(field))
        };

        let image = take(FruitField::Image)?;
        let name = take(FruitField::Name)?;
        let amount = take(FruitField::Amount)?;
        let stock = take(FruitField::Stock)?;

        let extra = body
            .iter()
            .filter(|(key, _)| {
                key.as_str() != "id" && !FruitField::ALL.iter().any(|f| f.key() == key.as_str())
            })
            .map(|(key, v)| (key.clone(), v.clone()))
            .collect();

        Ok(Self {
            image,
            name,
            amount,
            stock,
            extra,
        })
    }

    /// Attaches the server-assigned id.
    pub fn into_fruit(self, id: i64) -> Fruit {
        Fruit {
            id,
            image: self.image,
            name: self.name,
            amount: self.amount,
            stock: self.stock,
            extra: self.extra,
        }
    }
}

/// A partial update: only fields that were provided are overwritten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FruitPatch {
    pub image: Option<Value>,
    pub name: Option<Value>,
    pub amount: Option<Value>,
    pub stock: Option<Value>,
}

impl FruitPatch {
    /// Validates an update body. An object with no keys at all is rejected; keys that
    /// are falsy or unknown are accepted and simply change nothing.
    pub fn from_body(body: &Map<String, Value>) -> Result<Self, ValidationError> {
        if body.is_empty() {
            return Err(ValidationError::EmptyUpdate);
        }

        Ok(Self {
            image: provided(body, FruitField::Image).cloned(),
            name: provided(body, FruitField::Name).cloned(),
            amount: provided(body, FruitField::Amount).cloned(),
            stock: provided(body, FruitField::Stock).cloned(),
        })
    }

    pub fn is_noop(&self) -> bool {
        self == &Self::default()
    }

    /// Overwrites the provided fields on `fruit`.
    pub fn apply(self, fruit: &mut Fruit) {
        if let Some(image) = self.image {
            fruit.image = image;
        }
        if let Some(name) = self.name {
            fruit.name = name;
        }
        if let Some(amount) = self.amount {
            fruit.amount = amount;
        }
        if let Some(stock) = self.stock {
            fruit.stock = stock;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn apple() -> Fruit {
        NewFruit::from_body(&object(json!({
            "image": "a.png", "name": "Apple", "amount": 10, "stock": 5
        })))
        .unwrap()
        .into_fruit(1)
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn test_new_fruit_accepts_complete_body() {
        let fruit = apple();
        assert_eq!(fruit.id, 1);
        assert_eq!(fruit.name, "Apple");
        assert_eq!(fruit.amount, json!(10));
        assert!(fruit.extra.is_empty());
    }

    #[test]
    fn test_new_fruit_reports_first_missing_field() {
        let body = object(json!({ "name": "Apple", "amount": 10 }));
        assert_eq!(
            NewFruit::from_body(&body),
            Err(ValidationError::MissingField(FruitField::Image))
        );

        let body = object(json!({ "image": "a.png", "name": "Apple", "amount": 10 }));
        assert_eq!(
            NewFruit::from_body(&body),
            Err(ValidationError::MissingField(FruitField::Stock))
        );
    }

    #[test]
    fn test_new_fruit_treats_zero_stock_as_missing() {
        let body = object(json!({ "image": "a.png", "name": "Apple", "amount": 10, "stock": 0 }));
        assert_eq!(
            NewFruit::from_body(&body),
            Err(ValidationError::MissingField(FruitField::Stock))
        );
    }

    #[test]
    fn test_new_fruit_accepts_any_truthy_value() {
        let body = object(json!({
            "image": 42, "name": ["Apple"], "amount": "$10", "stock": "5 kg"
        }));

        let fruit = NewFruit::from_body(&body).unwrap();

        assert_eq!(fruit.image, json!(42));
        assert_eq!(fruit.name, json!(["Apple"]));
        assert_eq!(fruit.amount, "$10");
        assert_eq!(fruit.stock, "5 kg");
    }

    #[test]
    fn test_new_fruit_drops_client_id_and_keeps_extras() {
        let body = object(json!({
            "id": 99, "image": "a.png", "name": "Apple", "amount": 1, "stock": 1, "color": "red"
        }));

        let fruit = NewFruit::from_body(&body).unwrap().into_fruit(3);

        assert_eq!(fruit.id, 3);
        assert_eq!(fruit.extra.get("color"), Some(&json!("red")));
        assert!(!fruit.extra.contains_key("id"));
    }

    #[test]
    fn test_patch_rejects_empty_body() {
        assert_eq!(
            FruitPatch::from_body(&Map::new()),
            Err(ValidationError::EmptyUpdate)
        );
    }

    #[test]
    fn test_patch_only_touches_provided_fields() {
        let mut fruit = apple();
        let patch = FruitPatch::from_body(&object(json!({ "name": "Green apple" }))).unwrap();

        patch.apply(&mut fruit);

        assert_eq!(fruit.name, "Green apple");
        assert_eq!(fruit.image, "a.png");
        assert_eq!(fruit.amount, json!(10));
        assert_eq!(fruit.stock, json!(5));
    }

    #[test]
    fn test_patch_ignores_falsy_values() {
        let mut fruit = apple();
        let patch = FruitPatch::from_body(&object(json!({ "stock": 0, "name": "" }))).unwrap();

        assert!(patch.is_noop());
        patch.apply(&mut fruit);
        assert_eq!(fruit, apple());
    }

    #[test]
    fn test_patch_accepts_any_truthy_value() {
        let mut fruit = apple();
        let patch = FruitPatch::from_body(&object(json!({ "amount": "ten" }))).unwrap();

        patch.apply(&mut fruit);

        assert_eq!(fruit.amount, "ten");
        assert_eq!(fruit.stock, json!(5));
    }
}
