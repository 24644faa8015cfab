//! Fruit record and the names of its client-writable fields.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single fruit as stored in the collection file.
///
/// `id` is always assigned by the server. The four client fields hold whatever JSON
/// value was sent: only their presence is checked, never their type. Keys outside the
/// known fields are kept in `extra` and written back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fruit {
    pub id: i64,
    pub image: Value,
    pub name: Value,
    pub amount: Value,
    pub stock: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Client-writable fields, in the order create payloads are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FruitField {
    Image,
    Name,
    Amount,
    Stock,
}

impl FruitField {
    pub const ALL: [FruitField; 4] = [
        FruitField::Image,
        FruitField::Name,
        FruitField::Amount,
        FruitField::Stock,
    ];

    /// JSON key of the field.
    pub fn key(self) -> &'static str {
        match self {
            FruitField::Image => "image",
            FruitField::Name => "name",
            FruitField::Amount => "amount",
            FruitField::Stock => "stock",
        }
    }
}

impl fmt::Display for FruitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
