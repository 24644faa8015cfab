//! The in-memory fruit collection and its by-id lookup.

use serde::{Deserialize, Serialize};

use crate::types::Fruit;
use crate::validation::NewFruit;

/// Ordered fruit records; the unit of persistence (always read and written whole).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FruitCollection {
    fruits: Vec<Fruit>,
}

impl FruitCollection {
    pub fn len(&self) -> usize {
        self.fruits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fruits.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fruit> {
        self.fruits.iter()
    }

    /// Linear scan for the first record with this id.
    pub fn find_by_id(&self, id: i64) -> Option<&Fruit> {
        self.fruits.iter().find(|fruit| fruit.id == id)
    }

    pub fn find_by_id_mut(&mut self, id: i64) -> Option<&mut Fruit> {
        self.fruits.iter_mut().find(|fruit| fruit.id == id)
    }

    /// Id for the next created record: current length plus one.
    ///
    /// Not a max-id lookup, so after a delete the new id can repeat an existing one.
    pub fn next_id(&self) -> i64 {
        self.fruits.len() as i64 + 1
    }

    /// Assigns [`Self::next_id`] and appends.
    pub fn insert(&mut self, new_fruit: NewFruit) -> &Fruit {
        let fruit = new_fruit.into_fruit(self.next_id());
        self.fruits.push(fruit);
        &self.fruits[self.fruits.len() - 1]
    }

    /// Removes the first record with this id.
    pub fn remove_by_id(&mut self, id: i64) -> Option<Fruit> {
        let index = self.fruits.iter().position(|fruit| fruit.id == id)?;
        Some(self.fruits.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    fn new_fruit(name: &str) -> NewFruit {
        NewFruit {
            image: json!(format!("{}.png", name.to_lowercase())),
            name: json!(name),
            amount: json!(1),
            stock: json!(1),
            extra: Map::new(),
        }
    }

    #[test]
    fn test_insert_assigns_length_plus_one() {
        let mut fruits = FruitCollection::default();

        assert_eq!(fruits.insert(new_fruit("Apple")).id, 1);
        assert_eq!(fruits.insert(new_fruit("Banana")).id, 2);
        assert_eq!(fruits.len(), 2);
    }

    #[test]
    fn test_find_by_id() {
        let mut fruits = FruitCollection::default();
        fruits.insert(new_fruit("Apple"));
        fruits.insert(new_fruit("Banana"));

        assert_eq!(fruits.find_by_id(2).and_then(|f| f.name.as_str()), Some("Banana"));
        assert!(fruits.find_by_id(3).is_none());
        assert!(fruits.find_by_id(-1).is_none());
    }

    #[test]
    fn test_remove_by_id() {
        let mut fruits = FruitCollection::default();
        fruits.insert(new_fruit("Apple"));

        assert_eq!(fruits.remove_by_id(1).map(|f| f.name), Some(json!("Apple")));
        assert!(fruits.remove_by_id(1).is_none());
        assert!(fruits.is_empty());
    }

    #[test]
    fn test_id_repeats_after_delete_then_create() {
        let mut fruits = FruitCollection::default();
        fruits.insert(new_fruit("Apple"));
        fruits.insert(new_fruit("Banana"));
        fruits.insert(new_fruit("Cherry"));

        fruits.remove_by_id(1);
        let id = fruits.insert(new_fruit("Date")).id;

        assert_eq!(id, 3);
        let threes = fruits.iter().filter(|f| f.id == 3).count();
        assert_eq!(threes, 2);
        // lookup keeps returning the earlier record
        assert_eq!(fruits.find_by_id(3).and_then(|f| f.name.as_str()), Some("Cherry"));
    }
}
