use serde::{Deserialize, Serialize};

/// A cookie ingredient and what one teaspoon of it contributes to each property.
///
/// Every property may be negative; a teaspoon of a negative property pulls the
/// mixture's total for that property down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,

    /// How well the cookie absorbs milk.
    pub capacity: i64,

    /// How well the cookie keeps its shape when full of milk.
    pub durability: i64,

    pub flavor: i64,

    pub texture: i64,

    pub calories: i64,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        capacity: i64,
        durability: i64,
        flavor: i64,
        texture: i64,
        calories: i64,
    ) -> Self {
        Self {
            name: name.into(),
            capacity,
            durability,
            flavor,
            texture,
            calories,
        }
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{}: capacity {}, durability {}, flavor {}, texture {}, calories {}",
            self.name, self.capacity, self.durability, self.flavor, self.texture, self.calories
        )
    }
}
