//! Dish input validation

use super::model::Dish;
use crate::core::error::ValidationError;
use crate::core::validation::validators::{positive, required_text};
use crate::core::validation::{FieldCheck, body_id, field_value, first_failure, text_field};
use serde_json::{Map, Number, Value};

pub const DISH_FIELDS_REQUIRED: &str =
    "Dish must include a name, description, non-zero price, and image_url";
pub const DISH_PRICE_NUMERIC: &str = "Dish must include a numerical price";

const DISH_FIELDS: [(&str, FieldCheck); 4] = [
    ("name", required_text),
    ("description", required_text),
    ("price", positive),
    ("image_url", required_text),
];

/// Validated dish fields, ready to become a [`Dish`]
#[derive(Debug, Clone, PartialEq)]
pub struct DishInput {
    /// Identifier named in the body, if any
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub price: Number,
    pub image_url: String,
}

impl DishInput {
    /// Build the stored record under `id`
    pub fn into_dish(self, id: String) -> Dish {
        Dish {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            image_url: self.image_url,
        }
    }
}

/// Validate the `data` object of a dish create/update request.
///
/// The combined field check runs first, then the price type check; a
/// numeric string such as `"5"` passes the first and fails the second.
pub fn validate_dish(data: &Map<String, Value>) -> Result<DishInput, ValidationError> {
    if let Some((field, _)) = first_failure(data, &DISH_FIELDS) {
        return Err(ValidationError::field(&field, DISH_FIELDS_REQUIRED));
    }

    let Value::Number(price) = field_value(data, "price") else {
        return Err(ValidationError::field("price", DISH_PRICE_NUMERIC));
    };

    Ok(DishInput {
        id: body_id(data),
        name: text_field(data, "name"),
        description: text_field(data, "description"),
        price: price.clone(),
        image_url: text_field(data, "image_url"),
    })
}
