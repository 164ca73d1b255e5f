//! Dish record

use crate::impl_record;
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A dish on the menu
///
/// `price` keeps the client's numeric representation (`5` stays `5`,
/// `5.5` stays `5.5`) and is always strictly positive once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Number,
    pub image_url: String,
}

impl_record!(Dish, "Dish", "dishes");
