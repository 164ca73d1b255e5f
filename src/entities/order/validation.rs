//! Order input and status validation

use super::model::{LineItem, Order, OrderStatus};
use crate::core::error::ValidationError;
use crate::core::validation::validators::{non_empty, positive, required_text};
use crate::core::validation::{FieldCheck, body_id, field_value, first_failure, text_field};
use serde_json::{Map, Value};

pub const ORDER_FIELDS_REQUIRED: &str =
    "Order must include deliverTo, mobileNumber, status, and dishes";
pub const DISHES_NOT_ARRAY: &str = "Dishes must be an array, even if it is only 1 dish";

const ORDER_FIELDS: [(&str, FieldCheck); 3] = [
    ("deliverTo", required_text),
    ("mobileNumber", required_text),
    ("dishes", non_empty),
];

/// Validated order fields, ready to become an [`Order`]
///
/// `status` is kept raw; it is resolved by [`initial_status`] on create and
/// [`validate_status_update`] on update.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderInput {
    /// Identifier named in the body, if any
    pub id: Option<String>,
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: Value,
    pub dishes: Vec<LineItem>,
}

impl OrderInput {
    /// Build the stored record under `id`
    pub fn into_order(self, id: String, status: OrderStatus) -> Order {
        Order {
            id,
            deliver_to: self.deliver_to,
            mobile_number: self.mobile_number,
            status,
            dishes: self.dishes,
        }
    }
}

/// Validate the `data` object of an order create/update request.
pub fn validate_order(data: &Map<String, Value>) -> Result<OrderInput, ValidationError> {
    if let Some((field, _)) = first_failure(data, &ORDER_FIELDS) {
        return Err(ValidationError::field(&field, ORDER_FIELDS_REQUIRED));
    }

    let Value::Array(items) = field_value(data, "dishes") else {
        return Err(ValidationError::field("dishes", DISHES_NOT_ARRAY));
    };

    let dishes = items
        .iter()
        .enumerate()
        .map(|(index, item)| line_item(index, item))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(OrderInput {
        id: body_id(data),
        deliver_to: text_field(data, "deliverTo"),
        mobile_number: text_field(data, "mobileNumber"),
        status: field_value(data, "status").clone(),
        dishes,
    })
}

fn line_item(index: usize, item: &Value) -> Result<LineItem, ValidationError> {
    let empty = Map::new();
    let fields = item.as_object().unwrap_or(&empty);

    let id = match field_value(fields, "id") {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    };
    let label = match &id {
        Some(id) => format!("Dish with id {}", id),
        None => format!("Dish at index {}", index),
    };

    let quantity = field_value(fields, "quantity");
    if positive("quantity", quantity).is_err() {
        return Err(ValidationError::field(
            "quantity",
            format!("{} does not have a quantity greater than 0", label),
        ));
    }
    let Value::Number(quantity) = quantity else {
        return Err(ValidationError::field(
            "quantity",
            format!("{} must include a numerical quantity", label),
        ));
    };

    let mut details = fields.clone();
    details.remove("id");
    details.remove("quantity");

    Ok(LineItem {
        id,
        quantity: quantity.clone(),
        details,
    })
}

fn parse_status(raw: &Value) -> Result<Option<OrderStatus>, ValidationError> {
    match raw {
        Value::Null => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => s
            .parse()
            .map(Some)
            .map_err(|_| ValidationError::InvalidStatus { value: s.clone() }),
        other => Err(ValidationError::InvalidStatus {
            value: other.to_string(),
        }),
    }
}

/// Status of a newly created order: `pending` unless the body names a valid one
pub fn initial_status(input: &OrderInput) -> Result<OrderStatus, ValidationError> {
    Ok(parse_status(&input.status)?.unwrap_or_default())
}

/// Check the requested status of an update against the stored order.
///
/// The status must be a non-empty lifecycle value. Delivered orders cannot be
/// changed, an update cannot mark an order delivered, and the status never
/// moves backwards.
pub fn validate_status_update(
    input: &OrderInput,
    current: &Order,
) -> Result<OrderStatus, ValidationError> {
    let next = parse_status(&input.status)?.ok_or_else(|| ValidationError::InvalidStatus {
        value: String::new(),
    })?;

    if next.is_terminal() {
        return Err(ValidationError::DeliveredOrder);
    }
    check_transition(current.status, next)?;

    Ok(next)
}

/// Lifecycle rule between a stored status and a requested one
pub fn check_transition(from: OrderStatus, to: OrderStatus) -> Result<(), ValidationError> {
    if from.is_terminal() {
        return Err(ValidationError::DeliveredOrder);
    }
    if to < from {
        return Err(ValidationError::StatusRegression {
            from: from.to_string(),
            to: to.to_string(),
        });
    }
    Ok(())
}

/// Only pending orders may be deleted
pub fn ensure_deletable(order: &Order) -> Result<(), ValidationError> {
    if order.status == OrderStatus::Pending {
        Ok(())
    } else {
        Err(ValidationError::DeleteNotPending {
            status: order.status.to_string(),
        })
    }
}
