use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Cart, CartDetail, Product};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCartRequest {
    pub name: String,
    /// Defaults to the current time when omitted.
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCartRequest {
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartList {
    pub items: Vec<Cart>,
}

/// Cart detail shaped for responses, the owner flattened to a display name.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CartView {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub cart_customer: Option<String>,
    pub products: Vec<Product>,
}

impl From<CartDetail> for CartView {
    fn from(detail: CartDetail) -> Self {
        let cart_customer = detail
            .owner
            .map(|owner| format!("{} {}", owner.first_name, owner.last_name));
        Self {
            id: detail.id,
            name: detail.name,
            created_at: detail.created_at,
            cart_customer,
            products: detail.products,
        }
    }
}
