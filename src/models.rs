//! Boundary transfer objects. Read-oriented snapshots of entity state; one
//! canonical shape per entity. Writes never go through these, only through
//! the request payloads in `dto`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub cart_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price: Decimal,
}

/// Cart as listed: the product set flattened to names.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Cart {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub customer_id: Option<i32>,
    pub product_names: Vec<String>,
}

/// Owner projection embedded in a cart detail. Address and contact fields
/// stay internal.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CartOwner {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CartDetail {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub owner: Option<CartOwner>,
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductSearchHit {
    pub product: Product,
    pub cart_names: Vec<String>,
}
