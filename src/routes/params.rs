use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProductFilter {
    pub category: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchQuery {
    pub query: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LinkParams {
    pub customer_id: i32,
    pub cart_id: i32,
}
