use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Cart, Customer};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCustomerRequest {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
}

/// Full overwrite of the mutable fields; identity and cart links are
/// changed only through the link/unlink operations.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCustomerRequest {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CustomerView {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub cart_count: i64,
    pub cart_summary: String,
}

impl From<Customer> for CustomerView {
    fn from(customer: Customer) -> Self {
        let cart_summary = format!("Customer has {} cart(s)", customer.cart_count);
        Self {
            id: customer.id,
            first_name: customer.first_name,
            last_name: customer.last_name,
            address: customer.address,
            email: customer.email,
            phone: customer.phone,
            cart_count: customer.cart_count,
            cart_summary,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerList {
    pub items: Vec<CustomerView>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerCartList {
    pub items: Vec<Cart>,
}
