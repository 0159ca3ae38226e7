pub mod carts;
pub mod customers;
pub mod products;
