use chrono::Utc;
use rust_decimal::Decimal;

use grocery_api::{
    dto::{carts::CartView, customers::CustomerView},
    models::{CartDetail, CartOwner, Customer, Product},
};

#[test]
fn cart_view_builds_owner_display_name() {
    let detail = CartDetail {
        id: 1,
        name: "Weekly".into(),
        created_at: Utc::now(),
        owner: Some(CartOwner {
            id: 1,
            first_name: "Ana".into(),
            last_name: "Lopez".into(),
        }),
        products: vec![Product {
            id: 1,
            name: "Milk".into(),
            description: None,
            category: "Dairy".into(),
            price: Decimal::new(250, 2),
        }],
    };

    let view = CartView::from(detail);
    assert_eq!(view.cart_customer.as_deref(), Some("Ana Lopez"));
    assert_eq!(view.products.len(), 1);
}

#[test]
fn cart_view_without_owner_has_no_display_name() {
    let detail = CartDetail {
        id: 2,
        name: "Unowned".into(),
        created_at: Utc::now(),
        owner: None,
        products: Vec::new(),
    };

    let view = CartView::from(detail);
    assert!(view.cart_customer.is_none());
}

#[test]
fn customer_view_builds_cart_summary() {
    let customer = Customer {
        id: 1,
        first_name: "Ana".into(),
        last_name: "Lopez".into(),
        address: "12 Orchard Road".into(),
        email: "ana.lopez@example.com".into(),
        phone: "555-0100".into(),
        cart_count: 2,
    };

    let view = CustomerView::from(customer);
    assert_eq!(view.cart_summary, "Customer has 2 cart(s)");
    assert_eq!(view.cart_count, 2);
}
