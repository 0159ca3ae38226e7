use axum::http::{StatusCode, header};
use grocery_api::response::{ServiceOutcome, ServiceStatus};

#[test]
fn created_maps_to_201_with_location() {
    let outcome = ServiceOutcome::created(7);
    assert_eq!(outcome.status, ServiceStatus::Created);
    assert_eq!(outcome.created_id, Some(7));
    assert!(outcome.messages.is_empty());

    let response = outcome.into_http("/api/carts");
    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(header::LOCATION)
        .expect("location header");
    assert_eq!(location, "/api/carts/7");
}

#[test]
fn updated_and_deleted_map_to_204_without_body() {
    let response = ServiceOutcome::updated().into_http("/api/carts");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = ServiceOutcome::deleted().into_http("/api/products");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[test]
fn not_found_maps_to_404_and_keeps_messages() {
    let outcome = ServiceOutcome::not_found([
        "Cart not found.".to_string(),
        "Product not found.".to_string(),
    ]);
    assert_eq!(outcome.messages.len(), 2);

    let response = outcome.into_http("/api/carts");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().get(header::LOCATION).is_none());
}

#[test]
fn error_and_unset_map_to_500() {
    let response =
        ServiceOutcome::error(["Error adding the cart.".to_string()]).into_http("/api/carts");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response = ServiceOutcome::default().into_http("/api/carts");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
