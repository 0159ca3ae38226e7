use axum::{
    Json, Router,
    extract::{Path, State},
    response::Response,
    routing::{get, post},
};

use crate::{
    dto::{
        carts::{CartList, CartView, CreateCartRequest, UpdateCartRequest},
        products::ProductList,
    },
    error::{AppError, AppResult},
    response::{ApiResponse, Meta, ServiceOutcome},
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_carts).post(create_cart))
        .route("/{id}", get(get_cart).put(update_cart).delete(delete_cart))
        .route("/{id}/products", get(list_cart_products))
        .route(
            "/{id}/products/{product_id}",
            post(add_product_to_cart).delete(remove_product_from_cart),
        )
}

#[utoipa::path(
    get,
    path = "/api/carts",
    responses(
        (status = 200, description = "List carts", body = ApiResponse<CartList>)
    ),
    tag = "Carts"
)]
pub async fn list_carts(State(state): State<AppState>) -> AppResult<Json<ApiResponse<CartList>>> {
    let items = cart_service::list_carts(&state).await?;
    let meta = Meta::count(items.len() as i64);
    Ok(Json(ApiResponse::success(
        "Carts",
        CartList { items },
        Some(meta),
    )))
}

#[utoipa::path(
    get,
    path = "/api/carts/{id}",
    params(
        ("id" = i32, Path, description = "Cart ID")
    ),
    responses(
        (status = 200, description = "Cart detail", body = ApiResponse<CartView>),
        (status = 404, description = "Cart not found"),
    ),
    tag = "Carts"
)]
pub async fn get_cart(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    let detail = cart_service::find_cart(&state, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success("Cart", CartView::from(detail), None)))
}

#[utoipa::path(
    post,
    path = "/api/carts",
    request_body = CreateCartRequest,
    responses(
        (status = 201, description = "Cart created", body = ApiResponse<ServiceOutcome>),
        (status = 400, description = "Blank cart name"),
    ),
    tag = "Carts"
)]
pub async fn create_cart(
    State(state): State<AppState>,
    Json(payload): Json<CreateCartRequest>,
) -> AppResult<Response> {
    let outcome = cart_service::add_cart(&state, payload).await?;
    Ok(outcome.into_http("/api/carts"))
}

#[utoipa::path(
    put,
    path = "/api/carts/{id}",
    params(
        ("id" = i32, Path, description = "Cart ID")
    ),
    request_body = UpdateCartRequest,
    responses(
        (status = 204, description = "Cart updated"),
        (status = 404, description = "Cart not found"),
    ),
    tag = "Carts"
)]
pub async fn update_cart(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCartRequest>,
) -> AppResult<Response> {
    let outcome = cart_service::update_cart(&state, id, payload).await?;
    Ok(outcome.into_http("/api/carts"))
}

#[utoipa::path(
    delete,
    path = "/api/carts/{id}",
    params(
        ("id" = i32, Path, description = "Cart ID")
    ),
    responses(
        (status = 204, description = "Cart deleted"),
        (status = 404, description = "Cart not found"),
    ),
    tag = "Carts"
)]
pub async fn delete_cart(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Response> {
    let outcome = cart_service::delete_cart(&state, id).await?;
    Ok(outcome.into_http("/api/carts"))
}

#[utoipa::path(
    get,
    path = "/api/carts/{id}/products",
    params(
        ("id" = i32, Path, description = "Cart ID")
    ),
    responses(
        (status = 200, description = "Products in the cart", body = ApiResponse<ProductList>),
        (status = 404, description = "Cart not found"),
    ),
    tag = "Carts"
)]
pub async fn list_cart_products(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let items = cart_service::list_cart_products(&state, id)
        .await?
        .ok_or(AppError::NotFound)?;
    let meta = Meta::count(items.len() as i64);
    Ok(Json(ApiResponse::success(
        "Cart products",
        ProductList { items },
        Some(meta),
    )))
}

#[utoipa::path(
    post,
    path = "/api/carts/{id}/products/{product_id}",
    params(
        ("id" = i32, Path, description = "Cart ID"),
        ("product_id" = i32, Path, description = "Product ID"),
    ),
    responses(
        (status = 204, description = "Product added to the cart"),
        (status = 404, description = "Cart or product not found"),
    ),
    tag = "Carts"
)]
pub async fn add_product_to_cart(
    State(state): State<AppState>,
    Path((id, product_id)): Path<(i32, i32)>,
) -> AppResult<Response> {
    let outcome = cart_service::add_product_to_cart(&state, id, product_id).await?;
    Ok(outcome.into_http("/api/carts"))
}

#[utoipa::path(
    delete,
    path = "/api/carts/{id}/products/{product_id}",
    params(
        ("id" = i32, Path, description = "Cart ID"),
        ("product_id" = i32, Path, description = "Product ID"),
    ),
    responses(
        (status = 204, description = "Product removed from the cart"),
        (status = 404, description = "Cart or product not found"),
    ),
    tag = "Carts"
)]
pub async fn remove_product_from_cart(
    State(state): State<AppState>,
    Path((id, product_id)): Path<(i32, i32)>,
) -> AppResult<Response> {
    let outcome = cart_service::remove_product_from_cart(&state, id, product_id).await?;
    Ok(outcome.into_http("/api/carts"))
}
