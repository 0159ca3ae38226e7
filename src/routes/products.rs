use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::Response,
    routing::get,
};

use crate::{
    dto::products::{CreateProductRequest, ProductList, SearchResultList, UpdateProductRequest},
    error::{AppError, AppResult},
    models::Product,
    response::{ApiResponse, Meta, ServiceOutcome},
    routes::params::{ProductFilter, SearchQuery},
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/search", get(search_products))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(
        ("category" = Option<String>, Query, description = "Case-insensitive category filter"),
    ),
    responses(
        (status = 200, description = "List products", body = ApiResponse<ProductList>),
        (status = 400, description = "Blank category"),
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(filter): Query<ProductFilter>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let items = match filter.category {
        Some(category) => product_service::products_by_category(&state, &category).await?,
        None => product_service::list_products(&state).await?,
    };
    let meta = Meta::count(items.len() as i64);
    Ok(Json(ApiResponse::success(
        "Products",
        ProductList { items },
        Some(meta),
    )))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product detail", body = ApiResponse<Product>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let product = product_service::find_product(&state, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success("Product", product, None)))
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ServiceOutcome>),
        (status = 400, description = "Blank name or negative price"),
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> AppResult<Response> {
    let outcome = product_service::add_product(&state, payload).await?;
    Ok(outcome.into_http("/api/products"))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = UpdateProductRequest,
    responses(
        (status = 204, description = "Product updated"),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProductRequest>,
) -> AppResult<Response> {
    let outcome = product_service::update_product(&state, id, payload).await?;
    Ok(outcome.into_http("/api/products"))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted, cart memberships cleared"),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Response> {
    let outcome = product_service::delete_product(&state, id).await?;
    Ok(outcome.into_http("/api/products"))
}

#[utoipa::path(
    get,
    path = "/api/products/search",
    params(
        ("query" = String, Query, description = "Substring matched against name and description"),
    ),
    responses(
        (status = 200, description = "Matching products with the carts holding them", body = ApiResponse<SearchResultList>),
        (status = 400, description = "Blank query"),
    ),
    tag = "Products"
)]
pub async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<ApiResponse<SearchResultList>>> {
    let items = product_service::search_products(&state, &params.query).await?;
    let meta = Meta::count(items.len() as i64);
    Ok(Json(ApiResponse::success(
        "Search results",
        SearchResultList { items },
        Some(meta),
    )))
}
