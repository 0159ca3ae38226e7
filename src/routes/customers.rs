use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::Response,
    routing::{delete, get, post},
};

use crate::{
    dto::customers::{
        CreateCustomerRequest, CustomerCartList, CustomerList, CustomerView,
        UpdateCustomerRequest,
    },
    error::{AppError, AppResult},
    response::{ApiResponse, Meta, ServiceOutcome},
    routes::params::LinkParams,
    services::customer_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customers).post(create_customer))
        .route("/link", post(link_cart))
        .route("/unlink", delete(unlink_cart))
        .route(
            "/{id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
        .route("/{id}/carts", get(list_customer_carts))
}

#[utoipa::path(
    get,
    path = "/api/customers",
    responses(
        (status = 200, description = "List customers", body = ApiResponse<CustomerList>)
    ),
    tag = "Customers"
)]
pub async fn list_customers(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CustomerList>>> {
    let items = customer_service::list_customers(&state)
        .await?
        .into_iter()
        .map(CustomerView::from)
        .collect::<Vec<_>>();
    let meta = Meta::count(items.len() as i64);
    Ok(Json(ApiResponse::success(
        "Customers",
        CustomerList { items },
        Some(meta),
    )))
}

#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer detail", body = ApiResponse<CustomerView>),
        (status = 404, description = "Customer not found"),
    ),
    tag = "Customers"
)]
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<CustomerView>>> {
    let customer = customer_service::find_customer(&state, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success(
        "Customer",
        CustomerView::from(customer),
        None,
    )))
}

#[utoipa::path(
    post,
    path = "/api/customers",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = ApiResponse<ServiceOutcome>),
        (status = 400, description = "Blank name"),
    ),
    tag = "Customers"
)]
pub async fn create_customer(
    State(state): State<AppState>,
    Json(payload): Json<CreateCustomerRequest>,
) -> AppResult<Response> {
    let outcome = customer_service::add_customer(&state, payload).await?;
    Ok(outcome.into_http("/api/customers"))
}

#[utoipa::path(
    put,
    path = "/api/customers/{id}",
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    request_body = UpdateCustomerRequest,
    responses(
        (status = 204, description = "Customer updated"),
        (status = 404, description = "Customer not found"),
    ),
    tag = "Customers"
)]
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCustomerRequest>,
) -> AppResult<Response> {
    let outcome = customer_service::update_customer(&state, id, payload).await?;
    Ok(outcome.into_http("/api/customers"))
}

#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    responses(
        (status = 204, description = "Customer deleted, owned carts released"),
        (status = 404, description = "Customer not found"),
    ),
    tag = "Customers"
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Response> {
    let outcome = customer_service::delete_customer(&state, id).await?;
    Ok(outcome.into_http("/api/customers"))
}

#[utoipa::path(
    get,
    path = "/api/customers/{id}/carts",
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Carts owned by the customer", body = ApiResponse<CustomerCartList>),
        (status = 404, description = "Customer not found"),
    ),
    tag = "Customers"
)]
pub async fn list_customer_carts(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<CustomerCartList>>> {
    let items = customer_service::list_customer_carts(&state, id)
        .await?
        .ok_or(AppError::NotFound)?;
    let meta = Meta::count(items.len() as i64);
    Ok(Json(ApiResponse::success(
        "Customer carts",
        CustomerCartList { items },
        Some(meta),
    )))
}

#[utoipa::path(
    post,
    path = "/api/customers/link",
    params(
        ("customer_id" = i32, Query, description = "Customer ID"),
        ("cart_id" = i32, Query, description = "Cart ID"),
    ),
    responses(
        (status = 204, description = "Cart linked to the customer"),
        (status = 404, description = "Customer or cart not found"),
    ),
    tag = "Customers"
)]
pub async fn link_cart(
    State(state): State<AppState>,
    Query(params): Query<LinkParams>,
) -> AppResult<Response> {
    let outcome =
        customer_service::link_cart_to_customer(&state, params.customer_id, params.cart_id)
            .await?;
    Ok(outcome.into_http("/api/customers"))
}

#[utoipa::path(
    delete,
    path = "/api/customers/unlink",
    params(
        ("customer_id" = i32, Query, description = "Customer ID"),
        ("cart_id" = i32, Query, description = "Cart ID"),
    ),
    responses(
        (status = 204, description = "Cart unlinked from the customer"),
        (status = 404, description = "Customer or cart not found, or cart not owned by the customer"),
    ),
    tag = "Customers"
)]
pub async fn unlink_cart(
    State(state): State<AppState>,
    Query(params): Query<LinkParams>,
) -> AppResult<Response> {
    let outcome =
        customer_service::unlink_cart_from_customer(&state, params.customer_id, params.cart_id)
            .await?;
    Ok(outcome.into_http("/api/customers"))
}
