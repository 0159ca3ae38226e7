use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QuerySelect, Set, TransactionTrait, sea_query::Expr,
};

use crate::{
    dto::customers::{CreateCustomerRequest, UpdateCustomerRequest},
    entity::{
        carts::{self, Entity as Carts},
        customers::{self, Entity as Customers},
        products::Entity as Products,
    },
    error::{AppError, AppResult},
    models::{Cart, Customer},
    response::ServiceOutcome,
    services::{cart_service::cart_from_entity, db_failure},
    state::AppState,
};

pub async fn list_customers(state: &AppState) -> AppResult<Vec<Customer>> {
    let customers = Customers::find().all(&state.orm).await?;

    // One grouped query for the cart counts instead of a count per customer.
    let counts: Vec<(Option<i32>, i64)> = Carts::find()
        .select_only()
        .column(carts::Column::CustomerId)
        .column_as(Expr::col(carts::Column::Id).count(), "cart_count")
        .filter(carts::Column::CustomerId.is_not_null())
        .group_by(carts::Column::CustomerId)
        .into_tuple()
        .all(&state.orm)
        .await?;
    let counts: HashMap<i32, i64> = counts
        .into_iter()
        .filter_map(|(customer_id, count)| customer_id.map(|id| (id, count)))
        .collect();

    Ok(customers
        .into_iter()
        .map(|model| {
            let cart_count = counts.get(&model.id).copied().unwrap_or(0);
            customer_from_entity(model, cart_count)
        })
        .collect())
}

pub async fn find_customer(state: &AppState, id: i32) -> AppResult<Option<Customer>> {
    let customer = match Customers::find_by_id(id).one(&state.orm).await? {
        Some(customer) => customer,
        None => return Ok(None),
    };

    let cart_count = Carts::find()
        .filter(carts::Column::CustomerId.eq(id))
        .count(&state.orm)
        .await? as i64;

    Ok(Some(customer_from_entity(customer, cart_count)))
}

pub async fn add_customer(
    state: &AppState,
    payload: CreateCustomerRequest,
) -> AppResult<ServiceOutcome> {
    validate_name(&payload.first_name, &payload.last_name)?;

    let active = customers::ActiveModel {
        first_name: Set(payload.first_name),
        last_name: Set(payload.last_name),
        address: Set(payload.address),
        email: Set(payload.email),
        phone: Set(payload.phone),
        ..Default::default()
    };

    Ok(match active.insert(&state.orm).await {
        Ok(customer) => ServiceOutcome::created(customer.id),
        Err(err) => db_failure("Error adding the customer.", err),
    })
}

pub async fn update_customer(
    state: &AppState,
    id: i32,
    payload: UpdateCustomerRequest,
) -> AppResult<ServiceOutcome> {
    validate_name(&payload.first_name, &payload.last_name)?;

    let customer = match Customers::find_by_id(id).one(&state.orm).await? {
        Some(customer) => customer,
        None => {
            return Ok(ServiceOutcome::not_found([
                "Customer not found.".to_string(),
            ]));
        }
    };

    let mut active: customers::ActiveModel = customer.into();
    active.first_name = Set(payload.first_name);
    active.last_name = Set(payload.last_name);
    active.address = Set(payload.address);
    active.email = Set(payload.email);
    active.phone = Set(payload.phone);

    Ok(match active.update(&state.orm).await {
        Ok(_) => ServiceOutcome::updated(),
        Err(err) => db_failure("Error updating the customer.", err),
    })
}

pub async fn delete_customer(state: &AppState, id: i32) -> AppResult<ServiceOutcome> {
    let customer = match Customers::find_by_id(id).one(&state.orm).await? {
        Some(customer) => customer,
        None => {
            return Ok(ServiceOutcome::not_found([
                "Customer not found.".to_string(),
            ]));
        }
    };

    Ok(match release_and_delete(&state.orm, customer).await {
        Ok(()) => ServiceOutcome::deleted(),
        Err(err) => db_failure("Error deleting the customer.", err),
    })
}

// Owned carts survive the customer; ownership is cleared first.
async fn release_and_delete(
    orm: &DatabaseConnection,
    customer: customers::Model,
) -> Result<(), DbErr> {
    let txn = orm.begin().await?;
    Carts::update_many()
        .col_expr(carts::Column::CustomerId, Expr::value(Option::<i32>::None))
        .filter(carts::Column::CustomerId.eq(customer.id))
        .exec(&txn)
        .await?;
    customer.delete(&txn).await?;
    txn.commit().await
}

pub async fn list_customer_carts(
    state: &AppState,
    customer_id: i32,
) -> AppResult<Option<Vec<Cart>>> {
    if Customers::find_by_id(customer_id)
        .one(&state.orm)
        .await?
        .is_none()
    {
        return Ok(None);
    }

    let carts_with_products = Carts::find()
        .filter(carts::Column::CustomerId.eq(customer_id))
        .find_with_related(Products)
        .all(&state.orm)
        .await?;

    Ok(Some(
        carts_with_products
            .into_iter()
            .map(|(cart, products)| {
                let product_names = products.into_iter().map(|p| p.name).collect();
                cart_from_entity(cart, product_names)
            })
            .collect(),
    ))
}

pub async fn link_cart_to_customer(
    state: &AppState,
    customer_id: i32,
    cart_id: i32,
) -> AppResult<ServiceOutcome> {
    let customer = Customers::find_by_id(customer_id).one(&state.orm).await?;
    let cart = Carts::find_by_id(cart_id).one(&state.orm).await?;

    let (customer, cart) = match (customer, cart) {
        (Some(customer), Some(cart)) => (customer, cart),
        (customer, cart) => {
            let mut missing = Vec::new();
            if customer.is_none() {
                missing.push("Customer not found.".to_string());
            }
            if cart.is_none() {
                missing.push("Cart not found.".to_string());
            }
            return Ok(ServiceOutcome::not_found(missing));
        }
    };

    // A cart has exactly one owner, linking reassigns.
    let mut active: carts::ActiveModel = cart.into();
    active.customer_id = Set(Some(customer.id));

    Ok(match active.update(&state.orm).await {
        Ok(_) => ServiceOutcome::updated(),
        Err(err) => db_failure("Error linking the cart to the customer.", err),
    })
}

pub async fn unlink_cart_from_customer(
    state: &AppState,
    customer_id: i32,
    cart_id: i32,
) -> AppResult<ServiceOutcome> {
    let customer = Customers::find_by_id(customer_id).one(&state.orm).await?;
    let cart = Carts::find_by_id(cart_id).one(&state.orm).await?;

    let (customer, cart) = match (customer, cart) {
        (Some(customer), Some(cart)) => (customer, cart),
        (customer, cart) => {
            let mut missing = Vec::new();
            if customer.is_none() {
                missing.push("Customer not found.".to_string());
            }
            if cart.is_none() {
                missing.push("Cart not found.".to_string());
            }
            return Ok(ServiceOutcome::not_found(missing));
        }
    };

    if cart.customer_id != Some(customer.id) {
        return Ok(ServiceOutcome::not_found([
            "Cart is not owned by this customer.".to_string(),
        ]));
    }

    let mut active: carts::ActiveModel = cart.into();
    active.customer_id = Set(None);

    Ok(match active.update(&state.orm).await {
        Ok(_) => ServiceOutcome::deleted(),
        Err(err) => db_failure("Error unlinking the cart from the customer.", err),
    })
}

fn validate_name(first_name: &str, last_name: &str) -> Result<(), AppError> {
    if first_name.trim().is_empty() || last_name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "first and last name must not be blank".into(),
        ));
    }
    Ok(())
}

fn customer_from_entity(model: customers::Model, cart_count: i64) -> Customer {
    Customer {
        id: model.id,
        first_name: model.first_name,
        last_name: model.last_name,
        address: model.address,
        email: model.email,
        phone: model.phone,
        cart_count,
    }
}
