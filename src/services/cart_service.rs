use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    QueryFilter, Set, TransactionTrait,
};

use crate::{
    dto::carts::{CreateCartRequest, UpdateCartRequest},
    entity::{
        cart_products::{self, Entity as CartProducts},
        carts::{self, Entity as Carts},
        customers::Entity as Customers,
        products::Entity as Products,
    },
    error::{AppError, AppResult},
    models::{Cart, CartDetail, CartOwner, Product},
    response::ServiceOutcome,
    services::{db_failure, product_service::product_from_entity},
    state::AppState,
};

pub async fn list_carts(state: &AppState) -> AppResult<Vec<Cart>> {
    let carts_with_products = Carts::find()
        .find_with_related(Products)
        .all(&state.orm)
        .await?;

    Ok(carts_with_products
        .into_iter()
        .map(|(cart, products)| {
            let product_names = products.into_iter().map(|p| p.name).collect();
            cart_from_entity(cart, product_names)
        })
        .collect())
}

pub async fn find_cart(state: &AppState, id: i32) -> AppResult<Option<CartDetail>> {
    let cart = match Carts::find_by_id(id).one(&state.orm).await? {
        Some(cart) => cart,
        None => return Ok(None),
    };

    let products = cart.find_related(Products).all(&state.orm).await?;
    let owner = match cart.customer_id {
        Some(customer_id) => Customers::find_by_id(customer_id).one(&state.orm).await?,
        None => None,
    };

    Ok(Some(CartDetail {
        id: cart.id,
        name: cart.name,
        created_at: cart.created_at.with_timezone(&Utc),
        owner: owner.map(|customer| CartOwner {
            id: customer.id,
            first_name: customer.first_name,
            last_name: customer.last_name,
        }),
        products: products.into_iter().map(product_from_entity).collect(),
    }))
}

pub async fn add_cart(state: &AppState, payload: CreateCartRequest) -> AppResult<ServiceOutcome> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("cart name must not be blank".into()));
    }

    let created_at = payload.created_at.unwrap_or_else(Utc::now);
    let active = carts::ActiveModel {
        name: Set(payload.name),
        created_at: Set(created_at.into()),
        customer_id: Set(None),
        ..Default::default()
    };

    Ok(match active.insert(&state.orm).await {
        Ok(cart) => ServiceOutcome::created(cart.id),
        Err(err) => db_failure("Error adding the cart.", err),
    })
}

pub async fn update_cart(
    state: &AppState,
    id: i32,
    payload: UpdateCartRequest,
) -> AppResult<ServiceOutcome> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("cart name must not be blank".into()));
    }

    let cart = match Carts::find_by_id(id).one(&state.orm).await? {
        Some(cart) => cart,
        None => return Ok(ServiceOutcome::not_found(["Cart not found.".to_string()])),
    };

    let mut active: carts::ActiveModel = cart.into();
    active.name = Set(payload.name);

    Ok(match active.update(&state.orm).await {
        Ok(_) => ServiceOutcome::updated(),
        Err(err) => db_failure("Error updating the cart.", err),
    })
}

pub async fn delete_cart(state: &AppState, id: i32) -> AppResult<ServiceOutcome> {
    let cart = match Carts::find_by_id(id).one(&state.orm).await? {
        Some(cart) => cart,
        None => return Ok(ServiceOutcome::not_found(["Cart not found.".to_string()])),
    };

    Ok(match remove_cart(&state.orm, cart).await {
        Ok(()) => ServiceOutcome::deleted(),
        Err(err) => db_failure("Error deleting the cart.", err),
    })
}

// The cart and its memberships go together.
async fn remove_cart(orm: &DatabaseConnection, cart: carts::Model) -> Result<(), DbErr> {
    let txn = orm.begin().await?;
    CartProducts::delete_many()
        .filter(cart_products::Column::CartId.eq(cart.id))
        .exec(&txn)
        .await?;
    cart.delete(&txn).await?;
    txn.commit().await
}

pub async fn list_cart_products(
    state: &AppState,
    cart_id: i32,
) -> AppResult<Option<Vec<Product>>> {
    let cart = match Carts::find_by_id(cart_id).one(&state.orm).await? {
        Some(cart) => cart,
        None => return Ok(None),
    };

    let products = cart.find_related(Products).all(&state.orm).await?;
    Ok(Some(
        products.into_iter().map(product_from_entity).collect(),
    ))
}

pub async fn add_product_to_cart(
    state: &AppState,
    cart_id: i32,
    product_id: i32,
) -> AppResult<ServiceOutcome> {
    let cart = Carts::find_by_id(cart_id).one(&state.orm).await?;
    let product = Products::find_by_id(product_id).one(&state.orm).await?;

    let mut missing = Vec::new();
    if cart.is_none() {
        missing.push("Cart not found.".to_string());
    }
    if product.is_none() {
        missing.push("Product not found.".to_string());
    }
    if !missing.is_empty() {
        return Ok(ServiceOutcome::not_found(missing));
    }

    // Membership is idempotent; a second add leaves the relation unchanged.
    let existing = CartProducts::find_by_id((cart_id, product_id))
        .one(&state.orm)
        .await?;
    if existing.is_some() {
        return Ok(ServiceOutcome::updated());
    }

    let active = cart_products::ActiveModel {
        cart_id: Set(cart_id),
        product_id: Set(product_id),
    };

    Ok(match active.insert(&state.orm).await {
        Ok(_) => ServiceOutcome::updated(),
        Err(err) => db_failure("Error adding product to the cart.", err),
    })
}

pub async fn remove_product_from_cart(
    state: &AppState,
    cart_id: i32,
    product_id: i32,
) -> AppResult<ServiceOutcome> {
    let cart = Carts::find_by_id(cart_id).one(&state.orm).await?;
    let product = Products::find_by_id(product_id).one(&state.orm).await?;

    let mut missing = Vec::new();
    if cart.is_none() {
        missing.push("Cart not found.".to_string());
    }
    if product.is_none() {
        missing.push("Product not found.".to_string());
    }
    if !missing.is_empty() {
        return Ok(ServiceOutcome::not_found(missing));
    }

    // Removing an absent membership is a no-op, both entities exist at this
    // point so the end state is the same.
    let result = CartProducts::delete_many()
        .filter(cart_products::Column::CartId.eq(cart_id))
        .filter(cart_products::Column::ProductId.eq(product_id))
        .exec(&state.orm)
        .await;

    Ok(match result {
        Ok(_) => ServiceOutcome::deleted(),
        Err(err) => db_failure("Error removing product from the cart.", err),
    })
}

pub(crate) fn cart_from_entity(model: carts::Model, product_names: Vec<String>) -> Cart {
    Cart {
        id: model.id,
        name: model.name,
        created_at: model.created_at.with_timezone(&Utc),
        customer_id: model.customer_id,
        product_names,
    }
}
