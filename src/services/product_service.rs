use std::collections::HashMap;

use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, JoinType,
    ModelTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
    sea_query::{Expr, Func},
};

use crate::{
    dto::products::{CreateProductRequest, UpdateProductRequest},
    entity::{
        cart_products::{self, Entity as CartProducts},
        carts,
        products::{self, Entity as Products},
    },
    error::{AppError, AppResult},
    models::{Product, ProductSearchHit},
    response::ServiceOutcome,
    services::db_failure,
    state::AppState,
};

pub async fn list_products(state: &AppState) -> AppResult<Vec<Product>> {
    let items = Products::find()
        .order_by_asc(products::Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(product_from_entity)
        .collect();
    Ok(items)
}

pub async fn find_product(state: &AppState, id: i32) -> AppResult<Option<Product>> {
    let product = Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(product_from_entity);
    Ok(product)
}

pub async fn add_product(
    state: &AppState,
    payload: CreateProductRequest,
) -> AppResult<ServiceOutcome> {
    validate_product(&payload.name, payload.price)?;

    let active = products::ActiveModel {
        name: Set(payload.name),
        description: Set(payload.description),
        category: Set(payload.category),
        price: Set(payload.price),
        ..Default::default()
    };

    Ok(match active.insert(&state.orm).await {
        Ok(product) => ServiceOutcome::created(product.id),
        Err(err) => db_failure("Error adding the product.", err),
    })
}

pub async fn update_product(
    state: &AppState,
    id: i32,
    payload: UpdateProductRequest,
) -> AppResult<ServiceOutcome> {
    validate_product(&payload.name, payload.price)?;

    let product = match Products::find_by_id(id).one(&state.orm).await? {
        Some(product) => product,
        None => {
            return Ok(ServiceOutcome::not_found([
                "Product not found.".to_string(),
            ]));
        }
    };

    let mut active: products::ActiveModel = product.into();
    active.name = Set(payload.name);
    active.description = Set(payload.description);
    active.category = Set(payload.category);
    active.price = Set(payload.price);

    Ok(match active.update(&state.orm).await {
        Ok(_) => ServiceOutcome::updated(),
        Err(err) => db_failure("Error updating the product.", err),
    })
}

pub async fn delete_product(state: &AppState, id: i32) -> AppResult<ServiceOutcome> {
    let product = match Products::find_by_id(id).one(&state.orm).await? {
        Some(product) => product,
        None => {
            return Ok(ServiceOutcome::not_found([
                "Product not found.".to_string(),
            ]));
        }
    };

    Ok(match remove_product(&state.orm, product).await {
        Ok(()) => ServiceOutcome::deleted(),
        Err(err) => db_failure("Error deleting the product.", err),
    })
}

// Memberships go with the product; carts referencing it are untouched.
async fn remove_product(orm: &DatabaseConnection, product: products::Model) -> Result<(), DbErr> {
    let txn = orm.begin().await?;
    CartProducts::delete_many()
        .filter(cart_products::Column::ProductId.eq(product.id))
        .exec(&txn)
        .await?;
    product.delete(&txn).await?;
    txn.commit().await
}

pub async fn products_by_category(state: &AppState, category: &str) -> AppResult<Vec<Product>> {
    let category = category.trim();
    if category.is_empty() {
        return Err(AppError::BadRequest("category must not be blank".into()));
    }

    let items = Products::find()
        .filter(
            Expr::expr(Func::lower(Expr::col(products::Column::Category)))
                .eq(category.to_lowercase()),
        )
        .order_by_asc(products::Column::Name)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(product_from_entity)
        .collect();
    Ok(items)
}

pub async fn search_products(state: &AppState, query: &str) -> AppResult<Vec<ProductSearchHit>> {
    let query = query.trim();
    if query.is_empty() {
        return Err(AppError::BadRequest(
            "search query must not be blank".into(),
        ));
    }

    let condition = Condition::any()
        .add(products::Column::Name.contains(query))
        .add(products::Column::Description.contains(query));

    let found = Products::find()
        .filter(condition)
        .order_by_asc(products::Column::Id)
        .all(&state.orm)
        .await?;
    if found.is_empty() {
        return Ok(Vec::new());
    }

    // Names of the carts currently holding each hit, one join query for all.
    let ids: Vec<i32> = found.iter().map(|p| p.id).collect();
    let rows: Vec<(i32, String)> = CartProducts::find()
        .select_only()
        .column(cart_products::Column::ProductId)
        .column_as(carts::Column::Name, "cart_name")
        .join(JoinType::InnerJoin, cart_products::Relation::Carts.def())
        .filter(cart_products::Column::ProductId.is_in(ids))
        .into_tuple()
        .all(&state.orm)
        .await?;

    let mut names_by_product: HashMap<i32, Vec<String>> = HashMap::new();
    for (product_id, cart_name) in rows {
        names_by_product.entry(product_id).or_default().push(cart_name);
    }

    Ok(found
        .into_iter()
        .map(|model| {
            let cart_names = names_by_product.remove(&model.id).unwrap_or_default();
            ProductSearchHit {
                product: product_from_entity(model),
                cart_names,
            }
        })
        .collect())
}

fn validate_product(name: &str, price: Decimal) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("product name must not be blank".into()));
    }
    if price < Decimal::ZERO {
        return Err(AppError::BadRequest("price must not be negative".into()));
    }
    Ok(())
}

pub(crate) fn product_from_entity(model: products::Model) -> Product {
    Product {
        id: model.id,
        name: model.name,
        description: model.description,
        category: model.category,
        price: model.price,
    }
}
