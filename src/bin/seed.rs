use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};

use grocery_api::{
    config::AppConfig,
    db::{create_orm_conn, create_pool},
    entity::{cart_products, carts, customers, products},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url, config.db_max_connections).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    pool.close().await;

    let orm = create_orm_conn(&config.database_url).await?;

    if products::Entity::find().count(&orm).await? > 0 {
        println!("Seed skipped, products already present");
        return Ok(());
    }

    let ana = customers::ActiveModel {
        first_name: Set("Ana".into()),
        last_name: Set("Lopez".into()),
        address: Set("12 Orchard Road".into()),
        email: Set("ana.lopez@example.com".into()),
        phone: Set("555-0100".into()),
        ..Default::default()
    }
    .insert(&orm)
    .await?;

    let milk = seed_product(&orm, "Milk", "Whole milk, 1L", "Dairy", Decimal::new(250, 2)).await?;
    let bread = seed_product(&orm, "Bread", "Sourdough loaf", "Bakery", Decimal::new(399, 2)).await?;
    seed_product(&orm, "Apples", "Gala, per kg", "Fruits", Decimal::new(279, 2)).await?;

    let weekly = carts::ActiveModel {
        name: Set("Weekly groceries".into()),
        created_at: Set(Utc::now().into()),
        customer_id: Set(Some(ana.id)),
        ..Default::default()
    }
    .insert(&orm)
    .await?;

    for product_id in [milk, bread] {
        cart_products::ActiveModel {
            cart_id: Set(weekly.id),
            product_id: Set(product_id),
        }
        .insert(&orm)
        .await?;
    }

    println!(
        "Seed completed. Customer ID: {}, Cart ID: {}",
        ana.id, weekly.id
    );
    Ok(())
}

async fn seed_product(
    orm: &sea_orm::DatabaseConnection,
    name: &str,
    description: &str,
    category: &str,
    price: Decimal,
) -> anyhow::Result<i32> {
    let product = products::ActiveModel {
        name: Set(name.into()),
        description: Set(Some(description.into())),
        category: Set(category.into()),
        price: Set(price),
        ..Default::default()
    }
    .insert(orm)
    .await?;
    Ok(product.id)
}
