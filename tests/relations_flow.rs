use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, Statement};

use grocery_api::{
    db::{create_orm_conn, create_pool},
    dto::{
        carts::{CartView, CreateCartRequest, UpdateCartRequest},
        customers::CreateCustomerRequest,
        products::CreateProductRequest,
    },
    error::AppError,
    response::ServiceStatus,
    services::{cart_service, customer_service, product_service},
    state::AppState,
};

// Integration flow over the relationship core: customer owns carts, carts
// hold products, and derived projections stay consistent through
// link/unlink, membership changes and deletes.
#[tokio::test]
async fn cart_customer_product_relations_flow() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
            );
            return Ok(());
        }
    };

    let state = setup_state(&database_url).await?;

    // Customer and cart, linked explicitly.
    let created = customer_service::add_customer(
        &state,
        CreateCustomerRequest {
            first_name: "Ana".into(),
            last_name: "Lopez".into(),
            address: "12 Orchard Road".into(),
            email: "ana.lopez@example.com".into(),
            phone: "555-0100".into(),
        },
    )
    .await?;
    assert_eq!(created.status, ServiceStatus::Created);
    let customer_id = created.created_id.expect("customer id");

    let created = cart_service::add_cart(
        &state,
        CreateCartRequest {
            name: "Weekly".into(),
            created_at: None,
        },
    )
    .await?;
    assert_eq!(created.status, ServiceStatus::Created);
    let cart_id = created.created_id.expect("cart id");

    // The creation timestamp was defaulted to "now".
    let detail = cart_service::find_cart(&state, cart_id)
        .await?
        .expect("cart exists");
    assert_eq!(detail.name, "Weekly");
    assert!(detail.created_at.timestamp() > 0);
    assert!(detail.owner.is_none());

    let linked = customer_service::link_cart_to_customer(&state, customer_id, cart_id).await?;
    assert_eq!(linked.status, ServiceStatus::Updated);

    // Product, added to the cart twice; membership stays single.
    let created = product_service::add_product(
        &state,
        CreateProductRequest {
            name: "Milk".into(),
            description: Some("Whole milk, 1L".into()),
            category: "Dairy".into(),
            price: Decimal::new(250, 2),
        },
    )
    .await?;
    let product_id = created.created_id.expect("product id");

    for _ in 0..2 {
        let outcome = cart_service::add_product_to_cart(&state, cart_id, product_id).await?;
        assert_eq!(outcome.status, ServiceStatus::Updated);
    }
    let products = cart_service::list_cart_products(&state, cart_id)
        .await?
        .expect("cart exists");
    assert_eq!(products.iter().filter(|p| p.id == product_id).count(), 1);

    // The detail view carries the owner display name and the product.
    let detail = cart_service::find_cart(&state, cart_id)
        .await?
        .expect("cart exists");
    let view = CartView::from(detail);
    assert_eq!(view.cart_customer.as_deref(), Some("Ana Lopez"));
    assert!(
        view.products
            .iter()
            .any(|p| p.name == "Milk" && p.price == Decimal::new(250, 2))
    );

    // Category filter is case-insensitive.
    let lower = product_service::products_by_category(&state, "dairy").await?;
    let upper = product_service::products_by_category(&state, "Dairy").await?;
    assert_eq!(lower.len(), upper.len());
    assert!(lower.iter().any(|p| p.id == product_id));

    // Blank inputs are rejected before the store.
    assert!(matches!(
        product_service::search_products(&state, "   ").await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        product_service::products_by_category(&state, "").await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        cart_service::add_cart(
            &state,
            CreateCartRequest {
                name: "  ".into(),
                created_at: None
            }
        )
        .await,
        Err(AppError::BadRequest(_))
    ));

    // Search hits carry the names of the carts holding them.
    let hits = product_service::search_products(&state, "Mil").await?;
    let hit = hits
        .iter()
        .find(|h| h.product.id == product_id)
        .expect("search hit");
    assert!(hit.cart_names.iter().any(|name| name == "Weekly"));

    // Renaming sticks.
    let outcome = cart_service::update_cart(
        &state,
        cart_id,
        UpdateCartRequest {
            name: "Weekly shop".into(),
        },
    )
    .await?;
    assert_eq!(outcome.status, ServiceStatus::Updated);
    let detail = cart_service::find_cart(&state, cart_id)
        .await?
        .expect("cart exists");
    assert_eq!(detail.name, "Weekly shop");

    // Linking to another customer reassigns ownership.
    let created = customer_service::add_customer(
        &state,
        CreateCustomerRequest {
            first_name: "Ben".into(),
            last_name: "Okafor".into(),
            address: "3 Mill Lane".into(),
            email: "ben.okafor@example.com".into(),
            phone: "555-0101".into(),
        },
    )
    .await?;
    let other_id = created.created_id.expect("customer id");

    let linked = customer_service::link_cart_to_customer(&state, other_id, cart_id).await?;
    assert_eq!(linked.status, ServiceStatus::Updated);

    let old_carts = customer_service::list_customer_carts(&state, customer_id)
        .await?
        .expect("customer exists");
    assert!(old_carts.iter().all(|c| c.id != cart_id));
    let new_carts = customer_service::list_customer_carts(&state, other_id)
        .await?
        .expect("customer exists");
    assert!(new_carts.iter().any(|c| c.id == cart_id));

    // Unlinking requires the current owner.
    let outcome = customer_service::unlink_cart_from_customer(&state, customer_id, cart_id).await?;
    assert_eq!(outcome.status, ServiceStatus::NotFound);
    let outcome = customer_service::unlink_cart_from_customer(&state, other_id, cart_id).await?;
    assert_eq!(outcome.status, ServiceStatus::Deleted);

    // Removing the membership empties the cart's product list.
    let outcome = cart_service::remove_product_from_cart(&state, cart_id, product_id).await?;
    assert_eq!(outcome.status, ServiceStatus::Deleted);
    let products = cart_service::list_cart_products(&state, cart_id)
        .await?
        .expect("cart exists");
    assert!(products.iter().all(|p| p.id != product_id));

    // Deleting a product referenced by a cart clears the membership but
    // keeps the cart.
    cart_service::add_product_to_cart(&state, cart_id, product_id).await?;
    let outcome = product_service::delete_product(&state, product_id).await?;
    assert_eq!(outcome.status, ServiceStatus::Deleted);
    let products = cart_service::list_cart_products(&state, cart_id)
        .await?
        .expect("cart survives product delete");
    assert!(products.is_empty());

    // Unknown ids surface NotFound, never a fault.
    assert!(cart_service::find_cart(&state, 999_999).await?.is_none());
    assert!(
        customer_service::find_customer(&state, 999_999)
            .await?
            .is_none()
    );
    assert!(
        product_service::find_product(&state, 999_999)
            .await?
            .is_none()
    );
    let outcome = cart_service::delete_cart(&state, 999_999).await?;
    assert_eq!(outcome.status, ServiceStatus::NotFound);
    let outcome = cart_service::add_product_to_cart(&state, 999_999, 999_999).await?;
    assert_eq!(outcome.status, ServiceStatus::NotFound);
    assert_eq!(outcome.messages.len(), 2);

    // Deleting a customer keeps its carts, ownership cleared.
    customer_service::link_cart_to_customer(&state, other_id, cart_id).await?;
    let outcome = customer_service::delete_customer(&state, other_id).await?;
    assert_eq!(outcome.status, ServiceStatus::Deleted);
    let detail = cart_service::find_cart(&state, cart_id)
        .await?
        .expect("cart survives owner delete");
    assert!(detail.owner.is_none());

    Ok(())
}

async fn setup_state(database_url: &str) -> anyhow::Result<AppState> {
    let pool = create_pool(database_url, 5).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    pool.close().await;

    let orm = create_orm_conn(database_url).await?;

    // Clean tables between runs.
    let backend = orm.get_database_backend();
    orm.execute(Statement::from_string(
        backend,
        "TRUNCATE TABLE cart_products, carts, products, customers RESTART IDENTITY CASCADE",
    ))
    .await?;

    Ok(AppState { orm })
}
