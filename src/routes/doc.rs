use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        carts::{CartList, CartView, CreateCartRequest, UpdateCartRequest},
        customers::{
            CreateCustomerRequest, CustomerCartList, CustomerList, CustomerView,
            UpdateCustomerRequest,
        },
        products::{CreateProductRequest, ProductList, SearchResultList, UpdateProductRequest},
    },
    models::{Cart, CartDetail, CartOwner, Customer, Product, ProductSearchHit},
    response::{ApiResponse, Meta, ServiceOutcome, ServiceStatus},
    routes::{carts, customers, health, params, products},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        carts::list_carts,
        carts::get_cart,
        carts::create_cart,
        carts::update_cart,
        carts::delete_cart,
        carts::list_cart_products,
        carts::add_product_to_cart,
        carts::remove_product_from_cart,
        customers::list_customers,
        customers::get_customer,
        customers::create_customer,
        customers::update_customer,
        customers::delete_customer,
        customers::list_customer_carts,
        customers::link_cart,
        customers::unlink_cart,
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
        products::search_products,
    ),
    components(
        schemas(
            Customer,
            Product,
            Cart,
            CartOwner,
            CartDetail,
            ProductSearchHit,
            CreateCartRequest,
            UpdateCartRequest,
            CartList,
            CartView,
            CreateCustomerRequest,
            UpdateCustomerRequest,
            CustomerView,
            CustomerList,
            CustomerCartList,
            CreateProductRequest,
            UpdateProductRequest,
            ProductList,
            SearchResultList,
            params::ProductFilter,
            params::SearchQuery,
            params::LinkParams,
            health::HealthData,
            ServiceStatus,
            ServiceOutcome,
            Meta,
            ApiResponse<Product>,
            ApiResponse<CartView>,
            ApiResponse<CartList>,
            ApiResponse<CustomerView>,
            ApiResponse<CustomerList>,
            ApiResponse<CustomerCartList>,
            ApiResponse<ProductList>,
            ApiResponse<SearchResultList>,
            ApiResponse<ServiceOutcome>,
            ApiResponse<health::HealthData>,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Carts", description = "Cart endpoints, including product membership"),
        (name = "Customers", description = "Customer endpoints, including cart ownership"),
        (name = "Products", description = "Product endpoints, category filter and search"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
