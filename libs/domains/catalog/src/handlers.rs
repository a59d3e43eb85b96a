//! HTTP handlers for the catalog API.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, ConflictResponse,
        InternalServerErrorResponse, NotFoundResponse, ServiceUnavailableResponse,
    },
    ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CatalogResult;
use crate::extract::ProductIdPath;
use crate::models::{Product, ProductDraft, StockAdjustment};
use crate::repository::CatalogStore;
use crate::service::CatalogService;

/// OpenAPI documentation for the catalog API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
        increment_stock,
        decrement_stock,
    ),
    components(
        schemas(Product, ProductDraft, StockAdjustment),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            ConflictResponse,
            InternalServerErrorResponse,
            ServiceUnavailableResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the catalog router with all HTTP endpoints
pub fn router<S: CatalogStore + 'static>(service: CatalogService<S>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/{id}/stock/increment", post(increment_stock))
        .route("/{id}/stock/decrement", post(decrement_stock))
        .with_state(shared_service)
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "List of products", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<S: CatalogStore>(
    State(service): State<Arc<CatalogService<S>>>,
) -> CatalogResult<Json<Vec<Product>>> {
    let products = service.list_products().await?;
    Ok(Json(products))
}

/// Create a product under a freshly allocated id
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = ProductDraft,
    responses(
        (status = 201, description = "Product created with its assigned id", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 503, response = ServiceUnavailableResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<S: CatalogStore>(
    State(service): State<Arc<CatalogService<S>>>,
    ValidatedJson(draft): ValidatedJson<ProductDraft>,
) -> CatalogResult<impl IntoResponse> {
    let product = service.create_product(draft).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product id in [100000, 999999]")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<S: CatalogStore>(
    State(service): State<Arc<CatalogService<S>>>,
    ProductIdPath(id): ProductIdPath,
) -> CatalogResult<Json<Product>> {
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// Replace every mutable field of a product; the id is immutable
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product id in [100000, 999999]")
    ),
    request_body = ProductDraft,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<S: CatalogStore>(
    State(service): State<Arc<CatalogService<S>>>,
    ProductIdPath(id): ProductIdPath,
    ValidatedJson(draft): ValidatedJson<ProductDraft>,
) -> CatalogResult<Json<Product>> {
    let product = service.update_product(id, draft).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product id in [100000, 999999]")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<S: CatalogStore>(
    State(service): State<Arc<CatalogService<S>>>,
    ProductIdPath(id): ProductIdPath,
) -> CatalogResult<impl IntoResponse> {
    service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Add stock to a product
#[utoipa::path(
    post,
    path = "/{id}/stock/increment",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product id in [100000, 999999]")
    ),
    request_body = StockAdjustment,
    responses(
        (status = 204, description = "Stock incremented"),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn increment_stock<S: CatalogStore>(
    State(service): State<Arc<CatalogService<S>>>,
    ProductIdPath(id): ProductIdPath,
    ValidatedJson(adjustment): ValidatedJson<StockAdjustment>,
) -> CatalogResult<impl IntoResponse> {
    service.increment_stock(id, adjustment).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Remove stock from a product
///
/// The resulting quantity is not floored at zero; decrementing past the
/// on-hand level reads as oversold stock.
#[utoipa::path(
    post,
    path = "/{id}/stock/decrement",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product id in [100000, 999999]")
    ),
    request_body = StockAdjustment,
    responses(
        (status = 204, description = "Stock decremented"),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn decrement_stock<S: CatalogStore>(
    State(service): State<Arc<CatalogService<S>>>,
    ProductIdPath(id): ProductIdPath,
    ValidatedJson(adjustment): ValidatedJson<StockAdjustment>,
) -> CatalogResult<impl IntoResponse> {
    service.decrement_stock(id, adjustment).await?;
    Ok(StatusCode::NO_CONTENT)
}
