use axum::extract::{Json, Path, Query, State};
use lakay_core::services::catalog_service::{
    ApiError, AppState, BannersResponse, CatalogService, FlashDealsQuery, ProductDetail,
    ProductQuery, ProductsResponse,
};
use lakay_primitives::error::ApiErrorResponse;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/catalog/products",
    tag = "Catalog",
    summary = "List products",
    params(ProductQuery),
    responses(
        (status = 200, description = "Products", body = ProductsResponse),
        (status = 502, description = "Catalog backend error", body = ApiErrorResponse),
    ),
)]
pub async fn list_products(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<ProductsResponse>, ApiError> {
    Ok(Json(CatalogService::list_products(&state, query).await?))
}

#[utoipa::path(
    get,
    path = "/api/catalog/products/{id}",
    tag = "Catalog",
    summary = "Product detail with images",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product", body = ProductDetail),
        (status = 404, description = "No such product", body = ApiErrorResponse),
        (status = 502, description = "Catalog backend error", body = ApiErrorResponse),
    ),
)]
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ProductDetail>, ApiError> {
    Ok(Json(CatalogService::get_product(&state, id).await?))
}

#[utoipa::path(
    get,
    path = "/api/catalog/flash-deals",
    tag = "Catalog",
    summary = "Flash deals, soonest ending first",
    params(FlashDealsQuery),
    responses(
        (status = 200, description = "Flash deals", body = ProductsResponse),
        (status = 502, description = "Catalog backend error", body = ApiErrorResponse),
    ),
)]
pub async fn flash_deals(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FlashDealsQuery>,
) -> Result<Json<ProductsResponse>, ApiError> {
    Ok(Json(CatalogService::flash_deals(&state, query.limit).await?))
}

#[utoipa::path(
    get,
    path = "/api/catalog/banners",
    tag = "Catalog",
    summary = "Home page hero banners",
    responses(
        (status = 200, description = "Banners", body = BannersResponse),
        (status = 502, description = "Catalog backend error", body = ApiErrorResponse),
    ),
)]
pub async fn hero_banners(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BannersResponse>, ApiError> {
    Ok(Json(CatalogService::hero_banners(&state).await?))
}
