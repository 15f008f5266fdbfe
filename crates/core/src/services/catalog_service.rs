pub use crate::app_state::AppState;
pub use lakay_primitives::{
    error::ApiError,
    models::catalog_dto::{
        BannersResponse, FlashDealsQuery, ProductDetail, ProductQuery, ProductsResponse,
    },
};
use tracing::debug;

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

pub struct CatalogService;

impl CatalogService {
    pub async fn list_products(state: &AppState, query: ProductQuery) -> Result<ProductsResponse, ApiError> {
        let limit = page_size(query.limit);
        let offset = query.offset.unwrap_or(0);
        let category = query
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());

        let products = state.catalog.products(category, limit, offset).await?;
        debug!(count = products.len(), ?category, "Catalog products fetched");

        Ok(ProductsResponse { products })
    }

    pub async fn get_product(state: &AppState, id: i64) -> Result<ProductDetail, ApiError> {
        let product = state
            .catalog
            .product(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Product {} not found", id)))?;

        let images = state.catalog.product_images(id).await?;

        Ok(ProductDetail { product, images })
    }

    pub async fn flash_deals(state: &AppState, limit: Option<u32>) -> Result<ProductsResponse, ApiError> {
        let products = state.catalog.flash_deals(page_size(limit)).await?;
        Ok(ProductsResponse { products })
    }

    pub async fn hero_banners(state: &AppState) -> Result<BannersResponse, ApiError> {
        let banners = state.catalog.hero_banners().await?;
        Ok(BannersResponse { banners })
    }
}

pub fn page_size(requested: Option<u32>) -> u32 {
    requested.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
}
