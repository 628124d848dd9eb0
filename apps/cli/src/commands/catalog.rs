//! # Catalog Commands
//!
//! Read-only listings over the catalog: marketplace products, the artisan
//! directory and the resource library.
//!
//! ## Filtering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  craftsense products "bowl" --category Pottery                          │
//! │                      ──┬───            ───┬───                          │
//! │                        │                  │                             │
//! │   case-insensitive substring    exact label, "All" = no filter          │
//! │   (empty matches everything)                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use craftsense_core::validation::validate_search_query;
use craftsense_core::{Artisan, Money, Product, Resource, ResourceCategory};

use crate::commands::Render;
use crate::error::AppResult;
use crate::state::{AppConfig, AppState};

// =============================================================================
// Products
// =============================================================================

/// A product with its price split between artisan and platform.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    #[serde(flatten)]
    pub product: Product,
    pub artisan_name: Option<String>,
    pub artisan_share: Money,
    pub platform_share: Money,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductList {
    /// Every category in the catalog, for building a filter.
    pub categories: Vec<String>,
    pub products: Vec<ProductView>,
}

/// Marketplace listing.
pub fn products(state: &AppState, query: &str, category: Option<&str>) -> AppResult<ProductList> {
    let query = validate_search_query(query).map_err(craftsense_core::CoreError::from)?;
    debug!(%query, ?category, "products command");

    let rate = state.config.share_rate();
    let products = state
        .catalog
        .search_products(&query, category)
        .into_iter()
        .map(|p| {
            let artisan_share = p.price.share(rate);
            ProductView {
                artisan_name: state.catalog.artisan(&p.artisan_id).map(|a| a.name.clone()),
                artisan_share,
                platform_share: p.price - artisan_share,
                product: p.clone(),
            }
        })
        .collect();

    Ok(ProductList {
        categories: state
            .catalog
            .product_categories()
            .into_iter()
            .map(String::from)
            .collect(),
        products,
    })
}

impl Render for ProductList {
    fn render(&self, config: &AppConfig) -> String {
        if self.products.is_empty() {
            return "No products match".to_string();
        }

        self.products
            .iter()
            .map(|v| {
                format!(
                    "[{}] {}  {}\n    {} | by {} | artisan gets {}\n    {}",
                    v.product.id,
                    v.product.name,
                    config.format_currency(v.product.price),
                    v.product.category,
                    v.artisan_name.as_deref().unwrap_or("unknown artisan"),
                    config.format_currency(v.artisan_share),
                    v.product.description,
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

// =============================================================================
// Artisans
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ArtisanView {
    #[serde(flatten)]
    pub artisan: Artisan,
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArtisanList {
    pub crafts: Vec<String>,
    pub artisans: Vec<ArtisanView>,
}

/// Artisan directory, each artisan with their products.
pub fn artisans(state: &AppState, query: &str, craft: Option<&str>) -> AppResult<ArtisanList> {
    let query = validate_search_query(query).map_err(craftsense_core::CoreError::from)?;
    debug!(%query, ?craft, "artisans command");

    let artisans = state
        .catalog
        .search_artisans(&query, craft)
        .into_iter()
        .map(|listing| ArtisanView {
            artisan: listing.artisan.clone(),
            products: listing.products.into_iter().cloned().collect(),
        })
        .collect();

    Ok(ArtisanList {
        crafts: state
            .catalog
            .artisan_crafts()
            .into_iter()
            .map(String::from)
            .collect(),
        artisans,
    })
}

impl Render for ArtisanList {
    fn render(&self, config: &AppConfig) -> String {
        if self.artisans.is_empty() {
            return "No artisans match".to_string();
        }

        self.artisans
            .iter()
            .map(|v| {
                let a = &v.artisan;
                let mut block = format!(
                    "{} ({}, {})  ★ {:.1}\n    {} | {} experience | {} workshops taught\n    {}",
                    a.name,
                    a.craft,
                    a.location,
                    a.rating,
                    a.specialties.join(", "),
                    a.experience,
                    a.workshops,
                    a.story,
                );
                for award in &a.awards {
                    block.push_str(&format!("\n    Award: {}", award));
                }
                for p in &v.products {
                    block.push_str(&format!(
                        "\n    - [{}] {} {}",
                        p.id,
                        p.name,
                        config.format_currency(p.price)
                    ));
                }
                block
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

// =============================================================================
// Resources
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ResourceList {
    pub resources: Vec<Resource>,
}

/// Resource library listing.
pub fn resources(
    state: &AppState,
    query: &str,
    category: Option<ResourceCategory>,
) -> AppResult<ResourceList> {
    let query = validate_search_query(query).map_err(craftsense_core::CoreError::from)?;
    debug!(%query, ?category, "resources command");

    Ok(ResourceList {
        resources: state
            .catalog
            .search_resources(&query, category)
            .into_iter()
            .cloned()
            .collect(),
    })
}

impl Render for ResourceList {
    fn render(&self, _config: &AppConfig) -> String {
        if self.resources.is_empty() {
            return "No resources match".to_string();
        }

        self.resources
            .iter()
            .map(|r| {
                format!(
                    "[{}] {}\n    {} | {} | {}\n    {}\n    {}",
                    r.id, r.title, r.category, r.kind, r.source, r.description, r.url
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::load_catalog;
    use craftsense_storage::MemoryStore;

    fn state() -> AppState {
        let config = AppConfig::default();
        let catalog = load_catalog(&config).unwrap();
        AppState::with_storage(config, catalog, MemoryStore::new())
    }

    #[test]
    fn test_products_search_and_split() {
        let state = state();

        let list = products(&state, "BOWL", None).unwrap();
        assert_eq!(list.products.len(), 1);
        let bowl = &list.products[0];
        assert_eq!(bowl.product.id, "p1");
        assert_eq!(bowl.artisan_name.as_deref(), Some("Lakshmi Devi"));
        assert_eq!(bowl.artisan_share, Money::new(1080));
        assert_eq!(bowl.platform_share, Money::new(120));

        assert_eq!(list.categories, vec!["Pottery", "Textiles", "Paintings", "Metalwork"]);
    }

    #[test]
    fn test_products_category_filter() {
        let state = state();

        let metal = products(&state, "", Some("Metalwork")).unwrap();
        let ids: Vec<&str> = metal.products.iter().map(|v| v.product.id.as_str()).collect();
        assert_eq!(ids, vec!["p6", "p7"]);

        assert_eq!(products(&state, "", Some("All")).unwrap().products.len(), 7);
    }

    #[test]
    fn test_overlong_query_rejected() {
        let err = products(&state(), &"x".repeat(500), None).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_artisans_by_specialty_with_products() {
        let state = state();

        let list = artisans(&state, "zari", None).unwrap();
        assert_eq!(list.artisans.len(), 1);
        assert_eq!(list.artisans[0].artisan.id, "a2");
        assert_eq!(list.artisans[0].products.len(), 2);

        let painters = artisans(&state, "", Some("Painting")).unwrap();
        assert_eq!(painters.artisans.len(), 1);
        assert_eq!(painters.artisans[0].artisan.name, "Kavita Bhil");
    }

    #[test]
    fn test_resources() {
        let state = state();

        let craft = resources(&state, "", Some(ResourceCategory::Craft)).unwrap();
        let ids: Vec<&str> = craft.resources.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "5"]);

        let text = resources(&state, "scheme", None).unwrap().render(&state.config);
        assert!(text.contains("Government Scheme"));
        assert!(text.contains("Ministry of Textiles"));
    }
}
