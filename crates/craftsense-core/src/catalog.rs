//! # Catalog
//!
//! Static, read-only marketplace data and the client-side filtering that
//! every listing page performs over it.
//!
//! ## Matching Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  query    : case-insensitive substring; empty matches everything        │
//! │  category : None or "All" matches everything, otherwise exact label    │
//! │  order    : results keep catalog order                                  │
//! │                                                                         │
//! │  products  ── query over name, description        ── category          │
//! │  artisans  ── query over name, story, location,   ── craft             │
//! │               specialties                                               │
//! │  workshops ──                                      ── category         │
//! │  resources ── query over title, description       ── category          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::forum::ForumPost;
use crate::types::{Artisan, Product, Resource, ResourceCategory, Workshop, WorkshopCategory};

/// Label meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

/// The bundled marketplace data set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    artisans: Vec<Artisan>,
    #[serde(default)]
    products: Vec<Product>,
    #[serde(default)]
    workshops: Vec<Workshop>,
    #[serde(default)]
    resources: Vec<Resource>,
    /// Posts the forum board starts with.
    #[serde(default)]
    forum_posts: Vec<ForumPost>,
}

/// An artisan together with the products they make.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtisanListing<'a> {
    pub artisan: &'a Artisan,
    pub products: Vec<&'a Product>,
}

impl Catalog {
    /// Parses a catalog from its JSON representation.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        serde_json::from_str(json).map_err(|e| CoreError::InvalidCatalog(e.to_string()))
    }

    pub fn artisans(&self) -> &[Artisan] {
        &self.artisans
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn workshops(&self) -> &[Workshop] {
        &self.workshops
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn forum_posts(&self) -> &[ForumPost] {
        &self.forum_posts
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    pub fn product(&self, id: &str) -> CoreResult<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
    }

    pub fn workshop(&self, id: &str) -> CoreResult<&Workshop> {
        self.workshops
            .iter()
            .find(|w| w.id == id)
            .ok_or_else(|| CoreError::WorkshopNotFound(id.to_string()))
    }

    pub fn artisan(&self, id: &str) -> Option<&Artisan> {
        self.artisans.iter().find(|a| a.id == id)
    }

    /// Products made by one artisan, in catalog order.
    pub fn products_by_artisan(&self, artisan_id: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.artisan_id == artisan_id)
            .collect()
    }

    // =========================================================================
    // Filters
    // =========================================================================

    /// Marketplace listing.
    pub fn search_products(&self, query: &str, category: Option<&str>) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        let category = selected(category);

        self.products
            .iter()
            .filter(|p| contains_any(&needle, [p.name.as_str(), p.description.as_str()]))
            .filter(|p| category.map_or(true, |c| p.category == c))
            .collect()
    }

    /// Artisan directory, each entry joined with its products.
    pub fn search_artisans(&self, query: &str, craft: Option<&str>) -> Vec<ArtisanListing<'_>> {
        let needle = query.trim().to_lowercase();
        let craft = selected(craft);

        self.artisans
            .iter()
            .filter(|a| {
                contains_any(
                    &needle,
                    [a.name.as_str(), a.story.as_str(), a.location.as_str()],
                ) || a.specialties.iter().any(|s| contains(&needle, s))
            })
            .filter(|a| craft.map_or(true, |c| a.craft == c))
            .map(|artisan| ArtisanListing {
                artisan,
                products: self.products_by_artisan(&artisan.id),
            })
            .collect()
    }

    /// Workshop portal listing. `None` shows every workshop.
    pub fn workshops_in(&self, category: Option<WorkshopCategory>) -> Vec<&Workshop> {
        self.workshops
            .iter()
            .filter(|w| category.map_or(true, |c| w.category == c))
            .collect()
    }

    /// Resource library listing.
    pub fn search_resources(
        &self,
        query: &str,
        category: Option<ResourceCategory>,
    ) -> Vec<&Resource> {
        let needle = query.trim().to_lowercase();

        self.resources
            .iter()
            .filter(|r| contains_any(&needle, [r.title.as_str(), r.description.as_str()]))
            .filter(|r| category.map_or(true, |c| r.category == c))
            .collect()
    }

    /// Distinct product categories in first-seen order.
    pub fn product_categories(&self) -> Vec<&str> {
        distinct(self.products.iter().map(|p| p.category.as_str()))
    }

    /// Distinct artisan crafts in first-seen order.
    pub fn artisan_crafts(&self) -> Vec<&str> {
        distinct(self.artisans.iter().map(|a| a.craft.as_str()))
    }
}

fn selected(category: Option<&str>) -> Option<&str> {
    category.filter(|c| !c.trim().is_empty() && !c.eq_ignore_ascii_case(ALL_CATEGORIES))
}

/// `needle` must already be lowercased.
fn contains(needle: &str, haystack: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(needle)
}

fn contains_any<'a>(needle: &str, haystacks: impl IntoIterator<Item = &'a str>) -> bool {
    needle.is_empty() || haystacks.into_iter().any(|h| contains(needle, h))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut out: Vec<&str> = Vec::new();
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}
