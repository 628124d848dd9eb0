//! # Domain Types
//!
//! Catalog types shared by the marketplace, workshop portal, and resource
//! library. All of them are static read-only data: the core never mutates
//! a catalog entry.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog Types                                   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Artisan      │   │    Product      │   │    Workshop     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │◄──│  artisan_id     │   │  id             │       │
//! │  │  craft          │   │  category       │   │  category       │       │
//! │  │  specialties    │   │  price          │   │  date (ISO)     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐                                                   │
//! │  │    Resource     │   Learning material: video, course, PDF, or       │
//! │  │  category, kind │   government scheme                               │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! JSON field names are camelCase to match the bundled data files.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Artisan
// =============================================================================

/// A producer whose work is sold on the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Artisan {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub photo: String,
    pub story: String,
    pub craft: String,
    pub location: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub awards: Vec<String>,
    #[serde(default)]
    pub rating: f32,
    /// Number of workshops this artisan has taught.
    #[serde(default)]
    pub workshops: u32,
}

// =============================================================================
// Product
// =============================================================================

/// A handcrafted item listed in the marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Money,
    #[serde(default)]
    pub image: String,
    pub category: String,
    pub artisan_id: String,
}

// =============================================================================
// Workshop
// =============================================================================

/// Workshop topic area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum WorkshopCategory {
    Craft,
    Business,
    Sustainability,
    #[serde(rename = "Digital Skills")]
    DigitalSkills,
}

impl WorkshopCategory {
    /// All categories in display order.
    pub const ALL: [WorkshopCategory; 4] = [
        WorkshopCategory::Craft,
        WorkshopCategory::Business,
        WorkshopCategory::Sustainability,
        WorkshopCategory::DigitalSkills,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WorkshopCategory::Craft => "Craft",
            WorkshopCategory::Business => "Business",
            WorkshopCategory::Sustainability => "Sustainability",
            WorkshopCategory::DigitalSkills => "Digital Skills",
        }
    }
}

impl fmt::Display for WorkshopCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for WorkshopCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', '_'], " ");
        WorkshopCategory::ALL
            .into_iter()
            .find(|c| c.label().to_lowercase() == wanted)
            .ok_or_else(|| {
                format!(
                    "Unknown workshop category: '{}'. Valid options: Craft, Business, Sustainability, Digital Skills",
                    s
                )
            })
    }
}

/// An expert-led session artisans can register for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Workshop {
    pub id: String,
    pub title: String,
    pub instructor: String,
    pub category: WorkshopCategory,
    pub summary: String,
    pub is_paid: bool,
    /// Seat price; absent for free workshops.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_session_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recording_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_url: Option<String>,
    /// ISO-8601 start time, kept as text.
    pub date: String,
    #[serde(default)]
    pub duration: String,
}

impl Workshop {
    /// Seat price, zero for free workshops.
    pub fn seat_price(&self) -> Money {
        if self.is_paid {
            self.price.unwrap_or_default()
        } else {
            Money::zero()
        }
    }
}

// =============================================================================
// Resource
// =============================================================================

/// Resource library section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ResourceCategory {
    Craft,
    Digital,
    Business,
    Government,
}

impl ResourceCategory {
    pub const ALL: [ResourceCategory; 4] = [
        ResourceCategory::Craft,
        ResourceCategory::Digital,
        ResourceCategory::Business,
        ResourceCategory::Government,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ResourceCategory::Craft => "Craft",
            ResourceCategory::Digital => "Digital",
            ResourceCategory::Business => "Business",
            ResourceCategory::Government => "Government",
        }
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ResourceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ResourceCategory::ALL
            .into_iter()
            .find(|c| c.label().to_lowercase() == wanted)
            .ok_or_else(|| {
                format!(
                    "Unknown resource category: '{}'. Valid options: Craft, Digital, Business, Government",
                    s
                )
            })
    }
}

/// Format of a learning resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ResourceKind {
    Video,
    Course,
    #[serde(rename = "PDF")]
    Pdf,
    #[serde(rename = "Government Scheme")]
    GovernmentScheme,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Video => write!(f, "Video"),
            ResourceKind::Course => write!(f, "Course"),
            ResourceKind::Pdf => write!(f, "PDF"),
            ResourceKind::GovernmentScheme => write!(f, "Government Scheme"),
        }
    }
}

/// A link in the resource library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: ResourceCategory,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    #[serde(default)]
    pub source: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================
