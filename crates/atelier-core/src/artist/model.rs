//! ArtistProfile domain model.
//!
//! Field names serialize in camelCase so that persisted snapshots keep the
//! same JSON shape as the browser-era `atelier_artists` key.

use serde::{Deserialize, Serialize};

/// Media kind of a portfolio piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortfolioKind {
    Image,
    Video,
    Audio,
}

/// A single piece in an artist's portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: PortfolioKind,
    pub url: String,
    pub medium: String,
    pub year: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A past or current position listed on a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

/// Booking state shown on profile cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvailabilityStatus {
    Available,
    Busy,
    Booked,
}

impl AvailabilityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Busy => "Busy",
            Self::Booked => "Booked",
        }
    }
}

impl std::str::FromStr for AvailabilityStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "busy" => Ok(Self::Busy),
            "booked" => Ok(Self::Booked),
            other => Err(format!("unknown availability status: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingUnit {
    Project,
    Hour,
}

/// Price range. Amounts are plain JSON numbers and may be fractional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    pub min: f64,
    pub max: f64,
    pub unit: PricingUnit,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 0.0,
            unit: PricingUnit::Project,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollabStyle {
    Remote,
    InPerson,
    Hybrid,
}

/// How an artist wants to be approached for collaborations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollabPreferences {
    pub is_open: bool,
    #[serde(default)]
    pub types: Vec<String>,
    pub style: CollabStyle,
}

impl Default for CollabPreferences {
    fn default() -> Self {
        Self {
            is_open: true,
            types: Vec::new(),
            style: CollabStyle::Remote,
        }
    }
}

/// Public profile of an artist.
///
/// Profiles are created on the first artist login and only ever replaced
/// wholesale through a profile update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistProfile {
    pub id: String,
    pub name: String,
    pub headline: String,
    pub location: String,
    pub bio: String,
    pub avatar: String,
    pub banner: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub mediums: Vec<String>,
    #[serde(default)]
    pub portfolio: Vec<PortfolioItem>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    pub is_featured: bool,
    pub is_available: bool,
    pub availability_status: AvailabilityStatus,
    #[serde(default)]
    pub pricing: Pricing,
    #[serde(default)]
    pub collab_preferences: CollabPreferences,
}

impl ArtistProfile {
    /// Headline given to every freshly registered artist.
    pub const PLACEHOLDER_HEADLINE: &'static str = "Emerging Artist";

    /// Builds the placeholder profile synthesized on an artist's first login.
    pub fn placeholder(id: impl Into<String>, name: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            avatar: format!("https://picsum.photos/seed/{id}/400/400"),
            banner: format!("https://picsum.photos/seed/{id}-banner/1200/400"),
            id,
            name: name.into(),
            headline: Self::PLACEHOLDER_HEADLINE.to_string(),
            location: "Worldwide".to_string(),
            bio: "Welcome to my creative space.".to_string(),
            skills: Vec::new(),
            mediums: Vec::new(),
            portfolio: Vec::new(),
            experience: Vec::new(),
            is_featured: false,
            is_available: true,
            availability_status: AvailabilityStatus::Available,
            pricing: Pricing::default(),
            collab_preferences: CollabPreferences::default(),
        }
    }

    /// Looks up a portfolio piece by id.
    pub fn portfolio_item(&self, item_id: &str) -> Option<&PortfolioItem> {
        self.portfolio.iter().find(|item| item.id == item_id)
    }
}
