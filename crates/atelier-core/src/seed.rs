//! Seed data used when a collection has nothing persisted anywhere.

use once_cell::sync::Lazy;

use crate::artist::{
    ArtistProfile, AvailabilityStatus, CollabPreferences, CollabStyle, Experience, PortfolioItem,
    PortfolioKind, Pricing, PricingUnit,
};
use crate::collab::CollabRequest;
use crate::conversation::Conversation;
use crate::job::{Job, JobCategory};

const SEED_CREATED_AT: &str = "2024-05-01T09:00:00.000Z";

static BUILTIN: Lazy<SeedCatalog> = Lazy::new(|| SeedCatalog {
    artists: builtin_artists(),
    jobs: builtin_jobs(),
    conversations: Vec::new(),
    collab_requests: Vec::new(),
});

/// Fallback records per collection.
///
/// Seeds are only ever returned for a collection whose local snapshot and
/// remote copy are both empty; they never overwrite real data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedCatalog {
    pub artists: Vec<ArtistProfile>,
    pub jobs: Vec<Job>,
    pub conversations: Vec<Conversation>,
    pub collab_requests: Vec<CollabRequest>,
}

impl SeedCatalog {
    /// The demo catalog: three artists and two open jobs.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// No seeds at all; empty collections stay empty.
    pub fn empty() -> Self {
        Self::default()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn portfolio_image(id: &str, title: &str, description: &str, year: &str, tags: &[&str], medium: &str) -> PortfolioItem {
    PortfolioItem {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        kind: PortfolioKind::Image,
        url: format!("https://picsum.photos/seed/{id}/800/600"),
        medium: medium.to_string(),
        year: year.to_string(),
        tags: strings(tags),
    }
}

fn builtin_artists() -> Vec<ArtistProfile> {
    vec![
        ArtistProfile {
            id: "a1".to_string(),
            name: "Elena Vance".to_string(),
            headline: "Fine Art Photographer & Visual Storyteller".to_string(),
            location: "Berlin, Germany".to_string(),
            bio: "Capturing the intersection of urban decay and natural resilience. Over 10 years of experience in editorial and fine art photography.".to_string(),
            avatar: "https://picsum.photos/seed/elena/400/400".to_string(),
            banner: "https://picsum.photos/seed/elena-banner/1200/400".to_string(),
            skills: strings(&["Color Grading", "Portraiture", "Film Photography"]),
            mediums: strings(&["Photography", "Digital Manipulation"]),
            portfolio: vec![
                portfolio_image("p1", "Concrete Garden", "A study on plants growing in abandoned factories.", "2023", &["Nature", "Urban"], "Photography"),
                portfolio_image("p2", "Blue Hour", "Evening shadows in Kreuzberg.", "2024", &["Architecture"], "Photography"),
            ],
            experience: vec![Experience {
                id: "e1".to_string(),
                title: "Senior Photographer".to_string(),
                company: "Vogue Berlin".to_string(),
                period: "2020 - Present".to_string(),
                description: "Leading fashion shoots and creative direction.".to_string(),
            }],
            is_featured: true,
            is_available: true,
            availability_status: AvailabilityStatus::Available,
            pricing: Pricing { min: 500.0, max: 2000.0, unit: PricingUnit::Project },
            collab_preferences: CollabPreferences {
                is_open: true,
                types: strings(&["Co-creation"]),
                style: CollabStyle::Hybrid,
            },
        },
        ArtistProfile {
            id: "a2".to_string(),
            name: "Marcus Kaine".to_string(),
            headline: "3D Motion Designer & NFT Artist".to_string(),
            location: "Tokyo, Japan".to_string(),
            bio: "Exploring digital surrealism through procedural generation and fluid simulations.".to_string(),
            avatar: "https://picsum.photos/seed/marcus/400/400".to_string(),
            banner: "https://picsum.photos/seed/marcus-banner/1200/400".to_string(),
            skills: strings(&["Cinema 4D", "Octane Render", "Houdini"]),
            mediums: strings(&["Digital Art", "Motion Design"]),
            portfolio: vec![portfolio_image("p3", "Fluidity", "Abstract simulation of metallic liquids.", "2023", &["Abstract", "3D"], "Digital Art")],
            experience: Vec::new(),
            is_featured: true,
            is_available: false,
            availability_status: AvailabilityStatus::Booked,
            pricing: Pricing { min: 100.0, max: 250.0, unit: PricingUnit::Hour },
            collab_preferences: CollabPreferences {
                is_open: false,
                types: Vec::new(),
                style: CollabStyle::Remote,
            },
        },
        ArtistProfile {
            id: "a3".to_string(),
            name: "Sofia Rossi".to_string(),
            headline: "Illustrator & Character Designer".to_string(),
            location: "Milan, Italy".to_string(),
            bio: "Whimsical character designs inspired by folklore and traditional children's book illustrations.".to_string(),
            avatar: "https://picsum.photos/seed/sofia/400/400".to_string(),
            banner: "https://picsum.photos/seed/sofia-banner/1200/400".to_string(),
            skills: strings(&["Watercolour", "Procreate", "Character Design"]),
            mediums: strings(&["Illustration", "Traditional Art"]),
            portfolio: Vec::new(),
            experience: Vec::new(),
            is_featured: false,
            is_available: true,
            availability_status: AvailabilityStatus::Available,
            pricing: Pricing { min: 200.0, max: 800.0, unit: PricingUnit::Project },
            collab_preferences: CollabPreferences {
                is_open: true,
                types: strings(&["Commissions"]),
                style: CollabStyle::Remote,
            },
        },
    ]
}

fn builtin_jobs() -> Vec<Job> {
    vec![
        Job {
            id: "j1".to_string(),
            title: "Brand Identity Illustrator".to_string(),
            company: "Nexus Creative".to_string(),
            category: JobCategory::Freelance,
            description: "We need a series of 10 illustrations for a new sustainability startup branding project.".to_string(),
            budget: "$2,000 - $3,500".to_string(),
            skills: strings(&["Vector Illustration", "Branding"]),
            deadline: "2024-06-30".to_string(),
            posted_by: "c1".to_string(),
            created_at: SEED_CREATED_AT.to_string(),
        },
        Job {
            id: "j2".to_string(),
            title: "Short Film Music Composer".to_string(),
            company: "Independent Production".to_string(),
            category: JobCategory::Commission,
            description: "Seeking an atmospheric soundtrack for a 15-minute psychological thriller.".to_string(),
            budget: "$1,500".to_string(),
            skills: strings(&["Music Production", "Sound Design"]),
            deadline: "2024-07-15".to_string(),
            posted_by: "c2".to_string(),
            created_at: SEED_CREATED_AT.to_string(),
        },
    ]
}
