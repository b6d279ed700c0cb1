//! Artist domain module.
//!
//! - `model`: ArtistProfile and its nested records
//! - `query`: explore-page filtering and lookups

mod model;
mod query;

pub use model::{
    ArtistProfile, AvailabilityStatus, CollabPreferences, CollabStyle, Experience, PortfolioItem,
    PortfolioKind, Pricing, PricingUnit,
};
pub use query::{ArtistQuery, featured_artists, find_artist};
