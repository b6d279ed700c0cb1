//! Read-side helpers over the artist collection.

use super::model::{ArtistProfile, AvailabilityStatus};

/// Explore-page filter.
///
/// `text` matches case-insensitively against the name, the headline or any
/// medium. `medium` and `availability` are exact matches; `None` means "All".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtistQuery {
    pub text: Option<String>,
    pub medium: Option<String>,
    pub availability: Option<AvailabilityStatus>,
}

impl ArtistQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_medium(mut self, medium: impl Into<String>) -> Self {
        self.medium = Some(medium.into());
        self
    }

    pub fn with_availability(mut self, availability: AvailabilityStatus) -> Self {
        self.availability = Some(availability);
        self
    }

    /// Returns true when the artist passes every active criterion.
    pub fn matches(&self, artist: &ArtistProfile) -> bool {
        let matches_text = match self.text.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(text) => {
                let needle = text.to_lowercase();
                artist.name.to_lowercase().contains(&needle)
                    || artist.headline.to_lowercase().contains(&needle)
                    || artist
                        .mediums
                        .iter()
                        .any(|m| m.to_lowercase().contains(&needle))
            }
        };

        let matches_medium = self
            .medium
            .as_ref()
            .is_none_or(|medium| artist.mediums.iter().any(|m| m == medium));

        let matches_availability = self
            .availability
            .is_none_or(|status| artist.availability_status == status);

        matches_text && matches_medium && matches_availability
    }

    /// Filters a collection, preserving its order.
    pub fn apply<'a>(&self, artists: &'a [ArtistProfile]) -> Vec<&'a ArtistProfile> {
        artists.iter().filter(|a| self.matches(a)).collect()
    }
}

/// Artists flagged for the home page.
pub fn featured_artists(artists: &[ArtistProfile]) -> Vec<&ArtistProfile> {
    artists.iter().filter(|a| a.is_featured).collect()
}

/// Finds a profile by id; absence is not an error.
pub fn find_artist<'a>(artists: &'a [ArtistProfile], id: &str) -> Option<&'a ArtistProfile> {
    artists.iter().find(|a| a.id == id)
}
