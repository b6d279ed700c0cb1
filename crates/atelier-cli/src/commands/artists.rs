use anyhow::{Result, anyhow};
use atelier_core::artist::{
    ArtistProfile, ArtistQuery, AvailabilityStatus, PricingUnit, featured_artists, find_artist,
};

use crate::context::AppContext;

pub async fn list(
    ctx: &AppContext,
    query: Option<String>,
    medium: Option<String>,
    availability: Option<AvailabilityStatus>,
    featured: bool,
) -> Result<()> {
    let artists = ctx.store.artists().await;

    let filter = ArtistQuery {
        text: query,
        medium,
        availability,
    };
    let pool = if featured {
        featured_artists(&artists)
    } else {
        artists.iter().collect()
    };
    let matches: Vec<&ArtistProfile> = pool.into_iter().filter(|a| filter.matches(a)).collect();

    if matches.is_empty() {
        println!("No artists match.");
        return Ok(());
    }

    for artist in matches {
        let star = if artist.is_featured { "*" } else { " " };
        println!(
            "{star} {:<10} {:<22} {:<9} {}",
            artist.id,
            artist.name,
            artist.availability_status.as_str(),
            artist.headline
        );
    }
    Ok(())
}

pub async fn show(ctx: &AppContext, id: &str) -> Result<()> {
    let artists = ctx.store.artists().await;
    let artist = find_artist(&artists, id).ok_or_else(|| anyhow!("No artist with id {id}"))?;

    println!("{} ({})", artist.name, artist.id);
    println!("{}", artist.headline);
    println!("{} · {}", artist.location, artist.availability_status.as_str());
    println!();
    println!("{}", artist.bio);

    if !artist.mediums.is_empty() {
        println!("\nMediums: {}", artist.mediums.join(", "));
    }
    if !artist.skills.is_empty() {
        println!("Skills:  {}", artist.skills.join(", "));
    }

    let unit = match artist.pricing.unit {
        PricingUnit::Project => "project",
        PricingUnit::Hour => "hour",
    };
    println!("Rates:   ${}-${} per {unit}", artist.pricing.min, artist.pricing.max);
    println!(
        "Collabs: {}",
        if artist.collab_preferences.is_open { "open" } else { "closed" }
    );

    if !artist.portfolio.is_empty() {
        println!("\nPortfolio");
        for item in &artist.portfolio {
            println!("  {:<6} {} ({}, {})", item.id, item.title, item.medium, item.year);
        }
    }

    if !artist.experience.is_empty() {
        println!("\nExperience");
        for entry in &artist.experience {
            println!("  {} at {} ({})", entry.title, entry.company, entry.period);
        }
    }
    Ok(())
}
