//! Listing catalog
//!
//! Static, in-memory store of rentable spaces. The catalog is seeded once
//! at construction and never modified; there is no backing store.

use crate::types::{Category, CategoryFilter, Listing, ListingFeatures, Owner, SecurityTier};

/// Read-only store of all known listings
#[derive(Debug, Clone)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    /// Create a catalog seeded with the built-in listings
    pub fn new() -> Self {
        Self {
            listings: seed_listings(),
        }
    }

    /// All listings, in seeded order
    pub fn all(&self) -> &[Listing] {
        &self.listings
    }

    /// Look up a listing by id
    pub fn get(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    /// Listings passing the given filter, preserving seeded order
    pub fn filter(&self, filter: CategoryFilter) -> Vec<&Listing> {
        self.listings
            .iter()
            .filter(|l| filter.matches(l.category))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: "1".to_string(),
            name: "Safe Haven Moto Space".to_string(),
            category: Category::Motorcycle,
            distance: "0.4 km".to_string(),
            price_per_hour: 4.5,
            rating: 4.9,
            reviews_count: 124,
            available: true,
            image: "https://picsum.photos/seed/garage1/600/400".to_string(),
            description: "A clean, well-lit garage specifically designed for expensive \
                          motorcycles. Located in a secure gated community with 24/7 \
                          surveillance."
                .to_string(),
            owner: Owner {
                name: "Alex Rivera".to_string(),
                rating: 5.0,
                image: "https://picsum.photos/seed/owner1/100/100".to_string(),
            },
            features: ListingFeatures {
                ground_anchor: true,
                ground_type: "Polished Concrete".to_string(),
                height: "2.1m".to_string(),
                size: "6 sqm".to_string(),
                security: SecurityTier::High,
            },
        },
        Listing {
            id: "2".to_string(),
            name: "Urban Storage Unit B".to_string(),
            category: Category::Storage,
            distance: "1.2 km".to_string(),
            price_per_hour: 8.0,
            rating: 4.7,
            reviews_count: 45,
            available: true,
            image: "https://picsum.photos/seed/garage2/600/400".to_string(),
            description: "Spacious storage unit perfect for household items or a small \
                          project vehicle. Easy access from the main road."
                .to_string(),
            owner: Owner {
                name: "Sarah Chen".to_string(),
                rating: 4.8,
                image: "https://picsum.photos/seed/owner2/100/100".to_string(),
            },
            features: ListingFeatures {
                ground_anchor: false,
                ground_type: "Standard Concrete".to_string(),
                height: "3.0m".to_string(),
                size: "15 sqm".to_string(),
                security: SecurityTier::Standard,
            },
        },
        Listing {
            id: "3".to_string(),
            name: "The Bike Vault".to_string(),
            category: Category::Bike,
            distance: "0.2 km".to_string(),
            price_per_hour: 2.0,
            rating: 4.8,
            reviews_count: 89,
            available: false,
            image: "https://picsum.photos/seed/garage3/600/400".to_string(),
            description: "Perfect spot for your high-end road or mountain bike. Includes \
                          tool station for minor repairs."
                .to_string(),
            owner: Owner {
                name: "Mark Benson".to_string(),
                rating: 4.9,
                image: "https://picsum.photos/seed/owner3/100/100".to_string(),
            },
            features: ListingFeatures {
                ground_anchor: true,
                ground_type: "Rubber Matting".to_string(),
                height: "2.0m".to_string(),
                size: "3 sqm".to_string(),
                security: SecurityTier::Premium,
            },
        },
        Listing {
            id: "4".to_string(),
            name: "Central Private Garage".to_string(),
            category: Category::PrivateGarage,
            distance: "2.5 km".to_string(),
            price_per_hour: 12.0,
            rating: 4.6,
            reviews_count: 12,
            available: true,
            image: "https://picsum.photos/seed/garage4/600/400".to_string(),
            description: "Full sized private garage with automatic door. Great for long \
                          term parking or car detailing."
                .to_string(),
            owner: Owner {
                name: "Elena Gilbert".to_string(),
                rating: 4.7,
                image: "https://picsum.photos/seed/owner4/100/100".to_string(),
            },
            features: ListingFeatures {
                ground_anchor: false,
                ground_type: "Asphalt".to_string(),
                height: "2.5m".to_string(),
                size: "20 sqm".to_string(),
                security: SecurityTier::Standard,
            },
        },
    ]
}
