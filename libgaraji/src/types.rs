//! Core types for Garaji

use serde::{Deserialize, Serialize};

// ============================================================================
// Listing Types
// ============================================================================

/// Category of rentable space
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    Motorcycle,
    Bike,
    Storage,
    PrivateGarage,
}

impl Category {
    /// All categories, in the order they appear in the filter row
    pub const ALL: [Category; 4] = [
        Category::Motorcycle,
        Category::Bike,
        Category::Storage,
        Category::PrivateGarage,
    ];

    /// Get the display label for this category
    pub fn label(&self) -> &'static str {
        match self {
            Category::Motorcycle => "Motorcycle",
            Category::Bike => "Bike",
            Category::Storage => "Storage",
            Category::PrivateGarage => "Private Garage",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Security tier of a listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SecurityTier {
    Standard,
    High,
    Premium,
}

impl SecurityTier {
    pub fn label(&self) -> &'static str {
        match self {
            SecurityTier::Standard => "Standard",
            SecurityTier::High => "High",
            SecurityTier::Premium => "Premium",
        }
    }
}

impl std::fmt::Display for SecurityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The person renting out a space
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    pub rating: f64,
    /// Avatar URL (never fetched, carried as an opaque string)
    pub image: String,
}

/// Physical features of a listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingFeatures {
    pub ground_anchor: bool,
    pub ground_type: String,
    pub height: String,
    pub size: String,
    pub security: SecurityTier,
}

/// A rentable garage or parking space
///
/// Listings are statically seeded and immutable for the lifetime of the
/// process. Bookings reference them by id and snapshot the display fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub name: String,
    pub category: Category,
    /// Distance label, e.g. "0.4 km"
    pub distance: String,
    pub price_per_hour: f64,
    pub rating: f64,
    pub reviews_count: u32,
    pub available: bool,
    /// Image URL (never fetched, carried as an opaque string)
    pub image: String,
    pub description: String,
    pub owner: Owner,
    pub features: ListingFeatures,
}

/// Filter applied to the catalog on the home screen
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Filter row entries, in display order
    pub const ALL: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Motorcycle),
        CategoryFilter::Only(Category::Bike),
        CategoryFilter::Only(Category::Storage),
        CategoryFilter::Only(Category::PrivateGarage),
    ];

    /// Does a listing in `category` pass this filter?
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c.label(),
        }
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::All
    }
}

// ============================================================================
// Booking Types
// ============================================================================

/// Lifecycle status of a booking
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Upcoming,
    Active,
    Completed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Upcoming => "upcoming",
            BookingStatus::Active => "active",
            BookingStatus::Completed => "completed",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A confirmed rental of a listing
///
/// Bookings snapshot the listing's display fields so the record stays
/// intact even if the catalog changes. They are created by the booking
/// factory (see `crate::booking`) and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    /// Random base-36 identifier, 9 characters
    pub id: String,
    pub listing_id: String,
    pub listing_name: String,
    pub listing_image: String,
    /// Date label, e.g. "Aug 21, 2026"
    pub date: String,
    /// Start time label, current hour on the hour, e.g. "14:00"
    pub start_time: String,
    /// End time label, start hour plus the booked duration
    pub end_time: String,
    /// 4-digit access code, shown only after the reveal flow
    pub access_code: String,
    pub status: BookingStatus,
    /// Unix timestamp of creation
    pub created_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_listing() -> Listing {
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
            description: "A clean, well-lit garage.".to_string(),
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
        }
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::Motorcycle.label(), "Motorcycle");
        assert_eq!(Category::Bike.label(), "Bike");
        assert_eq!(Category::Storage.label(), "Storage");
        assert_eq!(Category::PrivateGarage.label(), "Private Garage");
    }

    #[test]
    fn test_category_display() {
        assert_eq!(format!("{}", Category::PrivateGarage), "Private Garage");
        assert_eq!(format!("{}", Category::Bike), "Bike");
    }

    #[test]
    fn test_category_all_covers_every_variant() {
        assert_eq!(Category::ALL.len(), 4);
        assert!(Category::ALL.contains(&Category::Motorcycle));
        assert!(Category::ALL.contains(&Category::Bike));
        assert!(Category::ALL.contains(&Category::Storage));
        assert!(Category::ALL.contains(&Category::PrivateGarage));
    }

    #[test]
    fn test_security_tier_labels() {
        assert_eq!(SecurityTier::Standard.label(), "Standard");
        assert_eq!(SecurityTier::High.label(), "High");
        assert_eq!(SecurityTier::Premium.label(), "Premium");
    }

    #[test]
    fn test_category_filter_all_matches_everything() {
        let filter = CategoryFilter::All;
        for category in Category::ALL {
            assert!(filter.matches(category));
        }
    }

    #[test]
    fn test_category_filter_only_matches_its_category() {
        let filter = CategoryFilter::Only(Category::Bike);
        assert!(filter.matches(Category::Bike));
        assert!(!filter.matches(Category::Motorcycle));
        assert!(!filter.matches(Category::Storage));
        assert!(!filter.matches(Category::PrivateGarage));
    }

    #[test]
    fn test_category_filter_labels() {
        assert_eq!(CategoryFilter::All.label(), "All");
        assert_eq!(
            CategoryFilter::Only(Category::PrivateGarage).label(),
            "Private Garage"
        );
    }

    #[test]
    fn test_category_filter_default_is_all() {
        assert_eq!(CategoryFilter::default(), CategoryFilter::All);
    }

    #[test]
    fn test_category_filter_row_starts_with_all() {
        assert_eq!(CategoryFilter::ALL[0], CategoryFilter::All);
        assert_eq!(CategoryFilter::ALL.len(), Category::ALL.len() + 1);
    }

    #[test]
    fn test_booking_status_as_str() {
        assert_eq!(BookingStatus::Upcoming.as_str(), "upcoming");
        assert_eq!(BookingStatus::Active.as_str(), "active");
        assert_eq!(BookingStatus::Completed.as_str(), "completed");
    }

    #[test]
    fn test_booking_status_display() {
        assert_eq!(format!("{}", BookingStatus::Active), "active");
    }

    #[test]
    fn test_booking_status_serialization() {
        let status = BookingStatus::Active;
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, r#""active""#);

        let deserialized: BookingStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, BookingStatus::Active);
    }

    #[test]
    fn test_listing_serialization() {
        let listing = sample_listing();

        let json = serde_json::to_string(&listing).unwrap();
        let deserialized: Listing = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.id, listing.id);
        assert_eq!(deserialized.name, listing.name);
        assert_eq!(deserialized.category, listing.category);
        assert_eq!(deserialized.price_per_hour, listing.price_per_hour);
        assert_eq!(deserialized.available, listing.available);
        assert_eq!(deserialized.owner.name, listing.owner.name);
        assert_eq!(
            deserialized.features.security,
            listing.features.security
        );
    }

    #[test]
    fn test_listing_clone() {
        let listing = sample_listing();
        let cloned = listing.clone();

        assert_eq!(listing.id, cloned.id);
        assert_eq!(listing.features.ground_anchor, cloned.features.ground_anchor);
    }

    #[test]
    fn test_booking_serialization() {
        let booking = Booking {
            id: "k3j9x2m1q".to_string(),
            listing_id: "1".to_string(),
            listing_name: "Safe Haven Moto Space".to_string(),
            listing_image: "https://picsum.photos/seed/garage1/600/400".to_string(),
            date: "Aug 21, 2026".to_string(),
            start_time: "14:00".to_string(),
            end_time: "16:00".to_string(),
            access_code: "4821".to_string(),
            status: BookingStatus::Active,
            created_at: 1234567890,
        };

        let json = serde_json::to_string(&booking).unwrap();
        assert!(json.contains(r#""status":"active""#));

        let deserialized: Booking = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.id, booking.id);
        assert_eq!(deserialized.access_code, booking.access_code);
        assert_eq!(deserialized.status, booking.status);
    }
}
