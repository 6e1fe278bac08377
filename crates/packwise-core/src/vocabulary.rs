//! # Trip Vocabulary: Single Source of Truth
//!
//! Closed enums for every identifier axis a trip description carries: trip
//! type, transportation mode and options, accommodation mode and options, and
//! activities. Every `match` on these enums is exhaustive, so adding a mode
//! forces the catalog and rule set to address it.
//!
//! Hosts send identifiers as strings. [`Vocabulary::parse`] normalizes them
//! (trimmed, lower-cased, `-` and spaces folded to `_`) before lookup.

use serde::{Deserialize, Serialize};

/// The identifier axis an unrecognized value was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// `tripType`.
    TripType,
    /// `transportation`.
    Transportation,
    /// `transportationOptions`.
    TransportationOption,
    /// `accommodation`.
    Accommodation,
    /// `accommodationOptions`.
    AccommodationOption,
    /// `activities`.
    Activity,
}

impl Axis {
    /// Returns the field name as the host spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TripType => "tripType",
            Self::Transportation => "transportation",
            Self::TransportationOption => "transportationOptions",
            Self::Accommodation => "accommodation",
            Self::AccommodationOption => "accommodationOptions",
            Self::Activity => "activities",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalize a raw identifier for vocabulary lookup.
pub fn normalize_id(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

/// A closed identifier vocabulary.
pub trait Vocabulary: Sized + Copy + 'static {
    /// The axis this vocabulary belongs to.
    const AXIS: Axis;

    /// Every member, in declaration order.
    fn all() -> &'static [Self];

    /// Canonical identifier.
    fn as_str(&self) -> &'static str;

    /// Resolve a raw host identifier, or `None` when unrecognized.
    fn parse(raw: &str) -> Option<Self> {
        let id = normalize_id(raw);
        Self::all().iter().copied().find(|v| v.as_str() == id)
    }
}

// ---------------------------------------------------------------------------
// TripType
// ---------------------------------------------------------------------------

/// The overall purpose of a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripType {
    /// Work travel.
    Business,
    /// General holiday.
    Leisure,
    /// Outdoor or expedition travel.
    Adventure,
    /// Travelling with children.
    Family,
    /// Beach holiday.
    Beach,
    /// City break.
    City,
    /// Couple's getaway.
    Romantic,
    /// Budget multi-stop travel with a pack.
    Backpacking,
}

impl Vocabulary for TripType {
    const AXIS: Axis = Axis::TripType;

    fn all() -> &'static [Self] {
        &[
            Self::Business,
            Self::Leisure,
            Self::Adventure,
            Self::Family,
            Self::Beach,
            Self::City,
            Self::Romantic,
            Self::Backpacking,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::Leisure => "leisure",
            Self::Adventure => "adventure",
            Self::Family => "family",
            Self::Beach => "beach",
            Self::City => "city",
            Self::Romantic => "romantic",
            Self::Backpacking => "backpacking",
        }
    }
}

// ---------------------------------------------------------------------------
// Transportation
// ---------------------------------------------------------------------------

/// How the traveller gets to the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transportation {
    /// Air travel.
    Plane,
    /// Driving.
    Car,
    /// Rail.
    Train,
    /// Coach or bus.
    Bus,
    /// Cruise ship.
    Cruise,
}

impl Transportation {
    /// The options that may accompany this mode.
    pub fn options(&self) -> &'static [TransportOption] {
        match self {
            Self::Plane => &[
                TransportOption::International,
                TransportOption::LongHaul,
                TransportOption::CarryOnOnly,
            ],
            Self::Car => &[TransportOption::RoadTrip, TransportOption::Rental],
            Self::Train | Self::Bus => &[TransportOption::Overnight],
            Self::Cruise => &[],
        }
    }
}

impl Vocabulary for Transportation {
    const AXIS: Axis = Axis::Transportation;

    fn all() -> &'static [Self] {
        &[Self::Plane, Self::Car, Self::Train, Self::Bus, Self::Cruise]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Plane => "plane",
            Self::Car => "car",
            Self::Train => "train",
            Self::Bus => "bus",
            Self::Cruise => "cruise",
        }
    }
}

/// Qualifiers on a transportation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportOption {
    /// Crossing a border.
    International,
    /// Long flight.
    LongHaul,
    /// No checked luggage.
    CarryOnOnly,
    /// Multi-day drive.
    RoadTrip,
    /// Hired vehicle.
    Rental,
    /// Sleeping on board.
    Overnight,
}

impl Vocabulary for TransportOption {
    const AXIS: Axis = Axis::TransportationOption;

    fn all() -> &'static [Self] {
        &[
            Self::International,
            Self::LongHaul,
            Self::CarryOnOnly,
            Self::RoadTrip,
            Self::Rental,
            Self::Overnight,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::International => "international",
            Self::LongHaul => "long_haul",
            Self::CarryOnOnly => "carry_on_only",
            Self::RoadTrip => "road_trip",
            Self::Rental => "rental",
            Self::Overnight => "overnight",
        }
    }
}

// ---------------------------------------------------------------------------
// Accommodation
// ---------------------------------------------------------------------------

/// Where the traveller sleeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accommodation {
    /// Hotel room.
    Hotel,
    /// Hostel bed or room.
    Hostel,
    /// Tent or campsite.
    Camping,
    /// Short-term rental apartment or house.
    Airbnb,
    /// Staying with friends or family.
    FriendsFamily,
}

impl Accommodation {
    /// The options that may accompany this mode.
    pub fn options(&self) -> &'static [AccommodationOption] {
        match self {
            Self::Hotel => &[
                AccommodationOption::Luxury,
                AccommodationOption::Business,
                AccommodationOption::Resort,
            ],
            Self::Hostel => &[AccommodationOption::Dorm],
            Self::Camping => &[AccommodationOption::Backcountry],
            Self::Airbnb => &[AccommodationOption::SelfCatering],
            Self::FriendsFamily => &[],
        }
    }
}

impl Vocabulary for Accommodation {
    const AXIS: Axis = Axis::Accommodation;

    fn all() -> &'static [Self] {
        &[
            Self::Hotel,
            Self::Hostel,
            Self::Camping,
            Self::Airbnb,
            Self::FriendsFamily,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Hotel => "hotel",
            Self::Hostel => "hostel",
            Self::Camping => "camping",
            Self::Airbnb => "airbnb",
            Self::FriendsFamily => "friends_family",
        }
    }
}

/// Qualifiers on an accommodation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccommodationOption {
    /// Upscale hotel.
    Luxury,
    /// Business hotel.
    Business,
    /// Resort hotel.
    Resort,
    /// Shared dormitory.
    Dorm,
    /// Remote campsite without facilities.
    Backcountry,
    /// Kitchen available, cooking own meals.
    SelfCatering,
}

impl Vocabulary for AccommodationOption {
    const AXIS: Axis = Axis::AccommodationOption;

    fn all() -> &'static [Self] {
        &[
            Self::Luxury,
            Self::Business,
            Self::Resort,
            Self::Dorm,
            Self::Backcountry,
            Self::SelfCatering,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Luxury => "luxury",
            Self::Business => "business",
            Self::Resort => "resort",
            Self::Dorm => "dorm",
            Self::Backcountry => "backcountry",
            Self::SelfCatering => "self_catering",
        }
    }
}

// ---------------------------------------------------------------------------
// Activity
// ---------------------------------------------------------------------------

/// Planned activities at the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    Hiking,
    Swimming,
    Beach,
    Skiing,
    Business,
    Photography,
    Fitness,
    Nightlife,
    Sightseeing,
    Snorkeling,
    Cycling,
}

impl Vocabulary for Activity {
    const AXIS: Axis = Axis::Activity;

    fn all() -> &'static [Self] {
        &[
            Self::Hiking,
            Self::Swimming,
            Self::Beach,
            Self::Skiing,
            Self::Business,
            Self::Photography,
            Self::Fitness,
            Self::Nightlife,
            Self::Sightseeing,
            Self::Snorkeling,
            Self::Cycling,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Hiking => "hiking",
            Self::Swimming => "swimming",
            Self::Beach => "beach",
            Self::Skiing => "skiing",
            Self::Business => "business",
            Self::Photography => "photography",
            Self::Fitness => "fitness",
            Self::Nightlife => "nightlife",
            Self::Sightseeing => "sightseeing",
            Self::Snorkeling => "snorkeling",
            Self::Cycling => "cycling",
        }
    }
}

macro_rules! display_via_as_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(Vocabulary::as_str(self))
                }
            }
        )*
    };
}

display_via_as_str!(
    TripType,
    Transportation,
    TransportOption,
    Accommodation,
    AccommodationOption,
    Activity,
);
