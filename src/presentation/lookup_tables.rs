//! Category display copy and attribute lookup tables
//!
//! Static text shown alongside each category's ranking, the raw attributes
//! worth highlighting per category, and short notes on notable attribute
//! pairs.

use crate::classifier::Category;
use crate::data::{
    Vehicle, ACCELERATION, BATTERY_CAPACITY, EFFICIENCY, FAST_CHARGING, RANGE, TOP_SPEED,
};
use serde::Serialize;

/// Display copy for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryProfile {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub target: &'static str,
}

// ============================================================================
// CATEGORY PROFILES
// ============================================================================

static SPEED_PROFILE: CategoryProfile = CategoryProfile {
    title: "🏎️ EVs for Speed Enthusiasts",
    subtitle: "Thrilling acceleration and top-speed performance",
    description: "Quick off the line and fast at the top end. \
                  These cars put driving excitement first.",
    target: "Sports car fans, performance-focused drivers",
};

static BATTERY_PROFILE: CategoryProfile = CategoryProfile {
    title: "🔋 Best Partner for Long Trips",
    subtitle: "Practical efficiency and range",
    description: "Large packs and low consumption for fewer stops. \
                  Built for long distances and everyday economy.",
    target: "Long-distance commuters, travellers, economy-minded drivers",
};

static CHARGING_PROFILE: CategoryProfile = CategoryProfile {
    title: "⚡ Fast-Charging Innovators",
    subtitle: "Time-saving convenience through fast charging",
    description: "High DC charging power keeps charge stops short. \
                  Ideal when every minute on the road counts.",
    target: "Busy professionals, time-efficiency-minded drivers",
};

/// Display copy for `category`
pub fn category_profile(category: Category) -> &'static CategoryProfile {
    match category {
        Category::Speed => &SPEED_PROFILE,
        Category::Battery => &BATTERY_PROFILE,
        Category::Charging => &CHARGING_PROFILE,
    }
}

// ============================================================================
// HIGHLIGHTS
// ============================================================================

/// Raw attribute shown next to a ranked vehicle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlight {
    pub label: &'static str,
    pub value: f64,
    pub unit: &'static str,
    /// Decimal places used when rendering `value`
    pub precision: usize,
}

impl Highlight {
    /// `value` rounded to `precision` places, followed by the unit
    pub fn display_value(&self) -> String {
        format!("{:.*} {}", self.precision, self.value, self.unit)
    }
}

struct HighlightSpec {
    label: &'static str,
    unit: &'static str,
    precision: usize,
    value: fn(&Vehicle) -> f64,
}

static SPEED_HIGHLIGHTS: &[HighlightSpec] = &[
    HighlightSpec { label: "Top speed", unit: "km/h", precision: 0, value: |v| v.top_speed_kmh },
    HighlightSpec { label: "0-100 km/h", unit: "s", precision: 1, value: |v| v.acceleration_0_100_s },
];

static BATTERY_HIGHLIGHTS: &[HighlightSpec] = &[
    HighlightSpec { label: "Battery", unit: "kWh", precision: 1, value: |v| v.battery_capacity_kwh },
    HighlightSpec { label: "Range", unit: "km", precision: 0, value: |v| v.range_km },
    HighlightSpec { label: "Efficiency", unit: "Wh/km", precision: 0, value: |v| v.efficiency_wh_per_km },
];

static CHARGING_HIGHLIGHTS: &[HighlightSpec] = &[
    HighlightSpec { label: "DC fast charging", unit: "kW", precision: 0, value: |v| v.fast_charging_power_kw_dc },
    HighlightSpec { label: "Battery", unit: "kWh", precision: 1, value: |v| v.battery_capacity_kwh },
];

fn highlight_specs(category: Category) -> &'static [HighlightSpec] {
    match category {
        Category::Speed => SPEED_HIGHLIGHTS,
        Category::Battery => BATTERY_HIGHLIGHTS,
        Category::Charging => CHARGING_HIGHLIGHTS,
    }
}

/// The raw attributes relevant to `category`, read from `vehicle`
pub fn highlights(category: Category, vehicle: &Vehicle) -> Vec<Highlight> {
    highlight_specs(category)
        .iter()
        .map(|spec| Highlight {
            label: spec.label,
            value: (spec.value)(vehicle),
            unit: spec.unit,
            precision: spec.precision,
        })
        .collect()
}

// ============================================================================
// ATTRIBUTE PAIRS
// ============================================================================

/// Short note on how two attributes relate, if the pair is a notable one
///
/// Argument order does not matter.
pub fn attribute_pair_description(a: &str, b: &str) -> Option<&'static str> {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };

    match (first, second) {
        (ACCELERATION, TOP_SPEED) => Some(
            "Performance attributes: cars with a high top speed usually post short 0-100 times too.",
        ),
        (BATTERY_CAPACITY, RANGE) => Some(
            "Bigger packs buy more range, though efficiency decides how much.",
        ),
        (EFFICIENCY, RANGE) => Some(
            "Lower consumption stretches every kWh further, so efficient cars reach more km per charge.",
        ),
        (BATTERY_CAPACITY, FAST_CHARGING) => Some(
            "Larger packs tend to accept higher DC power, keeping charge stops short despite their size.",
        ),
        (BATTERY_CAPACITY, EFFICIENCY) => Some(
            "Heavy packs add weight, so the largest batteries often come with higher consumption.",
        ),
        (ACCELERATION, EFFICIENCY) => Some(
            "Performance tuning costs efficiency: the quickest cars rarely have the lowest Wh/km.",
        ),
        _ => None,
    }
}
