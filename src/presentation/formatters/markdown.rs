use crate::recommender::{CategoryRecommendation, RankedVehicle, RecommendationReport};

/// Shown in place of a ranking that came out empty
pub const EMPTY_CATEGORY_MESSAGE: &str = "No vehicles in this category under the current filters.";

/// Markdown formatter for recommendation reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format report as markdown
    pub fn format(report: &RecommendationReport) -> String {
        let mut md = String::with_capacity(2048);

        md.push_str("# EV Recommendations\n\n");
        if report.filter_applied {
            md.push_str("*Rankings narrowed to vehicles matching the selected filters.*\n\n");
        }

        for category in &report.categories {
            Self::format_category(&mut md, category);
        }

        md
    }

    fn format_category(md: &mut String, category: &CategoryRecommendation) {
        let profile = category.profile;

        md.push_str(&format!("## {}\n\n", profile.title));
        md.push_str(&format!("**{}**\n\n", profile.subtitle));
        md.push_str(&format!("{}\n\n", profile.description));
        md.push_str(&format!("🎯 **Recommended for:** {}\n\n", profile.target));

        if category.is_empty() {
            md.push_str(&format!("⚠️ {}\n\n", EMPTY_CATEGORY_MESSAGE));
            return;
        }

        md.push_str(&format!(
            "### {} TOP {} ({} in category)\n\n",
            capitalize(category.category.as_str()),
            category.vehicles.len(),
            category.category_size
        ));

        for vehicle in &category.vehicles {
            Self::format_vehicle(md, vehicle, category.category.as_str());
        }
        md.push('\n');
    }

    fn format_vehicle(md: &mut String, vehicle: &RankedVehicle, category: &str) {
        md.push_str(&format!(
            "{}. **{} {}** ({} score: {:.1})\n",
            vehicle.rank, vehicle.brand, vehicle.model, category, vehicle.score
        ));

        if !vehicle.highlights.is_empty() {
            let details: Vec<String> = vehicle
                .highlights
                .iter()
                .map(|h| format!("{}: {}", h.label, h.display_value()))
                .collect();
            md.push_str(&format!("   - {}\n", details.join(" | ")));
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
