//! Recommendation Integration Tests
//!
//! Runs the full pipeline (cleaning → scoring → classification → top-N →
//! filter intersection → rendering) over a small, realistic EV catalogue.

use approx::assert_relative_eq;
use ev_recommender::classifier::{candidates, highest_score, DEFAULT_CUTOFF_PERCENTILE};
use ev_recommender::{
    classify, score_vehicles, Category, FilterSelection, JsonFormatter, MarkdownFormatter,
    RecommendationReport, Recommender, RecommenderConfig, VehicleData, VehicleKey,
};
use polars::prelude::*;
use std::io::Write;

/// Ten complete vehicles plus one row missing its fast-charge figure
fn catalogue() -> DataFrame {
    df![
        "brand" => &["Tesla", "Tesla", "Porsche", "Hyundai", "Hyundai", "Kia", "Mercedes", "Fiat", "BMW", "Nissan", "Lucid"],
        "model" => &["Model 3", "Model S Plaid", "Taycan Turbo S", "Ioniq 6", "Ioniq 5", "EV6 GT", "EQS 450+", "500e", "iX xDrive50", "Leaf", "Air"],
        "car_size" => &["Mid", "Large", "Large", "Mid", "Mid", "Mid", "Large", "Small", "Large", "Small", "Large"],
        "drivetrain" => &["RWD", "AWD", "AWD", "RWD", "AWD", "AWD", "RWD", "FWD", "AWD", "FWD", "AWD"],
        "car_body_type" => &["Sedan", "Sedan", "Sedan", "Sedan", "SUV", "Crossover", "Sedan", "Hatchback", "SUV", "Hatchback", "Sedan"],
        "top_speed_kmh" => &[225.0, 282.0, 260.0, 185.0, 185.0, 260.0, 210.0, 150.0, 200.0, 144.0, 270.0],
        "acceleration_0_100_s" => &[6.1, 2.1, 2.8, 7.4, 5.1, 3.5, 6.2, 9.0, 4.6, 7.9, 3.0],
        "battery_capacity_kWh" => &[57.5, 95.0, 93.4, 77.4, 77.4, 77.4, 108.4, 37.3, 105.2, 39.0, 112.0],
        "efficiency_wh_per_km" => &[137.0, 172.0, 197.0, 143.0, 172.0, 207.0, 158.0, 154.0, 188.0, 164.0, 150.0],
        "range_km" => &[415.0, 600.0, 440.0, 545.0, 440.0, 395.0, 640.0, 230.0, 535.0, 270.0, 700.0],
        "fast_charging_power_kw_dc" => &[Some(170.0), Some(250.0), Some(270.0), Some(233.0), Some(233.0), Some(258.0), Some(200.0), Some(85.0), Some(195.0), Some(46.0), None],
    ]
    .unwrap()
}

fn models(report: &RecommendationReport, category: Category) -> Vec<String> {
    report
        .category(category)
        .unwrap()
        .vehicles
        .iter()
        .map(|v| v.model.clone())
        .collect()
}

fn recommend(config: RecommenderConfig, selection: &FilterSelection) -> RecommendationReport {
    let data = VehicleData::from_frame(catalogue()).unwrap();
    Recommender::new(config)
        .unwrap()
        .recommend_filtered(&data, selection)
        .unwrap()
}

#[test]
fn test_incomplete_row_excluded_from_scoring() {
    let data = VehicleData::from_frame(catalogue()).unwrap();
    assert_eq!(data.vehicles().len(), 10);
    assert_eq!(data.dropped_rows(), 1);
    assert_eq!(data.frame().height(), 11);
}

#[test]
fn test_unfiltered_rankings() {
    let report = recommend(RecommenderConfig::default(), &FilterSelection::new());

    assert_relative_eq!(report.cutoffs.speed, 62.579_710_144_9, epsilon = 1e-6);
    assert_relative_eq!(report.cutoffs.battery, 64.867_603_169_7, epsilon = 1e-6);
    assert_relative_eq!(report.cutoffs.charging, 83.565_595_489_3, epsilon = 1e-6);

    assert_eq!(models(&report, Category::Speed), vec!["Model S Plaid"]);
    assert_eq!(
        models(&report, Category::Battery),
        vec!["EQS 450+", "Ioniq 6", "Model 3", "500e", "Leaf"]
    );
    assert_eq!(
        models(&report, Category::Charging),
        vec!["Taycan Turbo S", "EV6 GT", "Ioniq 5", "iX xDrive50"]
    );

    let battery = report.category(Category::Battery).unwrap();
    assert_relative_eq!(battery.vehicles[0].score, 88.0, epsilon = 1e-9);
    assert_relative_eq!(battery.vehicles[1].score, 76.540_040_282_9, epsilon = 1e-6);

    let speed = report.category(Category::Speed).unwrap();
    assert_relative_eq!(speed.vehicles[0].score, 100.0, epsilon = 1e-9);
}

#[test]
fn test_vehicles_below_every_cutoff_take_highest_raw_score() {
    let data = VehicleData::from_frame(catalogue()).unwrap();
    let classification = classify(score_vehicles(data.vehicles()), DEFAULT_CUTOFF_PERCENTILE).unwrap();
    let cutoffs = classification.cutoffs;

    for (brand, model) in [("Nissan", "Leaf"), ("Fiat", "500e")] {
        let vehicle = classification
            .vehicles
            .iter()
            .find(|v| v.key() == VehicleKey::new(brand, model))
            .unwrap();
        let scores = &vehicle.scored.scores;

        assert!(scores.speed < cutoffs.speed);
        assert!(scores.battery < cutoffs.battery);
        assert!(scores.charging < cutoffs.charging);
        assert!(candidates(scores, &cutoffs).is_empty());

        assert_eq!(highest_score(scores), Category::Battery);
        assert_eq!(vehicle.category, Category::Battery);
    }

    let leaf = classification
        .vehicles
        .iter()
        .find(|v| v.key() == VehicleKey::new("Nissan", "Leaf"))
        .unwrap();
    assert_relative_eq!(leaf.scored.scores.speed, 9.565_217_391_3, epsilon = 1e-6);
    assert_relative_eq!(leaf.scored.scores.battery, 28.215_6, epsilon = 1e-3);
    assert_relative_eq!(leaf.scored.scores.charging, 0.239_1, epsilon = 1e-3);
}

#[test]
fn test_no_selection_renders_without_filter_banner() {
    let report = recommend(RecommenderConfig::default(), &FilterSelection::new());
    assert!(!report.filter_applied);

    let md = MarkdownFormatter::format(&report);
    assert!(!md.contains("Rankings narrowed"));
}

#[test]
fn test_every_complete_vehicle_classified_once() {
    let report = recommend(RecommenderConfig::default(), &FilterSelection::new());

    let counts = report.category_counts();
    assert_eq!(
        counts,
        vec![(Category::Speed, 1), (Category::Battery, 5), (Category::Charging, 4)]
    );
    assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), 10);

    // The incomplete Lucid row is never ranked
    for category in Category::ALL {
        assert!(!models(&report, category).contains(&"Air".to_string()));
    }
}

#[test]
fn test_rankings_sorted_and_capped() {
    let config = RecommenderConfig {
        top_n: 3,
        ..Default::default()
    };
    let report = recommend(config, &FilterSelection::new());

    for category in &report.categories {
        assert!(category.vehicles.len() <= 3);
        assert!(category.vehicles.windows(2).all(|w| w[0].score >= w[1].score));
        let ranks: Vec<usize> = category.vehicles.iter().map(|v| v.rank).collect();
        assert_eq!(ranks, (1..=category.vehicles.len()).collect::<Vec<_>>());
    }
}

#[test]
fn test_filter_narrows_rankings() {
    let selection = FilterSelection::new().with("drivetrain", ["AWD"]);
    let report = recommend(RecommenderConfig::default(), &selection);

    assert!(report.filter_applied);
    assert_eq!(models(&report, Category::Speed), vec!["Model S Plaid"]);
    assert!(report.category(Category::Battery).unwrap().is_empty());
    assert_eq!(
        models(&report, Category::Charging),
        vec!["Taycan Turbo S", "EV6 GT", "Ioniq 5", "iX xDrive50"]
    );

    // Category sizes still describe the whole dataset
    assert_eq!(report.category(Category::Battery).unwrap().category_size, 5);
}

#[test]
fn test_filter_never_promotes_into_top_n() {
    let config = RecommenderConfig {
        top_n: 2,
        ..Default::default()
    };
    let selection = FilterSelection::new().with("car_size", ["Large"]);
    let report = recommend(config, &selection);

    // iX xDrive50 is Large but ranks fourth in charging, outside the top 2
    assert_eq!(models(&report, Category::Charging), vec!["Taycan Turbo S"]);
    assert_eq!(models(&report, Category::Battery), vec!["EQS 450+"]);
}

#[test]
fn test_filter_matching_nothing_skips_intersection() {
    let selection = FilterSelection::new().with("car_body_type", ["Wagon"]);
    let report = recommend(RecommenderConfig::default(), &selection);

    // An empty filtered table yields an empty key set, which means "no filter"
    assert!(!report.filter_applied);
    assert_eq!(models(&report, Category::Battery).len(), 5);
}

#[test]
fn test_scores_do_not_depend_on_filters() {
    let unfiltered = recommend(RecommenderConfig::default(), &FilterSelection::new());
    let filtered = recommend(
        RecommenderConfig::default(),
        &FilterSelection::new().with("car_body_type", ["Sedan"]),
    );

    assert_eq!(unfiltered.cutoffs, filtered.cutoffs);
    let plaid = |r: &RecommendationReport| r.category(Category::Speed).unwrap().vehicles[0].score;
    assert_eq!(plaid(&unfiltered), plaid(&filtered));
}

#[test]
fn test_pipeline_is_deterministic() {
    let selection = FilterSelection::new().with("car_size", ["Mid", "Large"]);
    let first = JsonFormatter::format(&recommend(RecommenderConfig::default(), &selection)).unwrap();
    let second = JsonFormatter::format(&recommend(RecommenderConfig::default(), &selection)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_markdown_report_renders_every_category() {
    let selection = FilterSelection::new().with("drivetrain", ["AWD"]);
    let md = MarkdownFormatter::format(&recommend(RecommenderConfig::default(), &selection));

    assert!(md.contains("1. **Tesla Model S Plaid** (speed score: 100.0)"));
    assert!(md.contains("Top speed: 282 km/h | 0-100 km/h: 2.1 s"));
    assert!(md.contains("No vehicles in this category under the current filters."));
    assert!(md.contains("1. **Porsche Taycan Turbo S** (charging score: 97.9)"));
}

#[test]
fn test_load_from_csv_file() {
    let path = std::env::temp_dir().join(format!("ev_recommender_{}.csv", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "brand,model,car_size,drivetrain,car_body_type,top_speed_kmh,acceleration_0_100_s,battery_capacity_kWh,efficiency_wh_per_km,range_km,fast_charging_power_kw_dc").unwrap();
        writeln!(file, "Tesla,Model 3,Mid,RWD,Sedan,225,6.1,57.5,137,415,170").unwrap();
        writeln!(file, "Fiat,500e,Small,FWD,Hatchback,150,9.0,37.3,154,230,85").unwrap();
        writeln!(file, "Lucid,Air,Large,AWD,Sedan,270,3.0,112,150,700,").unwrap();
    }

    let data = VehicleData::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(data.frame().height(), 3);
    assert_eq!(data.vehicles().len(), 2);
    assert_eq!(data.vehicles()[0].model, "Model 3");
}

#[test]
fn test_missing_csv_reports_path() {
    let err = VehicleData::load("/nonexistent/ev_specs.csv").err().unwrap();
    assert!(format!("{:#}", err).contains("/nonexistent/ev_specs.csv"));
}
