//! Integration tests for tabsift.

use tabsift::{
    Analyzer, AnalyzerConfig, DataTable, FilterCondition, FilterEngine, FilterLogic,
    FilterOperator, FilterSet, OutlierMethod, OutlierTag, RowLimit,
};

/// Helper to build a table from string literals, header row first.
fn grid(rows: Vec<Vec<&str>>) -> DataTable {
    DataTable::from_grid(
        rows.into_iter()
            .map(|row| row.into_iter().map(String::from).collect())
            .collect(),
    )
}

fn sales_table() -> DataTable {
    grid(vec![
        vec!["region", "product", "sales"],
        vec!["East", "Widget", "100"],
        vec!["West", "Widget", "300"],
        vec!["East", "Gadget", "200"],
        vec!["South", "Widget", "150"],
        vec!["East", "Widget", "250"],
    ])
}

// =============================================================================
// Filtering Flows
// =============================================================================

#[test]
fn test_filter_and_conditions() {
    let mut engine = FilterEngine::new();
    engine.set_data(sales_table());

    let filter = FilterSet::new(FilterLogic::And)
        .with_condition(FilterCondition::new(0, FilterOperator::Equals, "east"))
        .with_condition(FilterCondition::new(2, FilterOperator::Gt, "150"));

    let result = engine.apply(&filter);
    assert_eq!(result.row_count(), 2);
    for sales in result.column_values(2) {
        assert!(sales.parse::<f64>().unwrap() > 150.0);
    }
}

#[test]
fn test_filter_zero_conditions_returns_table_unchanged() {
    let mut engine = FilterEngine::new();
    let table = sales_table();
    engine.set_data(table.clone());

    let result = engine.apply(&FilterSet::default());
    assert_eq!(*result, table);
}

#[test]
fn test_filter_is_idempotent() {
    let table = sales_table();
    let mut engine = FilterEngine::new();
    engine.set_data(table);

    let filter = FilterSet::new(FilterLogic::Or)
        .with_condition(FilterCondition::new(0, FilterOperator::Contains, "e"))
        .with_condition(FilterCondition::new(2, FilterOperator::Lte, "200"));

    let once = engine.apply(&filter).clone();
    let mut again = FilterEngine::new();
    again.set_data(once.clone());
    let twice = again.apply(&filter).clone();

    assert_eq!(once, twice);
}

#[test]
fn test_limit_top_and_bottom() {
    let mut engine = FilterEngine::new();
    engine.set_data(sales_table());
    engine.apply(&FilterSet::default());

    let top = engine.limit(2, RowLimit::Top(2));
    let top_sales: Vec<&str> = top.column_values(2).collect();
    assert_eq!(top_sales, vec!["300", "250"]);

    let bottom = engine.limit(2, RowLimit::Bottom(2));
    let bottom_sales: Vec<&str> = bottom.column_values(2).collect();
    assert_eq!(bottom_sales, vec!["100", "150"]);
}

#[test]
fn test_filter_then_limit_then_analyze() {
    // The full pipeline: filter to a region, rank, then run statistics on
    // the surviving rows.
    let mut engine = FilterEngine::new();
    engine.set_data(sales_table());

    let filter = FilterSet::default()
        .with_condition(FilterCondition::new(0, FilterOperator::Equals, "east"));
    engine.apply(&filter);
    let limited = engine.limit(2, RowLimit::Top(2));

    let mut analyzer = Analyzer::new();
    analyzer.set_data(limited);
    let stats = analyzer.statistics(2).unwrap();
    assert_eq!(stats.count, 2);
    assert_eq!(stats.max, 250.0);
    assert_eq!(stats.min, 200.0);
}

// =============================================================================
// Analysis Flows
// =============================================================================

#[test]
fn test_regression_on_linear_columns() {
    let mut analyzer = Analyzer::new();
    analyzer.set_data(grid(vec![
        vec!["x", "y"],
        vec!["1", "2"],
        vec!["2", "4"],
        vec!["3", "6"],
    ]));

    let result = analyzer.regression(0, 1).unwrap();
    assert!((result.slope - 2.0).abs() < 1e-9);
    assert!(result.intercept.abs() < 1e-9);
    assert!((result.r_squared - 1.0).abs() < 1e-9);

    let correlation = analyzer.correlation(0, 1).unwrap();
    assert!((correlation.correlation - 1.0).abs() < 1e-9);
}

#[test]
fn test_kmeans_single_cluster_is_coordinate_mean() {
    let mut analyzer = Analyzer::with_config(AnalyzerConfig {
        seed: Some(11),
        ..AnalyzerConfig::default()
    });
    analyzer.set_data(grid(vec![
        vec!["x", "y"],
        vec!["0", "0"],
        vec!["2", "4"],
        vec!["4", "8"],
    ]));

    let result = analyzer.kmeans(0, 1, 1).unwrap();
    assert_eq!(result.clusters.len(), 1);
    let centroid = result.clusters[0].centroid;
    assert!((centroid.x - 2.0).abs() < 1e-9);
    assert!((centroid.y - 4.0).abs() < 1e-9);
}

#[test]
fn test_outlier_detection_both_methods() {
    let mut analyzer = Analyzer::new();
    analyzer.set_data(grid(vec![
        vec!["v"],
        vec!["10"],
        vec!["12"],
        vec!["12"],
        vec!["13"],
        vec!["12"],
        vec!["11"],
        vec!["14"],
        vec!["13"],
        vec!["15"],
        vec!["100"],
    ]));

    let iqr = analyzer.outliers(0, OutlierMethod::Iqr).unwrap();
    assert_eq!(iqr.outlier_count, 1);
    assert_eq!(iqr.outliers[0].tag, Some(OutlierTag::High));
    assert_eq!(iqr.outliers[0].value, 100.0);

    let zscore = analyzer.outliers(0, OutlierMethod::ZScore).unwrap();
    assert_eq!(zscore.outlier_count, 1);
    assert!(zscore.outliers[0].z_score.unwrap() > 2.0);
}

#[test]
fn test_analyses_skip_unparseable_cells() {
    let mut analyzer = Analyzer::new();
    analyzer.set_data(grid(vec![
        vec!["v"],
        vec!["1"],
        vec![""],
        vec!["2"],
        vec!["n/a"],
        vec!["3"],
    ]));

    let stats = analyzer.statistics(0).unwrap();
    assert_eq!(stats.count, 3);
    assert_eq!(stats.mean, 2.0);
}

// =============================================================================
// Edge Cases
// =============================================================================

#[test]
fn test_header_only_table() {
    let table = grid(vec![vec!["a", "b"]]);

    let mut engine = FilterEngine::new();
    engine.set_data(table.clone());
    let filter = FilterSet::default()
        .with_condition(FilterCondition::new(0, FilterOperator::IsNotEmpty, ""));
    assert_eq!(engine.apply(&filter).row_count(), 0);
    assert_eq!(engine.limit(0, RowLimit::Top(3)).headers, vec!["a", "b"]);

    let mut analyzer = Analyzer::new();
    analyzer.set_data(table);
    assert!(analyzer.statistics(0).is_err());
    assert!(analyzer.correlation(0, 1).is_err());
    assert!(analyzer.kmeans(0, 1, 2).is_err());
}

#[test]
fn test_degenerate_regression_surfaces_nan() {
    let mut analyzer = Analyzer::new();
    analyzer.set_data(grid(vec![
        vec!["x", "y"],
        vec!["5", "1"],
        vec!["5", "2"],
        vec!["5", "3"],
    ]));

    let result = analyzer.regression(0, 1).unwrap();
    assert!(result.slope.is_nan());
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn test_results_serialize_to_json() {
    let mut analyzer = Analyzer::with_config(AnalyzerConfig {
        seed: Some(5),
        ..AnalyzerConfig::default()
    });
    analyzer.set_data(sales_table());

    let stats = analyzer.statistics(2).unwrap();
    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["count"], 5);

    let profile = analyzer.profile();
    let json = serde_json::to_value(&profile).unwrap();
    assert_eq!(json["columns"][2]["column_type"], "numeric");
    assert_eq!(json["columns"][0]["column_type"], "textual");

    let outliers = analyzer.outliers(2, OutlierMethod::Iqr).unwrap();
    let json = serde_json::to_value(&outliers).unwrap();
    assert_eq!(json["method"], "iqr");
}

#[test]
fn test_filter_set_round_trips_through_json() {
    let filter = FilterSet::new(FilterLogic::Or)
        .with_condition(FilterCondition::new(0, FilterOperator::StartsWith, "E"))
        .with_condition(FilterCondition::new(2, FilterOperator::Gte, "150"));

    let json = serde_json::to_string(&filter).unwrap();
    let restored: FilterSet = serde_json::from_str(&json).unwrap();
    assert_eq!(filter, restored);
}
