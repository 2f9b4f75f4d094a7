use rank_estimator::models::load_calibration_file;
use rank_estimator::{
    calculate_percentile, college_suggestions, competition_level, cutoff_estimates, percentile_label, predict_rank,
    rank_band, rank_gap_analysis, AppError, RankEstimator,
};
use std::path::PathBuf;

/// 0 到 100 之间步长 0.05 的综合分
fn composite_sweep() -> Vec<f64> {
    (0..=2000).map(|i| f64::from(i) * 0.05).collect()
}

#[test]
fn test_scenario_interpolated_prediction() {
    let prediction = predict_rank(162.0, 96.0).unwrap();
    assert!((prediction.composite - 92.4).abs() < 1e-9);
    assert_eq!(prediction.medium, 691);
    assert_eq!(prediction.rank_band, "Excellent");
}

#[test]
fn test_scenario_perfect_score() {
    let prediction = predict_rank(180.0, 100.0).unwrap();
    assert_eq!(prediction.medium, 1);
    assert_eq!(prediction.rank_band, "Elite");
}

#[test]
fn test_scenario_zero_score() {
    let prediction = predict_rank(0.0, 0.0).unwrap();
    assert_eq!(prediction.medium, 260_000);
    assert_eq!(prediction.rank_band, "Very Poor");
}

#[test]
fn test_scenario_college_suggestion() {
    let suggestion = college_suggestions(500, "general");
    assert_eq!(suggestion.name, "MSRIT, PESIT, BMSIT");
    assert_eq!(suggestion.branch, "CSE, ECE, ISE");
}

#[test]
fn test_scenario_percentile() {
    assert_eq!(calculate_percentile(1_000), "99.62%");
}

#[test]
fn test_monotonic_in_composite() {
    let estimator = RankEstimator::embedded();
    let mediums: Vec<u32> = composite_sweep()
        .into_iter()
        .map(|c| estimator.predict_composite(c).unwrap().medium)
        .collect();

    for pair in mediums.windows(2) {
        assert!(pair[0] >= pair[1], "名次应随综合分单调不增: {:?}", pair);
    }
}

#[test]
fn test_boundary_exactness() {
    let estimator = RankEstimator::embedded();
    let table = estimator.table();
    assert_eq!(estimator.predict_composite(table.highest().score).unwrap().medium, 1);
    assert_eq!(estimator.predict_composite(table.lowest().score).unwrap().medium, 260_000);
    assert_eq!(estimator.predict_composite(12.5).unwrap().medium, 260_000);
}

#[test]
fn test_band_consistency() {
    let estimator = RankEstimator::embedded();
    let table = estimator.table();
    for composite in composite_sweep() {
        if composite >= table.highest().score || composite <= table.lowest().score {
            continue;
        }
        let p = estimator.predict_composite(composite).unwrap();
        let medium = f64::from(p.medium);
        assert_eq!(p.low, (medium * 0.95).round() as u32, "composite {}", composite);
        assert_eq!(p.high, (medium * 1.05).round() as u32, "composite {}", composite);
        assert!(p.low <= p.medium && p.medium <= p.high);
    }
}

#[test]
fn test_idempotent() {
    for (exam, puc) in [(162.0, 96.0), (120.0, 75.5), (90.0, 60.0), (45.0, 40.0)] {
        assert_eq!(predict_rank(exam, puc).unwrap(), predict_rank(exam, puc).unwrap());
    }
}

#[test]
fn test_domain_rejection() {
    assert!(matches!(predict_rank(f64::NAN, 50.0), Err(AppError::InvalidInput { .. })));
    assert!(matches!(predict_rank(50.0, f64::NAN), Err(AppError::InvalidInput { .. })));
    // 180 分 + 150% 综合分为 120
    assert!(matches!(predict_rank(180.0, 150.0), Err(AppError::InvalidInput { .. })));
    assert!(matches!(predict_rank(-100.0, 0.0), Err(AppError::InvalidInput { .. })));
}

#[test]
fn test_labels_are_independent_ladders() {
    // 同一个数值在两套阶梯中的含义不同
    assert_eq!(rank_band(90), "Elite");
    assert_eq!(competition_level(90.0), "Very High");
    assert_eq!(percentile_label(90.0), "Top 1%");
}

#[test]
fn test_gap_analysis_and_cutoffs() {
    let analysis = rank_gap_analysis(92.4);
    assert_eq!(analysis.competition_level, "Very High");
    assert_eq!(analysis.improvement_potential, "Limited");

    let estimates = cutoff_estimates();
    assert_eq!(estimates.first().map(|e| e.target_rank), Some(100));
    assert!(estimates.iter().all(|e| (35.0..=96.22).contains(&e.expected_aggregate)));
}

#[test]
fn test_unknown_category_defaults_to_general() {
    assert_eq!(college_suggestions(2_000, "management"), college_suggestions(2_000, "general"));
    assert_eq!(college_suggestions(10_000_000, "sc").name, "Other colleges");
}

#[tokio::test]
async fn test_load_calibration_file() {
    let path: PathBuf = std::env::temp_dir().join(format!("rank_estimator_cycle_{}.toml", std::process::id()));
    std::fs::write(
        &path,
        "candidate_pool = 10000\n\n[[points]]\nscore = 90.0\nrank = 1\n\n[[points]]\nscore = 60.0\nrank = 3001\n\n[[points]]\nscore = 30.0\nrank = 9001\n",
    )
    .unwrap();

    let result = load_calibration_file(&path).await;
    std::fs::remove_file(&path).ok();

    let estimator = RankEstimator::new(result.unwrap());
    let prediction = estimator.predict_composite(75.0).unwrap();
    assert_eq!(prediction.medium, 1_501);
    assert_eq!(prediction.percentile, "84.99%");
    // 低分段名次按考生总数缩放，中位名次等于考生总数
    let bottom = estimator.predict_composite(30.0).unwrap();
    assert_eq!((bottom.low, bottom.medium, bottom.high), (9_615, 10_000, 10_385));
    assert!(bottom.medium >= estimator.predict_composite(30.05).unwrap().medium);
}
