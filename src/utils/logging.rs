//! 日志工具模块
//!
//! 提供日志格式化和输出的辅助函数

use crate::models::{CutoffEstimate, PredictionReport, RankPrediction};
use tracing::info;

/// 记录程序启动信息
///
/// # 参数
/// - `calibration_source`: 校准表来源描述
/// - `candidate_pool`: 考生总数
pub fn log_startup(calibration_source: &str, candidate_pool: u32) {
    info!("{}", "=".repeat(60));
    info!("🚀 名次预测启动");
    info!("📊 校准表: {}", calibration_source);
    info!("👥 考生总数: {}", format_rank(candidate_pool));
    info!("{}", "=".repeat(60));
}

/// 记录单次预测结果
pub fn log_prediction(exam_score: f64, puc_score: f64, prediction: &RankPrediction) {
    info!(
        "✓ 考试 {} / PUC {} → 综合分 {:.2}, 名次 {} ({} - {})",
        exam_score,
        puc_score,
        prediction.composite,
        format_rank(prediction.medium),
        format_rank(prediction.low),
        format_rank(prediction.high)
    );
}

/// 报告标题，带生成时间
pub fn report_header(title: &str) -> String {
    format!(
        "{}\n{} - {}\n{}",
        "=".repeat(60),
        title,
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    )
}

/// 名次加千位分隔符，如 260000 → "260,000"
pub fn format_rank(rank: u32) -> String {
    let digits = rank.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// 渲染文本格式的预测报告
pub fn render_report(report: &PredictionReport) -> String {
    let p = &report.prediction;
    let gap = &report.gap_analysis;
    let mut lines = vec![
        report_header("名次预测报告"),
        format!("综合分:       {:.2}", p.composite),
        format!(
            "预计名次:     {} (区间 {} - {})",
            format_rank(p.medium),
            format_rank(p.low),
            format_rank(p.high)
        ),
        format!("百分位:       {} ({})", p.percentile, report.percentile_range),
        format!("名次分档:     {}", p.rank_band),
        format!("竞争程度:     {}", p.competition_level),
        "-".repeat(60),
        format!("分数段名次:   {}", gap.rank_gap),
        format!("考生密度:     {}", gap.candidates_per_percent),
        format!("提分空间:     {}", gap.improvement_potential),
        "-".repeat(60),
        format!("类别:         {}", report.category),
        format!("推荐院校:     {}", report.suggestion.name),
        format!("推荐专业:     {}", report.suggestion.branch),
    ];
    lines.push("=".repeat(60));
    lines.join("\n")
}

/// 渲染文本格式的录取线估计
pub fn render_cutoffs(estimates: &[CutoffEstimate]) -> String {
    let mut lines = vec![report_header("录取线估计"), format!("{:>12}  {:>10}", "目标名次", "综合分")];
    for estimate in estimates {
        lines.push(format!(
            "{:>12}  {:>9.2}%",
            format_rank(estimate.target_rank),
            estimate.expected_aggregate
        ));
    }
    lines.push("=".repeat(60));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::RankEstimator;

    #[test]
    fn test_format_rank() {
        assert_eq!(format_rank(1), "1");
        assert_eq!(format_rank(999), "999");
        assert_eq!(format_rank(1_000), "1,000");
        assert_eq!(format_rank(260_000), "260,000");
        assert_eq!(format_rank(1_234_567), "1,234,567");
    }

    #[test]
    fn test_render_report() {
        let report = RankEstimator::embedded().report(162.0, 96.0, "general").unwrap();
        let text = render_report(&report);
        assert!(text.contains("691"));
        assert!(text.contains("Excellent"));
        assert!(text.contains("MSRIT, PESIT, BMSIT"));
    }

    #[test]
    fn test_render_cutoffs() {
        let estimates = RankEstimator::embedded().cutoff_estimates();
        let text = render_cutoffs(&estimates);
        assert!(text.contains("100,000"));
        assert!(text.contains("82.86%"));
    }
}
