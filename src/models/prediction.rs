use crate::models::Category;
use serde::{Deserialize, Serialize};

/// 名次预测结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankPrediction {
    /// 乐观估计（名次数值较小）
    pub low: u32,
    /// 中位估计
    pub medium: u32,
    /// 保守估计
    pub high: u32,
    /// 综合分 (0-100)
    pub composite: f64,
    /// 百分位，如 "99.62%"
    pub percentile: String,
    pub rank_band: String,
    pub competition_level: String,
}

/// 分数段名次分布分析
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankGapAnalysis {
    /// 该分数段对应的名次范围
    pub rank_gap: &'static str,
    /// 每 1% 综合分对应的考生数量
    pub candidates_per_percent: &'static str,
    pub competition_level: &'static str,
    pub improvement_potential: &'static str,
}

/// 院校推荐
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CollegeSuggestion {
    pub name: &'static str,
    pub branch: &'static str,
}

/// 录取线估计
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CutoffEstimate {
    pub target_rank: u32,
    /// 达到目标名次所需的综合分
    pub expected_aggregate: f64,
}

/// 完整预测报告
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionReport {
    pub category: Category,
    pub prediction: RankPrediction,
    /// 粗粒度百分位区间，如 "Top 1%"
    pub percentile_range: &'static str,
    pub gap_analysis: RankGapAnalysis,
    pub suggestion: CollegeSuggestion,
}
