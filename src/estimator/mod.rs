//! 名次预测
//!
//! - `calibration` - 校准表与分段线性插值
//! - `ladder` - 通用阈值阶梯
//! - `labels` - 名次分档、竞争程度、百分位、院校推荐
//! - `predictor` - `RankEstimator`，综合分计算与名次预测
//!
//! 下列函数使用内置校准表，与 `RankEstimator::embedded()` 等价。

pub mod calibration;
pub mod constants;
pub mod ladder;
pub mod labels;
pub mod predictor;

pub use calibration::{CalibrationPoint, CalibrationTable};
pub use labels::{
    calculate_percentile, college_suggestions, competition_level, percentile_label, rank_band, rank_gap_analysis,
};
pub use predictor::{composite_score, RankEstimator};

use crate::error::AppResult;
use crate::models::{CutoffEstimate, RankPrediction};

static EMBEDDED: RankEstimator = RankEstimator::embedded();

/// 使用内置校准表预测名次
pub fn predict_rank(exam_score: f64, puc_score: f64) -> AppResult<RankPrediction> {
    EMBEDDED.predict(exam_score, puc_score)
}

/// 使用内置校准表估计录取线
pub fn cutoff_estimates() -> Vec<CutoffEstimate> {
    EMBEDDED.cutoff_estimates()
}
