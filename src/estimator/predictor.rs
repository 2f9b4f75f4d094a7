use crate::error::{AppError, AppResult};
use crate::estimator::calibration::CalibrationTable;
use crate::estimator::constants::{
    BOTTOM_TIER_COMPETITION, BOTTOM_TIER_PERCENTILE, CUTOFF_TARGET_RANKS, EXAM_MAX_SCORE,
    EXAM_WEIGHT, HIGH_BAND_FACTOR, LOW_BAND_FACTOR, PUC_WEIGHT, TOP_RANK, TOP_TIER_COMPETITION, TOP_TIER_PERCENTILE,
};
use crate::estimator::labels;
use crate::models::{Category, CutoffEstimate, PredictionReport, RankPrediction};
use tracing::{debug, warn};

/// 计算综合分
///
/// # 参数
/// - `exam_score`: 考试原始分 (0-180)
/// - `puc_score`: PUC 百分制成绩 (0-100)
pub fn composite_score(exam_score: f64, puc_score: f64) -> f64 {
    let exam_percentage = exam_score / EXAM_MAX_SCORE * 100.0;
    EXAM_WEIGHT * exam_percentage + PUC_WEIGHT * puc_score
}

/// 由中位名次推出上下浮动的名次区间
fn band_around(medium: u32) -> (u32, u32, u32) {
    let m = f64::from(medium);
    ((m * LOW_BAND_FACTOR).round() as u32, medium, (m * HIGH_BAND_FACTOR).round() as u32)
}

/// 名次预测器
///
/// 只读持有一份校准表，可在任意线程间共享。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankEstimator {
    table: CalibrationTable,
}

impl RankEstimator {
    pub fn new(table: CalibrationTable) -> Self {
        Self { table }
    }

    /// 使用内置校准表
    pub const fn embedded() -> Self {
        Self {
            table: CalibrationTable::embedded(),
        }
    }

    pub fn table(&self) -> &CalibrationTable {
        &self.table
    }

    /// 由两项原始成绩预测名次
    pub fn predict(&self, exam_score: f64, puc_score: f64) -> AppResult<RankPrediction> {
        self.predict_composite(composite_score(exam_score, puc_score))
    }

    /// 由综合分预测名次
    ///
    /// 综合分不是 [0, 100] 内的数字时返回 `AppError::InvalidInput`
    pub fn predict_composite(&self, composite: f64) -> AppResult<RankPrediction> {
        if composite.is_nan() || !(0.0..=100.0).contains(&composite) {
            return Err(AppError::invalid_composite(composite));
        }

        let highest = self.table.highest();
        let lowest = self.table.lowest();

        if composite >= highest.score {
            debug!("综合分 {:.2} 不低于校准表最高分 {:.2}", composite, highest.score);
            return Ok(RankPrediction {
                low: TOP_RANK,
                medium: TOP_RANK,
                high: TOP_RANK,
                composite,
                percentile: TOP_TIER_PERCENTILE.to_string(),
                rank_band: labels::rank_band(TOP_RANK).to_string(),
                competition_level: TOP_TIER_COMPETITION.to_string(),
            });
        }

        if composite <= lowest.score {
            debug!("综合分 {:.2} 不高于校准表最低分 {:.2}", composite, lowest.score);
            let (low, medium, high) = self.table.bottom_tier();
            return Ok(RankPrediction {
                low,
                medium,
                high,
                composite,
                percentile: BOTTOM_TIER_PERCENTILE.to_string(),
                rank_band: labels::rank_band(medium).to_string(),
                competition_level: BOTTOM_TIER_COMPETITION.to_string(),
            });
        }

        let medium = match self.table.interpolate(composite) {
            Some(rank) => {
                debug!("综合分 {:.2} 插值名次 {:.1}", composite, rank);
                rank.round() as u32
            }
            None => {
                let nearest = self.table.nearest(composite);
                warn!(
                    "综合分 {:.2} 未命中任何插值区间，使用最近校准点 ({:.2}, {})，校准数据可能有误",
                    composite, nearest.score, nearest.rank
                );
                nearest.rank
            }
        };

        let (low, medium, high) = band_around(medium);
        Ok(RankPrediction {
            low,
            medium,
            high,
            composite,
            percentile: self.calculate_percentile(medium),
            rank_band: labels::rank_band(medium).to_string(),
            competition_level: labels::competition_level(composite).to_string(),
        })
    }

    /// 按当前校准表的考生总数计算百分位
    pub fn calculate_percentile(&self, rank: u32) -> String {
        labels::percentile_in_pool(rank, self.table.candidate_pool())
    }

    /// 各目标名次所需的综合分
    pub fn cutoff_estimates(&self) -> Vec<CutoffEstimate> {
        CUTOFF_TARGET_RANKS
            .iter()
            .map(|&target_rank| CutoffEstimate {
                target_rank,
                expected_aggregate: (self.table.score_for_rank(target_rank) * 100.0).round() / 100.0,
            })
            .collect()
    }

    /// 生成完整预测报告
    pub fn report(&self, exam_score: f64, puc_score: f64, category: &str) -> AppResult<PredictionReport> {
        let prediction = self.predict(exam_score, puc_score)?;
        let category = Category::resolve(category);
        let composite = prediction.composite;

        Ok(PredictionReport {
            category,
            percentile_range: labels::percentile_label(composite),
            gap_analysis: labels::rank_gap_analysis(composite),
            suggestion: labels::suggestions_for(prediction.medium, category),
            prediction,
        })
    }
}
