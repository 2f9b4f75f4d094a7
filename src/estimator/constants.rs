//! 录取周期相关的常量
//!
//! 新的招生年度只需要修改这里（或加载外部校准文件），插值逻辑不受影响。

/// 考试卷面满分
pub const EXAM_MAX_SCORE: f64 = 180.0;

/// 考试成绩在综合分中的权重
pub const EXAM_WEIGHT: f64 = 0.6;

/// PUC 成绩在综合分中的权重
pub const PUC_WEIGHT: f64 = 0.4;

/// 校准年度的考生总数
pub const TOTAL_CANDIDATE_POOL: u32 = 260_000;

/// 乐观名次 = 中位名次 × 0.95
pub const LOW_BAND_FACTOR: f64 = 0.95;

/// 保守名次 = 中位名次 × 1.05
pub const HIGH_BAND_FACTOR: f64 = 1.05;

/// 高于校准表最高分时的名次
pub const TOP_RANK: u32 = 1;

/// 低于校准表最低分时的名次估计 (low, medium, high)，以内置考生总数为基准
///
/// medium 等于考生总数；自定义校准表按其考生总数等比缩放。
pub const BOTTOM_TIER_RANKS: (u32, u32, u32) = (250_000, 260_000, 270_000);

/// 高分段固定标签
pub const TOP_TIER_PERCENTILE: &str = "99.99%";
pub const TOP_TIER_COMPETITION: &str = "Extremely High";

/// 低分段固定标签
pub const BOTTOM_TIER_PERCENTILE: &str = "0.00%";
pub const BOTTOM_TIER_COMPETITION: &str = "Very Low";

/// 录取线估计使用的目标名次
pub const CUTOFF_TARGET_RANKS: [u32; 9] = [100, 500, 1_000, 2_500, 5_000, 10_000, 25_000, 50_000, 100_000];
