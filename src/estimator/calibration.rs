use crate::error::CalibrationError;
use crate::estimator::constants::{BOTTOM_TIER_RANKS, TOTAL_CANDIDATE_POOL};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// 校准点：某一年度综合分与名次的对应关系
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationPoint {
    /// 综合分 (0-100)
    pub score: f64,
    /// 对应名次 (>= 1)
    pub rank: u32,
}

impl CalibrationPoint {
    pub const fn new(score: f64, rank: u32) -> Self {
        Self { score, rank }
    }
}

/// 内置校准数据，按综合分从高到低排列
pub const EMBEDDED_POINTS: [CalibrationPoint; 14] = [
    CalibrationPoint::new(96.22, 1),
    CalibrationPoint::new(94.06, 308),
    CalibrationPoint::new(90.00, 1_245),
    CalibrationPoint::new(85.00, 3_500),
    CalibrationPoint::new(80.00, 7_000),
    CalibrationPoint::new(75.00, 12_500),
    CalibrationPoint::new(70.00, 20_000),
    CalibrationPoint::new(65.00, 30_000),
    CalibrationPoint::new(60.00, 45_000),
    CalibrationPoint::new(55.00, 65_000),
    CalibrationPoint::new(50.00, 90_000),
    CalibrationPoint::new(45.00, 125_000),
    CalibrationPoint::new(40.00, 170_000),
    CalibrationPoint::new(35.00, 235_000),
];

/// 校准表
///
/// 不变式：至少 2 个点，分数严格递减，名次严格递增。
/// 满足不变式时相邻点对无缝覆盖 [最低分, 最高分]。
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationTable {
    points: Cow<'static, [CalibrationPoint]>,
    candidate_pool: u32,
}

impl Default for CalibrationTable {
    fn default() -> Self {
        Self::embedded()
    }
}

impl CalibrationTable {
    /// 内置校准表
    pub const fn embedded() -> Self {
        Self {
            points: Cow::Borrowed(&EMBEDDED_POINTS),
            candidate_pool: TOTAL_CANDIDATE_POOL,
        }
    }

    /// 创建并校验校准表
    ///
    /// # 参数
    /// - `points`: 按分数从高到低排列的校准点
    /// - `candidate_pool`: 该年度考生总数
    pub fn new(points: Vec<CalibrationPoint>, candidate_pool: u32) -> Result<Self, CalibrationError> {
        validate(&points, candidate_pool)?;
        Ok(Self {
            points: Cow::Owned(points),
            candidate_pool,
        })
    }

    pub fn points(&self) -> &[CalibrationPoint] {
        &self.points
    }

    pub fn candidate_pool(&self) -> u32 {
        self.candidate_pool
    }

    /// 最高分校准点
    pub fn highest(&self) -> CalibrationPoint {
        self.points[0]
    }

    /// 最低分校准点
    pub fn lowest(&self) -> CalibrationPoint {
        self.points[self.points.len() - 1]
    }

    /// 低于最低分时的名次估计 (low, medium, high)
    ///
    /// medium 等于考生总数，不小于表中任何名次，保证名次随综合分单调。
    pub fn bottom_tier(&self) -> (u32, u32, u32) {
        let (low, base, high) = BOTTOM_TIER_RANKS;
        let scale = |rank: u32| -> u32 {
            let pool = u64::from(self.candidate_pool);
            let base = u64::from(base);
            u32::try_from((pool * u64::from(rank) + base / 2) / base).unwrap_or(u32::MAX)
        };
        (scale(low), self.candidate_pool, scale(high))
    }

    /// 分段线性插值
    ///
    /// 从高分端开始扫描，第一个满足 `next.score <= composite <= current.score` 的点对生效。
    ///
    /// # 返回
    /// 未命中任何点对时返回 `None`（仅在校准表不连续时出现）
    pub fn interpolate(&self, composite: f64) -> Option<f64> {
        self.points.windows(2).find_map(|pair| {
            let (current, next) = (pair[0], pair[1]);
            if next.score <= composite && composite <= current.score {
                let score_diff = current.score - next.score;
                let rank_diff = f64::from(next.rank) - f64::from(current.rank);
                let score_offset = current.score - composite;
                Some(f64::from(current.rank) + (score_offset / score_diff) * rank_diff)
            } else {
                None
            }
        })
    }

    /// 与综合分距离最近的校准点
    pub fn nearest(&self, composite: f64) -> CalibrationPoint {
        self.points
            .iter()
            .copied()
            .min_by(|a, b| {
                (a.score - composite)
                    .abs()
                    .total_cmp(&(b.score - composite).abs())
            })
            .unwrap_or_else(|| self.highest())
    }

    /// 反向插值：达到目标名次所需的综合分
    ///
    /// 目标名次超出校准表范围时取端点分数
    pub fn score_for_rank(&self, rank: u32) -> f64 {
        let highest = self.highest();
        let lowest = self.lowest();
        if rank <= highest.rank {
            return highest.score;
        }
        if rank >= lowest.rank {
            return lowest.score;
        }

        self.points
            .windows(2)
            .find_map(|pair| {
                let (current, next) = (pair[0], pair[1]);
                if current.rank <= rank && rank <= next.rank {
                    let rank_offset = f64::from(rank - current.rank);
                    let rank_diff = f64::from(next.rank - current.rank);
                    Some(current.score - (rank_offset / rank_diff) * (current.score - next.score))
                } else {
                    None
                }
            })
            .unwrap_or(lowest.score)
    }
}

/// 校验校准点序列
pub fn validate(points: &[CalibrationPoint], candidate_pool: u32) -> Result<(), CalibrationError> {
    if points.len() < 2 {
        return Err(CalibrationError::TooFewPoints { count: points.len() });
    }

    let mut previous: Option<CalibrationPoint> = None;
    for (index, point) in points.iter().enumerate() {
        if !(0.0..=100.0).contains(&point.score) {
            return Err(CalibrationError::ScoreOutOfRange {
                index,
                score: point.score,
            });
        }

        let previous_rank = previous.map_or(0, |p| p.rank);
        if point.rank <= previous_rank {
            return Err(CalibrationError::NonMonotonicRank {
                index,
                rank: point.rank,
                previous: previous_rank,
            });
        }

        if let Some(prev) = previous {
            if point.score >= prev.score {
                return Err(CalibrationError::NonMonotonicScore {
                    index,
                    score: point.score,
                    previous: prev.score,
                });
            }
        }

        previous = Some(*point);
    }

    let max_rank = points[points.len() - 1].rank;
    if candidate_pool < max_rank {
        return Err(CalibrationError::InvalidPool {
            pool: candidate_pool,
            max_rank,
        });
    }

    Ok(())
}
