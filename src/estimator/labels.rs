//! 描述性标签
//!
//! 这些函数只依赖数值结果，与插值路径无关。
//! 注意 `rank_band` 按名次分档，`competition_level` 按综合分分档，两者互不相关。

use crate::estimator::constants::TOTAL_CANDIDATE_POOL;
use crate::estimator::ladder::{Comparison, Ladder};
use crate::models::{Category, CollegeSuggestion, RankGapAnalysis};

static RANK_BANDS: Ladder<u32, &str> = Ladder::new(
    Comparison::AtMost,
    &[
        (200, "Elite"),
        (1_200, "Excellent"),
        (3_000, "Very Good"),
        (8_000, "Good"),
        (16_000, "Above Average"),
        (30_000, "Average"),
        (50_000, "Below Average"),
        (80_000, "Lower"),
        (155_000, "Poor"),
    ],
    "Very Poor",
);

static COMPETITION_LEVELS: Ladder<f64, &str> = Ladder::new(
    Comparison::AtLeast,
    &[
        (95.0, "Extremely High"),
        (90.0, "Very High"),
        (80.0, "High"),
        (70.0, "Moderate"),
        (60.0, "Low"),
    ],
    "Very Low",
);

static PERCENTILE_RANGES: Ladder<f64, &str> = Ladder::new(
    Comparison::AtLeast,
    &[
        (95.0, "Top 0.1%"),
        (90.0, "Top 1%"),
        (85.0, "Top 2%"),
        (80.0, "Top 5%"),
        (70.0, "Top 10%"),
        (60.0, "Top 20%"),
        (50.0, "Top 35%"),
        (45.0, "Top 50%"),
    ],
    "Below 50%",
);

static IMPROVEMENT_POTENTIAL: Ladder<f64, &str> =
    Ladder::new(Comparison::AtLeast, &[(80.0, "Limited"), (60.0, "Moderate")], "High");

/// 综合分段对应的名次分布
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapBucket {
    pub range: &'static str,
    pub rank_gap: &'static str,
    pub candidates_per_percent: &'static str,
}

const fn bucket(range: &'static str, rank_gap: &'static str, candidates_per_percent: &'static str) -> GapBucket {
    GapBucket {
        range,
        rank_gap,
        candidates_per_percent,
    }
}

const GAP_STEPS: &[(f64, GapBucket)] = &[
    (95.0, bucket("95-100%", "1 - 175", "~35 candidates per 1%")),
    (90.0, bucket("90-95%", "175 - 1,245", "~215 candidates per 1%")),
    (85.0, bucket("85-90%", "1,245 - 3,500", "~450 candidates per 1%")),
    (80.0, bucket("80-85%", "3,500 - 7,000", "~700 candidates per 1%")),
    (75.0, bucket("75-80%", "7,000 - 12,500", "~1,100 candidates per 1%")),
    (70.0, bucket("70-75%", "12,500 - 20,000", "~1,500 candidates per 1%")),
    (60.0, bucket("60-70%", "20,000 - 45,000", "~2,500 candidates per 1%")),
    (50.0, bucket("50-60%", "45,000 - 90,000", "~4,500 candidates per 1%")),
];

static GAP_BUCKETS: Ladder<f64, GapBucket> = Ladder::new(
    Comparison::AtLeast,
    GAP_STEPS,
    bucket("0-50%", "90,000+", "~8,000+ candidates per 1%"),
);

// ========== 院校推荐 ==========

const fn college(name: &'static str, branch: &'static str) -> CollegeSuggestion {
    CollegeSuggestion { name, branch }
}

const TIER_1: CollegeSuggestion = college("RVCE, UVCE, BMSCE", "CSE, ISE, ECE");
const TIER_2: CollegeSuggestion = college("MSRIT, PESIT, BMSIT", "CSE, ECE, ISE");
const TIER_3: CollegeSuggestion = college("DSCE, NMIT, RNSIT", "CSE, ISE, ECE");
const TIER_4: CollegeSuggestion = college("SIT Tumkur, NIE Mysore, JSSSTU", "CSE, ECE, EEE");
const TIER_5: CollegeSuggestion = college("BIT, CMRIT, Sir MVIT", "ECE, EEE, Mechanical");
const TIER_6: CollegeSuggestion = college("KLE Tech, SDMCET, Acharya", "EEE, Mechanical, Civil");
const TIER_7: CollegeSuggestion = college("AIT, GAT, Dr. AIT", "Mechanical, Civil, Chemical");
const TIER_8: CollegeSuggestion = college("Regional private colleges", "Civil, Mechanical");

/// 名次超出所有阈值时的推荐
pub const OTHER_COLLEGES: CollegeSuggestion = college("Other colleges", "All branches");

static GENERAL_SUGGESTIONS: Ladder<u32, CollegeSuggestion> = Ladder::new(
    Comparison::AtMost,
    &[
        (200, TIER_1),
        (1_200, TIER_2),
        (3_000, TIER_3),
        (8_000, TIER_4),
        (16_000, TIER_5),
        (30_000, TIER_6),
        (50_000, TIER_7),
        (80_000, TIER_8),
    ],
    OTHER_COLLEGES,
);

static OBC_SUGGESTIONS: Ladder<u32, CollegeSuggestion> = Ladder::new(
    Comparison::AtMost,
    &[
        (300, TIER_1),
        (1_800, TIER_2),
        (4_500, TIER_3),
        (12_000, TIER_4),
        (24_000, TIER_5),
        (45_000, TIER_6),
        (75_000, TIER_7),
        (120_000, TIER_8),
    ],
    OTHER_COLLEGES,
);

static SC_SUGGESTIONS: Ladder<u32, CollegeSuggestion> = Ladder::new(
    Comparison::AtMost,
    &[
        (600, TIER_1),
        (3_600, TIER_2),
        (9_000, TIER_3),
        (24_000, TIER_4),
        (48_000, TIER_5),
        (90_000, TIER_6),
        (150_000, TIER_7),
        (200_000, TIER_8),
    ],
    OTHER_COLLEGES,
);

static ST_SUGGESTIONS: Ladder<u32, CollegeSuggestion> = Ladder::new(
    Comparison::AtMost,
    &[
        (700, TIER_1),
        (4_200, TIER_2),
        (10_500, TIER_3),
        (28_000, TIER_4),
        (56_000, TIER_5),
        (105_000, TIER_6),
        (175_000, TIER_7),
        (230_000, TIER_8),
    ],
    OTHER_COLLEGES,
);

fn suggestion_table(category: Category) -> &'static Ladder<u32, CollegeSuggestion> {
    match category {
        Category::General => &GENERAL_SUGGESTIONS,
        Category::Obc => &OBC_SUGGESTIONS,
        Category::Sc => &SC_SUGGESTIONS,
        Category::St => &ST_SUGGESTIONS,
    }
}

// ========== 分类函数 ==========

/// 名次分档
pub fn rank_band(rank: u32) -> &'static str {
    *RANK_BANDS.lookup(rank)
}

/// 按综合分判断竞争程度
pub fn competition_level(composite: f64) -> &'static str {
    *COMPETITION_LEVELS.lookup(composite)
}

/// 按综合分给出粗粒度百分位区间
pub fn percentile_label(composite: f64) -> &'static str {
    *PERCENTILE_RANGES.lookup(composite)
}

/// 提分空间
pub fn improvement_potential(composite: f64) -> &'static str {
    *IMPROVEMENT_POTENTIAL.lookup(composite)
}

/// 综合分所在的分数段
pub fn gap_bucket(composite: f64) -> &'static GapBucket {
    GAP_BUCKETS.lookup(composite)
}

/// 按内置考生总数计算百分位
///
/// # 返回
/// 保留两位小数并带 `%` 的字符串，如 `"99.62%"`
pub fn calculate_percentile(rank: u32) -> String {
    percentile_in_pool(rank, TOTAL_CANDIDATE_POOL)
}

/// 按指定考生总数计算百分位
pub fn percentile_in_pool(rank: u32, candidate_pool: u32) -> String {
    let pool = f64::from(candidate_pool);
    let percentile = (pool - f64::from(rank)) / pool * 100.0;
    format!("{:.2}%", percentile)
}

/// 综合分段名次分布分析
pub fn rank_gap_analysis(composite: f64) -> RankGapAnalysis {
    let bucket = gap_bucket(composite);
    RankGapAnalysis {
        rank_gap: bucket.rank_gap,
        candidates_per_percent: bucket.candidates_per_percent,
        competition_level: competition_level(composite),
        improvement_potential: improvement_potential(composite),
    }
}

/// 按类别推荐院校
///
/// # 参数
/// - `rank`: 预测名次
/// - `category`: 类别字符串，无法识别时按 general 处理
pub fn college_suggestions(rank: u32, category: &str) -> CollegeSuggestion {
    suggestions_for(rank, Category::resolve(category))
}

pub fn suggestions_for(rank: u32, category: Category) -> CollegeSuggestion {
    *suggestion_table(category).lookup(rank)
}
