//! # Rank Estimator
//!
//! 入学考试名次预测工具：由考试成绩 (0-180) 与 PUC 成绩 (0-100) 计算综合分，
//! 在校准表上分段线性插值得到预计名次，并给出百分位、名次分档、竞争程度
//! 与分类别的院校推荐。
//!
//! ## 模块结构
//!
//! - `estimator/` - 纯计算核心，无 I/O，可在任意线程并发调用
//! - `models/` - 结果类型、考生类别、校准文件加载
//! - `config` / `error` / `logger` - 配置、错误类型、日志初始化
//! - `app` / `cli` - 命令行程序的编排与参数解析
//! - `utils/` - 日志与报告渲染辅助函数

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod estimator;
pub mod logger;
pub mod models;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult, CalibrationError};
pub use estimator::{
    calculate_percentile, college_suggestions, competition_level, composite_score, cutoff_estimates,
    percentile_label, predict_rank, rank_band, rank_gap_analysis, CalibrationPoint, CalibrationTable, RankEstimator,
};
pub use models::{Category, CollegeSuggestion, CutoffEstimate, PredictionReport, RankGapAnalysis, RankPrediction};
