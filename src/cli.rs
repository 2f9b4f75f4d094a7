use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rank-estimator")]
#[command(about = "Entrance exam rank predictor", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Exam score (0-180)
    #[arg(required_unless_present = "cutoffs", allow_negative_numbers = true)]
    pub exam_score: Option<f64>,

    /// PUC percentage (0-100)
    #[arg(required_unless_present = "cutoffs", allow_negative_numbers = true)]
    pub puc_score: Option<f64>,

    /// Candidate category (general, obc, sc, st)
    #[arg(short, long, env = "RANK_DEFAULT_CATEGORY")]
    pub category: Option<String>,

    /// Calibration table for a different admissions cycle (TOML)
    #[arg(long, env = "RANK_CALIBRATION_FILE")]
    pub calibration: Option<PathBuf>,

    /// Print expected aggregates for common target ranks
    #[arg(long)]
    pub cutoffs: bool,

    /// Output JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// 用命令行参数覆盖环境配置
    pub fn apply(&self, config: &mut crate::config::Config) {
        if let Some(category) = &self.category {
            config.default_category = category.clone();
        }
        if let Some(path) = &self.calibration {
            config.calibration_file = Some(path.to_string_lossy().to_string());
        }
        config.output_json |= self.json;
        config.verbose_logging |= self.verbose;
    }
}
