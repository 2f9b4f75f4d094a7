pub mod category;
pub mod loaders;
pub mod prediction;

pub use category::Category;
pub use loaders::{load_calibration_file, parse_calibration_toml, CalibrationFile};
pub use prediction::{CollegeSuggestion, CutoffEstimate, PredictionReport, RankGapAnalysis, RankPrediction};
