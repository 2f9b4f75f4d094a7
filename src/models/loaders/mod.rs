pub mod toml_loader;

pub use toml_loader::{load_calibration_file, parse_calibration_toml, CalibrationFile};
