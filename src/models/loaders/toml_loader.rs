use crate::error::{AppError, AppResult, FileError};
use crate::estimator::calibration::{CalibrationPoint, CalibrationTable};
use crate::estimator::constants::TOTAL_CANDIDATE_POOL;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

/// 校准文件格式
///
/// ```toml
/// candidate_pool = 260000
///
/// [[points]]
/// score = 96.22
/// rank = 1
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationFile {
    /// 考生总数，缺省时使用内置值
    #[serde(default = "default_pool")]
    pub candidate_pool: u32,
    pub points: Vec<CalibrationPoint>,
}

fn default_pool() -> u32 {
    TOTAL_CANDIDATE_POOL
}

impl CalibrationFile {
    /// 校验并转换为校准表
    pub fn into_table(self) -> AppResult<CalibrationTable> {
        Ok(CalibrationTable::new(self.points, self.candidate_pool)?)
    }
}

/// 从 TOML 文本解析校准表
pub fn parse_calibration_toml(content: &str) -> AppResult<CalibrationTable> {
    let file: CalibrationFile = toml::from_str(content)?;
    file.into_table()
}

/// 从 TOML 文件加载校准表
pub async fn load_calibration_file(path: &Path) -> AppResult<CalibrationTable> {
    let path_str = path.display().to_string();
    if !path.exists() {
        return Err(FileError::NotFound { path: path_str }.into());
    }

    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(path_str.clone(), e))?;

    let file: CalibrationFile =
        toml::from_str(&content).map_err(|e| AppError::toml_parse_failed(path_str.clone(), e))?;

    let table = file.into_table()?;
    tracing::info!(
        "成功加载校准表 {}: {} 个数据点, 考生总数 {}",
        path_str,
        table.points().len(),
        table.candidate_pool()
    );

    Ok(table)
}
