use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 输入分数无法得到合法的综合分
    #[error("输入无效: {message}")]
    InvalidInput { composite: f64, message: String },
    /// 校准表数据错误
    #[error("校准表错误: {0}")]
    Calibration(#[from] CalibrationError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 校准表错误
///
/// 校准表必须按分数严格递减、名次严格递增排列，否则插值结果不确定
#[derive(Debug, Error, PartialEq)]
pub enum CalibrationError {
    /// 数据点不足以构成插值区间
    #[error("校准表至少需要 2 个数据点，实际 {count} 个")]
    TooFewPoints { count: usize },
    /// 分数不在 [0, 100] 内
    #[error("第 {index} 个数据点的分数 {score} 不在 [0, 100] 范围内")]
    ScoreOutOfRange { index: usize, score: f64 },
    /// 分数没有严格递减
    #[error("第 {index} 个数据点的分数 {score} 未低于上一个分数 {previous}")]
    NonMonotonicScore {
        index: usize,
        score: f64,
        previous: f64,
    },
    /// 名次没有严格递增（或名次为 0）
    #[error("第 {index} 个数据点的名次 {rank} 未高于上一个名次 {previous}")]
    NonMonotonicRank { index: usize, rank: u32, previous: u32 },
    /// 考生总数小于表中最大名次
    #[error("考生总数 {pool} 小于校准表中的最大名次 {max_rank}")]
    InvalidPool { pool: u32, max_rank: u32 },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 文件不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

// ========== 从常见错误类型转换 ==========

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::File(FileError::TomlParseFailed {
            path: String::new(), // TOML错误通常不包含路径信息
            source: err,
        })
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: String::new(),
            source: err,
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建综合分越界错误，消息中提示合法的输入范围
    pub fn invalid_composite(composite: f64) -> Self {
        AppError::InvalidInput {
            composite,
            message: format!(
                "综合分 {} 不在 [0, 100] 范围内，请确认考试分数在 0-180 之间、PUC 分数在 0-100 之间",
                composite
            ),
        }
    }

    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建 TOML 解析错误
    pub fn toml_parse_failed(path: impl Into<String>, source: toml::de::Error) -> Self {
        AppError::File(FileError::TomlParseFailed {
            path: path.into(),
            source,
        })
    }

    /// 是否为输入错误
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, AppError::InvalidInput { .. })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_composite_message_mentions_ranges() {
        let err = AppError::invalid_composite(120.0);
        let text = err.to_string();
        assert!(err.is_invalid_input());
        assert!(text.contains("120"));
        assert!(text.contains("0-180"));
        assert!(text.contains("0-100"));
    }

    #[test]
    fn test_calibration_error_converts() {
        let err: AppError = CalibrationError::TooFewPoints { count: 1 }.into();
        assert!(matches!(err, AppError::Calibration(CalibrationError::TooFewPoints { count: 1 })));
        assert!(!err.is_invalid_input());
    }
}
