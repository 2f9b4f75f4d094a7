use crate::error::{AppResult, ConfigError};

/// 程序配置
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// 自定义校准表文件（TOML），为空时使用内置校准表
    pub calibration_file: Option<String>,
    /// 默认考生类别
    pub default_category: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 是否以 JSON 格式输出
    pub output_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            calibration_file: None,
            default_category: "general".to_string(),
            verbose_logging: false,
            output_json: false,
        }
    }
}

impl Config {
    /// 从环境变量读取配置，无法解析的值回退为默认值
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            calibration_file: std::env::var("RANK_CALIBRATION_FILE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .or(default.calibration_file),
            default_category: std::env::var("RANK_DEFAULT_CATEGORY").unwrap_or(default.default_category),
            verbose_logging: std::env::var("VERBOSE_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.verbose_logging),
            output_json: std::env::var("OUTPUT_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.output_json),
        }
    }

    /// 从环境变量读取配置，布尔值无法解析时返回错误
    pub fn try_from_env() -> AppResult<Self> {
        let mut config = Self::from_env();
        config.verbose_logging = parse_bool_var("VERBOSE_LOGGING", config.verbose_logging)?;
        config.output_json = parse_bool_var("OUTPUT_JSON", config.output_json)?;
        Ok(config)
    }
}

fn parse_bool_var(var_name: &str, default: bool) -> AppResult<bool> {
    match std::env::var(var_name) {
        Ok(value) => parse_bool(var_name, &value),
        Err(_) => Ok(default),
    }
}

fn parse_bool(var_name: &str, value: &str) -> AppResult<bool> {
    value.trim().parse().map_err(|_| {
        ConfigError::EnvVarParseFailed {
            var_name: var_name.to_string(),
            value: value.to_string(),
            expected_type: "bool".to_string(),
        }
        .into()
    })
}
