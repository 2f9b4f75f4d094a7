use crate::config::Config;
use crate::estimator::{CalibrationTable, RankEstimator};
use crate::models::load_calibration_file;
use crate::utils::logging::{log_prediction, log_startup, render_cutoffs, render_report};
use anyhow::{Context, Result};
use std::path::Path;

/// 单次运行的请求
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// 预测名次
    Predict { exam_score: f64, puc_score: f64 },
    /// 录取线估计
    Cutoffs,
}

/// 应用主结构
pub struct App {
    config: Config,
    estimator: RankEstimator,
}

impl App {
    /// 初始化应用，按配置加载校准表
    pub async fn initialize(config: Config) -> Result<Self> {
        let (table, source) = match &config.calibration_file {
            Some(path) => {
                let table = load_calibration_file(Path::new(path))
                    .await
                    .with_context(|| format!("无法加载校准文件: {}", path))?;
                (table, path.clone())
            }
            None => (CalibrationTable::embedded(), "内置".to_string()),
        };

        log_startup(&source, table.candidate_pool());

        Ok(Self {
            config,
            estimator: RankEstimator::new(table),
        })
    }

    /// 执行请求并返回渲染后的输出
    pub fn render(&self, request: &Request) -> Result<String> {
        match *request {
            Request::Predict { exam_score, puc_score } => {
                let report = self
                    .estimator
                    .report(exam_score, puc_score, &self.config.default_category)?;
                log_prediction(exam_score, puc_score, &report.prediction);

                if self.config.output_json {
                    Ok(serde_json::to_string_pretty(&report)?)
                } else {
                    Ok(render_report(&report))
                }
            }
            Request::Cutoffs => {
                let estimates = self.estimator.cutoff_estimates();
                if self.config.output_json {
                    Ok(serde_json::to_string_pretty(&estimates)?)
                } else {
                    Ok(render_cutoffs(&estimates))
                }
            }
        }
    }

    /// 运行应用主逻辑
    pub fn run(&self, request: &Request) -> Result<()> {
        let output = self.render(request)?;
        println!("{}", output);
        Ok(())
    }
}
