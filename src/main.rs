use anyhow::Result;
use clap::Parser;
use rank_estimator::app::{App, Request};
use rank_estimator::cli::Cli;
use rank_estimator::config::Config;
use rank_estimator::logger;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let mut config = Config::try_from_env()?;
    cli.apply(&mut config);

    // 初始化日志
    logger::init_with_verbose(config.verbose_logging);

    let request = match (cli.cutoffs, cli.exam_score, cli.puc_score) {
        (false, Some(exam_score), Some(puc_score)) => Request::Predict { exam_score, puc_score },
        _ => Request::Cutoffs,
    };

    // 初始化并运行应用
    App::initialize(config).await?.run(&request)?;

    Ok(())
}
