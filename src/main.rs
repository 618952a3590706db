use anyhow::Result;
use structopt::StructOpt;
use sensitive_file_scan::function::logging::init_logging;
use sensitive_file_scan::function::scanner::run_scan;
use sensitive_file_scan::function::{Config, ScanError};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. 解析命令行参数
    let config = Config::from_args();
    init_logging(config.verbose);

    // 2. 执行扫描，只有配置错误会以非零状态退出
    match run_scan(config).await {
        Ok(_report) => Ok(()),
        Err(ScanError::InvalidConfig(msg)) => {
            tracing::error!("{}", msg);
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
