//! 日志初始化：输出到 stderr，`RUST_LOG` 优先于命令行参数。

use tracing_subscriber::EnvFilter;

/// 默认 info 级别，`verbose` 为真时切换到 debug。整个进程只调用一次。
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "info,sensitive_file_scan=debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // 已经初始化过时忽略错误
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
