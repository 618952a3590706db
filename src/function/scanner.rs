// scanner.rs
use super::probe::{build_client, probe_file, Fetch, HttpFetcher};
use super::report::{ScanMeta, ScanReport};
use super::target::ScanTarget;
use super::{Config, ScanError};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

pub async fn run_scan(config: Config) -> Result<ScanReport, ScanError> {
    // 验证配置
    config.validate()?;

    // 初始化客户端
    let client = build_client(config.timeout())?;
    let fetcher = HttpFetcher::new(client).with_max_body_size(config.max_body_size);

    let target = config.scan_target();
    info!("Starting scan for {}...", target.base_url);
    if config.timeout == 0 {
        warn!("超时时间为0秒，所有请求都会超时并视为未找到");
    }

    // 详细模式下日志较多，不显示进度条
    let pb = if config.verbose {
        ProgressBar::hidden()
    } else {
        new_progress_bar(target.files.len())
    };

    let start_time = Instant::now();
    let report = scan(&fetcher, &target, config.timeout(), &pb).await;
    pb.finish_and_clear();

    // 打印摘要
    print_summary(&report);

    if let Some(output) = &config.output {
        let meta = ScanMeta {
            target: target.base_url.clone(),
            files_probed: target.files.len(),
            duration_ms: duration_ms(start_time.elapsed()),
        };
        // 写文件失败不影响退出码
        if let Err(e) = report.write_to(output, config.format, &meta) {
            error!("Error writing to output file: {}", e);
        }
    }

    Ok(report)
}

/// 依次探测每个文件，只收集命中的结果
///
/// 单个文件失败不会中断扫描，命中也不会提前结束。
/// 扫描过程中的 info/error 日志在进度条暂停时输出，避免与进度条混在一起。
pub async fn scan<F: Fetch>(
    fetcher: &F,
    target: &ScanTarget,
    timeout: Duration,
    pb: &ProgressBar,
) -> ScanReport {
    let mut report = ScanReport::new();

    for filename in &target.files {
        pb.set_message(filename.clone());

        let result = probe_file(fetcher, &target.base_url, filename, timeout).await;
        if result.found {
            pb.suspend(|| {
                info!(
                    "Found: {} (Status Code: {})",
                    result.resolved_url,
                    result.status.unwrap_or(200)
                )
            });
            let final_url = result.final_url.unwrap_or_else(|| result.resolved_url.clone());
            report.insert(result.resolved_url, final_url, result.body.unwrap_or_default());
        } else if result.error_kind.is_some_and(|kind| !kind.is_transport()) {
            pb.suspend(|| {
                error!(
                    "An unexpected error occurred while checking {}: {}",
                    filename,
                    result.error_message.as_deref().unwrap_or_default()
                )
            });
        }

        pb.inc(1);
    }

    report
}

/// 毫秒数超出 u64 时取最大值
fn duration_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

fn new_progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("##-");
    pb.set_style(style);
    pb
}

fn print_summary(report: &ScanReport) {
    if report.is_empty() {
        info!("No sensitive files were found.");
        return;
    }

    info!("The following potentially sensitive files were found:");
    for file in report.files() {
        if file.final_url != file.url {
            info!("- {} (-> {})", file.url, file.final_url);
        } else {
            info!("- {}", file.url);
        }
    }
}
