// config.rs
use structopt::StructOpt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use super::ScanError;
use super::target::{is_valid_url, ScanTarget};

/// 默认检测的常见敏感文件
pub const DEFAULT_FILES: &[&str] = &[
    ".env",
    "docker-compose.yml",
    "config.php",
    "wp-config.php",
    ".git/config",
    "application.yml",
    "application.properties",
    "database.yml",
    "web.config",
    "config.ini",
    "secrets.yml",
];

/// 输出文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("不支持的输出格式: {} (可选 text, json)", other)),
        }
    }
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "sensitive_file_scan",
    about = "探测网站上是否公开暴露了常见的敏感文件（配置文件、环境变量文件、版本控制元数据等）"
)]
pub struct Config {
    /// 目标 URL (例如: http://example.com)
    pub url: String,

    /// 要检测的文件列表 (覆盖默认列表)
    #[structopt(short, long, min_values = 1)]
    pub files: Option<Vec<String>>,

    /// 请求超时时间 (秒)
    #[structopt(short, long, default_value = "5")]
    pub timeout: u64,

    /// 输出调试日志
    #[structopt(short, long)]
    pub verbose: bool,

    /// 结果输出文件路径
    #[structopt(short, long)]
    pub output: Option<PathBuf>,

    /// 输出文件格式 (text 或 json)
    #[structopt(long, default_value = "text")]
    pub format: OutputFormat,

    /// 每个命中文件最多保存的响应体字节数，不指定则完整保存
    #[structopt(long)]
    pub max_body_size: Option<usize>,
}

impl Config {
    pub fn validate(&self) -> Result<(), ScanError> {
        // 目标url格式验证
        if !is_valid_url(&self.url) {
            return Err(ScanError::InvalidConfig(
                "URL无效，请提供完整的URL (例如 http://example.com)".to_string(),
            ));
        }

        Ok(())
    }

    /// 用户指定的文件列表，未指定时使用默认列表
    pub fn file_list(&self) -> Vec<String> {
        match &self.files {
            Some(files) => files.clone(),
            None => DEFAULT_FILES.iter().map(|f| f.to_string()).collect(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn scan_target(&self) -> ScanTarget {
        ScanTarget::new(self.url.clone(), self.file_list())
    }
}
