// target.rs
use url::Url;

/// 一次扫描的目标：基础 URL 加候选文件名（按顺序，允许重复）
#[derive(Debug, Clone)]
pub struct ScanTarget {
    pub base_url: String,
    pub files: Vec<String>,
}

impl ScanTarget {
    pub fn new(base_url: impl Into<String>, files: Vec<String>) -> Self {
        Self { base_url: base_url.into(), files }
    }
}

/// 拼接基础 URL 与文件名，中间恰好保留一个 `/`
///
/// 只去掉基础 URL 末尾的一个斜杠和文件名开头的一个斜杠，不做 `..` 归一化也不做百分号编码。
pub fn join_url(base: &str, filename: &str) -> String {
    let base = base.strip_suffix('/').unwrap_or(base);
    let filename = filename.strip_prefix('/').unwrap_or(filename);
    format!("{}/{}", base, filename)
}

/// URL 必须能解析出协议和非空主机
pub fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => url.host_str().is_some_and(|host| !host.is_empty()),
        Err(_) => false,
    }
}
