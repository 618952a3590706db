use super::config::OutputFormat;
use super::ScanError;
use chrono::Local;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// 结果块之间的分隔线
const SEPARATOR_WIDTH: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoundFile {
    pub url: String,
    /// 跟随重定向后的地址
    pub final_url: String,
    pub body: String,
}

/// 命中结果：URL 到响应体的映射，保持探测顺序
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    found: Vec<FoundFile>,
}

impl ScanReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// 同一 URL 再次命中时原位覆盖内容，顺序保持首次插入的位置
    pub fn insert(&mut self, url: String, final_url: String, body: String) {
        match self.found.iter_mut().find(|f| f.url == url) {
            Some(existing) => {
                existing.final_url = final_url;
                existing.body = body;
            }
            None => self.found.push(FoundFile { url, final_url, body }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }

    pub fn len(&self) -> usize {
        self.found.len()
    }

    pub fn files(&self) -> &[FoundFile] {
        &self.found
    }

    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.found.iter().map(|f| f.url.as_str())
    }

    pub fn get(&self, url: &str) -> Option<&str> {
        self.found.iter().find(|f| f.url == url).map(|f| f.body.as_str())
    }

    pub fn render_text(&self) -> String {
        if self.found.is_empty() {
            return "No sensitive files found.\n".to_string();
        }

        let separator = "-".repeat(SEPARATOR_WIDTH);
        let mut out = String::from("Potentially sensitive files found:\n");
        for file in &self.found {
            out.push_str(&format!("URL: {}\n", file.url));
            out.push_str(&format!("Content:\n{}\n", file.body));
            out.push_str(&separator);
            out.push('\n');
        }
        out
    }

    pub fn render_json(&self, meta: &ScanMeta) -> Result<String, ScanError> {
        let doc = JsonReport {
            target: &meta.target,
            scan_timestamp: Local::now().to_rfc3339(),
            scan_duration_ms: meta.duration_ms,
            files_probed: meta.files_probed,
            found: &self.found,
        };
        Ok(serde_json::to_string_pretty(&doc)?)
    }

    /// 将报告写入文件，必要时创建父目录
    pub fn write_to(
        &self,
        output_path: &Path,
        format: OutputFormat,
        meta: &ScanMeta,
    ) -> Result<(), ScanError> {
        let content = match format {
            OutputFormat::Text => self.render_text(),
            OutputFormat::Json => self.render_json(meta)?,
        };

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| ScanError::IOError(format!("无法创建输出目录: {}", e)))?;
        }

        fs::write(output_path, content)
            .map_err(|e| ScanError::IOError(format!("写入报告文件失败: {}", e)))?;

        info!("Results saved to {}", output_path.display());
        Ok(())
    }
}

/// JSON 报告附带的扫描信息
#[derive(Debug, Clone, Default)]
pub struct ScanMeta {
    pub target: String,
    pub files_probed: usize,
    pub duration_ms: u64,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    target: &'a str,
    scan_timestamp: String,
    scan_duration_ms: u64,
    files_probed: usize,
    found: &'a [FoundFile],
}
