// probe.rs
use super::error::{ProbeError, ProbeErrorKind};
use super::target::join_url;
use super::ScanError;
use futures::StreamExt;
use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// 一次 GET 请求的结果
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u16,
    /// 跟随重定向之后的最终地址
    pub final_url: String,
    pub body: String,
}

/// HTTP 层抽象，探测逻辑只依赖这个 trait
pub trait Fetch {
    fn fetch(
        &self,
        url: &str,
        timeout: Duration,
    ) -> impl Future<Output = Result<FetchResponse, ProbeError>> + Send;
}

/// 基于 reqwest 的实现，自动跟随重定向
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    max_body_size: Option<usize>,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client, max_body_size: None }
    }

    pub fn with_max_body_size(mut self, max_body_size: Option<usize>) -> Self {
        self.max_body_size = max_body_size;
        self
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<String, ProbeError> {
        let mut buf: Vec<u8> = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            match self.max_body_size {
                Some(limit) if buf.len() + chunk.len() >= limit => {
                    // 达到上限后不再继续读取
                    buf.extend_from_slice(&chunk[..limit - buf.len()]);
                    break;
                }
                _ => buf.extend_from_slice(&chunk),
            }
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<FetchResponse, ProbeError> {
        let response = self.client.get(url).timeout(timeout).send().await?;
        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let body = self.read_body(response).await?;
        Ok(FetchResponse { status, final_url, body })
    }
}

/// 创建 HTTP 客户端，使用默认重定向策略
pub fn build_client(timeout: Duration) -> Result<Client, ScanError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ScanError::ClientError(format!("创建HTTP客户端失败: {}", e)))
}

/// 单个文件的探测结果
#[derive(Debug, Clone)]
pub struct ProbeResult {
    /// 拼接出的候选地址，也是报告中的键
    pub resolved_url: String,
    pub found: bool,
    pub status: Option<u16>,
    pub final_url: Option<String>,
    pub body: Option<String>,
    pub error_kind: Option<ProbeErrorKind>,
    pub error_message: Option<String>,
}

impl ProbeResult {
    fn missing(resolved_url: String, status: Option<u16>, final_url: Option<String>) -> Self {
        Self {
            resolved_url,
            found: false,
            status,
            final_url,
            body: None,
            error_kind: None,
            error_message: None,
        }
    }

    fn failed(resolved_url: String, err: ProbeError) -> Self {
        Self {
            resolved_url,
            found: false,
            status: None,
            final_url: None,
            body: None,
            error_kind: Some(err.kind),
            error_message: Some(err.message),
        }
    }
}

/// 检测文件是否存在：只有状态码 200 算命中
///
/// 请求失败不会向上抛出，超时、连接失败等统一视为未找到。
/// 这里只记 debug 日志，命中和意外错误由调用方按需输出。
pub async fn probe_file<F: Fetch>(
    fetcher: &F,
    base_url: &str,
    filename: &str,
    timeout: Duration,
) -> ProbeResult {
    let target_url = join_url(base_url, filename);
    debug!("Checking for: {}", target_url);

    match fetcher.fetch(&target_url, timeout).await {
        Ok(response) if response.status == 200 => {
            if response.final_url != target_url {
                debug!("{} 重定向至 {}", target_url, response.final_url);
            }
            ProbeResult {
                resolved_url: target_url,
                found: true,
                status: Some(response.status),
                final_url: Some(response.final_url),
                body: Some(response.body),
                error_kind: None,
                error_message: None,
            }
        }
        Ok(response) => {
            debug!("Not Found: {} (Status Code: {})", target_url, response.status);
            ProbeResult::missing(target_url, Some(response.status), Some(response.final_url))
        }
        Err(e) => {
            if e.kind.is_transport() {
                debug!("Error checking {}: {}", filename, e);
            }
            ProbeResult::failed(target_url, e)
        }
    }
}
