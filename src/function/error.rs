//错误处理板块
use thiserror::Error;
use std::fmt;
use std::io;

/// 整个扫描过程中的错误，只有 InvalidConfig 会终止运行
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("配置错误: {0}")]
    InvalidConfig(String),

    #[error("文件操作错误: {0}")]
    IOError(String),

    #[error("HTTP客户端错误: {0}")]
    ClientError(String),

    #[error("序列化错误: {0}")]
    SerializationError(String),
}

impl From<io::Error> for ScanError {
    fn from(err: io::Error) -> Self {
        ScanError::IOError(err.to_string())
    }
}

impl From<serde_json::Error> for ScanError {
    fn from(err: serde_json::Error) -> Self {
        ScanError::SerializationError(err.to_string())
    }
}

/// 单次探测失败的类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeErrorKind {
    Timeout,
    Connection,
    Redirect,
    Body,
    Transport,
    /// 非传输层错误，例如请求无法构建
    Unexpected,
}

impl ProbeErrorKind {
    /// 传输层错误在本地恢复，只记 debug 日志
    pub fn is_transport(self) -> bool {
        !matches!(self, ProbeErrorKind::Unexpected)
    }
}

impl fmt::Display for ProbeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProbeErrorKind::Timeout => "超时",
            ProbeErrorKind::Connection => "连接错误",
            ProbeErrorKind::Redirect => "重定向错误",
            ProbeErrorKind::Body => "响应体读取错误",
            ProbeErrorKind::Transport => "传输错误",
            ProbeErrorKind::Unexpected => "意外错误",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone)]
#[error("{kind}: {message}")]
pub struct ProbeError {
    pub kind: ProbeErrorKind,
    pub message: String,
}

impl ProbeError {
    pub fn new(kind: ProbeErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }
}

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_builder() {
            ProbeErrorKind::Unexpected
        } else if err.is_timeout() {
            ProbeErrorKind::Timeout
        } else if err.is_connect() {
            ProbeErrorKind::Connection
        } else if err.is_redirect() {
            ProbeErrorKind::Redirect
        } else if err.is_body() || err.is_decode() {
            ProbeErrorKind::Body
        } else {
            ProbeErrorKind::Transport
        };
        ProbeError::new(kind, err.to_string())
    }
}
