// 错误分类模块 - 将传输层和 API 层错误归入统一的分类

use thiserror::Error;

use super::models::ApiErrorBody;

#[derive(Debug, Error)]
pub enum ClientError {
    /// 网络层失败:连接拒绝、DNS、流中途断开等。
    #[error("network error: {0}")]
    Transport(#[source] reqwest::Error),

    /// 401/403:凭证缺失或无效。
    #[error("authentication failed (HTTP {status}): {message}")]
    Auth { status: u16, message: String },

    /// 其他非 2xx,携带服务端返回的错误消息。
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// 2xx 但响应体不符合约定格式。
    #[error("protocol error: {0}")]
    Protocol(String),
}

/// 将非 2xx 响应归类为 Auth / Api。
///
/// 优先取响应体 {"error":{"message":...}} 里的消息,缺失时回退到
/// HTTP 状态行文本。
pub fn classify_status(status: reqwest::StatusCode, body: &str) -> ClientError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .and_then(|e| e.message)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        });

    match status.as_u16() {
        401 | 403 => ClientError::Auth { status: status.as_u16(), message },
        code => ClientError::Api { status: code, message },
    }
}
