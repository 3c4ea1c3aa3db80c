// OpenAI 兼容聊天客户端
use std::time::Duration;

use tracing::{debug, warn};

use crate::core::models::config::ClientConfig;

pub mod error;
pub mod models;
pub mod streaming;

use error::{classify_status, ClientError};
use models::{ChatMessage, ChatRequest, ChatResponse, ModelList};
use streaming::EventStream;

/// 聊天补全客户端。
///
/// 每个实例独占一份配置;setter 只影响之后发起的调用,已在途的请求
/// 沿用发起时捕获的地址与凭证。客户端本身不重试不缓存,这两者都由
/// 调用方负责。
pub struct ChatClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ChatClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(ClientError::Transport)?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// 运行期更新密钥;None 表示清除,之后的请求不再带 Authorization。
    pub fn set_api_key(&mut self, api_key: Option<String>) {
        self.config.api_key = api_key;
    }

    pub fn set_base_url(&mut self, base_url: String) {
        self.config.base_url = base_url;
    }

    pub fn set_model(&mut self, model: String) {
        self.config.model = model;
    }

    /// 获取可用模型列表,兼作连通性探测。
    pub async fn list_models(&self) -> Result<ModelList, ClientError> {
        let url = self.endpoint("models");
        debug!("fetching model list from {}", url);

        let mut request = self.http.get(&url).header("Content-Type", "application/json");
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(ClientError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("model list request failed: HTTP {}", status);
            return Err(classify_status(status, &body));
        }

        response
            .json::<ModelList>()
            .await
            .map_err(|e| ClientError::Protocol(format!("invalid model list body: {}", e)))
    }

    /// 非流式补全:等待完整响应体并解析。
    ///
    /// model 为 None 时使用配置里的默认模型。choices 为空表示模型
    /// 没有产出内容,是合法响应。
    pub async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        model: Option<&str>,
    ) -> Result<ChatResponse, ClientError> {
        let response = self.send_completion(messages, model, false).await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("completion request failed: HTTP {}", status);
            return Err(classify_status(status, &body));
        }

        response
            .json::<ChatResponse>()
            .await
            .map_err(|e| ClientError::Protocol(format!("invalid completion body: {}", e)))
    }

    /// 流式补全:状态检查通过后立即返回惰性事件序列。
    ///
    /// 传输/鉴权错误在返回前同步暴露;之后每条 `data:` 帧解码为一个
    /// JSON 事件,[DONE] 结束序列。丢弃返回的流即关闭连接。
    pub async fn complete_stream(
        &self,
        messages: Vec<ChatMessage>,
        model: Option<&str>,
    ) -> Result<EventStream, ClientError> {
        let response = self.send_completion(messages, model, true).await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("stream request failed: HTTP {}", status);
            return Err(classify_status(status, &body));
        }

        Ok(streaming::sse_event_stream(Box::pin(response.bytes_stream())))
    }

    async fn send_completion(
        &self,
        messages: Vec<ChatMessage>,
        model: Option<&str>,
        stream: bool,
    ) -> Result<reqwest::Response, ClientError> {
        let payload = ChatRequest {
            model: model.unwrap_or(&self.config.model).to_string(),
            messages,
            stream,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let url = self.endpoint("chat/completions");
        debug!("sending completion request to {} (model={}, stream={})", url, payload.model, stream);

        let mut request = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&payload);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        request.send().await.map_err(ClientError::Transport)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

impl Default for ChatClient {
    fn default() -> Self {
        // Client::builder 只在 TLS 后端初始化失败时报错,默认配置下不会发生
        Self::new(ClientConfig::new()).expect("default HTTP client")
    }
}
