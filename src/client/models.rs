// OpenAI 兼容数据模型

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

/// 请求体。messages 非空,且最多一条 system 消息置于首位
/// (由 coach::prompts 保证,客户端不再校验)。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub stream: bool,
    pub temperature: f32,
    #[serde(rename = "max_tokens")]
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Empty choices means the provider produced no content; that is a
    /// valid response, not an error.
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    pub message: ChatMessage,
}

impl ChatResponse {
    /// 取第一条回复文本;choices 为空时返回 None。
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelList {
    #[serde(default)]
    pub data: Vec<ModelInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub id: String,
    #[serde(default)]
    pub owned_by: Option<String>,
}

/// 非 2xx 响应体里可选的 {"error":{"message":...}} 结构。
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: Option<ApiErrorDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_shape() {
        let req = ChatRequest {
            model: "llama3.2".to_string(),
            messages: vec![ChatMessage::system("coach"), ChatMessage::user("hi")],
            stream: false,
            temperature: 0.7,
            max_tokens: 1000,
        };

        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["model"], "llama3.2");
        assert_eq!(v["messages"][0]["role"], "system");
        assert_eq!(v["messages"][1]["role"], "user");
        assert_eq!(v["max_tokens"], 1000);
        assert_eq!(v["stream"], false);
    }

    #[test]
    fn test_response_empty_choices_is_valid() {
        let resp: ChatResponse = serde_json::from_value(json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": []
        }))
        .unwrap();

        assert!(resp.choices.is_empty());
        assert_eq!(resp.first_content(), None);
    }

    #[test]
    fn test_response_extracts_content() {
        let resp: ChatResponse = serde_json::from_value(json!({
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "Keep your elbow in."}, "finish_reason": "stop"}]
        }))
        .unwrap();

        assert_eq!(resp.first_content(), Some("Keep your elbow in."));
        assert_eq!(resp.choices[0].message.role, Role::Assistant);
    }
}
