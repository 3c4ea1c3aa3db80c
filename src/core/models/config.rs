//! 客户端配置模型

use serde::{Deserialize, Serialize};

/// 聊天客户端配置
///
/// 每个 ChatClient 独占一份;运行期通过 setter 修改,已发出的请求
/// 不受影响。重试策略不在配置内:重试由调用方负责。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// OpenAI 兼容服务地址,如 http://localhost:8080/api/v1
    pub base_url: String,
    /// API 密钥;为 None 时不带 Authorization 头
    pub api_key: Option<String>,
    /// 默认模型
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:8080/api/v1".to_string(),
            api_key: None,
            model: "llama3.2".to_string(),
            max_tokens: 1000,
            temperature: 0.7,
        }
    }

    /// 检查配置是否在建议范围内,返回所有违规项。
    ///
    /// 仅供设置界面提示用;客户端发请求前不会拒绝越界配置。
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.base_url.is_empty() {
            errors.push("base URL is required".to_string());
        }
        if self.max_tokens < 100 || self.max_tokens > 4000 {
            errors.push("max tokens must be between 100 and 4000".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            errors.push("temperature must be between 0 and 2".to_string());
        }

        errors
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ClientConfig::new().validate().is_empty());
    }

    #[test]
    fn test_validate_reports_all_violations() {
        let config = ClientConfig {
            base_url: String::new(),
            api_key: None,
            model: "llama3.2".to_string(),
            max_tokens: 50,
            temperature: 3.0,
        };

        assert_eq!(config.validate().len(), 3);
    }

    #[test]
    fn test_temperature_bounds_inclusive() {
        let mut config = ClientConfig::new();
        config.temperature = 2.0;
        assert!(config.validate().is_empty());
        config.temperature = 0.0;
        assert!(config.validate().is_empty());
    }
}
