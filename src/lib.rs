//! 运动命中率仪表盘的核心库:OpenAI 兼容聊天客户端 + 投篮模式分析
//!
//! The dashboard UI records practice attempts and asks an OpenAI-compatible
//! provider for coaching feedback. This crate owns the protocol side of
//! that: the chat-completion client with its SSE decoder, the pattern
//! analytics derived from attempt logs, and the prompt construction that
//! feeds those signals to the model. Rendering and local persistence live
//! in the dashboard layer, not here.

pub mod client;
pub mod coach;
pub mod core;

pub use client::error::ClientError;
pub use client::models::{ChatMessage, ChatRequest, ChatResponse, Choice, ModelInfo, ModelList, Role};
pub use client::ChatClient;
pub use self::core::analytics::{analyze_patterns, PatternSignals, Trend};
pub use self::core::models::config::ClientConfig;
pub use self::core::models::metrics::{Attempt, SessionMetrics};
