// 教练调用封装:提示词构建 + 补全请求
//
// 模型文本由远端生成;这里只负责组装请求。调用失败时的本地兜底
// 文案由仪表盘层处理,库内不做降级。

use crate::client::error::ClientError;
use crate::client::models::ChatResponse;
use crate::client::ChatClient;
use crate::core::models::metrics::{Attempt, SessionMetrics};

pub mod prompts;

/// 根据汇总指标请求教练建议。
pub async fn coaching_insights(
    client: &ChatClient,
    metrics: &SessionMetrics,
    sport: &str,
) -> Result<ChatResponse, ClientError> {
    client.complete(prompts::coaching_insights(metrics, sport), None).await
}

/// 请求一份给定时长(分钟)的训练计划。
pub async fn practice_plan(
    client: &ChatClient,
    metrics: &SessionMetrics,
    sport: &str,
    time_available: u32,
) -> Result<ChatResponse, ClientError> {
    client.complete(prompts::practice_plan(metrics, sport, time_available), None).await
}

/// 对出手记录做模式分析并请求技术反馈。
pub async fn analyze_shot_pattern(
    client: &ChatClient,
    attempts: &[Attempt],
    sport: &str,
) -> Result<ChatResponse, ClientError> {
    client.complete(prompts::shot_pattern(attempts, sport), None).await
}
