// 教练提示词构建
use crate::client::models::ChatMessage;
use crate::core::analytics::{analyze_patterns, Trend};
use crate::core::models::metrics::{Attempt, SessionMetrics};

/// 根据汇总指标构建教练建议请求:[system, user] 两条消息。
pub fn coaching_insights(metrics: &SessionMetrics, sport: &str) -> Vec<ChatMessage> {
    let system = format!(
        "You are an expert sports coach specializing in {sport}. \
         Analyze the following performance metrics and provide specific, actionable coaching advice.\n\n\
         Focus on:\n\
         - Technical improvements\n\
         - Mental preparation\n\
         - Practice recommendations\n\
         - Common mistakes to avoid\n\
         - Progress tracking suggestions\n\n\
         Keep responses concise, practical, and encouraging."
    );

    let user = format!(
        "Performance Analysis Request:\n\n\
         Sport: {sport}\n\
         Total Attempts: {}\n\
         Accuracy: {:.1}%\n\
         Makes: {}\n\
         Mean Radial Error: {:.2} cm\n\
         Spread: {:.2} cm\n\
         Release Angle: {:.1}\u{b0} \u{b1} {:.1}\u{b0}\n\n\
         Please provide specific coaching insights and recommendations.",
        metrics.total, metrics.acc, metrics.makes, metrics.mre, metrics.spread,
        metrics.release_avg, metrics.release_sd
    );

    vec![ChatMessage::system(system), ChatMessage::user(user)]
}

/// 构建训练计划请求,time_available 为可用分钟数。
pub fn practice_plan(metrics: &SessionMetrics, sport: &str, time_available: u32) -> Vec<ChatMessage> {
    let system = format!(
        "You are a professional sports coach. Create a detailed practice plan based on the performance data.\n\n\
         Requirements:\n\
         - Duration: {time_available} minutes\n\
         - Sport: {sport}\n\
         - Focus on areas needing improvement\n\
         - Include warm-up, main exercises, and cool-down\n\
         - Provide specific drills and techniques\n\
         - Include progress tracking methods"
    );

    let user = format!(
        "Create a practice plan for:\n\n\
         Current Performance:\n\
         - Accuracy: {:.1}%\n\
         - Mean Error: {:.2} cm\n\
         - Consistency: {:.0}%\n\
         - Release Angle: {:.1}\u{b0}\n\n\
         Focus on improving the weakest areas.",
        metrics.acc, metrics.mre, 100.0 - metrics.spread * 4.0, metrics.release_avg
    );

    vec![ChatMessage::system(system), ChatMessage::user(user)]
}

/// 构建落点模式分析请求,内部先跑一遍模式分析再渲染进提示词。
///
/// 空记录也能构建(命中率/均值按 0 渲染),但调用方应在有数据时才
/// 发起请求。
pub fn shot_pattern(attempts: &[Attempt], sport: &str) -> Vec<ChatMessage> {
    let signals = analyze_patterns(attempts);

    let n = attempts.len();
    let hit_rate = if n == 0 {
        0.0
    } else {
        attempts.iter().filter(|a| a.hit).count() as f64 / n as f64 * 100.0
    };
    let avg_err = if n == 0 {
        0.0
    } else {
        attempts.iter().map(|a| a.err).sum::<f64>() / n as f64
    };

    let trend = match signals.trend {
        Trend::Improving => "Improving",
        Trend::Declining => "Declining",
        Trend::Stable => "Stable",
    };

    let system = format!(
        "You are a sports analyst. Analyze {sport} shot patterns and provide technical feedback.\n\n\
         Focus on:\n\
         - Consistency patterns\n\
         - Common error directions\n\
         - Fatigue indicators\n\
         - Technique suggestions\n\
         - Mental approach recommendations"
    );

    let user = format!(
        "Shot Pattern Analysis:\n\n\
         Total Shots: {n}\n\
         Hit Rate: {hit_rate:.1}%\n\
         Average Error: {avg_err:.2} cm\n\n\
         Pattern Analysis:\n\
         - Left/Right Bias: {} ({:.1} cm)\n\
         - High/Low Bias: {} ({:.1} cm)\n\
         - Consistency Trend: {trend}\n\
         - Fatigue Pattern: {}\n\n\
         Provide specific technical recommendations.",
        if signals.lr_bias > 0.0 { "Right" } else { "Left" },
        signals.lr_bias.abs(),
        if signals.ud_bias > 0.0 { "High" } else { "Low" },
        signals.ud_bias.abs(),
        if signals.fatigue { "Yes" } else { "No" },
    );

    vec![ChatMessage::system(system), ChatMessage::user(user)]
}
