// 投篮模式分析
use serde::{Deserialize, Serialize};

use super::models::metrics::Attempt;

/// 前后半段命中率走势
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

/// 从出手记录推导出的方向偏差 / 走势 / 疲劳信号。
///
/// 纯描述性数据,嵌入提示词后交给模型解读,本库不做任何判断。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatternSignals {
    /// x 均值,正为偏右
    pub lr_bias: f64,
    /// y 均值,正为偏高
    pub ud_bias: f64,
    pub trend: Trend,
    pub fatigue: bool,
}

/// 分析一段出手记录,每次调用重新计算,不缓存。
///
/// 空记录返回中性结果 {0.0, 0.0, Stable, false}。走势按中点(向下
/// 取整)切分,奇数长度时多出的一条归后半段;任一半为空视为 Stable。
/// 疲劳:最近 min(10, n) 次命中率低于 0.70 为 true,恰好 0.70 为 false。
pub fn analyze_patterns(attempts: &[Attempt]) -> PatternSignals {
    if attempts.is_empty() {
        return PatternSignals {
            lr_bias: 0.0,
            ud_bias: 0.0,
            trend: Trend::Stable,
            fatigue: false,
        };
    }

    let n = attempts.len() as f64;
    let lr_bias = attempts.iter().map(|a| a.x).sum::<f64>() / n;
    let ud_bias = attempts.iter().map(|a| a.y).sum::<f64>() / n;

    let mid = attempts.len() / 2;
    let (first, second) = attempts.split_at(mid);
    let trend = if first.is_empty() || second.is_empty() {
        Trend::Stable
    } else {
        let first_rate = hit_rate(first);
        let second_rate = hit_rate(second);
        if second_rate > first_rate {
            Trend::Improving
        } else if second_rate < first_rate {
            Trend::Declining
        } else {
            Trend::Stable
        }
    };

    let recent = &attempts[attempts.len().saturating_sub(10)..];
    let fatigue = hit_rate(recent) < 0.70;

    PatternSignals { lr_bias, ud_bias, trend, fatigue }
}

fn hit_rate(attempts: &[Attempt]) -> f64 {
    attempts.iter().filter(|a| a.hit).count() as f64 / attempts.len() as f64
}
