//! 训练记录数据模型

use serde::{Deserialize, Serialize};

/// 单次出手记录,由记录界面产生,本库只读。
///
/// x/y 为相对目标中心的带符号偏差(右/上为正),err 为径向误差大小,
/// angle 为出手角度(度)。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Attempt {
    pub x: f64,
    pub y: f64,
    pub err: f64,
    pub hit: bool,
    pub angle: f64,
}

/// 一次训练的汇总指标,由仪表盘统计层提供,用于生成教练提示词。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMetrics {
    pub total: u32,
    /// 命中率,百分比
    pub acc: f64,
    pub makes: u32,
    /// 平均径向误差 (cm)
    pub mre: f64,
    /// 落点离散度 (cm)
    pub spread: f64,
    /// 平均出手角度 (度)
    pub release_avg: f64,
    /// 出手角度标准差
    pub release_sd: f64,
}
