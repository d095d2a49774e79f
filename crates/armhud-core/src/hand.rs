//! 手爪状态
//!
//! 遥测总线以字符串发布手爪状态。这里解析为封闭枚举并显式保留
//! "未识别" 变体：未识别的状态不渲染任何操作提示面板，但不是错误，
//! 原始标签仍然原样显示在数值面板中。

use std::fmt;

/// 手爪状态（封闭枚举 + 显式未知变体）
///
/// 状态迁移发生在机器人侧，HUD 只做只读分发，不包含任何迁移逻辑。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandState {
    /// 锁定：手动微调各关节，可切换到抓取/放置
    Locked,
    /// 抓取模式
    Pickup,
    /// 放置模式
    Place,
    /// 总线上出现的未识别状态，保留原始标签
    Other(String),
}

impl HandState {
    /// 解析总线上的原始状态字符串
    ///
    /// 匹配大小写敏感（机器人侧固定发大写），未匹配者落入 `Other`。
    pub fn parse(raw: &str) -> Self {
        match raw {
            "LOCKED" => HandState::Locked,
            "PICKUP" => HandState::Pickup,
            "PLACE" => HandState::Place,
            other => HandState::Other(other.to_owned()),
        }
    }

    /// 数值面板显示用的原始标签
    pub fn label(&self) -> &str {
        match self {
            HandState::Locked => "LOCKED",
            HandState::Pickup => "PICKUP",
            HandState::Place => "PLACE",
            HandState::Other(raw) => raw,
        }
    }
}

impl Default for HandState {
    fn default() -> Self {
        HandState::Other(String::new())
    }
}

impl fmt::Display for HandState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
