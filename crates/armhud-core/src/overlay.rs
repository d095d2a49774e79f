//! 状态文字叠加层
//!
//! 固定位置的数值文本（目标角、当前角、连杆长度、手爪状态原始标签），
//! 加上按手爪状态分发的操作提示面板。面板选择是纯查表：
//! LOCKED → 10 行，PICKUP → 3 行，PLACE → 5 行，其余 → 不画。
//!
//! 这里不含任何状态迁移逻辑，迁移发生在机器人侧并经遥测到达。

use crate::hand::HandState;
use crate::joint::label_for;
use crate::snapshot::TelemetrySnapshot;
use crate::units::Deg;

/// 文本左边距（像素）
pub const TEXT_LEFT: f64 = 10.0;

/// 首行基线 y 坐标（像素）
pub const TEXT_TOP: f64 = 10.0;

/// 行距（像素）
pub const LINE_PITCH: f64 = 15.0;

/// 数值区与提示面板之间空出的行数
const PANEL_GAP_LINES: usize = 1;

/// 一行定位文本
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// LOCKED 状态提示面板：切换提示 ×2 + 逐关节手动微调 ×6 + 复位 + 归位
const LOCKED_PANEL: [&str; 10] = [
    "[1] hand state -> PICKUP",
    "[2] hand state -> PLACE",
    "[Q] shoulder forward",
    "[A] shoulder backward",
    "[W] elbow forward",
    "[S] elbow backward",
    "[E] wrist forward",
    "[D] wrist backward",
    "[R] reset joint targets",
    "[H] move to home pose",
];

/// PICKUP 状态提示面板：切换提示 ×2 + 抓取动作
const PICKUP_PANEL: [&str; 3] = [
    "[2] hand state -> PLACE",
    "[0] hand state -> LOCKED",
    "[SPACE] pick up game piece",
];

/// PLACE 状态提示面板：切换提示 ×2 + 三个固定放置高度
const PLACE_PANEL: [&str; 5] = [
    "[0] hand state -> LOCKED",
    "[1] hand state -> PICKUP",
    "[Z] target lowest node",
    "[X] target middle node",
    "[C] target highest node",
];

/// 手爪状态 → 提示面板行，未识别状态映射为空面板（静默，不是错误）
pub fn panel_lines(state: &HandState) -> &'static [&'static str] {
    match state {
        HandState::Locked => &LOCKED_PANEL,
        HandState::Pickup => &PICKUP_PANEL,
        HandState::Place => &PLACE_PANEL,
        HandState::Other(_) => &[],
    }
}

fn format_joint_values(angles: &[Deg]) -> String {
    let parts: Vec<String> = angles
        .iter()
        .enumerate()
        .map(|(i, a)| format!("{}: {:.1}", label_for(i), a.0))
        .collect();
    parts.join(", ")
}

fn format_lengths(lengths: &[f64]) -> String {
    let parts: Vec<String> = lengths
        .iter()
        .enumerate()
        .map(|(i, l)| format!("{}: {:.1}", label_for(i), l))
        .collect();
    parts.join(", ")
}

/// 数值区：目标角、当前角、连杆长度、手爪状态原始标签，各一行
pub fn status_lines(snapshot: &TelemetrySnapshot) -> Vec<TextLine> {
    let rows = [
        format!(
            "Target Angles = ({})",
            format_joint_values(&snapshot.target_angles)
        ),
        format!(
            "Current Angles = ({})",
            format_joint_values(&snapshot.current_angles)
        ),
        format!(
            "Arm Measurements = ({})",
            format_lengths(&snapshot.link_lengths)
        ),
        format!("Hand State = {}", snapshot.hand_state),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, text)| TextLine {
            x: TEXT_LEFT,
            y: TEXT_TOP + i as f64 * LINE_PITCH,
            text,
        })
        .collect()
}

/// 完整叠加层：数值区 + 一行间隔 + 提示面板
///
/// 纯函数，输出只取决于快照内容。
pub fn render_overlay(snapshot: &TelemetrySnapshot) -> Vec<TextLine> {
    let mut lines = status_lines(snapshot);
    let panel_top = TEXT_TOP + (lines.len() + PANEL_GAP_LINES) as f64 * LINE_PITCH;

    for (i, text) in panel_lines(&snapshot.hand_state).iter().enumerate() {
        lines.push(TextLine {
            x: TEXT_LEFT,
            y: panel_top + i as f64 * LINE_PITCH,
            text: (*text).to_owned(),
        });
    }
    lines
}
