//! 机械臂 HUD 核心逻辑
//!
//! 本 crate 实现 HUD 的纯计算部分，不依赖任何窗口或网络库：
//! - 正向运动学链渲染（角度 + 连杆长度 → 屏幕线段）
//! - 场景合成（当前/目标双位姿叠加 + 固定底盘几何）
//! - 状态文字叠加层（数值面板 + 按手爪状态分发的操作提示）
//!
//! # 设计目标
//!
//! - **纯函数渲染**: 同一份遥测快照 + 画布尺寸，输出完全确定
//! - **无共享可变状态**: 链渲染通过不可变坐标系值折叠，无 save/restore 配对
//! - **后端无关**: 输出显示列表（线段/矩形/文字），由上层决定如何绘制
//!
//! # 数据流
//!
//! ```text
//! TelemetrySnapshot ──> compose_scene ──> Scene（显示列表）──> 绘制后端
//!                  └──> render_overlay ──> Vec<TextLine>
//! ```

pub mod hand;
pub mod joint;
pub mod kinematics;
pub mod overlay;
pub mod scene;
pub mod snapshot;
pub mod units;

pub use hand::HandState;
pub use joint::{Joint, JointSpec, Pose};
pub use kinematics::{Segment, render_chain};
pub use overlay::{TextLine, panel_lines, render_overlay, status_lines};
pub use scene::{CanvasSize, Scene, SceneConfig, ScenePrimitive, compose_scene};
pub use snapshot::TelemetrySnapshot;
pub use units::{Deg, Rad};
