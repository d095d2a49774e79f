//! 场景合成
//!
//! 把遥测快照合成为一张后端无关的显示列表：目标位姿链、当前位姿链、
//! 固定底盘几何。原点取画布中心，目标链先画（暖色描边），当前链后画
//! （深色描边，视觉上覆盖目标链），两条链使用同一基座旋转与缩放因子，
//! 保证可以直接对比。
//!
//! 显示列表方案使变换作用域问题在结构上消失：不存在共享可变绘图上下文，
//! 任何元素的坐标都在合成时算定，元素之间无法互相泄漏变换。

use nalgebra::{Point2, Vector2};

use crate::kinematics::{Segment, render_chain};
use crate::snapshot::TelemetrySnapshot;
use crate::units::Deg;

/// 基座旋转偏移：零角度方向为 "向上"
pub const BASE_ROTATION: Deg = Deg(-90.0);

/// 默认缩放因子（遥测单位 → 像素）
pub const DEFAULT_SCALE: f64 = 4.0;

/// 底盘立柱高度（遥测单位，机体常量，与遥测无关）
pub const SUPERSTRUCTURE_HEIGHT: f64 = 18.0;

/// 底盘长度（遥测单位）
pub const CHASSIS_LENGTH: f64 = 28.0;

/// 底盘高度（遥测单位）
pub const CHASSIS_HEIGHT: f64 = 6.0;

/// RGB 颜色（后端无关）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

/// 当前位姿描边：深灰
pub const CURRENT_STROKE_COLOR: Color = Color::rgb(33, 33, 33);

/// 目标位姿描边：暖色强调
pub const TARGET_STROKE_COLOR: Color = Color::rgb(230, 126, 34);

/// 底盘几何颜色
pub const CHASSIS_COLOR: Color = Color::rgb(33, 33, 33);

/// 臂链描边宽度（像素）
pub const ARM_STROKE_WIDTH: f32 = 2.0;

/// 描边样式
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
    /// 圆头线帽（绘制后端用关节处的圆点模拟）
    pub round_cap: bool,
}

/// 显示列表的绘制原语
#[derive(Debug, Clone, PartialEq)]
pub enum ScenePrimitive {
    /// 一组首尾相接的线段（一条臂链或底盘立柱）
    Polyline {
        segments: Vec<Segment>,
        stroke: StrokeStyle,
    },
    /// 填充矩形（底盘）
    FilledRect {
        min: Point2<f64>,
        size: Vector2<f64>,
        fill: Color,
    },
}

/// 一帧的显示列表，按绘制顺序排列
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub primitives: Vec<ScenePrimitive>,
}

/// 画布尺寸（像素）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub fn new(width: f64, height: f64) -> Self {
        CanvasSize { width, height }
    }

    pub fn center(&self) -> Point2<f64> {
        Point2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// 场景配置
///
/// 早期机器人固件的三个 HUD 变体（单位姿/双位姿、有无底盘层）在这里
/// 收敛为两个开关，而不是三份复制的绘制例程。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    /// 缩放因子（遥测单位 → 像素）
    pub scale: f64,
    /// 是否叠加目标位姿链
    pub show_target: bool,
    /// 是否绘制固定底盘几何
    pub show_chassis: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig {
            scale: DEFAULT_SCALE,
            show_target: true,
            show_chassis: true,
        }
    }
}

fn arm_stroke(color: Color) -> StrokeStyle {
    StrokeStyle {
        color,
        width: ARM_STROKE_WIDTH,
        round_cap: true,
    }
}

/// 合成一帧场景
///
/// 纯函数：同一快照 + 画布尺寸 + 配置，输出完全相同的显示列表。
/// 绘制顺序：目标链（如启用）→ 当前链 → 底盘几何（如启用）。
pub fn compose_scene(
    canvas: CanvasSize,
    snapshot: &TelemetrySnapshot,
    config: &SceneConfig,
) -> Scene {
    let origin = canvas.center();
    let mut scene = Scene::default();

    if config.show_target {
        let segments = render_chain(
            origin,
            BASE_ROTATION,
            snapshot.target_pose().joints(),
            config.scale,
        );
        scene.primitives.push(ScenePrimitive::Polyline {
            segments,
            stroke: arm_stroke(TARGET_STROKE_COLOR),
        });
    }

    let segments = render_chain(
        origin,
        BASE_ROTATION,
        snapshot.current_pose().joints(),
        config.scale,
    );
    scene.primitives.push(ScenePrimitive::Polyline {
        segments,
        stroke: arm_stroke(CURRENT_STROKE_COLOR),
    });

    if config.show_chassis {
        push_chassis(&mut scene, origin, config.scale);
    }

    scene
}

/// 固定底盘几何：原点向下的立柱，末端挂接水平居中的底盘矩形
///
/// 尺寸全部来自机体常量，不随遥测变化。
fn push_chassis(scene: &mut Scene, origin: Point2<f64>, scale: f64) {
    let post_end = Point2::new(origin.x, origin.y + SUPERSTRUCTURE_HEIGHT * scale);
    scene.primitives.push(ScenePrimitive::Polyline {
        segments: vec![Segment::new(origin, post_end)],
        stroke: arm_stroke(CHASSIS_COLOR),
    });

    let size = Vector2::new(CHASSIS_LENGTH * scale, CHASSIS_HEIGHT * scale);
    let min = Point2::new(post_end.x - size.x * 0.5, post_end.y);
    scene.primitives.push(ScenePrimitive::FilledRect {
        min,
        size,
        fill: CHASSIS_COLOR,
    });
}
