//! 显示列表 → egui 画笔
//!
//! 核心输出的场景原语与文字行在这里映射为 egui 绘制调用。圆头线帽用
//! 线段端点处的实心圆模拟（egui 的线段本身无线帽控制）。

use armhud_core::overlay::TextLine;
use armhud_core::scene::{Color, Scene, ScenePrimitive, StrokeStyle};
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, Vec2};

/// 文字颜色与字号
const TEXT_COLOR: Color32 = Color32::from_rgb(33, 33, 33);
const TEXT_FONT_SIZE: f32 = 12.0;

fn to_color32(color: Color) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

fn to_pos2(origin: Pos2, point: nalgebra::Point2<f64>) -> Pos2 {
    Pos2::new(origin.x + point.x as f32, origin.y + point.y as f32)
}

fn paint_polyline(
    painter: &Painter,
    origin: Pos2,
    segments: &[armhud_core::Segment],
    style: &StrokeStyle,
) {
    let stroke = Stroke::new(style.width, to_color32(style.color));
    for segment in segments {
        let from = to_pos2(origin, segment.from);
        let to = to_pos2(origin, segment.to);
        painter.line_segment([from, to], stroke);
        if style.round_cap {
            let radius = style.width * 0.5;
            painter.circle_filled(from, radius, stroke.color);
            painter.circle_filled(to, radius, stroke.color);
        }
    }
}

/// 绘制一帧场景显示列表
///
/// `origin` 是画布区域左上角在窗口坐标系中的位置；场景坐标以画布
/// 左上角为零点。
pub fn paint_scene(painter: &Painter, origin: Pos2, scene: &Scene) {
    for primitive in &scene.primitives {
        match primitive {
            ScenePrimitive::Polyline { segments, stroke } => {
                paint_polyline(painter, origin, segments, stroke);
            },
            ScenePrimitive::FilledRect { min, size, fill } => {
                let rect = Rect::from_min_size(
                    to_pos2(origin, *min),
                    Vec2::new(size.x as f32, size.y as f32),
                );
                painter.rect_filled(rect, 0.0, to_color32(*fill));
            },
        }
    }
}

/// 绘制叠加层文字行
pub fn paint_overlay(painter: &Painter, origin: Pos2, lines: &[TextLine]) {
    let font = FontId::monospace(TEXT_FONT_SIZE);
    for line in lines {
        painter.text(
            Pos2::new(origin.x + line.x as f32, origin.y + line.y as f32),
            Align2::LEFT_TOP,
            &line.text,
            font.clone(),
            TEXT_COLOR,
        );
    }
}
