//! 正向运动学链渲染
//!
//! 将有序的（关节角，连杆长度）序列折叠为屏幕坐标系下的线段序列。
//! 坐标约定与画布一致：y 轴向下，正角度为顺时针。
//!
//! # 算法
//!
//! 维护一个不可变的二维坐标系值（位置 + 累计朝向），初始为原点加基座旋转
//! 偏移（rotate-then-save 约定：基座旋转在第一个关节之前并入初始坐标系）。
//! 逐关节：朝向旋转该关节角，沿新朝向前进 `length * scale` 产生一条线段，
//! 线段终点成为下一关节的原点。N 个关节恰好产生 N 条线段，基座到末端有序。
//!
//! 零长度连杆仍然旋转坐标系（"自由关节"，无可见线段，属正确行为）；
//! 关节角为 0 表示沿父连杆方向继续直行。

use nalgebra::{Point2, Vector2};

use crate::joint::JointSpec;
use crate::units::{Deg, Rad};

/// 画布像素坐标系下的一条线段
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point2<f64>,
    pub to: Point2<f64>,
}

impl Segment {
    #[inline]
    pub fn new(from: Point2<f64>, to: Point2<f64>) -> Self {
        Segment { from, to }
    }

    /// 线段长度（像素）
    pub fn length(&self) -> f64 {
        (self.to - self.from).norm()
    }
}

/// 折叠过程中穿行的不可变坐标系值
///
/// 替代共享绘图上下文的 rotate/translate 可变操作，消除 save/restore 配对。
#[derive(Debug, Clone, Copy)]
struct Frame {
    position: Point2<f64>,
    heading: Rad,
}

impl Frame {
    #[inline]
    fn rotated(self, by: Rad) -> Self {
        Frame {
            position: self.position,
            heading: self.heading + by,
        }
    }

    /// 当前朝向的单位向量（屏幕约定：y 向下，正角顺时针）
    #[inline]
    fn direction(&self) -> Vector2<f64> {
        Vector2::new(self.heading.cos(), self.heading.sin())
    }

    #[inline]
    fn advanced(self, distance: f64) -> Self {
        Frame {
            position: self.position + self.direction() * distance,
            heading: self.heading,
        }
    }
}

/// 正向运动学折叠：关节序列 → 线段序列
///
/// 对任意 N ≥ 0 的 `joints` 产生恰好 N 条线段；相邻线段首尾相接。
/// 渲染是纯函数：同样的输入总是产生同样的输出。
pub fn render_chain(
    origin: Point2<f64>,
    base_rotation: Deg,
    joints: &[JointSpec],
    scale: f64,
) -> Vec<Segment> {
    let mut frame = Frame {
        position: origin,
        heading: base_rotation.to_rad(),
    };

    let mut segments = Vec::with_capacity(joints.len());
    for joint in joints {
        frame = frame.rotated(joint.angle.to_rad());
        let next = frame.advanced(joint.length * scale);
        segments.push(Segment::new(frame.position, next.position));
        frame = next;
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-6;

    fn assert_point(actual: Point2<f64>, expected: (f64, f64)) {
        assert!(
            (actual.x - expected.0).abs() < TOL && (actual.y - expected.1).abs() < TOL,
            "point {:?} != expected {:?}",
            actual,
            expected
        );
    }

    /// 参考算例：[(0°,10),(90°,5),(0°,3)]，scale=4，基座旋转 -90°
    ///
    /// 第一段竖直向上到 (0,-40)，第二段右转 90° 到 (20,-40)，
    /// 第三段继续直行到 (32,-40)。
    #[test]
    fn reference_chain() {
        let joints = [
            JointSpec::new(Deg(0.0), 10.0),
            JointSpec::new(Deg(90.0), 5.0),
            JointSpec::new(Deg(0.0), 3.0),
        ];
        let segments = render_chain(Point2::origin(), Deg(-90.0), &joints, 4.0);

        assert_eq!(segments.len(), 3);
        assert_point(segments[0].from, (0.0, 0.0));
        assert_point(segments[0].to, (0.0, -40.0));
        assert_point(segments[1].to, (20.0, -40.0));
        assert_point(segments[2].to, (32.0, -40.0));
    }

    /// 零长度连杆仍然旋转坐标系
    #[test]
    fn zero_length_link_still_rotates() {
        let joints = [
            JointSpec::new(Deg(90.0), 0.0),
            JointSpec::new(Deg(0.0), 1.0),
        ];
        let segments = render_chain(Point2::origin(), Deg(0.0), &joints, 1.0);

        assert_eq!(segments.len(), 2);
        // 第一段退化为点
        assert!(segments[0].length() < TOL);
        // 第二段方向已被零长度关节旋转（屏幕约定下 +90° 指向 y 正方向）
        assert_point(segments[1].to, (0.0, 1.0));
    }

    /// 空关节序列产生空输出
    #[test]
    fn empty_chain() {
        assert!(render_chain(Point2::origin(), Deg(-90.0), &[], 4.0).is_empty());
    }

    /// 原点偏移平移整条链
    #[test]
    fn origin_offsets_chain() {
        let joints = [JointSpec::new(Deg(0.0), 10.0)];
        let segments = render_chain(Point2::new(100.0, 50.0), Deg(0.0), &joints, 2.0);
        assert_point(segments[0].from, (100.0, 50.0));
        assert_point(segments[0].to, (120.0, 50.0));
    }
}
