//! 链渲染的属性测试
//!
//! 使用 proptest 验证正向运动学折叠的数学属性。

use armhud_core::units::Deg;
use armhud_core::{JointSpec, render_chain};
use nalgebra::Point2;
use proptest::prelude::*;

fn arb_joints(max_len: usize) -> impl Strategy<Value = Vec<JointSpec>> {
    prop::collection::vec(
        (-720.0..720.0f64, 0.0..100.0f64).prop_map(|(angle, length)| JointSpec {
            angle: Deg(angle),
            length,
        }),
        1..=max_len,
    )
}

proptest! {
    /// N 个关节恰好产生 N 条线段
    #[test]
    fn segment_count_matches_joint_count(joints in arb_joints(8)) {
        let segments = render_chain(Point2::origin(), Deg(-90.0), &joints, 4.0);
        prop_assert_eq!(segments.len(), joints.len());
    }

    /// 链连续性：第 i 条线段的起点等于第 i-1 条的终点
    #[test]
    fn chain_continuity(joints in arb_joints(8), base in -360.0..360.0f64) {
        let segments = render_chain(Point2::new(400.0, 300.0), Deg(base), &joints, 4.0);
        for pair in segments.windows(2) {
            prop_assert!((pair[1].from - pair[0].to).norm() < 1e-9);
        }
    }

    /// 全零角度 + 零基座旋转：整链共线，总长等于缩放后的连杆长度之和
    #[test]
    fn zero_angles_straight_line(lengths in prop::collection::vec(0.0..100.0f64, 1..8), scale in 0.1..10.0f64) {
        let joints: Vec<JointSpec> = lengths
            .iter()
            .map(|&length| JointSpec { angle: Deg::ZERO, length })
            .collect();
        let segments = render_chain(Point2::origin(), Deg::ZERO, &joints, scale);

        let expected: f64 = lengths.iter().map(|l| l * scale).sum();
        let tip = segments.last().unwrap().to;
        // 共线（零朝向沿 +x），末端距原点即为总长
        prop_assert!((tip.y).abs() < 1e-6);
        prop_assert!((tip.x - expected).abs() < 1e-6);
        for segment in &segments {
            prop_assert!(segment.from.y.abs() < 1e-6);
        }
    }

    /// 确定性：同样的输入重复渲染输出完全一致
    #[test]
    fn rendering_is_deterministic(joints in arb_joints(8)) {
        let a = render_chain(Point2::new(1.0, 2.0), Deg(-90.0), &joints, 4.0);
        let b = render_chain(Point2::new(1.0, 2.0), Deg(-90.0), &joints, 4.0);
        prop_assert_eq!(a, b);
    }

    /// 每条线段的像素长度等于对应连杆长度乘缩放因子
    #[test]
    fn segment_lengths_scale(joints in arb_joints(8), scale in 0.1..10.0f64) {
        let segments = render_chain(Point2::origin(), Deg(-90.0), &joints, scale);
        for (segment, joint) in segments.iter().zip(&joints) {
            prop_assert!((segment.length() - joint.length * scale).abs() < 1e-6);
        }
    }
}
