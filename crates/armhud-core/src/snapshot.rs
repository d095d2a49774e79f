//! 遥测快照
//!
//! 每帧从总线整体刷新一次的聚合值。帧内不可变：轮询产生快照后，
//! 场景合成与文字叠加只读消费同一份数据。不保留历史。

use crate::hand::HandState;
use crate::joint::Pose;
use crate::units::Deg;

/// 一帧的遥测聚合：当前角度、目标角度、连杆长度、手爪状态
///
/// 三个数组的元长度恒等（启动时校验，帧内不再检查）。某个字段缺失时由
/// 轮询方回退到上一帧的值或零值默认，快照本身永远是完整的。
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetrySnapshot {
    /// 当前关节角（基座到末端有序）
    pub current_angles: Vec<Deg>,
    /// 目标关节角
    pub target_angles: Vec<Deg>,
    /// 连杆长度（遥测单位，固定不随帧变化）
    pub link_lengths: Vec<f64>,
    /// 手爪状态
    pub hand_state: HandState,
}

impl TelemetrySnapshot {
    /// 零值快照：首帧轮询前的回退基底
    pub fn zeroed(joint_count: usize) -> Self {
        TelemetrySnapshot {
            current_angles: vec![Deg::ZERO; joint_count],
            target_angles: vec![Deg::ZERO; joint_count],
            link_lengths: vec![0.0; joint_count],
            hand_state: HandState::default(),
        }
    }

    /// 连杆长度已知时的零角度快照
    pub fn with_lengths(lengths: Vec<f64>) -> Self {
        let n = lengths.len();
        TelemetrySnapshot {
            current_angles: vec![Deg::ZERO; n],
            target_angles: vec![Deg::ZERO; n],
            link_lengths: lengths,
            hand_state: HandState::default(),
        }
    }

    pub fn joint_count(&self) -> usize {
        self.link_lengths.len()
    }

    /// 当前位姿（角度 × 长度逐关节配对）
    pub fn current_pose(&self) -> Pose {
        Pose::from_parts(&self.current_angles, &self.link_lengths)
    }

    /// 目标位姿
    pub fn target_pose(&self) -> Pose {
        Pose::from_parts(&self.target_angles, &self.link_lengths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 测试零值快照的元长度一致性
    #[test]
    fn zeroed_snapshot_arity() {
        let snap = TelemetrySnapshot::zeroed(3);
        assert_eq!(snap.current_angles.len(), 3);
        assert_eq!(snap.target_angles.len(), 3);
        assert_eq!(snap.link_lengths.len(), 3);
        assert_eq!(snap.joint_count(), 3);
    }

    /// 测试位姿构造使用同一份连杆长度
    #[test]
    fn poses_share_lengths() {
        let mut snap = TelemetrySnapshot::with_lengths(vec![10.0, 5.0, 3.0]);
        snap.current_angles = vec![Deg(1.0), Deg(2.0), Deg(3.0)];
        snap.target_angles = vec![Deg(4.0), Deg(5.0), Deg(6.0)];

        let current = snap.current_pose();
        let target = snap.target_pose();
        assert_eq!(current.len(), target.len());
        for (c, t) in current.joints().iter().zip(target.joints()) {
            assert_eq!(c.length, t.length);
        }
    }
}
