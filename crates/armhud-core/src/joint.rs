//! 关节与位姿
//!
//! 本机型是 3 关节串联拓扑（肩/肘/腕），[`Joint`] 枚举提供编译期安全的
//! 关节标签。链渲染本身接受任意 N ≥ 1 的关节序列，拓扑约束只体现在
//! 遥测配置校验和文字面板的标签上。

use crate::units::Deg;

/// 关节枚举
///
/// 表示机械臂的 3 个串联旋转关节。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Joint {
    /// 肩关节（基座端）
    Shoulder = 0,
    /// 肘关节
    Elbow = 1,
    /// 腕关节（末端）
    Wrist = 2,
}

impl Joint {
    /// 所有关节，基座到末端有序
    pub const ALL: [Joint; 3] = [Joint::Shoulder, Joint::Elbow, Joint::Wrist];

    /// 本拓扑的固定关节数
    pub const COUNT: usize = 3;

    /// 面板显示用标签
    pub fn label(self) -> &'static str {
        match self {
            Joint::Shoulder => "Shoulder",
            Joint::Elbow => "Elbow",
            Joint::Wrist => "Wrist",
        }
    }
}

/// 按序号取关节标签，超出固定拓扑的序号退化为 `J{n}` 形式
///
/// 链渲染接受任意 N，文字层因此也不能在 N > 3 时 panic。
pub(crate) fn label_for(index: usize) -> String {
    match Joint::ALL.get(index) {
        Some(joint) => joint.label().to_owned(),
        None => format!("J{}", index + 1),
    }
}

/// 单个关节的渲染输入：相对角度 + 连杆长度
///
/// 角度相对于父连杆方向（链式连杆组合，非世界角），长度以遥测单位计，
/// 渲染时乘以统一缩放因子。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointSpec {
    /// 相对父连杆方向的关节角
    pub angle: Deg,
    /// 连杆长度（遥测单位，非负）
    pub length: f64,
}

impl JointSpec {
    #[inline]
    pub fn new(angle: Deg, length: f64) -> Self {
        JointSpec { angle, length }
    }
}

/// 位姿：共享同一原点与基座旋转偏移的有序关节序列
///
/// 当前位姿与目标位姿并存，连杆长度一致、角度各自独立。
#[derive(Debug, Clone, PartialEq)]
pub struct Pose {
    joints: Vec<JointSpec>,
}

impl Pose {
    /// 由角度数组与长度数组构造位姿
    ///
    /// 两个数组的元长度不一致属于上游配置错误，在启动期校验拦截；
    /// 这里 zip 按较短者截断，不在每帧重复检查。
    pub fn from_parts(angles: &[Deg], lengths: &[f64]) -> Self {
        debug_assert_eq!(angles.len(), lengths.len());
        let joints = angles
            .iter()
            .zip(lengths.iter())
            .map(|(&angle, &length)| JointSpec { angle, length })
            .collect();
        Pose { joints }
    }

    pub fn joints(&self) -> &[JointSpec] {
        &self.joints
    }

    pub fn len(&self) -> usize {
        self.joints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 测试关节标签与序号映射
    #[test]
    fn joint_labels() {
        assert_eq!(Joint::Shoulder.label(), "Shoulder");
        assert_eq!(label_for(1), "Elbow");
        assert_eq!(label_for(5), "J6");
    }

    /// 测试位姿构造保持顺序
    #[test]
    fn pose_from_parts_keeps_order() {
        let pose = Pose::from_parts(&[Deg(1.0), Deg(2.0), Deg(3.0)], &[10.0, 5.0, 3.0]);
        assert_eq!(pose.len(), 3);
        assert_eq!(pose.joints()[1], JointSpec::new(Deg(2.0), 5.0));
    }
}
