//! 快照轮询
//!
//! 帧驱动每帧调用一次 [`FeedPoller::poll`]，把键值表的当前值固化为一份
//! [`TelemetrySnapshot`]。缺失字段回退到上一帧的值（首帧回退到零值/配置
//! 默认），帧内元长度不符的数组按缺失处理并记 warn，永远不截断或补零。
//!
//! 元长度配置错误（默认连杆长度与关节数不符）在构造时快速失败。

use armhud_core::{Deg, HandState, TelemetrySnapshot};
use tracing::warn;

use crate::error::FeedError;
use crate::table::TelemetrySource;

/// 总线上的字段名
pub mod keys {
    /// 目标关节角
    pub const TARGET_ANGLES: &str = "endAngles";
    /// 目标关节角的旧字段名（最早固件变体）
    pub const TARGET_ANGLES_LEGACY: &str = "angles";
    /// 当前关节角
    pub const CURRENT_ANGLES: &str = "currentAngles";
    /// 连杆长度
    pub const MEASUREMENTS: &str = "measurements";
    /// 手爪状态
    pub const HAND_STATE: &str = "currentHandState";
}

/// 默认表名
pub const DEFAULT_TABLE: &str = "robotArmFeed";

/// 轮询配置
#[derive(Debug, Clone, PartialEq)]
pub struct FeedConfig {
    /// 总线表名（键前缀）
    pub table: String,
    /// 固定关节数
    pub joint_count: usize,
    /// 总线尚未发布 `measurements` 时使用的连杆长度
    pub default_lengths: Vec<f64>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        FeedConfig {
            table: DEFAULT_TABLE.to_owned(),
            joint_count: 3,
            default_lengths: vec![0.0; 3],
        }
    }
}

impl FeedConfig {
    /// 校验配置一致性（启动时调用一次，快速失败）
    pub fn validate(&self) -> Result<(), FeedError> {
        if self.joint_count == 0 {
            return Err(FeedError::EmptyTopology);
        }
        if self.default_lengths.len() != self.joint_count {
            return Err(FeedError::ArityMismatch {
                expected: self.joint_count,
                actual: self.default_lengths.len(),
            });
        }
        for (joint, &length) in self.default_lengths.iter().enumerate() {
            if length < 0.0 {
                return Err(FeedError::NegativeLength { joint, length });
            }
        }
        Ok(())
    }

    fn key(&self, field: &str) -> String {
        format!("{}/{}", self.table, field)
    }
}

/// 每帧快照轮询器
///
/// 内部保留上一帧快照作为回退基底；`poll` 从不失败、从不阻塞。
pub struct FeedPoller<S: TelemetrySource> {
    source: S,
    config: FeedConfig,
    last: TelemetrySnapshot,
}

impl<S: TelemetrySource> FeedPoller<S> {
    /// 创建轮询器，配置错误时快速失败
    pub fn new(source: S, config: FeedConfig) -> Result<Self, FeedError> {
        config.validate()?;
        let last = TelemetrySnapshot::with_lengths(config.default_lengths.clone());
        Ok(FeedPoller {
            source,
            config,
            last,
        })
    }

    /// 固化当前总线状态为一帧快照
    ///
    /// 返回的快照在整帧内只读；下一次 `poll` 整体替换。
    pub fn poll(&mut self) -> TelemetrySnapshot {
        let n = self.config.joint_count;

        let last_target: Vec<f64> = self.last.target_angles.iter().map(|d| d.0).collect();
        let last_current: Vec<f64> = self.last.current_angles.iter().map(|d| d.0).collect();

        // 目标角：优先 endAngles，旧固件字段 angles 作为级联默认
        let legacy = self
            .source
            .numeric_array(&self.config.key(keys::TARGET_ANGLES_LEGACY), &last_target);
        let target = self
            .source
            .numeric_array(&self.config.key(keys::TARGET_ANGLES), &legacy);
        let target = self.checked(keys::TARGET_ANGLES, target, &last_target);

        let current = self
            .source
            .numeric_array(&self.config.key(keys::CURRENT_ANGLES), &last_current);
        let current = self.checked(keys::CURRENT_ANGLES, current, &last_current);

        let lengths = self
            .source
            .numeric_array(&self.config.key(keys::MEASUREMENTS), &self.last.link_lengths);
        let lengths = self.checked(keys::MEASUREMENTS, lengths, &self.last.link_lengths);

        let raw_state = self
            .source
            .text(&self.config.key(keys::HAND_STATE), self.last.hand_state.label());

        let snapshot = TelemetrySnapshot {
            current_angles: current.into_iter().map(Deg).collect(),
            target_angles: target.into_iter().map(Deg).collect(),
            link_lengths: lengths,
            hand_state: HandState::parse(&raw_state),
        };
        debug_assert_eq!(snapshot.joint_count(), n);

        self.last = snapshot.clone();
        snapshot
    }

    /// 帧内元长度检查：长度不符按字段缺失处理，保留上一帧值
    fn checked(&self, field: &str, values: Vec<f64>, last: &[f64]) -> Vec<f64> {
        if values.len() == self.config.joint_count {
            values
        } else {
            warn!(
                field,
                expected = self.config.joint_count,
                actual = values.len(),
                "telemetry array arity mismatch, keeping previous value"
            );
            last.to_vec()
        }
    }

    /// 上一帧快照（测试与诊断用）
    pub fn last(&self) -> &TelemetrySnapshot {
        &self.last
    }
}
