//! 接入层错误类型定义

use thiserror::Error;

/// 接入层错误类型
///
/// 稳态运行无致命错误：帧内的字段缺失、元长度不符都在本地降级处理，
/// 不会变成 `FeedError`。这里只覆盖启动期的配置与套接字失败。
#[derive(Error, Debug)]
pub enum FeedError {
    /// 套接字 I/O 错误（绑定、超时设置）
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// 连杆长度数组与固定关节数不符（配置缺陷，启动时快速失败）
    #[error("Arity mismatch: expected {expected} link lengths, got {actual}")]
    ArityMismatch { expected: usize, actual: usize },

    /// 连杆长度为负（配置缺陷）
    #[error("Negative link length at joint {joint}: {length}")]
    NegativeLength { joint: usize, length: f64 },

    /// 关节数为零（本拓扑至少 1 个关节）
    #[error("Joint count must be at least 1")]
    EmptyTopology,
}
