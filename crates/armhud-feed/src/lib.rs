//! 遥测总线接入层
//!
//! 本 crate 连接外部遥测总线与渲染核心：
//! - [`FeedTable`]: 键值表，后台线程写入、渲染线程 wait-free 读取
//! - [`FeedListener`]: UDP 监听后台线程，把 JSON 数据报合并进表
//! - [`SimFeed`]: 无机器人时的模拟数据源（调试/演示用）
//! - [`FeedPoller`]: 每帧一次的快照轮询，缺失字段回退上一帧值
//!
//! # 设计目标
//!
//! - **读侧永不阻塞**: 表基于 ArcSwap，整表 RCU 替换，读取 wait-free
//! - **一次初始化**: 连接句柄显式持有，创建一次；不在帧回调里重建
//! - **快速失败**: 元长度配置错误在启动时报错，而不是逐帧截断/补零
//!
//! # 线程模型
//!
//! 写入方（监听线程或模拟线程）独占一个后台线程；句柄 Drop 时置停止
//! 标志并 join。渲染线程只做 `ArcSwap::load`，不与写入方共享锁。

pub mod error;
pub mod listener;
pub mod poller;
pub mod sim;
pub mod table;

pub use error::FeedError;
pub use listener::FeedListener;
pub use poller::{FeedConfig, FeedPoller, keys};
pub use sim::SimFeed;
pub use table::{FeedTable, FeedValue, TelemetrySource};
