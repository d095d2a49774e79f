//! 模拟遥测源
//!
//! 无机器人时驱动 HUD 的后台数据源：目标角在几组预设位姿之间切换，
//! 当前角以一阶惯性追踪目标，手爪状态按固定节拍循环。写入与真实
//! 监听完全相同的键值表，渲染侧无感知。

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::{info, warn};

use crate::poller::keys;
use crate::table::{FeedTable, FeedValue};

/// 模拟节拍：50 Hz
const TICK: Duration = Duration::from_millis(20);

/// 模拟机型的连杆长度（遥测单位）
const SIM_LENGTHS: [f64; 3] = [22.0, 16.0, 8.0];

/// 目标位姿预设：低 / 中 / 高 / 收回
const PRESETS: [[f64; 3]; 4] = [
    [95.0, -40.0, -20.0],
    [55.0, -35.0, -10.0],
    [25.0, -20.0, 5.0],
    [0.0, 0.0, 0.0],
];

/// 每个预设停留的节拍数（约 4 秒）
const TICKS_PER_PRESET: u32 = 200;

/// 手爪状态循环：LOCKED 两个预设周期，PICKUP/PLACE 各一个
const HAND_CYCLE: [&str; 4] = ["LOCKED", "LOCKED", "PICKUP", "PLACE"];

/// 当前角追踪目标角的一阶系数（每节拍）
const CHASE_RATE: f64 = 0.03;

/// 模拟遥测句柄，Drop 时停止后台线程并 join
pub struct SimFeed {
    running: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl SimFeed {
    /// 启动模拟线程，向 `table` 写入 `table_name` 命名空间下的字段
    pub fn spawn(table_name: &str, table: Arc<FeedTable>) -> Self {
        info!(table = table_name, "simulated telemetry source started");
        let running = Arc::new(AtomicBool::new(true));
        let thread = {
            let running = Arc::clone(&running);
            let prefix = table_name.to_owned();
            std::thread::spawn(move || sim_loop(running, prefix, table))
        };
        SimFeed {
            running,
            thread: Some(thread),
        }
    }
}

impl Drop for SimFeed {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Release);
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!("simulated telemetry thread panicked");
            }
        }
    }
}

fn sim_loop(running: Arc<AtomicBool>, table_name: String, table: Arc<FeedTable>) {
    let sleeper = spin_sleep::SpinSleeper::default();
    let mut current = [0.0f64; 3];
    let mut tick: u32 = 0;

    let key = |field: &str| format!("{table_name}/{field}");
    table.insert(key(keys::MEASUREMENTS), FeedValue::Numbers(SIM_LENGTHS.to_vec()));

    while running.load(Ordering::Acquire) {
        let phase = (tick / TICKS_PER_PRESET) as usize;
        let target = PRESETS[phase % PRESETS.len()];
        let hand = HAND_CYCLE[phase % HAND_CYCLE.len()];

        for (c, t) in current.iter_mut().zip(target.iter()) {
            *c += (t - *c) * CHASE_RATE;
        }

        table.insert(key(keys::TARGET_ANGLES), FeedValue::Numbers(target.to_vec()));
        table.insert(
            key(keys::CURRENT_ANGLES),
            FeedValue::Numbers(current.to_vec()),
        );
        table.insert(key(keys::HAND_STATE), FeedValue::Text(hand.to_owned()));

        tick = tick.wrapping_add(1);
        sleeper.sleep(TICK);
    }
}
