//! # Arm HUD
//!
//! 机械臂实时仪表窗口：消费遥测总线上的关节角/目标角/连杆长度/手爪
//! 状态，绘制当前与目标位姿的二维简图、固定底盘几何和状态文字叠加。
//!
//! ```bash
//! # 监听真机遥测（UDP JSON 数据报）
//! armhud --listen 0.0.0.0:5807
//!
//! # 无机器人演示
//! armhud --sim
//!
//! # 配置文件 + 命令行覆盖
//! armhud --config hud.toml --scale 6.0
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

mod app;
mod config;
mod paint;

use armhud_core::SceneConfig;
use armhud_feed::{FeedConfig, FeedListener, FeedPoller, FeedTable, SimFeed};

use app::{FeedBackend, HudApp};
use config::HudConfig;

/// 窗口初始尺寸
const WINDOW_SIZE: [f32; 2] = [800.0, 600.0];

/// Arm HUD - 机械臂遥测仪表
#[derive(Parser, Debug)]
#[command(name = "armhud")]
#[command(about = "Real-time HUD for a 3-joint robotic arm", long_about = None)]
#[command(version)]
struct Cli {
    /// TOML 配置文件路径
    #[arg(long)]
    config: Option<PathBuf>,

    /// 使用模拟遥测源（忽略 --listen）
    #[arg(long)]
    sim: bool,

    /// UDP 监听地址
    #[arg(long)]
    listen: Option<String>,

    /// 总线表名
    #[arg(long)]
    table: Option<String>,

    /// 缩放因子（遥测单位 → 像素）
    #[arg(long)]
    scale: Option<f64>,

    /// 不叠加目标位姿链
    #[arg(long)]
    no_target: bool,

    /// 不绘制固定底盘几何
    #[arg(long)]
    no_chassis: bool,
}

impl Cli {
    /// 配置文件打底，命令行旗标覆盖
    fn into_config(self) -> Result<HudConfig> {
        let mut config = match &self.config {
            Some(path) => HudConfig::load(path)?,
            None => HudConfig::default(),
        };
        if self.sim {
            config.sim = true;
        }
        if let Some(listen) = self.listen {
            config.listen = listen;
        }
        if let Some(table) = self.table {
            config.table = table;
        }
        if let Some(scale) = self.scale {
            config.scale = scale;
        }
        if self.no_target {
            config.show_target = false;
        }
        if self.no_chassis {
            config.show_chassis = false;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("armhud=info".parse()?),
        )
        .init();

    let config = Cli::parse().into_config()?;
    info!(?config, "starting arm HUD");

    let table = Arc::new(FeedTable::new());

    // 连接句柄创建一次，随窗口存活；帧回调只做 wait-free 读取
    let backend = if config.sim {
        FeedBackend::Sim(SimFeed::spawn(&config.table, Arc::clone(&table)))
    } else {
        FeedBackend::Listener(
            FeedListener::spawn(&config.listen, &config.table, Arc::clone(&table))
                .with_context(|| format!("binding telemetry listener on {}", config.listen))?,
        )
    };

    // 配置错误（元长度不符、负长度）在这里快速失败
    let feed_config = FeedConfig {
        table: config.table.clone(),
        joint_count: config.joint_count,
        default_lengths: config.default_lengths.clone(),
    };
    let poller = FeedPoller::new(Arc::clone(&table), feed_config)
        .context("validating telemetry configuration")?;

    let scene_config = SceneConfig {
        scale: config.scale,
        show_target: config.show_target,
        show_chassis: config.show_chassis,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_title("Robotic Arm HUD"),
        ..Default::default()
    };
    eframe::run_native(
        "Robotic Arm HUD",
        options,
        Box::new(move |_cc| Ok(Box::new(HudApp::new(poller, scene_config, backend)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}
