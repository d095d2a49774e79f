//! 帧驱动
//!
//! eframe 每帧（跟随垂直同步）调用一次 [`HudApp::update`]，严格按
//! 轮询 → 清屏 → 场景合成 → 文字叠加的顺序执行。遥测轮询永不阻塞、
//! 永不失败；任何一帧的渲染都不会让循环退出。

use std::sync::Arc;

use armhud_core::{CanvasSize, SceneConfig, compose_scene, render_overlay};
use armhud_feed::{FeedListener, FeedPoller, FeedTable, SimFeed};
use egui::{Color32, Frame};

use crate::paint;

/// 遥测后端句柄：真机监听或模拟源，持有即存活
pub enum FeedBackend {
    Listener(FeedListener),
    Sim(SimFeed),
}

/// HUD 应用状态：一次性初始化的连接句柄 + 轮询器 + 场景配置
///
/// 渲染不持有任何跨帧可变状态，快照以外的数据全部是配置常量。
pub struct HudApp {
    poller: FeedPoller<Arc<FeedTable>>,
    scene_config: SceneConfig,
    // 后台线程生命周期与窗口绑定
    _backend: FeedBackend,
}

impl HudApp {
    pub fn new(
        poller: FeedPoller<Arc<FeedTable>>,
        scene_config: SceneConfig,
        backend: FeedBackend,
    ) -> Self {
        HudApp {
            poller,
            scene_config,
            _backend: backend,
        }
    }
}

impl eframe::App for HudApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let snapshot = self.poller.poll();

        egui::CentralPanel::default()
            .frame(Frame::NONE.fill(Color32::WHITE))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let painter = ui.painter();

                let canvas = CanvasSize::new(rect.width() as f64, rect.height() as f64);
                let scene = compose_scene(canvas, &snapshot, &self.scene_config);
                paint::paint_scene(painter, rect.min, &scene);

                let lines = render_overlay(&snapshot);
                paint::paint_overlay(painter, rect.min, &lines);
            });

        // 与显示刷新同步持续重绘
        ctx.request_repaint();
    }
}
