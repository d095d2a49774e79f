//! UDP 遥测监听
//!
//! 机器人侧以 JSON 数据报发布字段更新：
//!
//! ```json
//! {"endAngles": [45.0, -30.0, 0.0], "currentHandState": "LOCKED"}
//! ```
//!
//! 每个数据报可以只携带部分字段，逐键合并进 [`FeedTable`]。句柄创建时
//! 绑定一次套接字（显式持有的连接，不在帧回调里重建），Drop 时停止
//! 后台线程并 join。
//!
//! 畸形数据报只记 warn 日志后丢弃，监听循环保持存活。

use std::collections::HashMap;
use std::net::UdpSocket;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::error::FeedError;
use crate::table::{FeedTable, FeedValue};

/// 单个数据报的上限。遥测字段很小，1500 字节的 MTU 内绰绰有余。
const MAX_DATAGRAM: usize = 4096;

/// 接收超时，同时是停止标志的响应粒度
const RECV_TIMEOUT: Duration = Duration::from_millis(100);

/// UDP 监听句柄
///
/// 持有后台接收线程的生命周期。Drop 时置停止标志并 join。
pub struct FeedListener {
    running: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
    local_addr: std::net::SocketAddr,
}

impl FeedListener {
    /// 绑定地址并启动接收线程
    ///
    /// `table_name` 作为键前缀（`robotArmFeed/endAngles`），与总线
    /// 命名空间保持一致。
    pub fn spawn(
        addr: &str,
        table_name: &str,
        table: Arc<FeedTable>,
    ) -> Result<Self, FeedError> {
        let socket = UdpSocket::bind(addr)?;
        socket.set_read_timeout(Some(RECV_TIMEOUT))?;
        let local_addr = socket.local_addr()?;
        info!(%local_addr, table = table_name, "telemetry listener bound");

        let running = Arc::new(AtomicBool::new(true));
        let thread = {
            let running = Arc::clone(&running);
            let prefix = format!("{table_name}/");
            std::thread::spawn(move || recv_loop(socket, running, prefix, table))
        };

        Ok(FeedListener {
            running,
            thread: Some(thread),
            local_addr,
        })
    }

    /// 实际绑定到的地址（绑定 `:0` 时由此取回端口）
    pub fn local_addr(&self) -> std::net::SocketAddr {
        self.local_addr
    }
}

impl Drop for FeedListener {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Release);
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!("telemetry listener thread panicked");
            }
        }
    }
}

fn recv_loop(
    socket: UdpSocket,
    running: Arc<AtomicBool>,
    prefix: String,
    table: Arc<FeedTable>,
) {
    let mut buf = [0u8; MAX_DATAGRAM];
    while running.load(Ordering::Acquire) {
        let len = match socket.recv_from(&mut buf) {
            Ok((len, _peer)) => len,
            Err(e)
                if e.kind() == std::io::ErrorKind::WouldBlock
                    || e.kind() == std::io::ErrorKind::TimedOut =>
            {
                continue;
            },
            Err(e) => {
                warn!(error = %e, "telemetry recv failed");
                continue;
            },
        };

        match serde_json::from_slice::<HashMap<String, FeedValue>>(&buf[..len]) {
            Ok(fields) => {
                let updates: HashMap<String, FeedValue> = fields
                    .into_iter()
                    .map(|(key, value)| (format!("{prefix}{key}"), value))
                    .collect();
                debug!(fields = updates.len(), "telemetry datagram merged");
                table.merge(&updates);
            },
            Err(e) => {
                warn!(error = %e, len, "malformed telemetry datagram dropped");
            },
        }
    }
}
