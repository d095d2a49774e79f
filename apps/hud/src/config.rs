//! HUD 配置
//!
//! 可选的 TOML 配置文件，字段与命令行旗标一一对应，命令行优先。

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use armhud_feed::poller::DEFAULT_TABLE;

/// HUD 配置（TOML 文件 + 命令行合并后的最终形态）
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HudConfig {
    /// UDP 监听地址
    pub listen: String,
    /// 总线表名
    pub table: String,
    /// 缩放因子（遥测单位 → 像素）
    pub scale: f64,
    /// 使用模拟遥测源
    pub sim: bool,
    /// 叠加目标位姿链
    pub show_target: bool,
    /// 绘制固定底盘几何
    pub show_chassis: bool,
    /// 关节数
    pub joint_count: usize,
    /// 总线未发布 measurements 时使用的连杆长度
    pub default_lengths: Vec<f64>,
}

impl Default for HudConfig {
    fn default() -> Self {
        HudConfig {
            listen: "0.0.0.0:5807".to_owned(),
            table: DEFAULT_TABLE.to_owned(),
            scale: armhud_core::scene::DEFAULT_SCALE,
            sim: false,
            show_target: true,
            show_chassis: true,
            joint_count: 3,
            default_lengths: vec![0.0; 3],
        }
    }
}

impl HudConfig {
    /// 从 TOML 文件加载，文件未给出的字段取默认值
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing config file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// 部分字段的配置文件，其余取默认值
    #[test]
    fn partial_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "scale = 6.0\nsim = true\ndefault_lengths = [22.0, 16.0, 8.0]"
        )
        .unwrap();

        let config = HudConfig::load(file.path()).unwrap();
        assert_eq!(config.scale, 6.0);
        assert!(config.sim);
        assert_eq!(config.default_lengths, vec![22.0, 16.0, 8.0]);
        // 未给出的字段保持默认
        assert_eq!(config.table, DEFAULT_TABLE);
        assert_eq!(config.joint_count, 3);
    }

    /// 未知字段报错而不是被静默忽略
    #[test]
    fn unknown_field_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "scail = 6.0").unwrap();
        assert!(HudConfig::load(file.path()).is_err());
    }
}
