//! 遥测键值表
//!
//! 发布/订阅总线在 HUD 侧的落点：命名字段 → 最新值。写入方整表 RCU
//! 替换（clone 旧表、插入、swap），读取方 `ArcSwap::load` wait-free，
//! 帧回调永远观察不到半写状态。
//!
//! 键带表名前缀（`robotArmFeed/endAngles`），与总线的命名空间一致。

use std::collections::HashMap;
use std::sync::Arc;

use arc_swap::ArcSwap;
use serde::Deserialize;

/// 总线字段值：定长数值数组或字符串
///
/// untagged 反序列化：JSON 数组 → `Numbers`，JSON 字符串 → `Text`。
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FeedValue {
    Numbers(Vec<f64>),
    Text(String),
}

/// 遥测读取接口
///
/// 声明式默认值语义："取命名字段的当前值，未发布或类型不符时返回给定
/// 默认值"。字段缺失不是错误，永远不会让帧停顿。
pub trait TelemetrySource {
    /// 读取数值数组字段，未发布/类型不符时返回 `default` 的拷贝
    fn numeric_array(&self, key: &str, default: &[f64]) -> Vec<f64>;

    /// 读取字符串字段，未发布/类型不符时返回 `default` 的拷贝
    fn text(&self, key: &str, default: &str) -> String;
}

/// 键值表（写入方后台线程，读取方渲染线程）
#[derive(Debug, Default)]
pub struct FeedTable {
    entries: ArcSwap<HashMap<String, FeedValue>>,
}

impl FeedTable {
    pub fn new() -> Self {
        FeedTable {
            entries: ArcSwap::from_pointee(HashMap::new()),
        }
    }

    /// 插入单个字段（RCU 整表替换）
    pub fn insert(&self, key: impl Into<String>, value: FeedValue) {
        let key = key.into();
        self.entries.rcu(|map| {
            let mut next = HashMap::clone(map);
            next.insert(key.clone(), value.clone());
            next
        });
    }

    /// 批量合并一个数据报携带的字段
    pub fn merge(&self, updates: &HashMap<String, FeedValue>) {
        if updates.is_empty() {
            return;
        }
        self.entries.rcu(|map| {
            let mut next = HashMap::clone(map);
            for (key, value) in updates {
                next.insert(key.clone(), value.clone());
            }
            next
        });
    }

    /// 读取字段当前值（wait-free）
    pub fn get(&self, key: &str) -> Option<FeedValue> {
        self.entries.load().get(key).cloned()
    }

    /// 当前字段数（测试与诊断用）
    pub fn len(&self) -> usize {
        self.entries.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.load().is_empty()
    }
}

impl TelemetrySource for FeedTable {
    fn numeric_array(&self, key: &str, default: &[f64]) -> Vec<f64> {
        match self.get(key) {
            Some(FeedValue::Numbers(values)) => values,
            _ => default.to_vec(),
        }
    }

    fn text(&self, key: &str, default: &str) -> String {
        match self.get(key) {
            Some(FeedValue::Text(value)) => value,
            _ => default.to_owned(),
        }
    }
}

impl<T: TelemetrySource> TelemetrySource for Arc<T> {
    fn numeric_array(&self, key: &str, default: &[f64]) -> Vec<f64> {
        (**self).numeric_array(key, default)
    }

    fn text(&self, key: &str, default: &str) -> String {
        (**self).text(key, default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 测试插入与读取
    #[test]
    fn insert_and_get() {
        let table = FeedTable::new();
        table.insert("t/angles", FeedValue::Numbers(vec![1.0, 2.0, 3.0]));

        assert_eq!(
            table.get("t/angles"),
            Some(FeedValue::Numbers(vec![1.0, 2.0, 3.0]))
        );
        assert_eq!(table.get("t/missing"), None);
    }

    /// 未发布字段返回默认值
    #[test]
    fn missing_field_yields_default() {
        let table = FeedTable::new();
        assert_eq!(
            table.numeric_array("t/angles", &[0.0, 0.0, 0.0]),
            vec![0.0, 0.0, 0.0]
        );
        assert_eq!(table.text("t/state", "LOCKED"), "LOCKED");
    }

    /// 类型不符按缺失处理
    #[test]
    fn type_mismatch_yields_default() {
        let table = FeedTable::new();
        table.insert("t/state", FeedValue::Numbers(vec![1.0]));
        assert_eq!(table.text("t/state", "LOCKED"), "LOCKED");

        table.insert("t/angles", FeedValue::Text("oops".to_owned()));
        assert_eq!(table.numeric_array("t/angles", &[9.0]), vec![9.0]);
    }

    /// 批量合并只覆盖携带的字段
    #[test]
    fn merge_is_partial() {
        let table = FeedTable::new();
        table.insert("t/a", FeedValue::Numbers(vec![1.0]));

        let mut updates = HashMap::new();
        updates.insert("t/b".to_owned(), FeedValue::Text("PLACE".to_owned()));
        table.merge(&updates);

        assert_eq!(table.get("t/a"), Some(FeedValue::Numbers(vec![1.0])));
        assert_eq!(table.get("t/b"), Some(FeedValue::Text("PLACE".to_owned())));
    }

    /// untagged 反序列化：数组与字符串都能解析
    #[test]
    fn feed_value_deserialize() {
        let v: FeedValue = serde_json::from_str("[1.0, 2.5]").unwrap();
        assert_eq!(v, FeedValue::Numbers(vec![1.0, 2.5]));

        let v: FeedValue = serde_json::from_str("\"PICKUP\"").unwrap();
        assert_eq!(v, FeedValue::Text("PICKUP".to_owned()));
    }
}
