// ==========================================
// 容器层级查询工具 - 领域类型定义
// ==========================================
// 职责: MES 响应中的标量字段值 + 缺失哨兵
// ==========================================

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// 缺失字段的哨兵文本（导出单元格/摘要中显示）
pub const NOT_AVAILABLE: &str = "N/A";

// ==========================================
// 字段值 (Field Value)
// ==========================================
// 保留 JSON 标量类型，数值导出为数字单元格
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    NotAvailable,
}

impl FieldValue {
    /// 从 JSON 值投影为字段值
    ///
    /// # 返回
    /// - None: 值为 null（按缺失处理）
    /// - Some(FieldValue): 标量原样保留；对象/数组降级为紧凑 JSON 文本
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(FieldValue::Text(s.clone())),
            Value::Bool(b) => Some(FieldValue::Boolean(*b)),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Some(FieldValue::Integer(i)),
                None => n.as_f64().map(FieldValue::Float),
            },
            Value::Array(_) | Value::Object(_) => Some(FieldValue::Text(value.to_string())),
        }
    }

    pub fn is_not_available(&self) -> bool {
        matches!(self, FieldValue::NotAvailable)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Integer(i) => write!(f, "{}", i),
            FieldValue::Float(x) => write!(f, "{}", x),
            FieldValue::Boolean(b) => write!(f, "{}", b),
            FieldValue::NotAvailable => write!(f, "{}", NOT_AVAILABLE),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

/// 缺失字段默认投影：None → NotAvailable
pub fn or_not_available(value: &Option<FieldValue>) -> FieldValue {
    value.clone().unwrap_or(FieldValue::NotAvailable)
}
