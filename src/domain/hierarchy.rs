// ==========================================
// 容器层级查询工具 - 容器层级领域模型
// ==========================================
// 对齐: contentsByWip/external 接口响应 (PascalCase 字段)
// 结构: 根容器 → 子容器列表 → WIP 序列号列表
// ==========================================
// 约定: 所有字段均为 Option，缺失/类型不符不报错，导出时再取默认值
// ==========================================

use crate::domain::types::FieldValue;
use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::{Map, Value};

/// 响应字段名
pub mod wire_keys {
    pub const CONTAINER_NUMBER: &str = "ContainerNumber";
    pub const CONTAINER_STATUS: &str = "ContainerStatus";
    pub const CONTAINER_USAGE_TYPE: &str = "ContainerUsageType";
    pub const CONTAINER_CLOSE_DATE: &str = "ContainerCloseDate";
    pub const CHILD_CONTAINERS_COUNT: &str = "ChildContainersCount";
    pub const CHILD_CONTAINERS: &str = "ChildContainers";
    pub const CONTAINER_DETAILS: &str = "ContainerDetails";
    pub const MATERIAL: &str = "Material";
    pub const ASSEMBLY_NUMBER: &str = "AssemblyNumber";
    pub const ASSEMBLY_REVISION: &str = "AssemblyRevision";
    pub const ASSEMBLY_VERSION: &str = "AssemblyVersion";
    pub const CONTAINER_PACKED_DATE: &str = "ContainerPackedDate";
    pub const WIP_SERIAL_NUMBERS: &str = "WIPSerialNumbers";
    pub const SERIAL_NUMBER: &str = "SerialNumber";
}

use wire_keys::*;

// ==========================================
// ContainerHierarchy - 根容器
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContainerHierarchy {
    pub container_number: Option<FieldValue>,
    pub container_status: Option<FieldValue>,
    pub usage_type: Option<FieldValue>,
    pub close_date: Option<FieldValue>,
    pub child_count: Option<FieldValue>,
    pub child_containers: Vec<ChildContainer>, // 保持接口返回顺序
}

// ==========================================
// ChildContainer - 子容器
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChildContainer {
    pub container_number: Option<FieldValue>,
    pub details: ContainerDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContainerDetails {
    pub material: Option<FieldValue>,
    pub assembly_number: Option<FieldValue>,
    pub assembly_revision: Option<FieldValue>,
    pub assembly_version: Option<FieldValue>,
    pub packed_date: Option<FieldValue>,
    pub wip_serial_numbers: Vec<SerialRecord>,
}

// ==========================================
// SerialRecord - 叶子单元 (WIP 序列号)
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SerialRecord {
    pub serial_number: Option<FieldValue>,
}

impl ContainerHierarchy {
    /// 从原始 JSON 文档投影为层级结构（不做 schema 校验）
    ///
    /// # 说明
    /// - 非对象文档 → 全部字段缺失、无子容器
    /// - ChildContainers / WIPSerialNumbers 非数组 → 视为空
    /// - ContainerDetails 非对象 → 明细字段全部缺失
    pub fn from_json(doc: &Value) -> Self {
        let empty = Map::new();
        let root = doc.as_object().unwrap_or(&empty);

        Self {
            container_number: scalar(root, CONTAINER_NUMBER),
            container_status: scalar(root, CONTAINER_STATUS),
            usage_type: scalar(root, CONTAINER_USAGE_TYPE),
            close_date: scalar(root, CONTAINER_CLOSE_DATE),
            child_count: scalar(root, CHILD_CONTAINERS_COUNT),
            child_containers: array(root, CHILD_CONTAINERS)
                .iter()
                .map(ChildContainer::from_json)
                .collect(),
        }
    }

    /// 所有子容器的 WIP 序列号总数（即导出行数）
    pub fn serial_count(&self) -> usize {
        self.child_containers
            .iter()
            .map(|c| c.details.wip_serial_numbers.len())
            .sum()
    }
}

impl ChildContainer {
    fn from_json(value: &Value) -> Self {
        let empty = Map::new();
        let child = value.as_object().unwrap_or(&empty);
        let details = child
            .get(CONTAINER_DETAILS)
            .and_then(Value::as_object)
            .unwrap_or(&empty);

        Self {
            container_number: scalar(child, CONTAINER_NUMBER),
            details: ContainerDetails {
                material: scalar(details, MATERIAL),
                assembly_number: scalar(details, ASSEMBLY_NUMBER),
                assembly_revision: scalar(details, ASSEMBLY_REVISION),
                assembly_version: scalar(details, ASSEMBLY_VERSION),
                packed_date: scalar(details, CONTAINER_PACKED_DATE),
                wip_serial_numbers: array(details, WIP_SERIAL_NUMBERS)
                    .iter()
                    .map(|wip| SerialRecord {
                        serial_number: wip
                            .as_object()
                            .and_then(|obj| scalar(obj, SERIAL_NUMBER)),
                    })
                    .collect(),
            },
        }
    }
}

fn scalar(obj: &Map<String, Value>, key: &str) -> Option<FieldValue> {
    obj.get(key).and_then(FieldValue::from_json)
}

fn array<'a>(obj: &'a Map<String, Value>, key: &str) -> &'a [Value] {
    obj.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

// ==========================================
// HierarchySnapshot - 单次查询结果
// ==========================================
// 用途: "最近一次查询结果"单槽缓存；raw 用于审计日志
#[derive(Debug, Clone, PartialEq)]
pub struct HierarchySnapshot {
    pub serial_number: String,
    pub fetched_at: NaiveDateTime,
    pub raw: Value,
    pub hierarchy: ContainerHierarchy,
}

impl HierarchySnapshot {
    pub fn new(serial_number: impl Into<String>, fetched_at: NaiveDateTime, raw: Value) -> Self {
        let hierarchy = ContainerHierarchy::from_json(&raw);
        Self {
            serial_number: serial_number.into(),
            fetched_at,
            raw,
            hierarchy,
        }
    }

    /// 接口返回了"空"文档（null / {} / [] / "" / false / 0）
    pub fn is_empty_document(&self) -> bool {
        match &self.raw {
            Value::Null => true,
            Value::Bool(b) => !*b,
            Value::Number(n) => n.as_f64() == Some(0.0),
            Value::String(s) => s.is_empty(),
            Value::Object(map) => map.is_empty(),
            Value::Array(items) => items.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_full_document() {
        let doc = json!({
            "ContainerNumber": "PLT-001",
            "ContainerStatus": "Closed",
            "ContainerUsageType": "Pallet",
            "ContainerCloseDate": "2024-05-01T10:00:00",
            "ChildContainersCount": 2,
            "ChildContainers": [
                {
                    "ContainerNumber": "BOX-1",
                    "ContainerDetails": {
                        "Material": "MAT-9",
                        "AssemblyNumber": "ASM-1",
                        "AssemblyRevision": "B",
                        "AssemblyVersion": 3,
                        "ContainerPackedDate": "2024-04-30",
                        "WIPSerialNumbers": [{"SerialNumber": "S1"}, {"SerialNumber": "S2"}]
                    }
                },
                {"ContainerNumber": "BOX-2", "ContainerDetails": {"WIPSerialNumbers": []}}
            ]
        });

        let h = ContainerHierarchy::from_json(&doc);
        assert_eq!(h.container_number, Some(FieldValue::from("PLT-001")));
        assert_eq!(h.child_count, Some(FieldValue::Integer(2)));
        assert_eq!(h.child_containers.len(), 2);
        assert_eq!(h.child_containers[0].details.assembly_version, Some(FieldValue::Integer(3)));
        assert_eq!(h.child_containers[0].details.packed_date, Some(FieldValue::from("2024-04-30")));
        assert_eq!(h.serial_count(), 2);
    }

    #[test]
    fn test_from_json_shape_mismatch_is_lenient() {
        let doc = json!({
            "ContainerNumber": null,
            "ChildContainers": [
                {"ContainerNumber": "BOX-1", "ContainerDetails": "oops"},
                42,
                {"ContainerDetails": {"WIPSerialNumbers": [{"Other": 1}, "S-raw"]}}
            ]
        });

        let h = ContainerHierarchy::from_json(&doc);
        assert_eq!(h.container_number, None);
        assert_eq!(h.child_containers.len(), 3);
        assert!(h.child_containers[0].details.wip_serial_numbers.is_empty());
        assert_eq!(h.child_containers[1], ChildContainer::default());
        let wips = &h.child_containers[2].details.wip_serial_numbers;
        assert_eq!(wips.len(), 2);
        assert!(wips.iter().all(|w| w.serial_number.is_none()));
    }

    #[test]
    fn test_from_json_non_object_document() {
        let h = ContainerHierarchy::from_json(&json!(["unexpected"]));
        assert_eq!(h, ContainerHierarchy::default());
    }

    #[test]
    fn test_snapshot_empty_document() {
        let ts = chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert!(HierarchySnapshot::new("S", ts, json!({})).is_empty_document());
        assert!(HierarchySnapshot::new("S", ts, Value::Null).is_empty_document());
        assert!(!HierarchySnapshot::new("S", ts, json!({"ContainerNumber": "C"})).is_empty_document());
    }

    #[test]
    fn test_snapshot_falsy_scalar_is_empty() {
        let ts = chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        for raw in [json!(""), json!(false), json!(0), json!(0.0), json!([])] {
            assert!(HierarchySnapshot::new("S", ts, raw.clone()).is_empty_document(), "{}", raw);
        }
        for raw in [json!("x"), json!(true), json!(7)] {
            assert!(!HierarchySnapshot::new("S", ts, raw.clone()).is_empty_document(), "{}", raw);
        }
    }
}
