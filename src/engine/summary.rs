// ==========================================
// 容器层级查询工具 - 查询摘要
// ==========================================
// 职责: 查询成功后给交互界面展示的简要信息
// ==========================================

use crate::domain::hierarchy::ContainerHierarchy;
use crate::domain::types::{or_not_available, FieldValue};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HierarchySummary {
    pub container_number: FieldValue,
    pub container_status: FieldValue,
    pub child_container_count: usize, // 实际返回的子容器数量（非 ChildContainersCount 字段）
    pub first_child_number: Option<FieldValue>,
    pub serial_count: usize,
}

impl HierarchySummary {
    pub fn from_hierarchy(hierarchy: &ContainerHierarchy) -> Self {
        Self {
            container_number: or_not_available(&hierarchy.container_number),
            container_status: or_not_available(&hierarchy.container_status),
            child_container_count: hierarchy.child_containers.len(),
            first_child_number: hierarchy
                .child_containers
                .first()
                .map(|c| or_not_available(&c.container_number)),
            serial_count: hierarchy.serial_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_uses_actual_child_list() {
        let h = ContainerHierarchy::from_json(&json!({
            "ContainerNumber": "P1",
            "ContainerStatus": "Open",
            "ChildContainersCount": 99,
            "ChildContainers": [
                {"ContainerNumber": "B1", "ContainerDetails": {"WIPSerialNumbers": [{"SerialNumber": "X"}]}},
                {"ContainerNumber": "B2"}
            ]
        }));

        let summary = HierarchySummary::from_hierarchy(&h);
        assert_eq!(summary.container_number, FieldValue::from("P1"));
        assert_eq!(summary.child_container_count, 2);
        assert_eq!(summary.first_child_number, Some(FieldValue::from("B1")));
        assert_eq!(summary.serial_count, 1);
    }

    #[test]
    fn test_summary_without_children() {
        let summary = HierarchySummary::from_hierarchy(&ContainerHierarchy::default());
        assert_eq!(summary.container_status, FieldValue::NotAvailable);
        assert_eq!(summary.child_container_count, 0);
        assert!(summary.first_child_number.is_none());
    }
}
