// ==========================================
// 容器层级查询工具 - 层级扁平化引擎
// ==========================================
// 职责: 根容器 → 子容器 → WIP 序列号 的树展开为导出行
// 输入: ContainerHierarchy
// 输出: Vec<FlatRow>，每个序列号一行
// ==========================================
// 红线: 纯函数，无 I/O；同一输入多次调用输出完全一致
// ==========================================

use crate::domain::flat_row::FlatRow;
use crate::domain::hierarchy::{ChildContainer, ContainerHierarchy};
use crate::domain::types::{or_not_available, FieldValue};
use tracing::instrument;

// ==========================================
// HierarchyFlattener - 层级扁平化引擎
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct HierarchyFlattener;

/// 根容器属性（广播到每一行）
struct RootAttributes {
    container_number: FieldValue,
    container_status: FieldValue,
    container_usage_type: FieldValue,
    container_close_date: FieldValue,
    child_containers_count: FieldValue,
}

impl HierarchyFlattener {
    pub fn new() -> Self {
        Self
    }

    /// 展开层级为扁平行
    ///
    /// # 规则
    /// 1. 根属性 5 个字段各自独立取默认值
    /// 2. 子容器按接口顺序遍历，不重排
    /// 3. 每个序列号输出一行；无序列号的子容器不产生行
    /// 4. 无子容器 → 空结果（调用方视为"无数据可导出"，不是错误）
    #[instrument(skip(self, hierarchy), fields(children = hierarchy.child_containers.len()))]
    pub fn flatten(&self, hierarchy: &ContainerHierarchy) -> Vec<FlatRow> {
        let root = RootAttributes {
            container_number: or_not_available(&hierarchy.container_number),
            container_status: or_not_available(&hierarchy.container_status),
            container_usage_type: or_not_available(&hierarchy.usage_type),
            container_close_date: or_not_available(&hierarchy.close_date),
            child_containers_count: or_not_available(&hierarchy.child_count),
        };

        let mut rows = Vec::with_capacity(hierarchy.serial_count());
        for child in &hierarchy.child_containers {
            self.flatten_child(&root, child, &mut rows);
        }

        tracing::debug!(row_count = rows.len(), "层级扁平化完成");
        rows
    }

    fn flatten_child(&self, root: &RootAttributes, child: &ChildContainer, rows: &mut Vec<FlatRow>) {
        let det = &child.details;
        let child_container_number = or_not_available(&child.container_number);
        let material = or_not_available(&det.material);
        let assembly_number = or_not_available(&det.assembly_number);
        let assembly_revision = or_not_available(&det.assembly_revision);
        let assembly_version = or_not_available(&det.assembly_version);
        let packed_date = or_not_available(&det.packed_date);

        for wip in &det.wip_serial_numbers {
            rows.push(FlatRow {
                container_number: root.container_number.clone(),
                container_status: root.container_status.clone(),
                container_usage_type: root.container_usage_type.clone(),
                container_close_date: root.container_close_date.clone(),
                child_containers_count: root.child_containers_count.clone(),
                child_container_number: child_container_number.clone(),
                material: material.clone(),
                assembly_number: assembly_number.clone(),
                assembly_revision: assembly_revision.clone(),
                assembly_version: assembly_version.clone(),
                packed_date: packed_date.clone(),
                serial_number: or_not_available(&wip.serial_number),
            });
        }
    }
}

/// 便捷函数：使用默认引擎展开层级
pub fn flatten(hierarchy: &ContainerHierarchy) -> Vec<FlatRow> {
    HierarchyFlattener::new().flatten(hierarchy)
}
