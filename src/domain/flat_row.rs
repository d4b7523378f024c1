// ==========================================
// 容器层级查询工具 - 扁平行模型
// ==========================================
// 一行 = 根容器属性 ⊕ 子容器编号 ⊕ 子容器明细 ⊕ 单个序列号
// 对齐: 导出 Excel 的列顺序
// ==========================================

use crate::domain::types::FieldValue;
use serde::Serialize;

/// 导出列名（表头顺序）
pub const FLAT_ROW_COLUMNS: [&str; 12] = [
    "ContainerNumber",
    "ContainerStatus",
    "ContainerUsageType",
    "ContainerCloseDate",
    "ChildContainersCount",
    "ChildContainerNumber",
    "Material",
    "AssemblyNumber",
    "AssemblyRevision",
    "AssemblyVersion",
    "PackedDate",
    "SerialNumber",
];

// ==========================================
// FlatRow - 扁平化后的导出行
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FlatRow {
    // ===== 根容器属性 (每行重复) =====
    pub container_number: FieldValue,
    pub container_status: FieldValue,
    pub container_usage_type: FieldValue,
    pub container_close_date: FieldValue,
    pub child_containers_count: FieldValue,

    // ===== 子容器属性 =====
    pub child_container_number: FieldValue,
    pub material: FieldValue,
    pub assembly_number: FieldValue,
    pub assembly_revision: FieldValue,
    pub assembly_version: FieldValue,
    pub packed_date: FieldValue,

    // ===== 叶子 =====
    pub serial_number: FieldValue,
}

impl FlatRow {
    /// 按 FLAT_ROW_COLUMNS 顺序输出单元格
    pub fn cells(&self) -> [&FieldValue; 12] {
        [
            &self.container_number,
            &self.container_status,
            &self.container_usage_type,
            &self.container_close_date,
            &self.child_containers_count,
            &self.child_container_number,
            &self.material,
            &self.assembly_number,
            &self.assembly_revision,
            &self.assembly_version,
            &self.packed_date,
            &self.serial_number,
        ]
    }
}
