// ==========================================
// 容器层级查询工具 - 领域模型层
// ==========================================
// 职责: 定义 MES 响应模型、扁平行、字段值类型
// 红线: 不含 I/O,不含 HTTP
// ==========================================

pub mod flat_row;
pub mod hierarchy;
pub mod types;

// 重导出核心类型
pub use flat_row::{FlatRow, FLAT_ROW_COLUMNS};
pub use hierarchy::{
    ChildContainer, ContainerDetails, ContainerHierarchy, HierarchySnapshot, SerialRecord,
};
pub use types::{or_not_available, FieldValue, NOT_AVAILABLE};
