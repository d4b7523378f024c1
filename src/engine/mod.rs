// ==========================================
// 容器层级查询工具 - 引擎层
// ==========================================
// 职责: 纯计算（扁平化、摘要），不含 I/O
// ==========================================

pub mod flattener;
pub mod summary;

pub use flattener::{flatten, HierarchyFlattener};
pub use summary::HierarchySummary;
