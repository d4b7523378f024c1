// ==========================================
// 容器层级查询工具 - 导出层
// ==========================================
// 职责: 扁平行 → Excel；原始层级 → 追加式文本日志
// 约定: 尽力而为，失败以错误返回给交互层，不终止进程
// ==========================================

pub mod audit_log;
pub mod error;
pub mod excel_writer;
pub mod output_paths;

pub use audit_log::{append_log, append_log_at};
pub use error::{ExportError, ExportResult};
pub use excel_writer::{ExcelExporter, ExportOutcome, SHEET_NAME};
pub use output_paths::{ensure_output_dir, OutputPaths};
