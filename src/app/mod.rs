// ==========================================
// 容器层级查询工具 - 应用层
// ==========================================
// 职责: 交互命令（查询/导出）、错误归并、终端界面
// ==========================================

pub mod commands;
pub mod error;
pub mod presenter;
pub mod state;

#[cfg(feature = "shell")]
pub mod shell;

// 重导出
pub use commands::{export_last, extract, ExportReport, ExtractReport};
pub use error::{AppError, AppResult, EmptyReason};
pub use state::AppState;
