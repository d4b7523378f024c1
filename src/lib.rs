// ==========================================
// MES 容器层级查询工具 - 核心库
// ==========================================
// 功能: 按 WIP 序列号查询包装层级，扁平化后导出 Excel + 审计日志
// 技术栈: Rust + reqwest + rust_xlsxwriter
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 响应模型与导出行
pub mod domain;

// MES 接口层 - 认证会话与层级查询
pub mod mes;

// 引擎层 - 扁平化与摘要
pub mod engine;

// 导出层 - Excel 与审计日志
pub mod exporter;

// 配置层 - 站点常量
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// 应用层 - 交互命令与终端界面
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

pub use app::{AppError, AppResult, AppState};
pub use config::MesClientConfig;
pub use domain::{ContainerHierarchy, FieldValue, FlatRow, HierarchySnapshot};
pub use engine::{flatten, HierarchyFlattener, HierarchySummary};
pub use exporter::{ExcelExporter, ExportOutcome};
pub use mes::{ContainerQueryClient, HierarchySource, MesError, SessionManager};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "MES Container Hierarchy Extractor";
