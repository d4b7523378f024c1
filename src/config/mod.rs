// ==========================================
// 容器层级查询工具 - 配置层
// ==========================================
// 职责: 站点硬编码配置（接口、账号、输出目录、超时）
// ==========================================

pub mod client_config;

pub use client_config::{defaults, endpoints, MesClientConfig};
