// ==========================================
// 容器层级查询工具 - MES 接口层
// ==========================================
// 职责: 认证会话 + 容器层级查询
// ==========================================

pub mod error;
pub mod query_client;
pub mod session;
pub mod source_trait;

pub use error::{MesError, MesResult};
pub use query_client::ContainerQueryClient;
pub use session::{AuthToken, MesSession, SessionManager};
pub use source_trait::HierarchySource;
