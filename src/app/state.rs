// ==========================================
// 容器层级查询工具 - 应用状态
// ==========================================
// 职责: 持有配置、已认证的数据源、"最近一次查询结果"单槽
// 生命周期: 进程内唯一，单线程顺序使用
// ==========================================

use crate::app::error::{AppError, AppResult};
use crate::config::MesClientConfig;
use crate::domain::hierarchy::HierarchySnapshot;
use crate::engine::HierarchyFlattener;
use crate::exporter::ExcelExporter;
use crate::mes::{ContainerQueryClient, HierarchySource, SessionManager};

/// 应用状态
pub struct AppState {
    /// 站点配置
    pub config: MesClientConfig,

    /// 层级数据源（生产环境为已认证的 ContainerQueryClient）
    pub(crate) source: Box<dyn HierarchySource>,

    pub(crate) flattener: HierarchyFlattener,
    pub(crate) exporter: ExcelExporter,

    /// 最近一次成功查询结果（下次成功查询时覆盖）
    pub(crate) last_result: Option<HierarchySnapshot>,
}

impl AppState {
    /// 使用指定数据源创建状态（不发起认证）
    pub fn new(config: MesClientConfig, source: Box<dyn HierarchySource>) -> Self {
        Self {
            config,
            source,
            flattener: HierarchyFlattener::new(),
            exporter: ExcelExporter,
            last_result: None,
        }
    }

    /// 认证并创建状态
    ///
    /// # 返回
    /// - Ok(AppState): 会话已建立
    /// - Err(AuthenticationFailure): 认证失败，交互界面不应启动
    pub async fn connect(config: MesClientConfig) -> AppResult<Self> {
        tracing::info!("初始化 MES 会话，接口地址: {}", config.api_base_url);

        let manager = SessionManager::new(config.clone()).map_err(AppError::AuthenticationFailure)?;
        let session = manager
            .build_session()
            .await
            .map_err(AppError::AuthenticationFailure)?;

        let client = ContainerQueryClient::new(session, config.clone());
        tracing::info!("MES 会话初始化成功");
        Ok(Self::new(config, Box::new(client)))
    }

    pub fn last_result(&self) -> Option<&HierarchySnapshot> {
        self.last_result.as_ref()
    }
}
