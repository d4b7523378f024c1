// ==========================================
// 容器层级查询工具 - 容器层级查询客户端
// ==========================================
// 接口: GET {base}/api-external-api/api/containers/containerhierarchy/contentsByWip/external
// 参数: SiteCode / WipSerialNumber / CustomerId
// ==========================================
// 约定:
// - 非 200 与传输错误统一为 MesError::Query，响应体截断到 200 字符
// - 200 响应只要求是 JSON，不做 schema 校验（字段缺失在扁平化时取默认值）
// ==========================================

use crate::config::{endpoints, MesClientConfig};
use crate::domain::hierarchy::HierarchySnapshot;
use crate::mes::error::{truncate_body, MesError, MesResult};
use crate::mes::session::MesSession;
use crate::mes::source_trait::HierarchySource;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

pub struct ContainerQueryClient {
    session: MesSession,
    config: MesClientConfig,
}

impl ContainerQueryClient {
    pub fn new(session: MesSession, config: MesClientConfig) -> Self {
        Self { session, config }
    }
}

#[async_trait]
impl HierarchySource for ContainerQueryClient {
    async fn fetch_hierarchy(&self, serial_number: &str) -> MesResult<HierarchySnapshot> {
        let url = self.config.endpoint_url(endpoints::CONTENTS_BY_WIP);
        let customer_id = self.config.customer_id.to_string();
        let params = [
            ("SiteCode", self.config.site_code.as_str()),
            ("WipSerialNumber", serial_number),
            ("CustomerId", customer_id.as_str()),
        ];

        tracing::info!(serial = %serial_number, "查询容器层级");

        let resp = self
            .session
            .client
            .get(&url)
            .query(&params)
            .timeout(self.config.query_timeout)
            .send()
            .await
            .map_err(|e| MesError::transport(&e))?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| MesError::transport(&e))?;

        if status != StatusCode::OK {
            tracing::warn!(serial = %serial_number, status = status.as_u16(), "层级查询失败");
            return Err(MesError::http_status(
                status.as_u16(),
                &truncate_body(&body, self.config.error_body_preview_chars),
            ));
        }

        let raw: Value = serde_json::from_str(&body).map_err(|e| {
            MesError::InvalidResponse(format!(
                "{} ({})",
                e,
                truncate_body(&body, self.config.error_body_preview_chars)
            ))
        })?;

        let snapshot = HierarchySnapshot::new(serial_number, chrono::Local::now().naive_local(), raw);
        tracing::info!(
            serial = %serial_number,
            children = snapshot.hierarchy.child_containers.len(),
            serials = snapshot.hierarchy.serial_count(),
            "层级查询成功"
        );
        Ok(snapshot)
    }
}
