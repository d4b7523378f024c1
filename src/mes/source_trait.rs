// ==========================================
// 容器层级查询工具 - 层级数据源 Trait
// ==========================================
// 用途: 应用层只依赖此接口，便于替换/模拟 HTTP 查询
// 实现者: ContainerQueryClient
// ==========================================

use crate::domain::hierarchy::HierarchySnapshot;
use crate::mes::error::MesResult;
use async_trait::async_trait;

#[async_trait]
pub trait HierarchySource: Send + Sync {
    /// 按 WIP 序列号查询容器层级
    ///
    /// # 返回
    /// - Ok(HierarchySnapshot): 原始文档 + 投影后的层级
    /// - Err(MesError::Query): 非 200 或传输错误
    /// - Err(MesError::InvalidResponse): 响应不是 JSON
    async fn fetch_hierarchy(&self, serial_number: &str) -> MesResult<HierarchySnapshot>;
}
