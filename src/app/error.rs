// ==========================================
// 容器层级查询工具 - 应用层错误类型
// ==========================================
// 职责: 把 MES/导出错误归并为交互层可识别的错误种类
// 呈现: 由交互层决定（终端通知、日志、stderr）
// ==========================================

use crate::exporter::error::ExportError;
use crate::mes::error::MesError;
use std::fmt;
use thiserror::Error;

/// 空结果的具体原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// 查询成功但接口返回空文档
    NoDataReturned,
    /// 扁平化后无任何行
    NothingToExport,
}

impl fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyReason::NoDataReturned => write!(f, "接口未返回数据"),
            EmptyReason::NothingToExport => write!(f, "无数据可导出"),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    // ===== 接口 =====
    #[error("{0}")]
    AuthenticationFailure(MesError),

    #[error("查询失败: {0}")]
    QueryFailure(MesError),

    // ===== 数据 =====
    #[error("{0}")]
    EmptyResult(EmptyReason),

    #[error("尚未加载任何查询结果")]
    NothingLoaded,

    // ===== 输入 =====
    #[error("请输入 WIP 序列号")]
    MissingSerialNumber,

    // ===== 文件 =====
    #[error("{0}")]
    IoFailure(#[from] ExportError),
}

impl AppError {
    /// 稳定错误代码（供交互层映射文案）
    pub fn code(&self) -> &'static str {
        match self {
            AppError::AuthenticationFailure(_) => "AUTHENTICATION_FAILURE",
            AppError::QueryFailure(_) => "QUERY_FAILURE",
            AppError::EmptyResult(EmptyReason::NoDataReturned) => "NO_DATA_RETURNED",
            AppError::EmptyResult(EmptyReason::NothingToExport) => "NOTHING_TO_EXPORT",
            AppError::NothingLoaded => "NOTHING_LOADED",
            AppError::MissingSerialNumber => "MISSING_SERIAL_NUMBER",
            AppError::IoFailure(_) => "IO_FAILURE",
        }
    }

    /// 提示类错误（用户可直接纠正），其余为故障
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            AppError::EmptyResult(_) | AppError::NothingLoaded | AppError::MissingSerialNumber
        )
    }

    /// 底层诊断信息（无则为 None）
    pub fn detail(&self) -> Option<String> {
        match self {
            AppError::AuthenticationFailure(e) | AppError::QueryFailure(e) => Some(e.to_string()),
            AppError::IoFailure(e) => Some(e.to_string()),
            _ => None,
        }
    }
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;
