// ==========================================
// 容器层级查询工具 - 导出模块错误类型
// ==========================================

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("输出目录创建失败 ({path}): {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("日志写入失败 ({path}): {source}")]
    LogWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Excel 写入失败 ({path}): {message}")]
    Workbook { path: PathBuf, message: String },
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;
