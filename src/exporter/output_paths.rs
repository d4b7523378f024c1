// ==========================================
// 容器层级查询工具 - 输出文件路径
// ==========================================
// 布局: {dir}/{base}_export.xlsx + {dir}/{base}_log.txt
// ==========================================

use crate::exporter::error::{ExportError, ExportResult};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub export_file: PathBuf,
    pub log_file: PathBuf,
}

impl OutputPaths {
    pub fn new(output_dir: &Path, file_base: &str) -> Self {
        Self {
            export_file: output_dir.join(format!("{}_export.xlsx", file_base)),
            log_file: output_dir.join(format!("{}_log.txt", file_base)),
        }
    }
}

/// 确保输出目录存在（递归创建，已存在不报错）
pub fn ensure_output_dir(output_dir: &Path) -> ExportResult<()> {
    std::fs::create_dir_all(output_dir).map_err(|source| ExportError::OutputDir {
        path: output_dir.to_path_buf(),
        source,
    })
}
