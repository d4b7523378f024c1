// ==========================================
// 容器层级查询工具 - 文本审计日志
// ==========================================
// 格式: "[YYYY-MM-DD HH:MM:SS] {原始层级 JSON}" + 空行
// 约定: 仅追加，文件不存在则创建，从不覆盖已有内容
// ==========================================

use crate::exporter::error::{ExportError, ExportResult};
use chrono::NaiveDateTime;
use serde_json::Value;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// 时间戳格式
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 以当前本地时间追加一条日志
pub fn append_log(raw: &Value, path: &Path) -> ExportResult<()> {
    append_log_at(raw, path, chrono::Local::now().naive_local())
}

/// 以指定时间追加一条日志
pub fn append_log_at(raw: &Value, path: &Path, at: NaiveDateTime) -> ExportResult<()> {
    let entry = format_entry(raw, at);
    let wrap = |source: std::io::Error| ExportError::LogWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(wrap)?;
    file.write_all(entry.as_bytes()).map_err(wrap)?;

    tracing::debug!(path = %path.display(), bytes = entry.len(), "审计日志已追加");
    Ok(())
}

fn format_entry(raw: &Value, at: NaiveDateTime) -> String {
    format!("[{}] {}\n\n", at.format(LOG_TIMESTAMP_FORMAT), raw)
}
