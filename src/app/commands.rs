// ==========================================
// 容器层级查询工具 - 交互命令
// ==========================================
// extract:     查询序列号 → 更新最近结果 → 追加日志 → 返回摘要
// export_last: 扁平化最近结果 → 写 Excel → 追加日志
// ==========================================

use crate::app::error::{AppError, AppResult, EmptyReason};
use crate::app::state::AppState;
use crate::engine::HierarchySummary;
use crate::exporter::{append_log, ensure_output_dir, ExportOutcome, OutputPaths};
use serde_json::Value;
use std::path::PathBuf;

/// 查询结果报告
#[derive(Debug)]
pub struct ExtractReport {
    pub serial_number: String,
    pub summary: HierarchySummary,
    pub log_file: PathBuf,
    /// 日志追加失败（不影响查询结果）
    pub log_error: Option<AppError>,
}

/// 导出结果报告
#[derive(Debug)]
pub struct ExportReport {
    pub export_file: PathBuf,
    pub row_count: usize,
    pub log_file: PathBuf,
    pub log_error: Option<AppError>,
}

/// 查询 WIP 序列号对应的容器层级
///
/// # 说明
/// - 序列号去空白后为空 → MissingSerialNumber，不发请求
/// - 查询失败或返回空文档 → 最近结果保持不变
pub async fn extract(state: &mut AppState, serial_input: &str, file_base_input: &str) -> AppResult<ExtractReport> {
    let serial = serial_input.trim();
    if serial.is_empty() {
        return Err(AppError::MissingSerialNumber);
    }
    let file_base = state.config.resolve_file_base(file_base_input);

    let snapshot = state
        .source
        .fetch_hierarchy(serial)
        .await
        .map_err(AppError::QueryFailure)?;

    if snapshot.is_empty_document() {
        tracing::warn!(serial = %serial, "接口未返回数据");
        return Err(AppError::EmptyResult(EmptyReason::NoDataReturned));
    }

    let summary = HierarchySummary::from_hierarchy(&snapshot.hierarchy);
    let paths = OutputPaths::new(&state.config.output_dir, &file_base);
    let log_error = write_log(state, &snapshot.raw, &paths).err();

    state.last_result = Some(snapshot);

    Ok(ExtractReport {
        serial_number: serial.to_string(),
        summary,
        log_file: paths.log_file,
        log_error,
    })
}

/// 导出最近一次查询结果
///
/// # 说明
/// - 无最近结果 → NothingLoaded
/// - 扁平化后无行 → EmptyResult(NothingToExport)，不生成 Excel
/// - 无论导出是否成功，都会追加一次日志
pub fn export_last(state: &AppState, file_base_input: &str) -> AppResult<ExportReport> {
    let snapshot = state.last_result.as_ref().ok_or(AppError::NothingLoaded)?;
    let file_base = state.config.resolve_file_base(file_base_input);
    let paths = OutputPaths::new(&state.config.output_dir, &file_base);

    let rows = state.flattener.flatten(&snapshot.hierarchy);
    let exported = ensure_output_dir(&state.config.output_dir)
        .and_then(|_| state.exporter.export_rows(&rows, &paths.export_file));

    let log_result = write_log(state, &snapshot.raw, &paths);

    match exported {
        Ok(ExportOutcome::Written { path, row_count }) => Ok(ExportReport {
            export_file: path,
            row_count,
            log_file: paths.log_file,
            log_error: log_result.err(),
        }),
        Ok(ExportOutcome::NothingToExport) => Err(AppError::EmptyResult(EmptyReason::NothingToExport)),
        Err(e) => {
            tracing::error!(path = %paths.export_file.display(), "Excel 导出失败: {}", e);
            Err(AppError::IoFailure(e))
        }
    }
}

fn write_log(state: &AppState, raw: &Value, paths: &OutputPaths) -> AppResult<()> {
    let result = ensure_output_dir(&state.config.output_dir).and_then(|_| append_log(raw, &paths.log_file));
    if let Err(e) = &result {
        tracing::warn!(path = %paths.log_file.display(), "日志写入失败: {}", e);
    }
    result.map_err(AppError::IoFailure)
}
