// ==========================================
// 容器层级查询工具 - 结果呈现
// ==========================================
// 职责: 把命令结果/错误转换为本地化文本（结果区行 + 通知）
// 说明: 不做终端 I/O，便于测试；终端渲染见 shell.rs
// ==========================================

use crate::app::commands::{ExportReport, ExtractReport};
use crate::app::error::{AppError, EmptyReason};
use crate::i18n::{t, t_with_args};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// 模态通知（标题 + 正文）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Notification {
    fn new(severity: Severity, message: String) -> Self {
        let title = match severity {
            Severity::Info => t("notify.info_title"),
            Severity::Warning => t("notify.warning_title"),
            Severity::Error => t("notify.error_title"),
        };
        Self {
            severity,
            title,
            message,
        }
    }
}

/// 查询成功后结果区的文本行
pub fn summary_lines(report: &ExtractReport) -> Vec<String> {
    let s = &report.summary;
    let container = s.container_number.to_string();
    let status = s.container_status.to_string();
    let children = s.child_container_count.to_string();
    let serials = s.serial_count.to_string();

    let mut lines = vec![
        t_with_args("summary.container", &[("value", container.as_str())]),
        t_with_args("summary.status", &[("value", status.as_str())]),
        t_with_args("summary.children", &[("count", children.as_str())]),
        t_with_args("summary.serials", &[("count", serials.as_str())]),
    ];

    if let Some(first) = &s.first_child_number {
        let first = first.to_string();
        lines.push(String::new());
        lines.push(t("summary.first_child_header"));
        lines.push(t_with_args("summary.first_child", &[("value", first.as_str())]));
    }
    lines
}

/// 错误通知
pub fn error_notification(err: &AppError) -> Notification {
    let detail = err.detail().unwrap_or_default();
    let message = match err {
        AppError::AuthenticationFailure(_) => {
            t_with_args("error.authentication_failure", &[("detail", detail.as_str())])
        }
        AppError::QueryFailure(_) => t_with_args("error.query_failure", &[("detail", detail.as_str())]),
        AppError::EmptyResult(EmptyReason::NoDataReturned) => t("error.no_data_returned"),
        AppError::EmptyResult(EmptyReason::NothingToExport) => t("error.nothing_to_export"),
        AppError::NothingLoaded => t("error.nothing_loaded"),
        AppError::MissingSerialNumber => t("error.missing_serial_number"),
        AppError::IoFailure(_) => t_with_args("error.io_failure", &[("detail", detail.as_str())]),
    };

    let severity = if err.is_warning() {
        Severity::Warning
    } else {
        Severity::Error
    };
    Notification::new(severity, message)
}

/// 导出成功通知
pub fn export_notification(report: &ExportReport) -> Notification {
    Notification::new(
        Severity::Info,
        t_with_args(
            "notify.exported",
            &[
                ("count", report.row_count.to_string().as_str()),
                ("path", report.export_file.display().to_string().as_str()),
            ],
        ),
    )
}

/// 日志追加失败通知（附带在成功结果之后）
pub fn log_failure_notification(err: &AppError) -> Notification {
    let detail = err.detail().unwrap_or_else(|| err.to_string());
    Notification::new(
        Severity::Error,
        t_with_args("notify.log_failed", &[("detail", detail.as_str())]),
    )
}
