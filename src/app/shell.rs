// ==========================================
// 容器层级查询工具 - 终端交互界面
// ==========================================
// 表单: 序列号 + 文件基名；操作: 查询 / 导出 / 修改文件基名 / 退出
// 结果区: 每次查询清空后输出摘要；错误以通知形式输出
// ==========================================
// 启动: 先认证，失败则不进入菜单
// ==========================================

use crate::app::commands::{export_last, extract};
use crate::app::error::AppError;
use crate::app::presenter::{
    error_notification, export_notification, log_failure_notification, summary_lines, Notification,
    Severity,
};
use crate::app::state::AppState;
use crate::config::MesClientConfig;
use crate::i18n::{t, t_with_args};
use anyhow::Result;
use console::{style, Term};
use dialoguer::{Input, Select};

/// 表单输入（跨操作保留）
#[derive(Debug, Default)]
struct FormInput {
    serial: String,
    file_base: String,
}

/// 认证并运行交互循环
pub async fn run(config: MesClientConfig) -> Result<()> {
    let term = Term::stdout();
    term.write_line(&style(t("shell.title")).bold().to_string())?;
    term.write_line(&t("shell.authenticating"))?;

    let mut state = match AppState::connect(config).await {
        Ok(state) => state,
        Err(e) => {
            show_notification(&term, &error_notification(&e))?;
            return Err(anyhow::anyhow!(e.to_string()));
        }
    };
    term.write_line(&t("shell.authenticated"))?;

    let mut form = FormInput {
        file_base: state.config.default_file_base.clone(),
        ..FormInput::default()
    };

    loop {
        term.write_line("")?;
        let items = [
            t("shell.menu_extract"),
            t("shell.menu_export"),
            t("shell.menu_file_base"),
            t("shell.menu_quit"),
        ];
        let choice = Select::new()
            .with_prompt(t("shell.menu_prompt"))
            .items(&items)
            .default(0)
            .interact()?;

        match choice {
            0 => on_extract(&term, &mut state, &mut form).await?,
            1 => on_export(&term, &state, &mut form)?,
            2 => form.file_base = prompt_file_base(&form)?,
            _ => break,
        }
    }

    term.write_line(&t("shell.goodbye"))?;
    Ok(())
}

async fn on_extract(term: &Term, state: &mut AppState, form: &mut FormInput) -> Result<()> {
    // 回车提交序列号即触发查询，文件基名沿用表单当前值
    form.serial = Input::new()
        .with_prompt(t("shell.serial_prompt"))
        .with_initial_text(form.serial.clone())
        .allow_empty(true)
        .interact_text()?;

    if form.serial.trim().is_empty() {
        show_notification(term, &error_notification(&AppError::MissingSerialNumber))?;
        return Ok(());
    }

    // 结果区
    term.write_line("")?;
    term.write_line(&t_with_args("shell.querying", &[("serial", form.serial.trim())]))?;

    match extract(state, &form.serial, &form.file_base).await {
        Ok(report) => {
            for line in summary_lines(&report) {
                term.write_line(&line)?;
            }
            if let Some(err) = &report.log_error {
                show_notification(term, &log_failure_notification(err))?;
            }
        }
        Err(e) => {
            tracing::warn!(code = e.code(), "查询失败: {}", e);
            show_notification(term, &error_notification(&e))?;
        }
    }
    Ok(())
}

fn on_export(term: &Term, state: &AppState, form: &mut FormInput) -> Result<()> {
    form.file_base = prompt_file_base(form)?;

    match export_last(state, &form.file_base) {
        Ok(report) => {
            show_notification(term, &export_notification(&report))?;
            if let Some(err) = &report.log_error {
                show_notification(term, &log_failure_notification(err))?;
            }
        }
        Err(e) => {
            tracing::warn!(code = e.code(), "导出失败: {}", e);
            show_notification(term, &error_notification(&e))?;
        }
    }
    Ok(())
}

fn prompt_file_base(form: &FormInput) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(t("shell.file_base_prompt"))
        .with_initial_text(form.file_base.clone())
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

fn show_notification(term: &Term, notification: &Notification) -> Result<()> {
    let title = match notification.severity {
        Severity::Info => style(format!("[{}]", notification.title)).green().bold(),
        Severity::Warning => style(format!("[{}]", notification.title)).yellow().bold(),
        Severity::Error => style(format!("[{}]", notification.title)).red().bold(),
    };
    term.write_line(&format!("{} {}", title, notification.message))?;
    Ok(())
}
