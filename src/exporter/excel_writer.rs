// ==========================================
// 容器层级查询工具 - Excel 导出
// ==========================================
// 输出: 单工作表 "ContainerHierarchy"，首行表头，无索引列
// 约定: 空行集不写文件，返回 NothingToExport
// ==========================================

use crate::domain::flat_row::{FlatRow, FLAT_ROW_COLUMNS};
use crate::domain::types::FieldValue;
use crate::exporter::error::{ExportError, ExportResult};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::path::{Path, PathBuf};

/// 工作表名
pub const SHEET_NAME: &str = "ContainerHierarchy";

/// 导出结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written { path: PathBuf, row_count: usize },
    NothingToExport,
}

pub struct ExcelExporter;

impl ExcelExporter {
    /// 写出扁平行到 xlsx
    ///
    /// # 返回
    /// - Ok(Written): 写入成功
    /// - Ok(NothingToExport): 空行集，未创建文件
    /// - Err: 写入失败（可能残留部分文件）
    pub fn export_rows(&self, rows: &[FlatRow], path: &Path) -> ExportResult<ExportOutcome> {
        if rows.is_empty() {
            tracing::warn!(path = %path.display(), "无数据可导出，跳过写入");
            return Ok(ExportOutcome::NothingToExport);
        }

        let wrap = |e: XlsxError| ExportError::Workbook {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME).map_err(wrap)?;

        let header_format = Format::new().set_bold();
        for (col, name) in FLAT_ROW_COLUMNS.iter().enumerate() {
            worksheet
                .write_string_with_format(0, col as u16, *name, &header_format)
                .map_err(wrap)?;
        }

        // 超出工作表行数上限时由 rust_xlsxwriter 返回错误
        for (row_num, row) in (1u32..).zip(rows) {
            for (col, cell) in row.cells().iter().enumerate() {
                write_cell(worksheet, row_num, col as u16, cell).map_err(wrap)?;
            }
        }

        workbook.save(path).map_err(wrap)?;

        tracing::info!(path = %path.display(), row_count = rows.len(), "Excel 导出完成");
        Ok(ExportOutcome::Written {
            path: path.to_path_buf(),
            row_count: rows.len(),
        })
    }
}

fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, value: &FieldValue) -> Result<(), XlsxError> {
    match value {
        FieldValue::Text(s) => worksheet.write_string(row, col, s.as_str())?,
        FieldValue::Integer(i) => worksheet.write_number(row, col, *i as f64)?,
        FieldValue::Float(x) => worksheet.write_number(row, col, *x)?,
        FieldValue::Boolean(b) => worksheet.write_boolean(row, col, *b)?,
        FieldValue::NotAvailable => worksheet.write_string(row, col, value.to_string())?,
    };
    Ok(())
}
