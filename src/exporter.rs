// ==========================================
// 库存导出重整 - CSV 导出
// ==========================================
// 格式: 表头 + 数据行，不含行索引
// 文件名: <prefix>_<YYYYMMDD>.csv（本地日期）
// ==========================================

use crate::domain::table::Table;
use crate::importer::error::{ImportError, ImportResult};
use chrono::{Local, NaiveDate};
use csv::{Terminator, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const EXPORT_MIME_TYPE: &str = "text/csv";
pub const DEFAULT_EXPORT_PREFIX: &str = "warehouse_processed";
/// 导出文件固定为逗号分隔（与上传分隔符无关）
pub const EXPORT_DELIMITER: u8 = b',';

/// 导出文件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvExport {
    pub file_name: String,
    pub mime_type: String,
    pub data: String,
}

/// 本地当前日期
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// 导出文件名，例如 warehouse_processed_20250120.csv
pub fn export_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{}_{}.csv", prefix, date.format("%Y%m%d"))
}

/// 渲染为 CSV 文本
pub fn to_csv_string(table: &Table, delimiter: u8) -> ImportResult<String> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ImportError::InternalError(format!("CSV 缓冲区写出失败: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| ImportError::InternalError(format!("CSV 内容非 UTF-8: {}", e)))
}

/// 构建导出内容（不落盘）
pub fn build_export(table: &Table, prefix: &str, date: NaiveDate) -> ImportResult<CsvExport> {
    Ok(CsvExport {
        file_name: export_file_name(prefix, date),
        mime_type: EXPORT_MIME_TYPE.to_string(),
        data: to_csv_string(table, EXPORT_DELIMITER)?,
    })
}

/// 写入导出目录，返回完整路径
pub fn write_export(export: &CsvExport, output_dir: &Path) -> ImportResult<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(&export.file_name);
    fs::write(&path, export.data.as_bytes())?;
    tracing::info!(path = %path.display(), bytes = export.data.len(), "导出文件已写入");
    Ok(path)
}
