// ==========================================
// 库存导出处理API
// ==========================================
// 职责: 面向交互外壳的处理入口
// 流程: 上传 → 报表视图 / 仓库视图 → 仓库导出
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::ConfigManager;
use crate::domain::table::Table;
use crate::exporter::{build_export, CsvExport};
use crate::importer::InventoryProcessor;
use crate::projector::{project_report, project_warehouse};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

/// 上传处理响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResponse {
    /// 请求ID
    pub request_id: String,
    /// 原始行数
    pub raw_rows: usize,
    /// 规范化后行数
    pub normalized_rows: usize,
    /// 规范化表预览（前 N 行）
    pub preview: Table,
}

/// 视图响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewResponse {
    /// 视图名称（report / warehouse）
    pub view: String,
    /// 列名
    pub columns: Vec<String>,
    /// 总行数
    pub total_rows: usize,
    /// 预览（前 N 行）
    pub preview: Table,
}

/// 导出响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportResponse {
    pub file_name: String,
    pub mime_type: String,
    pub data: String,
    pub rows: usize,
}

// ==========================================
// ProcessApi
// ==========================================
pub struct ProcessApi {
    config: ConfigManager,
}

impl ProcessApi {
    pub fn new(config: ConfigManager) -> Self {
        Self { config }
    }

    /// 处理一次上传，返回本次请求独占的会话
    pub fn upload(&self, bytes: &[u8]) -> ApiResult<ProcessSession> {
        if bytes.is_empty() {
            return Err(ApiError::InvalidInput("上传内容为空".to_string()));
        }

        let processor = InventoryProcessor::from_config(&self.config)?;
        let outcome = processor.process_bytes(bytes)?;

        Ok(ProcessSession {
            request_id: outcome.request_id,
            raw_rows: outcome.raw_rows,
            normalized: outcome.normalized,
            preview_rows: self.config.get_preview_rows(),
            export_prefix: self.config.get_export_file_prefix(),
        })
    }
}

// ==========================================
// ProcessSession - 单次上传的处理结果
// ==========================================
// 报表 / 仓库视图均从同一规范化快照派生，互不影响
#[derive(Debug, Clone)]
pub struct ProcessSession {
    request_id: String,
    raw_rows: usize,
    normalized: Table,
    preview_rows: usize,
    export_prefix: String,
}

impl ProcessSession {
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    pub fn normalized(&self) -> &Table {
        &self.normalized
    }

    pub fn summary(&self) -> ProcessResponse {
        ProcessResponse {
            request_id: self.request_id.clone(),
            raw_rows: self.raw_rows,
            normalized_rows: self.normalized.len(),
            preview: self.normalized.head(self.preview_rows),
        }
    }

    /// 完整报表表
    pub fn report_table(&self) -> Table {
        project_report(&self.normalized)
    }

    /// 完整仓库表
    pub fn warehouse_table(&self) -> ApiResult<Table> {
        Ok(project_warehouse(&self.normalized)?)
    }

    pub fn report_view(&self) -> ViewResponse {
        self.view("report", self.report_table())
    }

    pub fn warehouse_view(&self) -> ApiResult<ViewResponse> {
        Ok(self.view("warehouse", self.warehouse_table()?))
    }

    /// 导出仓库视图（文件名按 date 生成）
    pub fn export_warehouse(&self, date: NaiveDate) -> ApiResult<ExportResponse> {
        let warehouse = self.warehouse_table()?;
        let CsvExport {
            file_name,
            mime_type,
            data,
        } = build_export(&warehouse, &self.export_prefix, date)?;

        info!(
            request_id = %self.request_id,
            file_name = %file_name,
            rows = warehouse.len(),
            "仓库视图导出完成"
        );

        Ok(ExportResponse {
            file_name,
            mime_type,
            data,
            rows: warehouse.len(),
        })
    }

    fn view(&self, name: &str, table: Table) -> ViewResponse {
        ViewResponse {
            view: name.to_string(),
            columns: table.columns().to_vec(),
            total_rows: table.len(),
            preview: table.head(self.preview_rows),
        }
    }
}
