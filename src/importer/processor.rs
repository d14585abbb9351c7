// ==========================================
// 库存导出重整 - 库存处理器实现
// ==========================================
// 职责: 整合单次上传的处理流程
// 流程: 解析 → 列选择 → 规范化
// ==========================================

use crate::config::column_spec::ColumnSpec;
use crate::config::ConfigManager;
use crate::domain::table::{RawTable, Table};
use crate::importer::column_selector::select_columns;
use crate::importer::error::ImportResult;
use crate::importer::field_parser::CompositeFieldParser;
use crate::importer::file_parser::CsvParser;
use crate::importer::importer_trait::{FieldParser, FileParser};
use crate::importer::normalizer::normalize_with;
use crate::perf::PerfGuard;
use std::path::Path;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

// ==========================================
// ProcessOutcome - 单次处理结果
// ==========================================
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    pub request_id: String,
    pub raw_rows: usize,
    pub normalized: Table,
}

// ==========================================
// InventoryProcessor - 库存处理器
// ==========================================
pub struct InventoryProcessor {
    column_spec: ColumnSpec,
    file_parser: Box<dyn FileParser>,
    field_parser: Box<dyn FieldParser>,
}

impl InventoryProcessor {
    /// 创建新的 InventoryProcessor 实例
    ///
    /// # 参数
    /// - column_spec: 列映射
    /// - file_parser: 文件解析器
    /// - field_parser: 复合字段解析器
    pub fn new(
        column_spec: ColumnSpec,
        file_parser: Box<dyn FileParser>,
        field_parser: Box<dyn FieldParser>,
    ) -> Self {
        Self {
            column_spec,
            file_parser,
            field_parser,
        }
    }

    /// 默认组件: 逗号分隔 CSV + 库存导出列映射
    pub fn with_defaults() -> Self {
        Self::new(
            ColumnSpec::inventory_export(),
            Box::new(CsvParser::default()),
            Box::new(CompositeFieldParser),
        )
    }

    /// 按配置构建（分隔符、列映射）
    pub fn from_config(config: &ConfigManager) -> ImportResult<Self> {
        Ok(Self::new(
            config.get_column_spec()?,
            Box::new(CsvParser::new(config.get_csv_delimiter()?)),
            Box::new(CompositeFieldParser),
        ))
    }

    pub fn column_spec(&self) -> &ColumnSpec {
        &self.column_spec
    }

    /// 处理上传内容
    #[instrument(skip(self, bytes), fields(request_id, upload_bytes = bytes.len()))]
    pub fn process_bytes(&self, bytes: &[u8]) -> ImportResult<ProcessOutcome> {
        let request_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("request_id", request_id.as_str());
        info!(request_id = %request_id, "开始处理库存导出");

        // === 步骤 1: 解析 ===
        debug!("步骤 1: 解析上传内容");
        let raw = self.file_parser.parse_bytes(bytes).map_err(|e| {
            error!(error = %e, "上传内容解析失败");
            e
        })?;

        self.finish(request_id, raw)
    }

    /// 处理本地文件
    #[instrument(skip(self, file_path), fields(request_id))]
    pub fn process_file<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<ProcessOutcome> {
        let request_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("request_id", request_id.as_str());

        let file_path = file_path.as_ref();
        info!(request_id = %request_id, file_path = %file_path.display(), "开始处理库存导出");

        // === 步骤 1: 解析 ===
        debug!("步骤 1: 解析文件");
        let raw = self.file_parser.parse_to_raw_table(file_path).map_err(|e| {
            error!(error = %e, "文件解析失败");
            e
        })?;

        self.finish(request_id, raw)
    }

    /// 列选择 + 规范化（不涉及 I/O）
    pub fn process_raw(&self, raw: &RawTable) -> ImportResult<Table> {
        let _perf = PerfGuard::new("process_raw");

        // === 步骤 2: 列选择 ===
        debug!("步骤 2: 列选择");
        let selected = select_columns(raw, &self.column_spec).map_err(|e| {
            error!(error = %e, "列选择失败");
            e
        })?;

        // === 步骤 3: 规范化 ===
        debug!("步骤 3: 复合字段拆分与排序");
        normalize_with(&selected, self.field_parser.as_ref()).map_err(|e| {
            error!(error = %e, "规范化失败");
            e
        })
    }

    fn finish(&self, request_id: String, raw: RawTable) -> ImportResult<ProcessOutcome> {
        let raw_rows = raw.len();
        info!(total_rows = raw_rows, "解析完成");

        let normalized = self.process_raw(&raw)?;
        info!(
            request_id = %request_id,
            normalized_rows = normalized.len(),
            "库存导出处理完成"
        );

        Ok(ProcessOutcome {
            request_id,
            raw_rows,
            normalized,
        })
    }
}

impl Default for InventoryProcessor {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::error::ImportError;

    fn line(cusid: &str, product: &str, location: &str) -> String {
        let mut fields = vec![String::new(); 29];
        fields[14] = cusid.to_string();
        fields[17] = product.to_string();
        fields[18] = "Label: Thing".to_string();
        fields[21] = "U1".to_string();
        fields[22] = location.to_string();
        fields[26] = "4".to_string();
        fields.join(",")
    }

    #[test]
    fn test_process_bytes() {
        let content = format!(
            "{}\n{}\n",
            line("CID:2-Beta", "P2", "A*1*1*1"),
            line("CID:1-Acme", "P1", "B*1*1*1")
        );
        let processor = InventoryProcessor::with_defaults();
        let outcome = processor.process_bytes(content.as_bytes()).unwrap();

        assert_eq!(outcome.raw_rows, 2);
        assert_eq!(outcome.normalized.len(), 2);
        assert_eq!(outcome.normalized.value(0, "cus_id"), Some("1"));
        assert!(!outcome.request_id.is_empty());
    }

    #[test]
    fn test_process_bytes_narrow_row() {
        let processor = InventoryProcessor::with_defaults();
        let result = processor.process_bytes(b"a,b,c\n");
        assert!(matches!(result, Err(ImportError::ShapeMismatch { row: 1, .. })));
    }

    #[test]
    fn test_from_config_uses_delimiter() {
        let mut config = ConfigManager::new();
        config.set("csv_delimiter", ";");
        let processor = InventoryProcessor::from_config(&config).unwrap();

        let content = line("CID:1-Acme", "P1", "A*1*1*1").replace(',', ";");
        let outcome = processor.process_bytes(content.as_bytes()).unwrap();
        assert_eq!(outcome.normalized.len(), 1);
    }

    #[test]
    fn test_empty_upload() {
        let processor = InventoryProcessor::with_defaults();
        let outcome = processor.process_bytes(b"").unwrap();
        assert_eq!(outcome.raw_rows, 0);
        assert!(outcome.normalized.is_empty());
        assert_eq!(outcome.normalized.width(), 12);
    }
}
