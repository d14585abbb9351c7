// ==========================================
// 库存导出重整 - 导入层
// ==========================================
// 职责: 原始导出 → 规范化库存表
// 流程: 解析 → 列选择 → 复合字段拆分 → 重排 → 排序
// ==========================================

// 模块声明
pub mod column_selector;
pub mod error;
pub mod field_parser;
pub mod file_parser;
pub mod importer_trait;
pub mod normalizer;
pub mod processor;

// 重导出核心类型
pub use column_selector::{select_columns, select_columns_by_index};
pub use error::{ErrorCategory, ImportError, ImportResult};
pub use field_parser::CompositeFieldParser;
pub use file_parser::CsvParser;
pub use normalizer::{normalize, normalize_with};
pub use processor::{InventoryProcessor, ProcessOutcome};

// 重导出 Trait 接口
pub use importer_trait::{FieldParser, FileParser};
