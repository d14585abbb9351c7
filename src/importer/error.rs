// ==========================================
// 库存导出重整 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 分类: 形状不符 / 字段格式 / 表结构 / 文件 / 配置
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 形状错误 =====
    #[error("列宽不足 (行 {row}): 需要至少 {required} 列，实际 {actual} 列")]
    ShapeMismatch {
        row: usize,
        required: usize,
        actual: usize,
    },

    #[error("列映射长度不一致: 索引 {indices} 个，列名 {names} 个")]
    ColumnSpecMismatch { indices: usize, names: usize },

    // ===== 字段格式错误 =====
    #[error("字段格式错误 (行 {row}, 字段 {field}, 值 {value:?}): {message}")]
    FieldFormatError {
        row: usize,
        field: String,
        value: String,
        message: String,
    },

    // ===== 表结构错误 =====
    #[error("缺少列: {0}")]
    SchemaError(String),

    #[error("重复列名: {0}")]
    DuplicateColumn(String),

    #[error("行宽与表头不一致 (行 {row}): 表头 {expected} 列，实际 {actual} 列")]
    RowWidthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    // ===== 配置错误 =====
    #[error("配置读取失败 (key: {key}): {message}")]
    ConfigReadError { key: String, message: String },

    #[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
    ConfigValueError {
        key: String,
        value: String,
        message: String,
    },

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),
}

/// 错误分类（供 API 层映射与日志使用）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    ShapeMismatch,
    FieldFormat,
    Schema,
    File,
    Config,
    Internal,
}

impl ImportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ImportError::ShapeMismatch { .. } | ImportError::ColumnSpecMismatch { .. } => {
                ErrorCategory::ShapeMismatch
            }
            ImportError::FieldFormatError { .. } => ErrorCategory::FieldFormat,
            ImportError::SchemaError(_)
            | ImportError::DuplicateColumn(_)
            | ImportError::RowWidthMismatch { .. } => ErrorCategory::Schema,
            ImportError::FileNotFound(_)
            | ImportError::UnsupportedFormat(_)
            | ImportError::FileReadError(_)
            | ImportError::CsvParseError(_) => ErrorCategory::File,
            ImportError::ConfigReadError { .. } | ImportError::ConfigValueError { .. } => {
                ErrorCategory::Config
            }
            ImportError::InternalError(_) => ErrorCategory::Internal,
        }
    }

    /// 构造字段格式错误
    pub fn field_format(row: usize, field: &str, value: &str, message: impl Into<String>) -> Self {
        ImportError::FieldFormatError {
            row,
            field: field.to_string(),
            value: value.to_string(),
            message: message.into(),
        }
    }
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// 实现 From<serde_json::Error>
impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::ConfigReadError {
            key: "config_file".to_string(),
            message: err.to_string(),
        }
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
