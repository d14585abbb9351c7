// ==========================================
// 库存导出重整 - API层错误类型
// ==========================================
// 职责: 将导入层错误转换为面向界面的错误消息
// ==========================================

use crate::importer::error::{ErrorCategory, ImportError};
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入数据错误
    // ==========================================
    #[error("上传数据列数不符: {0}")]
    ShapeMismatch(String),

    #[error("字段格式错误: {0}")]
    FieldFormat(String),

    #[error("表结构错误: {0}")]
    Schema(String),

    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ==========================================
    // 文件/配置错误
    // ==========================================
    #[error("文件导入失败: {0}")]
    ImportError(String),

    #[error("配置错误: {0}")]
    ConfigError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),
}

// ==========================================
// 从 ImportError 转换
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        let message = err.to_string();
        match err.category() {
            ErrorCategory::ShapeMismatch => ApiError::ShapeMismatch(message),
            ErrorCategory::FieldFormat => ApiError::FieldFormat(message),
            ErrorCategory::Schema => ApiError::Schema(message),
            ErrorCategory::File => ApiError::ImportError(message),
            ErrorCategory::Config => ApiError::ConfigError(message),
            ErrorCategory::Internal => ApiError::InternalError(message),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
