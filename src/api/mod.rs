// ==========================================
// 库存导出重整 - API 层
// ==========================================
// 职责: 提供处理接口,供交互外壳调用
// ==========================================

pub mod error;
pub mod process_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use process_api::{ExportResponse, ProcessApi, ProcessResponse, ProcessSession, ViewResponse};
