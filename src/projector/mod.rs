// ==========================================
// 库存导出重整 - 视图投影层
// ==========================================
// 职责: 规范化表 → 报表视图 / 仓库视图
// 红线: 只读输入，返回独立副本；投影之间无先后依赖
// ==========================================

pub mod report;
pub mod warehouse;

pub use report::project_report;
pub use warehouse::{project_warehouse, WAREHOUSE_COLUMNS};
