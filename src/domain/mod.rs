// ==========================================
// 库存导出重整 - 领域层
// ==========================================
// 职责: 表格模型与库存领域类型
// ==========================================

pub mod inventory;
pub mod table;

// 重导出核心类型
pub use inventory::{
    columns, CustomerField, InventoryRecord, UnitLocation, CANONICAL_COLUMNS, DROPPED_COLUMNS,
    SELECTED_COLUMNS, SORT_KEY,
};
pub use table::{RawTable, Table};
