// ==========================================
// 库存导出重整 - 报表视图投影
// ==========================================

use crate::domain::table::Table;

/// 报表视图: 规范化表的副本，行索引重置为 0..n，列不变
pub fn project_report(normalized: &Table) -> Table {
    normalized.reset_index()
}
