// ==========================================
// 库存导出重整 - 仓库视图投影
// ==========================================

use crate::domain::inventory::columns;
use crate::domain::table::Table;
use crate::importer::error::ImportResult;

/// 仓库视图列（规范列去掉 unit_id）
pub const WAREHOUSE_COLUMNS: [&str; 11] = [
    columns::CUS_ID,
    columns::CUS_NAME,
    columns::PRODUCT_ID,
    columns::PRODUCT_DESCRIPTION,
    columns::ZONE,
    columns::AISLE,
    columns::RACK,
    columns::LEVEL,
    columns::ON_HAND,
    columns::MARKED,
    columns::AVAILABLE,
];

/// 仓库视图: 规范化表去掉 unit_id 列的副本（保留行索引）
///
/// 输入缺少 unit_id 时返回 SchemaError
pub fn project_warehouse(normalized: &Table) -> ImportResult<Table> {
    normalized.drop_columns(&[columns::UNIT_ID])
}
