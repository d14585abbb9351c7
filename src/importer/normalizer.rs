// ==========================================
// 库存导出重整 - 规范化器
// ==========================================
// 阶段 2: 拆分复合字段 → 删列 → 重排列序 → 排序
// 输入: 选择阶段产出的具名表（不修改）
// 输出: 规范列顺序的新表，行按 (product_id, zone, aisle, rack, level) 升序
// ==========================================

use crate::domain::inventory::{columns, InventoryRecord, CANONICAL_COLUMNS, SELECTED_COLUMNS};
use crate::domain::table::Table;
use crate::importer::error::ImportResult;
use crate::importer::field_parser::CompositeFieldParser;
use crate::importer::importer_trait::FieldParser;
use tracing::debug;

/// 选择表中各列的位置
struct SelectedPositions {
    cusid_name: usize,
    product_id: usize,
    product_description: usize,
    unit_id: usize,
    unit_location: usize,
    on_hand: usize,
    marked: usize,
    available: usize,
}

impl SelectedPositions {
    /// 解析全部输入契约列，任一缺失返回 SchemaError
    fn resolve(table: &Table) -> ImportResult<Self> {
        for name in SELECTED_COLUMNS {
            table.require_column(name)?;
        }

        Ok(Self {
            cusid_name: table.require_column(columns::CUSID_NAME)?,
            product_id: table.require_column(columns::PRODUCT_ID)?,
            product_description: table.require_column(columns::PRODUCT_DESCRIPTION)?,
            unit_id: table.require_column(columns::UNIT_ID)?,
            unit_location: table.require_column(columns::UNIT_LOCATION)?,
            on_hand: table.require_column(columns::ON_HAND)?,
            marked: table.require_column(columns::MARKED)?,
            available: table.require_column(columns::AVAILABLE)?,
        })
    }
}

/// 使用默认复合字段解析器规范化
pub fn normalize(selected: &Table) -> ImportResult<Table> {
    normalize_with(selected, &CompositeFieldParser)
}

/// 使用指定解析器规范化
///
/// 任一行拆分失败即整体失败（不返回部分结果）
pub fn normalize_with(selected: &Table, parser: &dyn FieldParser) -> ImportResult<Table> {
    let pos = SelectedPositions::resolve(selected)?;

    let mut records = Vec::with_capacity(selected.len());
    for (index, row) in selected.iter() {
        let row_number = index + 1;

        let customer = parser.parse_customer(&row[pos.cusid_name], row_number)?;
        let location = parser.parse_unit_location(&row[pos.unit_location], row_number)?;
        let description = parser.strip_description_label(&row[pos.product_description]);

        records.push(InventoryRecord {
            source_index: index,
            customer,
            product_id: row[pos.product_id].clone(),
            product_description: description.to_string(),
            unit_id: row[pos.unit_id].clone(),
            location,
            on_hand: row[pos.on_hand].clone(),
            marked: row[pos.marked].clone(),
            available: row[pos.available].clone(),
        });
    }
    debug!(records = records.len(), "复合字段拆分完成");

    // 稳定排序；键相同时的相对顺序不作为契约
    records.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

    let mut table = Table::new(CANONICAL_COLUMNS.iter().map(|c| c.to_string()).collect())?;
    for record in records {
        let index = record.source_index;
        table.push_row(index, record.into_row())?;
    }

    Ok(table)
}
