// ==========================================
// 库存导出重整 - 列选择器
// ==========================================
// 阶段 1: 原始位置列 → 具名列
// 红线: 行宽不足直接失败，不丢弃行
// ==========================================

use crate::config::column_spec::ColumnSpec;
use crate::domain::table::{RawTable, Table};
use crate::importer::error::{ImportError, ImportResult};

/// 按列映射抽取并命名列
///
/// # 参数
/// - raw: 原始表
/// - spec: 已校验的列映射
///
/// # 返回
/// - Ok(Table): 列顺序 = 映射声明顺序，行顺序 = 输入顺序，行索引 0..n
/// - Err(ShapeMismatch): 任一行宽度 < spec.required_width()
pub fn select_columns(raw: &RawTable, spec: &ColumnSpec) -> ImportResult<Table> {
    let required = spec.required_width();
    let indices = spec.indices();
    let mut table = Table::new(spec.names())?;

    for (idx, row) in raw.rows().iter().enumerate() {
        if row.len() < required {
            return Err(ImportError::ShapeMismatch {
                row: idx + 1,
                required,
                actual: row.len(),
            });
        }

        let selected = indices.iter().map(|&i| row[i].clone()).collect();
        table.push_row(idx, selected)?;
    }

    Ok(table)
}

/// 以平行列表形式给出映射（索引 / 列名）
///
/// 长度不一致时返回 ColumnSpecMismatch
pub fn select_columns_by_index(
    raw: &RawTable,
    indices: &[usize],
    names: &[&str],
) -> ImportResult<Table> {
    let spec = ColumnSpec::from_parallel(indices, names)?;
    select_columns(raw, &spec)
}
