// ==========================================
// 库存导出重整 - 表格模型
// ==========================================
// RawTable: 无表头、按位置取值的原始行
// Table:    带列名 + 行索引的不可变快照
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ==========================================
// RawTable - 原始表（无表头）
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 最窄行的列数（空表返回 None）
    pub fn min_width(&self) -> Option<usize> {
        self.rows.iter().map(Vec::len).min()
    }
}

impl From<Vec<Vec<String>>> for RawTable {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self::new(rows)
    }
}

// ==========================================
// Table - 具名列表格
// ==========================================
// 不变量:
// - 列名唯一
// - 每行宽度 == 列数
// - index.len() == rows.len()
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TableData")]
pub struct Table {
    columns: Vec<String>,
    index: Vec<usize>,
    rows: Vec<Vec<String>>,
}

// 反序列化中间形态，经 TryFrom 重新校验不变量
#[derive(Deserialize)]
struct TableData {
    columns: Vec<String>,
    index: Vec<usize>,
    rows: Vec<Vec<String>>,
}

impl TryFrom<TableData> for Table {
    type Error = ImportError;

    fn try_from(data: TableData) -> ImportResult<Self> {
        if data.index.len() != data.rows.len() {
            return Err(ImportError::SchemaError(format!(
                "行索引数 {} 与行数 {} 不一致",
                data.index.len(),
                data.rows.len()
            )));
        }

        let mut table = Table::new(data.columns)?;
        for (index, row) in data.index.into_iter().zip(data.rows) {
            table.push_row(index, row)?;
        }
        Ok(table)
    }
}

impl Table {
    /// 创建空表（校验列名唯一）
    pub fn new(columns: Vec<String>) -> ImportResult<Self> {
        let mut seen = HashSet::new();
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(ImportError::DuplicateColumn(name.clone()));
            }
        }

        Ok(Self {
            columns,
            index: Vec::new(),
            rows: Vec::new(),
        })
    }

    /// 追加一行（带行索引）
    pub fn push_row(&mut self, index: usize, row: Vec<String>) -> ImportResult<()> {
        if row.len() != self.columns.len() {
            return Err(ImportError::RowWidthMismatch {
                row: index + 1,
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.index.push(index);
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn index(&self) -> &[usize] {
        &self.index
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// (行索引, 行数据) 迭代
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.index
            .iter()
            .copied()
            .zip(self.rows.iter().map(Vec::as_slice))
    }

    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_position(name).is_some()
    }

    /// 查找列位置，缺失时返回 SchemaError
    pub fn require_column(&self, name: &str) -> ImportResult<usize> {
        self.column_position(name)
            .ok_or_else(|| ImportError::SchemaError(name.to_string()))
    }

    /// 读取单元格（第 row 个物理行）
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.column_position(column)?;
        self.rows.get(row).map(|r| r[col].as_str())
    }

    /// 读取整列
    pub fn column_values(&self, column: &str) -> ImportResult<Vec<&str>> {
        let col = self.require_column(column)?;
        Ok(self.rows.iter().map(|r| r[col].as_str()).collect())
    }

    /// 前 n 行（预览用）
    pub fn head(&self, n: usize) -> Table {
        let take = n.min(self.rows.len());
        Table {
            columns: self.columns.clone(),
            index: self.index[..take].to_vec(),
            rows: self.rows[..take].to_vec(),
        }
    }

    /// 复制并重置行索引为 0..n
    pub fn reset_index(&self) -> Table {
        Table {
            columns: self.columns.clone(),
            index: (0..self.rows.len()).collect(),
            rows: self.rows.clone(),
        }
    }

    /// 复制并删除指定列（任一列缺失则返回 SchemaError）
    pub fn drop_columns(&self, names: &[&str]) -> ImportResult<Table> {
        let mut dropped = Vec::with_capacity(names.len());
        for name in names {
            dropped.push(self.require_column(name)?);
        }

        let keep: Vec<usize> = (0..self.columns.len())
            .filter(|i| !dropped.contains(i))
            .collect();

        Ok(Table {
            columns: keep.iter().map(|&i| self.columns[i].clone()).collect(),
            index: self.index.clone(),
            rows: self
                .rows
                .iter()
                .map(|row| keep.iter().map(|&i| row[i].clone()).collect())
                .collect(),
        })
    }
}
