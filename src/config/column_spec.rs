// ==========================================
// 库存导出重整 - 列映射配置
// ==========================================
// 职责: 原始列位置 → 语义列名 的显式映射表
// 红线: 构造时一次性校验（长度一致 / 列名非空 / 列名唯一）
// ==========================================

use crate::domain::inventory::columns;
use crate::importer::error::{ImportError, ImportResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 库存导出文件的默认列映射（0 起列位置）
pub const INVENTORY_EXPORT_COLUMNS: [(usize, &str); 11] = [
    (14, columns::CUSID_NAME),
    (17, columns::PRODUCT_ID),
    (18, columns::PRODUCT_DESCRIPTION),
    (21, columns::UNIT_ID),
    (22, columns::UNIT_LOCATION),
    (23, columns::CONTAINER_TYPE),
    (24, columns::NUM_OF_CONTAINERS),
    (25, columns::LOOSE_PIECES),
    (26, columns::ON_HAND),
    (27, columns::MARKED),
    (28, columns::AVAILABLE),
];

// ==========================================
// ColumnMapping - 单列映射
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub index: usize,
    pub name: String,
}

// ==========================================
// ColumnSpec - 已校验的列映射表
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSpec {
    mappings: Vec<ColumnMapping>,
}

impl ColumnSpec {
    /// 从映射表构造并校验
    pub fn new(mappings: Vec<ColumnMapping>) -> ImportResult<Self> {
        if mappings.is_empty() {
            return Err(ImportError::ConfigValueError {
                key: "column_mapping".to_string(),
                value: "[]".to_string(),
                message: "列映射不能为空".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for mapping in &mappings {
            if mapping.name.trim().is_empty() {
                return Err(ImportError::ConfigValueError {
                    key: "column_mapping".to_string(),
                    value: mapping.index.to_string(),
                    message: "列名为空".to_string(),
                });
            }
            if !seen.insert(mapping.name.as_str()) {
                return Err(ImportError::DuplicateColumn(mapping.name.clone()));
            }
        }

        Ok(Self { mappings })
    }

    /// 从平行的 索引列表 / 列名列表 构造
    ///
    /// 长度不一致时返回 ColumnSpecMismatch
    pub fn from_parallel(indices: &[usize], names: &[&str]) -> ImportResult<Self> {
        if indices.len() != names.len() {
            return Err(ImportError::ColumnSpecMismatch {
                indices: indices.len(),
                names: names.len(),
            });
        }

        Self::new(
            indices
                .iter()
                .zip(names)
                .map(|(&index, name)| ColumnMapping {
                    index,
                    name: name.to_string(),
                })
                .collect(),
        )
    }

    /// 库存导出格式的默认映射
    pub fn inventory_export() -> Self {
        Self {
            mappings: INVENTORY_EXPORT_COLUMNS
                .iter()
                .map(|&(index, name)| ColumnMapping {
                    index,
                    name: name.to_string(),
                })
                .collect(),
        }
    }

    pub fn mappings(&self) -> &[ColumnMapping] {
        &self.mappings
    }

    pub fn indices(&self) -> Vec<usize> {
        self.mappings.iter().map(|m| m.index).collect()
    }

    pub fn names(&self) -> Vec<String> {
        self.mappings.iter().map(|m| m.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// 原始行所需的最小列数（max index + 1）
    pub fn required_width(&self) -> usize {
        self.mappings.iter().map(|m| m.index + 1).max().unwrap_or(0)
    }
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self::inventory_export()
    }
}
