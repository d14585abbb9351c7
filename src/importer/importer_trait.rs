// ==========================================
// 库存导出重整 - 导入组件 Trait
// ==========================================
// 职责: 定义导入管道各阶段接口（不包含实现）
// ==========================================

use crate::domain::inventory::{CustomerField, UnitLocation};
use crate::domain::table::RawTable;
use crate::importer::error::ImportResult;
use std::path::Path;

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口（阶段 0）
// 实现者: CsvParser
pub trait FileParser: Send + Sync {
    /// 解析文件为原始表（无表头）
    ///
    /// # 参数
    /// - file_path: 文件路径
    ///
    /// # 返回
    /// - Ok(RawTable): 原始行
    /// - Err: 文件不存在、扩展名不支持、解析失败
    fn parse_to_raw_table(&self, file_path: &Path) -> ImportResult<RawTable>;

    /// 解析内存中的上传内容
    fn parse_bytes(&self, bytes: &[u8]) -> ImportResult<RawTable>;
}

// ==========================================
// FieldParser Trait
// ==========================================
// 用途: 复合字段拆分接口（阶段 2）
// 实现者: CompositeFieldParser
pub trait FieldParser: Send + Sync {
    /// 拆分 cusid_name → (cus_id, cus_name)
    ///
    /// # 参数
    /// - value: 原始值，形如 "<prefix>:<customer id>-<customer name>"
    /// - row_number: 行号（1 起，用于错误定位）
    fn parse_customer(&self, value: &str, row_number: usize) -> ImportResult<CustomerField>;

    /// 去除 product_description 的标签前缀（保留最后一个 ": " 之后的内容）
    fn strip_description_label<'a>(&self, value: &'a str) -> &'a str;

    /// 拆分 unit_location → (zone, aisle, rack, level)
    fn parse_unit_location(&self, value: &str, row_number: usize) -> ImportResult<UnitLocation>;
}
