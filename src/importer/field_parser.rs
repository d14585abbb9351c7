// ==========================================
// 库存导出重整 - 复合字段解析器实现
// ==========================================
// 阶段 2: cusid_name / product_description / unit_location 拆分
// 红线: 分段数不符直接报错，不补空值
// ==========================================

use crate::domain::inventory::{columns, CustomerField, UnitLocation};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::FieldParser as FieldParserTrait;

/// 客户字段分隔符
pub const CUSTOMER_SEPARATOR: char = '-';
/// 客户编号前缀分隔符
pub const CUSTOMER_ID_PREFIX_SEPARATOR: char = ':';
/// 产品描述标签分隔符
pub const DESCRIPTION_LABEL_SEPARATOR: &str = ": ";
/// 库位分隔符
pub const LOCATION_SEPARATOR: char = '*';
/// 库位分段数 (zone / aisle / rack / level)
pub const LOCATION_SEGMENTS: usize = 4;

pub struct CompositeFieldParser;

impl FieldParserTrait for CompositeFieldParser {
    /// 规则:
    /// - 恰好一个 '-'，两侧均非空
    /// - 左侧必须含 ':'，取第一个 ':' 之后的部分作为 cus_id
    fn parse_customer(&self, value: &str, row_number: usize) -> ImportResult<CustomerField> {
        let hyphens = value.matches(CUSTOMER_SEPARATOR).count();
        if hyphens != 1 {
            return Err(ImportError::field_format(
                row_number,
                columns::CUSID_NAME,
                value,
                format!("需要恰好 1 个 '-'，实际 {} 个", hyphens),
            ));
        }

        let (id_part, name_part) = value
            .split_once(CUSTOMER_SEPARATOR)
            .ok_or_else(|| ImportError::InternalError("连字符计数与拆分结果不一致".to_string()))?;

        if id_part.is_empty() || name_part.is_empty() {
            return Err(ImportError::field_format(
                row_number,
                columns::CUSID_NAME,
                value,
                "'-' 两侧不能为空",
            ));
        }

        let (_, cus_id) = id_part
            .split_once(CUSTOMER_ID_PREFIX_SEPARATOR)
            .ok_or_else(|| {
                ImportError::field_format(
                    row_number,
                    columns::CUSID_NAME,
                    value,
                    "客户编号缺少 ':' 前缀",
                )
            })?;

        Ok(CustomerField {
            cus_id: cus_id.to_string(),
            cus_name: name_part.to_string(),
        })
    }

    fn strip_description_label<'a>(&self, value: &'a str) -> &'a str {
        value
            .rsplit_once(DESCRIPTION_LABEL_SEPARATOR)
            .map(|(_, description)| description)
            .unwrap_or(value)
    }

    fn parse_unit_location(&self, value: &str, row_number: usize) -> ImportResult<UnitLocation> {
        let segments: Vec<&str> = value.split(LOCATION_SEPARATOR).collect();

        match segments.as_slice() {
            [zone, aisle, rack, level] => Ok(UnitLocation {
                zone: zone.to_string(),
                aisle: aisle.to_string(),
                rack: rack.to_string(),
                level: level.to_string(),
            }),
            _ => Err(ImportError::field_format(
                row_number,
                columns::UNIT_LOCATION,
                value,
                format!(
                    "需要 {} 段 '{}' 分隔，实际 {} 段",
                    LOCATION_SEGMENTS,
                    LOCATION_SEPARATOR,
                    segments.len()
                ),
            )),
        }
    }
}
