// ==========================================
// 库存导出重整 - 库存领域模型
// ==========================================
// 职责: 列名常量 / 规范列顺序 / 规范化记录
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// 列名常量
// ==========================================
pub mod columns {
    // ===== 选择阶段列名 =====
    pub const CUSID_NAME: &str = "cusid_name";
    pub const PRODUCT_ID: &str = "product_id";
    pub const PRODUCT_DESCRIPTION: &str = "product_description";
    pub const UNIT_ID: &str = "unit_id";
    pub const UNIT_LOCATION: &str = "unit_location";
    pub const CONTAINER_TYPE: &str = "container_type";
    pub const NUM_OF_CONTAINERS: &str = "num_of_containers";
    pub const LOOSE_PIECES: &str = "loose_pieces";
    pub const ON_HAND: &str = "on_hand";
    pub const MARKED: &str = "marked";
    pub const AVAILABLE: &str = "available";

    // ===== 派生列名 =====
    pub const CUS_ID: &str = "cus_id";
    pub const CUS_NAME: &str = "cus_name";
    pub const ZONE: &str = "zone";
    pub const AISLE: &str = "aisle";
    pub const RACK: &str = "rack";
    pub const LEVEL: &str = "level";
}

/// 选择阶段产出的列（规范化输入契约）
pub const SELECTED_COLUMNS: [&str; 11] = [
    columns::CUSID_NAME,
    columns::PRODUCT_ID,
    columns::PRODUCT_DESCRIPTION,
    columns::UNIT_ID,
    columns::UNIT_LOCATION,
    columns::CONTAINER_TYPE,
    columns::NUM_OF_CONTAINERS,
    columns::LOOSE_PIECES,
    columns::ON_HAND,
    columns::MARKED,
    columns::AVAILABLE,
];

/// 规范化后被删除的列
pub const DROPPED_COLUMNS: [&str; 5] = [
    columns::CUSID_NAME,
    columns::UNIT_LOCATION,
    columns::NUM_OF_CONTAINERS,
    columns::LOOSE_PIECES,
    columns::CONTAINER_TYPE,
];

/// 规范列顺序
pub const CANONICAL_COLUMNS: [&str; 12] = [
    columns::CUS_ID,
    columns::CUS_NAME,
    columns::PRODUCT_ID,
    columns::PRODUCT_DESCRIPTION,
    columns::UNIT_ID,
    columns::ZONE,
    columns::AISLE,
    columns::RACK,
    columns::LEVEL,
    columns::ON_HAND,
    columns::MARKED,
    columns::AVAILABLE,
];

/// 排序键（升序，字典序）
pub const SORT_KEY: [&str; 5] = [
    columns::PRODUCT_ID,
    columns::ZONE,
    columns::AISLE,
    columns::RACK,
    columns::LEVEL,
];

// ==========================================
// CustomerField - cusid_name 拆分结果
// ==========================================
// "<prefix>:<customer id>-<customer name>"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerField {
    pub cus_id: String,
    pub cus_name: String,
}

// ==========================================
// UnitLocation - unit_location 拆分结果
// ==========================================
// "<zone>*<aisle>*<rack>*<level>"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitLocation {
    pub zone: String,
    pub aisle: String,
    pub rack: String,
    pub level: String,
}

// ==========================================
// InventoryRecord - 规范化库存记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub source_index: usize, // 原始行索引（0 起）

    pub customer: CustomerField,
    pub product_id: String,
    pub product_description: String, // 已去除标签前缀
    pub unit_id: String,
    pub location: UnitLocation,

    pub on_hand: String,
    pub marked: String,
    pub available: String,
}

impl InventoryRecord {
    /// (product_id, zone, aisle, rack, level)
    pub fn sort_key(&self) -> (&str, &str, &str, &str, &str) {
        (
            self.product_id.as_str(),
            self.location.zone.as_str(),
            self.location.aisle.as_str(),
            self.location.rack.as_str(),
            self.location.level.as_str(),
        )
    }

    /// 按 CANONICAL_COLUMNS 顺序展开
    pub fn into_row(self) -> Vec<String> {
        vec![
            self.customer.cus_id,
            self.customer.cus_name,
            self.product_id,
            self.product_description,
            self.unit_id,
            self.location.zone,
            self.location.aisle,
            self.location.rack,
            self.location.level,
            self.on_hand,
            self.marked,
            self.available,
        ]
    }
}
