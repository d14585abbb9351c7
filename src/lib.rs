// ==========================================
// 库存导出重整 - 核心库
// ==========================================
// 输入: 无表头库存导出 CSV
// 输出: 报表视图 / 仓库视图（可导出 CSV）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 表格与库存类型
pub mod domain;

// 导入层 - 解析 / 列选择 / 规范化
pub mod importer;

// 投影层 - 报表 / 仓库视图
pub mod projector;

// 导出
pub mod exporter;

// 配置层
pub mod config;

// API 层 - 外壳接口
pub mod api;

// 日志系统
pub mod logging;

// 耗时统计
pub mod perf;

// 命令行外壳
pub mod cli;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{RawTable, Table, CANONICAL_COLUMNS};
pub use importer::{
    normalize, select_columns, ImportError, ImportResult, InventoryProcessor, ProcessOutcome,
};
pub use projector::{project_report, project_warehouse, WAREHOUSE_COLUMNS};
pub use config::{ColumnSpec, ConfigManager};
pub use api::{ApiError, ProcessApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "库存导出重整";
