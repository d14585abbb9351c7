// ==========================================
// 库存导出重整 - 配置层
// ==========================================
// 职责: 列映射 + 运行配置（文件 / 环境变量 / 默认值）
// ==========================================

pub mod column_spec;
pub mod config_manager;

// 重导出核心配置类型
pub use column_spec::{ColumnMapping, ColumnSpec, INVENTORY_EXPORT_COLUMNS};
pub use config_manager::{config_keys, default_config_path, ConfigManager, ENV_PREFIX};
