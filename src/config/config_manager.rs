// ==========================================
// 库存导出重整 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写管理
// 来源: JSON 配置文件 → 环境变量覆写 → 内置默认值
// ==========================================

use crate::config::column_spec::{ColumnMapping, ColumnSpec};
use crate::importer::error::{ImportError, ImportResult};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// 环境变量前缀（例如 INVENTORY_EXPORT_PREVIEW_ROWS=10）
pub const ENV_PREFIX: &str = "INVENTORY_EXPORT_";

// ==========================================
// 配置键
// ==========================================
pub mod config_keys {
    pub const PREVIEW_ROWS: &str = "preview_rows";
    pub const OUTPUT_DIR: &str = "output_dir";
    pub const EXPORT_FILE_PREFIX: &str = "export_file_prefix";
    pub const CSV_DELIMITER: &str = "csv_delimiter";
    pub const COLUMN_MAPPING: &str = "column_mapping";

    pub const ALL: [&str; 5] = [
        PREVIEW_ROWS,
        OUTPUT_DIR,
        EXPORT_FILE_PREFIX,
        CSV_DELIMITER,
        COLUMN_MAPPING,
    ];
}

/// 默认配置文件路径: <用户配置目录>/inventory-export/config.json
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("inventory-export").join("config.json"))
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
// 每个请求持有自己的实例，不使用全局可变状态
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    values: HashMap<String, String>,
}

impl ConfigManager {
    /// 创建空配置（全部使用默认值）
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 JSON 文本加载（顶层必须为对象）
    ///
    /// 非字符串值（数字、数组）以其 JSON 文本保存
    pub fn from_json_str(content: &str) -> ImportResult<Self> {
        let value: Value = serde_json::from_str(content)?;
        let object = value.as_object().ok_or_else(|| ImportError::ConfigReadError {
            key: "config_file".to_string(),
            message: "配置文件顶层必须为 JSON 对象".to_string(),
        })?;

        let values = object
            .iter()
            .map(|(k, v)| {
                let text = match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (k.clone(), text)
            })
            .collect();

        Ok(Self { values })
    }

    /// 从 JSON 文件加载
    pub fn from_file<P: AsRef<Path>>(path: P) -> ImportResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// 加载默认配置: 默认路径文件（若存在） + 环境变量覆写
    pub fn load_default() -> ImportResult<Self> {
        let base = match default_config_path() {
            Some(path) if path.exists() => {
                tracing::info!(config_path = %path.display(), "加载配置文件");
                Self::from_file(&path)?
            }
            _ => Self::new(),
        };
        Ok(base.with_env_overrides())
    }

    /// 用 INVENTORY_EXPORT_<KEY> 环境变量覆写
    pub fn with_env_overrides(self) -> Self {
        let overrides = config_keys::ALL.iter().filter_map(|key| {
            let var = format!("{}{}", ENV_PREFIX, key.to_uppercase());
            std::env::var(&var).ok().map(|v| (key.to_string(), v))
        });
        self.with_overrides(overrides)
    }

    /// 批量覆写
    pub fn with_overrides<I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in overrides {
            tracing::debug!(key = %key, value = %value, "配置覆写");
            self.values.insert(key, value);
        }
        self
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    /// 读取配置值
    pub fn get_config_value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    fn get_config_or_default(&self, key: &str, default: &str) -> String {
        self.get_config_value(key)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
            .to_string()
    }

    // ==========================================
    // 类型化读取
    // ==========================================

    /// 预览行数（默认 5）
    pub fn get_preview_rows(&self) -> usize {
        let value = self.get_config_or_default(config_keys::PREVIEW_ROWS, "5");
        value.parse::<usize>().unwrap_or_else(|_| {
            tracing::warn!(
                config_key = config_keys::PREVIEW_ROWS,
                raw_value = %value,
                "预览行数配置格式错误，使用默认值 5"
            );
            5
        })
    }

    /// 导出目录（默认当前目录）
    pub fn get_output_dir(&self) -> PathBuf {
        PathBuf::from(self.get_config_or_default(config_keys::OUTPUT_DIR, "."))
    }

    /// 导出文件名前缀（默认 warehouse_processed）
    pub fn get_export_file_prefix(&self) -> String {
        self.get_config_or_default(
            config_keys::EXPORT_FILE_PREFIX,
            crate::exporter::DEFAULT_EXPORT_PREFIX,
        )
    }

    /// CSV 分隔符（单个 ASCII 字符，默认 ','）
    pub fn get_csv_delimiter(&self) -> ImportResult<u8> {
        let raw = self
            .get_config_value(config_keys::CSV_DELIMITER)
            .unwrap_or(",");
        if raw == "\\t" || raw == "tab" {
            return Ok(b'\t');
        }
        match raw.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(ImportError::ConfigValueError {
                key: config_keys::CSV_DELIMITER.to_string(),
                value: raw.to_string(),
                message: "分隔符必须为单个 ASCII 字符".to_string(),
            }),
        }
    }

    /// 列映射（默认库存导出格式）
    pub fn get_column_spec(&self) -> ImportResult<ColumnSpec> {
        let raw = match self.get_config_value(config_keys::COLUMN_MAPPING) {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return Ok(ColumnSpec::inventory_export()),
        };

        let mappings: Vec<ColumnMapping> =
            serde_json::from_str(raw).map_err(|e| ImportError::ConfigValueError {
                key: config_keys::COLUMN_MAPPING.to_string(),
                value: raw.to_string(),
                message: e.to_string(),
            })?;

        ColumnSpec::new(mappings)
    }

    /// 生效配置快照（JSON，日志与排障用）
    pub fn snapshot(&self) -> Value {
        let column_mapping = self
            .get_column_spec()
            .ok()
            .and_then(|spec| serde_json::to_value(spec.mappings()).ok())
            .unwrap_or(Value::Null);

        json!({
            "preview_rows": self.get_preview_rows(),
            "output_dir": self.get_output_dir().display().to_string(),
            "export_file_prefix": self.get_export_file_prefix(),
            "csv_delimiter": self
                .get_csv_delimiter()
                .map(|b| (b as char).to_string())
                .ok(),
            "column_mapping": column_mapping,
        })
    }
}
