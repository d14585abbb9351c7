// ==========================================
// 库存导出重整 - 文件解析器实现
// ==========================================
// 阶段 0: 文件读取与解析
// 输入: 无表头 CSV（行宽允许不一致）
// ==========================================

use crate::domain::table::RawTable;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::FileParser;
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser {
    delimiter: u8,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvParser {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// 从任意 Reader 读取所有行（值保持原样，不做 trim）
    pub fn parse_reader<R: Read>(&self, reader: R) -> ImportResult<RawTable> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // 允许行长度不一致，宽度校验交给列选择阶段
            .delimiter(self.delimiter)
            .from_reader(reader);

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(RawTable::new(rows))
    }
}

impl FileParser for CsvParser {
    fn parse_to_raw_table(&self, file_path: &Path) -> ImportResult<RawTable> {
        let path = file_path;

        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 检查扩展名
        if let Some(ext) = path.extension() {
            if !ext.eq_ignore_ascii_case("csv") {
                return Err(ImportError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ));
            }
        }

        let file = File::open(path)?;
        self.parse_reader(file)
    }

    fn parse_bytes(&self, bytes: &[u8]) -> ImportResult<RawTable> {
        self.parse_reader(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_csv_parser_valid_file() {
        let mut temp_file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(temp_file, "a,b,c").unwrap();
        writeln!(temp_file, "d,e,f").unwrap();

        let parser = CsvParser::default();
        let raw = parser.parse_to_raw_table(temp_file.path()).unwrap();

        // 无表头：第一行也是数据
        assert_eq!(raw.len(), 2);
        assert_eq!(raw.rows()[0], vec!["a", "b", "c"]);
    }

    #[test]
    fn test_csv_parser_file_not_found() {
        let parser = CsvParser::default();
        let result = parser.parse_to_raw_table(Path::new("non_existent.csv"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_csv_parser_unsupported_extension() {
        let temp_file = Builder::new().suffix(".xlsx").tempfile().unwrap();
        let parser = CsvParser::default();
        let result = parser.parse_to_raw_table(temp_file.path());
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_parse_bytes_flexible_width() {
        let parser = CsvParser::default();
        let raw = parser.parse_bytes(b"a,b\nc,d,e\n").unwrap();
        assert_eq!(raw.rows()[0].len(), 2);
        assert_eq!(raw.rows()[1].len(), 3);
        assert_eq!(raw.min_width(), Some(2));
    }

    #[test]
    fn test_parse_bytes_keeps_whitespace_and_quotes() {
        let parser = CsvParser::default();
        let raw = parser
            .parse_bytes(b"\"Acme, Inc\", padded \n")
            .unwrap();
        assert_eq!(raw.rows()[0], vec!["Acme, Inc", " padded "]);
    }

    #[test]
    fn test_custom_delimiter() {
        let parser = CsvParser::new(b';');
        let raw = parser.parse_bytes(b"a;b;c\n").unwrap();
        assert_eq!(raw.rows()[0].len(), 3);
    }
}
