// ==========================================
// 库存导出重整 - 命令行外壳
// ==========================================
// 流程: 读取上传文件 → 报表/仓库预览 → 写出仓库导出文件
// ==========================================

use crate::api::ProcessApi;
use crate::config::{config_keys, ConfigManager};
use crate::exporter::{to_csv_string, today_local, write_export, CsvExport, EXPORT_DELIMITER};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// 库存导出重整: 生成报表视图 / 仓库视图并导出仓库 CSV
#[derive(Parser, Debug)]
#[command(name = "inventory-export")]
#[command(version, about = "库存导出重整 - 报表视图 / 仓库视图生成", long_about = None)]
pub struct Cli {
    /// 无表头库存导出 CSV 文件
    pub input: PathBuf,

    /// 导出目录（缺省时取配置 output_dir）
    pub output_dir: Option<PathBuf>,
}

/// 单次运行结果
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub report_rows: usize,
    pub report_preview: String,
    pub warehouse_rows: usize,
    pub warehouse_preview: String,
    pub export_path: PathBuf,
}

/// 执行一次完整处理
pub fn run(cli: &Cli, mut config: ConfigManager) -> Result<RunSummary> {
    if let Some(dir) = &cli.output_dir {
        config.set(config_keys::OUTPUT_DIR, &dir.to_string_lossy());
    }
    tracing::info!(config = %config.snapshot(), "生效配置");

    let bytes = std::fs::read(&cli.input)
        .with_context(|| format!("读取上传文件失败: {}", cli.input.display()))?;

    let api = ProcessApi::new(config.clone());
    let session = api
        .upload(&bytes)
        .with_context(|| format!("处理上传文件失败: {}", cli.input.display()))?;

    let report = session.report_view();
    let warehouse = session.warehouse_view()?;

    let export = session.export_warehouse(today_local())?;
    let output_dir = config.get_output_dir();
    let export_path = write_export(
        &CsvExport {
            file_name: export.file_name,
            mime_type: export.mime_type,
            data: export.data,
        },
        &output_dir,
    )
    .with_context(|| format!("写入导出目录失败: {}", output_dir.display()))?;

    Ok(RunSummary {
        report_rows: report.total_rows,
        report_preview: to_csv_string(&report.preview, EXPORT_DELIMITER)?,
        warehouse_rows: warehouse.total_rows,
        warehouse_preview: to_csv_string(&warehouse.preview, EXPORT_DELIMITER)?,
        export_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn upload_line() -> String {
        let mut fields = vec![String::new(); 29];
        fields[14] = "CID:1001-Acme Corp".to_string();
        fields[17] = "P1".to_string();
        fields[18] = "Category: Widget: Blue Widget".to_string();
        fields[21] = "U-0001".to_string();
        fields[22] = "A*12*3*2".to_string();
        fields[26] = "40".to_string();
        fields.join(",")
    }

    #[test]
    fn test_parse_args() {
        let cli = Cli::try_parse_from(["inventory-export", "in.csv"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("in.csv"));
        assert!(cli.output_dir.is_none());

        let cli = Cli::try_parse_from(["inventory-export", "in.csv", "/tmp/out"]).unwrap();
        assert_eq!(cli.output_dir, Some(PathBuf::from("/tmp/out")));
    }

    #[test]
    fn test_missing_input_arg_rejected() {
        assert!(Cli::try_parse_from(["inventory-export"]).is_err());
    }

    #[test]
    fn test_run_writes_export() {
        let mut input = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(input, "{}", upload_line()).unwrap();
        let out = tempfile::tempdir().unwrap();

        let cli = Cli {
            input: input.path().to_path_buf(),
            output_dir: Some(out.path().to_path_buf()),
        };
        let summary = run(&cli, ConfigManager::new()).unwrap();

        assert_eq!(summary.report_rows, 1);
        assert_eq!(summary.warehouse_rows, 1);
        assert!(summary.report_preview.starts_with("cus_id,cus_name,"));
        assert!(summary.export_path.starts_with(out.path()));
        let written = std::fs::read_to_string(&summary.export_path).unwrap();
        assert!(written.contains("1001,Acme Corp,P1,Blue Widget,A,12,3,2,40,,"));
    }

    #[test]
    fn test_run_missing_input_has_context() {
        let cli = Cli {
            input: PathBuf::from("/definitely/not/here/upload.csv"),
            output_dir: None,
        };
        let err = run(&cli, ConfigManager::new()).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("读取上传文件失败"));
        assert!(message.contains("/definitely/not/here/upload.csv"));
    }

    #[test]
    fn test_run_malformed_upload_has_context() {
        let mut input = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(input, "only,three,columns").unwrap();

        let cli = Cli {
            input: input.path().to_path_buf(),
            output_dir: None,
        };
        let err = run(&cli, ConfigManager::new()).unwrap_err();
        assert!(format!("{:#}", err).contains("处理上传文件失败"));
        assert!(err.downcast_ref::<crate::api::ApiError>().is_some());
    }
}
