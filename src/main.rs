// ==========================================
// 库存导出重整 - 命令行入口
// ==========================================
// 用法:
//   inventory-export <input.csv> [output_dir]
// ==========================================

use anyhow::{Context, Result};
use clap::Parser;
use inventory_export::cli::{run, Cli};
use inventory_export::config::ConfigManager;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志系统
    inventory_export::logging::init();
    tracing::info!("{} v{}", inventory_export::APP_NAME, inventory_export::VERSION);

    let config = ConfigManager::load_default().context("加载配置失败")?;
    let summary = run(&cli, config)?;

    println!("报表数据（共 {} 行）:", summary.report_rows);
    println!("{}", summary.report_preview);
    println!("仓库数据（共 {} 行）:", summary.warehouse_rows);
    println!("{}", summary.warehouse_preview);
    println!("已导出: {}", summary.export_path.display());

    Ok(())
}
