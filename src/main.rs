//! # mcpolymap - mcPolymer 模拟结果聚合工具
//!
//! 扫描模拟目录树，把各算例的分子量分布、链长分布、浓度和模型参数
//! 聚合为一个嵌套数据集，供后续绘图或分析使用。
//!
//! ## 子命令
//! - `collect` - 聚合所有 `case*` 目录，可导出 JSON / CSV
//! - `model`   - 检查单个算例的模拟描述文件
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── aggregate/ (算例聚合)
//!   │     ├── parsers/   (格式解析器)
//!   │     ├── export/    (数据导出)
//!   │     └── models/    (数据模型)
//!   ├── batch/      (文件收集与并行执行)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod aggregate;
mod batch;
mod cli;
mod commands;
mod error;
mod export;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
