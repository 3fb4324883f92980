//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `collect`: 聚合整个模拟目录树
//! - `model`: 检查单个算例的模拟描述文件
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: collect, model

pub mod collect;
pub mod model;

use clap::{Parser, Subcommand};

/// mcpolymap - mcPolymer 模拟结果聚合工具
#[derive(Parser)]
#[command(name = "mcpolymap")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Aggregate mcPolymer Monte Carlo simulation output", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Aggregate MWD, CLD, concentration and model data of all case directories
    Collect(collect::CollectArgs),

    /// Parse and display the simulation descriptor of one case directory
    Model(model::ModelArgs),
}
