//! # collect 子命令 CLI 定义
//!
//! 聚合 `case*` 目录中的全部模拟输出
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/collect.rs`

use clap::Args;
use std::path::PathBuf;

/// collect 子命令参数
#[derive(Args, Debug)]
pub struct CollectArgs {
    /// Root directory containing desc.txt and the case directories
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Description file (relative to the root directory)
    #[arg(long, default_value = "desc.txt")]
    pub desc_file: String,

    /// Glob pattern for case directories
    #[arg(long, default_value = "case*")]
    pub case_pattern: String,

    /// Glob pattern for the simulation descriptor inside each case
    #[arg(long, default_value = "sim*tcl")]
    pub descriptor: String,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0, env = "MCPOLYMAP_JOBS")]
    pub jobs: usize,

    /// Abort on the first failing case instead of collecting failures
    #[arg(long, default_value_t = false)]
    pub fail_fast: bool,

    /// Treat duplicate (species, time) entries and duplicate sweep labels as errors
    #[arg(long, default_value_t = false)]
    pub reject_duplicates: bool,

    /// Write the aggregated data set to this JSON file
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    /// Write the CLD summary moments to this CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
