//! # model 子命令 CLI 定义
//!
//! 解析并显示单个算例的模拟描述文件
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/model.rs`

use clap::Args;
use std::path::PathBuf;

/// model 子命令参数
#[derive(Args, Debug)]
pub struct ModelArgs {
    /// Case directory (or a descriptor file)
    pub input: PathBuf,

    /// Glob pattern for the simulation descriptor
    #[arg(long, default_value = "sim*tcl")]
    pub pattern: String,
}
