//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `aggregate/`, `parsers/`, `export/`, `utils/`
//! - 子模块: collect, model

pub mod collect;
pub mod model;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Collect(args) => collect::execute(args),
        Commands::Model(args) => model::execute(args),
    }
}
