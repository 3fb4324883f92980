//! # 批量处理模块
//!
//! 提供统一的目录扫描与批量处理能力。
//!
//! ## 功能
//! - 按 glob 模式收集文件/子目录
//! - 并行处理
//! - 进度反馈
//!
//! ## 依赖关系
//! - 被 `parsers/model.rs`, `aggregate/` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::FileCollector;
pub use runner::BatchRunner;
