//! # 数据导出模块
//!
//! 将聚合结果导出为下游工具可读的文件。
//!
//! ## 支持格式
//! - JSON: 完整的 `Simulation` 嵌套结构
//! - CSV: 每个 (标签, 物种, 时间) 一行的 CLD 统计量
//!
//! ## 依赖关系
//! - 被 `commands/collect.rs` 调用
//! - 使用 `models/simulation.rs`
//! - 子模块: json, moments

pub mod json;
pub mod moments;

pub use json::write_json;
pub use moments::write_cld_moments;
