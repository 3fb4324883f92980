//! # 数据模型模块
//!
//! 定义模拟参数、数值表格与聚合结果的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `aggregate/`, `export/` 和 `commands/` 使用
//! - 子模块: timestamp, table, model, simulation

pub mod model;
pub mod simulation;
pub mod table;
pub mod timestamp;

pub use model::{ParsedModel, SweepVar};
pub use simulation::{
    CaseFailure, CaseResult, CldMap, CldSnapshot, CldSummary, ConcMap, MwdMap, Simulation,
};
pub use table::NumericTable;
pub use timestamp::{format_float, Timestamp};
