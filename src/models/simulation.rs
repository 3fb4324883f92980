//! # 聚合结果数据模型
//!
//! 描述整个批量聚合的输出形状：
//!
//! ```text
//! Simulation
//!   ├── desc                       desc.txt 全文
//!   ├── cases: label -> CaseResult
//!   │     ├── params               ParsedModel
//!   │     ├── conc:  id -> NumericTable
//!   │     ├── cld:   id -> time -> CldSnapshot
//!   │     └── mwd:   id -> time -> NumericTable
//!   └── failures                   未能聚合的算例
//! ```
//!
//! ## 依赖关系
//! - 被 `aggregate/` 生成
//! - 被 `export/` 和 `commands/collect.rs` 使用

use crate::models::{NumericTable, ParsedModel, Timestamp};

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// 分子量分布: id -> 时间 -> 直方图
pub type MwdMap = BTreeMap<String, BTreeMap<Timestamp, NumericTable>>;

/// 链长分布: id -> 时间 -> 快照
pub type CldMap = BTreeMap<String, BTreeMap<Timestamp, CldSnapshot>>;

/// 浓度: id -> 时间序列
pub type ConcMap = BTreeMap<String, NumericTable>;

/// .cld 文件头中的统计量
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CldSummary {
    /// 链数
    pub nchains: f64,
    /// 单体数
    pub nmonomers: f64,
    /// 数均聚合度
    pub pn: f64,
    /// 重均聚合度
    pub pw: f64,
    /// 分散度
    pub pd: f64,
}

/// 某一时刻的链长分布
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CldSnapshot {
    pub cld: NumericTable,
    #[serde(flatten)]
    pub summary: CldSummary,
}

/// 单个算例的聚合结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseResult {
    /// 算例目录
    pub case_dir: PathBuf,
    pub params: ParsedModel,
    pub conc: ConcMap,
    pub cld: CldMap,
    pub mwd: MwdMap,
}

impl CaseResult {
    /// MWD 快照总数
    pub fn mwd_snapshots(&self) -> usize {
        self.mwd.values().map(|m| m.len()).sum()
    }

    /// CLD 快照总数
    pub fn cld_snapshots(&self) -> usize {
        self.cld.values().map(|m| m.len()).sum()
    }
}

/// 未能聚合的算例
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseFailure {
    pub case_dir: PathBuf,
    pub error: String,
}

/// 整个批量聚合的结果
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Simulation {
    /// desc.txt 内容
    pub desc: String,
    /// 扫描标签 -> 算例结果
    pub cases: BTreeMap<String, CaseResult>,
    /// 失败的算例
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<CaseFailure>,
}

impl Simulation {
    pub fn new(desc: impl Into<String>) -> Self {
        Simulation {
            desc: desc.into(),
            ..Default::default()
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
