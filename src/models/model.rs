//! # 模拟参数数据模型
//!
//! 存储从 mcPolymer 模拟描述文件 (`sim*.tcl`) 中提取的参数。
//!
//! ## 依赖关系
//! - 被 `parsers/model.rs` 生成
//! - 被 `aggregate/` 和 `commands/model.rs` 使用

use crate::models::timestamp::format_float;

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// 参数扫描变量（`#var!` 记录）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepVar {
    /// 被扫描的参数名
    pub param: String,
    /// 参数取值
    pub val: f64,
}

impl SweepVar {
    /// 扫描标签 `"<param>=<value>"`
    pub fn label(&self) -> String {
        format!("{}={}", self.param, format_float(self.val))
    }
}

/// 一个模拟算例的参数记录
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedModel {
    /// 速率常数
    pub rates: BTreeMap<String, f64>,

    /// 初始浓度（Species/SpeciesMacro 默认为 0）
    pub conc0: BTreeMap<String, f64>,

    /// 单体
    pub monomers: BTreeMap<String, f64>,

    /// 引发剂
    pub initiator: BTreeMap<String, f64>,

    /// 小分子物种
    pub species: BTreeSet<String>,

    /// 大分子物种
    pub speciesmacro: BTreeSet<String>,

    /// 扫描变量
    pub var: Option<SweepVar>,

    /// 描述文本
    pub desc: Option<String>,

    /// 模拟结束时间
    pub time: Option<f64>,

    /// Monte Carlo 步数
    pub nmc: Option<f64>,

    /// 描述文件路径
    pub model: PathBuf,
}

impl ParsedModel {
    pub fn new(model: impl Into<PathBuf>) -> Self {
        ParsedModel {
            model: model.into(),
            ..Default::default()
        }
    }

    /// 扫描标签；没有 `#var!` 记录时返回 None
    pub fn sweep_label(&self) -> Option<String> {
        self.var.as_ref().map(SweepVar::label)
    }
}
