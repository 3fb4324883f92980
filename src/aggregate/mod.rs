//! # 聚合模块
//!
//! 扫描 `case*` 算例目录，解析每个算例的描述文件和 MWD/CLD/浓度输出，
//! 合并为一个按扫描标签索引的 `Simulation`。
//!
//! ## 依赖关系
//! - 被 `commands/collect.rs` 调用
//! - 使用 `parsers/`, `batch/`, `models/`
//! - 子模块: case, driver

pub mod case;
pub mod driver;

pub use case::process_case;
pub use driver::aggregate;

use std::path::PathBuf;

/// 各类输入文件的匹配模式
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePatterns {
    /// 算例目录
    pub case: String,
    /// 模拟描述文件
    pub descriptor: String,
    /// 分子量分布
    pub mwd: String,
    /// 链长分布
    pub cld: String,
    /// 浓度时间序列
    pub conc: String,
    /// 根目录下的描述文本
    pub desc_file: String,
}

impl Default for FilePatterns {
    fn default() -> Self {
        FilePatterns {
            case: "case*".to_string(),
            descriptor: "sim*tcl".to_string(),
            mwd: "*.HlogM.dat".to_string(),
            cld: "*.cld".to_string(),
            conc: "c*dat".to_string(),
            desc_file: "desc.txt".to_string(),
        }
    }
}

/// 算例失败时的处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// 第一个失败的算例终止整个运行
    FailFast,
    /// 记录失败的算例并继续
    #[default]
    Collect,
}

/// 重复键（相同 id/时间，或相同扫描标签）的处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// 按路径字典序，后者覆盖前者
    #[default]
    Overwrite,
    /// 视为错误
    Reject,
}

/// 聚合配置
#[derive(Debug, Clone)]
pub struct AggregateConfig {
    /// 根目录（包含 desc.txt 和 case* 目录）
    pub root: PathBuf,
    pub patterns: FilePatterns,
    /// 并行作业数（0 = 自动）
    pub jobs: usize,
    pub error_policy: ErrorPolicy,
    pub duplicate_policy: DuplicatePolicy,
    /// 是否显示进度条
    pub show_progress: bool,
}

impl AggregateConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        AggregateConfig {
            root: root.into(),
            patterns: FilePatterns::default(),
            jobs: 0,
            error_policy: ErrorPolicy::default(),
            duplicate_policy: DuplicatePolicy::default(),
            show_progress: false,
        }
    }
}
