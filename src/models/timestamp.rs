//! # 时间戳
//!
//! 从文件名中提取的模拟时间。`f64` 本身不满足 `Ord`，
//! 这里用 `f64::total_cmp` 包装成可作为有序映射键的类型。
//!
//! ## 依赖关系
//! - 被 `parsers/filename.rs` 生成
//! - 被 `models/simulation.rs` 用作 MWD/CLD 映射的键

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// 模拟时间（有序键）
#[derive(Debug, Clone, Copy)]
pub struct Timestamp(pub f64);

impl PartialEq for Timestamp {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for Timestamp {}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f64> for Timestamp {
    fn from(value: f64) -> Self {
        Timestamp(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_float(self.0))
    }
}

// JSON 对象的键必须是字符串
impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// 按下游分析脚本习惯的方式格式化浮点数
///
/// 十进制指数小于 -4 或不小于 16 时使用科学计数法（`1e-05`, `2.5e+16`），
/// 否则整数值保留一位小数（`2` -> `2.0`），其余使用最短往返表示。
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // `{:e}` 给出最短往返尾数，如 "2.5e-7"
    let sci = format!("{:e}", value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if value != 0.0 && !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    } else if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
