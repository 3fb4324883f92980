//! # 数值文件读取器
//!
//! 读取空白（或逗号）分隔的数值文本，得到矩形二维浮点表。
//!
//! ## 规则
//! - 先跳过 `skip_header` 行
//! - `#` 之后的内容为注释，空行忽略
//! - 非数值字段或行长度不一致视为解析错误
//!
//! ## 依赖关系
//! - 被 `parsers/cld.rs`, `aggregate/case.rs` 使用
//! - 使用 `models/table.rs`

use crate::error::{PolymapError, Result};
use crate::models::NumericTable;

use std::fs;
use std::path::Path;

/// 读取数值文件
pub fn read_table(path: &Path, skip_header: usize) -> Result<NumericTable> {
    let content = fs::read_to_string(path).map_err(|e| PolymapError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_table(&content, skip_header, path)
}

/// 从字符串内容解析数值表
pub fn parse_table(content: &str, skip_header: usize, path: &Path) -> Result<NumericTable> {
    let mut rows: Vec<Vec<f64>> = Vec::new();

    for (idx, line) in content.lines().enumerate().skip(skip_header) {
        // `#` 之后为注释
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let mut row = Vec::new();
        for token in line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
        {
            let value: f64 = token.parse().map_err(|_| PolymapError::ParseError {
                format: "numeric".to_string(),
                path: path.display().to_string(),
                reason: format!("line {}: '{}' is not a number", idx + 1, token),
            })?;
            row.push(value);
        }

        if let Some(first) = rows.first() {
            if first.len() != row.len() {
                return Err(PolymapError::ParseError {
                    format: "numeric".to_string(),
                    path: path.display().to_string(),
                    reason: format!(
                        "line {}: expected {} columns, found {}",
                        idx + 1,
                        first.len(),
                        row.len()
                    ),
                });
            }
        }

        rows.push(row);
    }

    Ok(NumericTable::from_rows(rows))
}
