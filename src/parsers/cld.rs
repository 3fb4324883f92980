//! # 链长分布 (.cld) 文件解析器
//!
//! ## .cld 格式说明
//! ```text
//! nchains 1000 ... ... ... ... nmonomers 200000     <- 第 0 行: token 1, 7
//! pn 120.5 pw 240.1 pd 1.99                          <- 第 1 行: token 1, 3, 5
//! <列标题>                                           <- 第 2 行: 忽略
//! 1 0.0
//! 2 3.0
//! ...
//! ```
//!
//! 文件头是固定位置的记录，这里为每个 token 命名字段，
//! 缺失或非数值时报告具体字段名。
//!
//! ## 依赖关系
//! - 被 `aggregate/case.rs` 使用
//! - 使用 `parsers/numeric.rs`, `models/simulation.rs`

use crate::error::{PolymapError, Result};
use crate::models::{CldSnapshot, CldSummary};
use crate::parsers::numeric::parse_table;

use std::fs;
use std::path::Path;

/// 数值数据前的文件头行数
pub const CLD_HEADER_LINES: usize = 3;

/// (字段名, token 位置)
const LINE0_FIELDS: [(&str, usize); 2] = [("nchains", 1), ("nmonomers", 7)];
const LINE1_FIELDS: [(&str, usize); 3] = [("pn", 1), ("pw", 3), ("pd", 5)];

/// 解析 .cld 文件
pub fn parse_cld_file(path: &Path) -> Result<CldSnapshot> {
    let content = fs::read_to_string(path).map_err(|e| PolymapError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_cld_content(&content, path)
}

/// 从字符串内容解析 .cld 格式
pub fn parse_cld_content(content: &str, path: &Path) -> Result<CldSnapshot> {
    let mut lines = content.lines();
    let line0 = lines.next().unwrap_or("");
    let line1 = lines.next().unwrap_or("");

    let summary = parse_cld_header(line0, line1, path)?;
    let cld = parse_table(content, CLD_HEADER_LINES, path)?;

    Ok(CldSnapshot { cld, summary })
}

/// 解析两行文件头
pub fn parse_cld_header(line0: &str, line1: &str, path: &Path) -> Result<CldSummary> {
    let [nchains, nmonomers] = read_fields(line0, 0, &LINE0_FIELDS, path)?;
    let [pn, pw, pd] = read_fields(line1, 1, &LINE1_FIELDS, path)?;

    Ok(CldSummary {
        nchains,
        nmonomers,
        pn,
        pw,
        pd,
    })
}

fn read_fields<const N: usize>(
    line: &str,
    line_idx: usize,
    fields: &[(&str, usize); N],
    path: &Path,
) -> Result<[f64; N]> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let mut values = [0.0; N];

    for (value, (name, pos)) in values.iter_mut().zip(fields) {
        let token = tokens.get(*pos).ok_or_else(|| PolymapError::ParseError {
            format: "cld".to_string(),
            path: path.display().to_string(),
            reason: format!(
                "header line {} has {} tokens, '{}' expected at token {}",
                line_idx,
                tokens.len(),
                name,
                pos
            ),
        })?;
        *value = token.parse().map_err(|_| PolymapError::ParseError {
            format: "cld".to_string(),
            path: path.display().to_string(),
            reason: format!("'{}' value '{}' is not a number", name, token),
        })?;
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header() {
        let summary = parse_cld_header(
            "h 10 h h h h h 200",
            "h 1.1 h 2.2 h 3.3",
            Path::new("P.1.0.cld"),
        )
        .unwrap();
        assert_eq!(
            summary,
            CldSummary {
                nchains: 10.0,
                nmonomers: 200.0,
                pn: 1.1,
                pw: 2.2,
                pd: 3.3,
            }
        );
    }

    #[test]
    fn test_parse_content() {
        let content = "h 10 h h h h h 200\nh 1.1 h 2.2 h 3.3\nlength count\n1 4\n2 3\n3 3\n";
        let snapshot = parse_cld_content(content, Path::new("P.1.0.cld")).unwrap();
        assert_eq!(snapshot.summary.nchains, 10.0);
        assert_eq!(snapshot.cld.nrows(), 3);
        assert_eq!(snapshot.cld.rows[0].len(), 2);
        assert_eq!(snapshot.cld.rows[0], vec![1.0, 4.0]);
    }

    #[test]
    fn test_short_header_names_field() {
        match parse_cld_header("h 10 h", "h 1.1 h 2.2 h 3.3", Path::new("P.1.0.cld")) {
            Err(PolymapError::ParseError { reason, .. }) => {
                assert!(reason.contains("nmonomers"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_header() {
        match parse_cld_header("h 10 h h h h h 200", "h 1.1 h x h 3.3", Path::new("P.cld")) {
            Err(PolymapError::ParseError { reason, .. }) => assert!(reason.contains("pw")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_empty_file() {
        assert!(parse_cld_content("", Path::new("P.1.0.cld")).is_err());
    }
}
