//! # 输出文件名解析器
//!
//! mcPolymer 把物种标识和模拟时间编码在输出文件名中。
//!
//! ## 文件名格式
//! ```text
//! <id>.<time>[.<tag>].<ext>      例: P.0.500.HlogM.dat, D.12.0.cld
//! c<id>.<ext>                    浓度文件, 例: c12.dat
//! ```
//!
//! 只解析路径的最后一段，目录名中的数字不会被误认为时间。
//!
//! ## 依赖关系
//! - 被 `aggregate/case.rs` 使用
//! - 使用 `regex` 匹配时间字段

use crate::error::{PolymapError, Result};
use crate::models::Timestamp;

use regex::Regex;
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

/// 从文件名解析出的标签
#[derive(Debug, Clone, PartialEq)]
pub struct FileTag {
    /// 物种/算例标识
    pub id: String,
    /// 模拟时间
    pub time: Timestamp,
    /// 时间与扩展名之间的标记（如 `HlogM`）
    pub tag: Option<String>,
    /// 扩展名
    pub extension: String,
}

impl fmt::Display for FileTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ t={}", self.id, self.time)?;
        match self.tag {
            Some(ref tag) => write!(f, " [{}.{}]", tag, self.extension),
            None => write!(f, " [{}]", self.extension),
        }
    }
}

fn time_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+\.\d+(?:[eE][-+]?\d+)?").unwrap())
}

fn malformed(path: &Path, reason: &str) -> PolymapError {
    PolymapError::MalformedFilename {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

fn file_name(path: &Path) -> Result<&str> {
    path.file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| malformed(path, "path has no UTF-8 file name"))
}

/// 解析 `<id>.<time>[.<tag>].<ext>` 形式的文件名
pub fn tag_file(path: &Path) -> Result<FileTag> {
    let name = file_name(path)?;

    let (id, rest) = name
        .split_once('.')
        .ok_or_else(|| malformed(path, "missing '.' after identifier"))?;
    if id.is_empty() {
        return Err(malformed(path, "empty identifier"));
    }

    let m = time_regex().find(rest).ok_or_else(|| {
        malformed(
            path,
            "no time component (expected a decimal number such as 0.500)",
        )
    })?;
    let time: f64 = m
        .as_str()
        .parse()
        .map_err(|_| malformed(path, &format!("invalid time '{}'", m.as_str())))?;

    // 时间之后剩下 ".HlogM.dat" 或 ".cld"
    let after = &rest[m.end()..];
    let (tag, extension) = match after.rsplit_once('.') {
        Some((tag, ext)) => (tag.trim_start_matches('.'), ext),
        None => ("", after),
    };

    Ok(FileTag {
        id: id.to_string(),
        time: Timestamp(time),
        tag: if tag.is_empty() {
            None
        } else {
            Some(tag.to_string())
        },
        extension: extension.to_string(),
    })
}

/// 解析浓度文件名 `c<id>.<ext>`，返回 `<id>`
pub fn concentration_id(path: &Path) -> Result<String> {
    let name = file_name(path)?;

    let rest = name
        .strip_prefix('c')
        .ok_or_else(|| malformed(path, "concentration file must start with 'c'"))?;
    let (id, _) = rest
        .split_once('.')
        .ok_or_else(|| malformed(path, "missing '.' after identifier"))?;
    if id.is_empty() {
        return Err(malformed(path, "empty identifier"));
    }

    Ok(id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_mwd_file() {
        let tag = tag_file(Path::new("caseA/specX.0.500.HlogM.dat")).unwrap();
        assert_eq!(tag.id, "specX");
        assert_eq!(tag.time, Timestamp(0.5));
        assert_eq!(tag.tag.as_deref(), Some("HlogM"));
        assert_eq!(tag.extension, "dat");
        assert_eq!(tag.to_string(), "specX @ t=0.5 [HlogM.dat]");
    }

    #[test]
    fn test_tag_cld_file() {
        let tag = tag_file(Path::new("case1/P.12.0.cld")).unwrap();
        assert_eq!(tag.id, "P");
        assert_eq!(tag.time.0, 12.0);
        assert_eq!(tag.tag, None);
        assert_eq!(tag.extension, "cld");
    }

    #[test]
    fn test_directory_digits_are_ignored() {
        // 目录 "run2.5" 中的数字不应被当作时间
        let tag = tag_file(Path::new("run2.5/case3/P.1.5e-3.cld")).unwrap();
        assert_eq!(tag.id, "P");
        assert_eq!(tag.time.0, 1.5e-3);
    }

    #[test]
    fn test_identifier_with_digits() {
        let tag = tag_file(Path::new("case1/P2.0.25.HlogM.dat")).unwrap();
        assert_eq!(tag.id, "P2");
        assert_eq!(tag.time.0, 0.25);
    }

    #[test]
    fn test_tag_file_errors() {
        assert!(matches!(
            tag_file(Path::new("case1/nodots")),
            Err(PolymapError::MalformedFilename { .. })
        ));
        assert!(matches!(
            tag_file(Path::new("case1/.0.5.cld")),
            Err(PolymapError::MalformedFilename { .. })
        ));
        assert!(matches!(
            tag_file(Path::new("case1/P.final.cld")),
            Err(PolymapError::MalformedFilename { .. })
        ));
    }

    #[test]
    fn test_concentration_id() {
        assert_eq!(concentration_id(Path::new("caseA/c12.dat")).unwrap(), "12");
        assert_eq!(
            concentration_id(Path::new("caseA/cMonomer.out.dat")).unwrap(),
            "Monomer"
        );
        assert!(concentration_id(Path::new("caseA/x12.dat")).is_err());
        assert!(concentration_id(Path::new("caseA/c.dat")).is_err());
        assert!(concentration_id(Path::new("caseA/cdat")).is_err());
    }
}
