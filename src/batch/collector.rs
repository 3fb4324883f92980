//! # 文件收集器
//!
//! 根据输入目录和 glob 模式收集待处理的文件或子目录。
//!
//! ## 功能
//! - glob 模式匹配（逗号分隔的多模式）
//! - 排除模式
//! - 收集文件或子目录（仅一层，不递归）
//! - 结果按路径字典序排序，保证重复键的覆盖顺序确定
//!
//! ## 依赖关系
//! - 被 `parsers/model.rs`, `aggregate/` 调用
//! - 使用 `walkdir` 遍历目录, `glob` 匹配文件名

use crate::error::{PolymapError, Result};

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 收集的条目类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryKind {
    #[default]
    Files,
    Directories,
}

/// 文件收集器
pub struct FileCollector {
    /// 输入目录
    input: PathBuf,
    /// 匹配模式列表
    patterns: Vec<Pattern>,
    /// 排除模式列表
    excludes: Vec<Pattern>,
    /// 条目类型
    kind: EntryKind,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            patterns: Vec::new(),
            excludes: Vec::new(),
            kind: EntryKind::Files,
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        self.patterns = compile_patterns(pattern)?;
        Ok(self)
    }

    /// 设置排除模式（逗号分隔的多模式）
    pub fn excluding(mut self, pattern: &str) -> Result<Self> {
        self.excludes = compile_patterns(pattern)?;
        Ok(self)
    }

    /// 收集子目录而不是文件
    pub fn directories(mut self) -> Self {
        self.kind = EntryKind::Directories;
        self
    }

    /// 收集所有匹配的条目（字典序）
    pub fn collect(&self) -> Vec<PathBuf> {
        if !self.input.is_dir() {
            return vec![];
        }

        let mut entries: Vec<PathBuf> = WalkDir::new(&self.input)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| match self.kind {
                EntryKind::Files => e.file_type().is_file(),
                EntryKind::Directories => e.file_type().is_dir(),
            })
            .filter(|e| self.matches_patterns(e.path()))
            .map(|e| e.path().to_path_buf())
            .collect();

        entries.sort();
        entries
    }

    /// 检查条目名是否匹配任一模式且不匹配任何排除模式
    fn matches_patterns(&self, path: &Path) -> bool {
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        let included =
            self.patterns.is_empty() || self.patterns.iter().any(|p| p.matches(name));
        included && !self.excludes.iter().any(|p| p.matches(name))
    }
}

fn compile_patterns(pattern: &str) -> Result<Vec<Pattern>> {
    pattern
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| {
            Pattern::new(s).map_err(|e| {
                PolymapError::InvalidArgument(format!("Invalid pattern '{}': {}", s, e))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(name);
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_collect_sorted_files() {
        let dir = scratch_dir("mcpolymap_collector_files");
        for name in ["P.2.0.cld", "P.0.5.cld", "D.1.0.cld", "cP.dat"] {
            fs::write(dir.join(name), "").unwrap();
        }

        let files = FileCollector::new(dir.clone())
            .with_pattern("*.cld")
            .unwrap()
            .collect();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["D.1.0.cld", "P.0.5.cld", "P.2.0.cld"]);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_excluding_and_directories() {
        let dir = scratch_dir("mcpolymap_collector_dirs");
        fs::create_dir_all(dir.join("case2")).unwrap();
        fs::create_dir_all(dir.join("case1")).unwrap();
        fs::create_dir_all(dir.join("other")).unwrap();
        fs::write(dir.join("case3"), "not a directory").unwrap();
        fs::write(dir.join("cP.dat"), "").unwrap();
        fs::write(dir.join("chain.0.5.HlogM.dat"), "").unwrap();

        let cases = FileCollector::new(dir.clone())
            .with_pattern("case*")
            .unwrap()
            .directories()
            .collect();
        assert_eq!(cases, vec![dir.join("case1"), dir.join("case2")]);

        let conc = FileCollector::new(dir.clone())
            .with_pattern("c*dat")
            .unwrap()
            .excluding("*.HlogM.dat")
            .unwrap()
            .collect();
        assert_eq!(conc, vec![dir.join("cP.dat")]);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_invalid_pattern() {
        let result = FileCollector::new(PathBuf::from(".")).with_pattern("[");
        assert!(matches!(result, Err(PolymapError::InvalidArgument(_))));
    }

    #[test]
    fn test_missing_directory() {
        let files = FileCollector::new(PathBuf::from("/nonexistent/mcpolymap"))
            .with_pattern("*")
            .unwrap()
            .collect();
        assert!(files.is_empty());
    }
}
