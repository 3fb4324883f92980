//! # 单个算例的聚合
//!
//! ## 功能
//! - `process_mwd`: `*.HlogM.dat` -> id -> 时间 -> 直方图
//! - `process_cld`: `*.cld` -> id -> 时间 -> 链长分布与统计量
//! - `process_conc`: `c*dat` -> id -> 时间序列
//! - `process_case`: 描述文件 + 以上三类输出
//!
//! 文件按路径字典序处理，重复键按 `DuplicatePolicy` 处理。
//!
//! ## 依赖关系
//! - 被 `aggregate/driver.rs` 调用
//! - 使用 `parsers/`, `batch/collector.rs`

use crate::aggregate::{DuplicatePolicy, FilePatterns};
use crate::batch::FileCollector;
use crate::error::{PolymapError, Result};
use crate::models::{CaseResult, CldMap, ConcMap, MwdMap, Timestamp};
use crate::parsers::{
    concentration_id, find_descriptor, parse_cld_file, parse_model_file, read_table, tag_file,
    FileTag,
};

use std::collections::BTreeMap;
use std::path::Path;

/// 聚合一个算例目录
pub fn process_case(
    case_dir: &Path,
    patterns: &FilePatterns,
    duplicates: DuplicatePolicy,
) -> Result<CaseResult> {
    let descriptor = find_descriptor(case_dir, &patterns.descriptor)?;
    let params = parse_model_file(&descriptor)?;

    let mwd = process_mwd(case_dir, patterns, duplicates)?;
    let cld = process_cld(case_dir, patterns, duplicates)?;
    let conc = process_conc(case_dir, patterns, duplicates)?;

    Ok(CaseResult {
        case_dir: case_dir.to_path_buf(),
        params,
        conc,
        cld,
        mwd,
    })
}

/// 收集分子量分布
pub fn process_mwd(
    case_dir: &Path,
    patterns: &FilePatterns,
    duplicates: DuplicatePolicy,
) -> Result<MwdMap> {
    let files = FileCollector::new(case_dir.to_path_buf())
        .with_pattern(&patterns.mwd)?
        .collect();

    let mut mwd = MwdMap::new();
    for file in &files {
        let tag = tag_file(file)?;
        let table = read_table(file, 0)?;
        insert_snapshot(&mut mwd, tag, table, file, duplicates)?;
    }

    Ok(mwd)
}

/// 收集链长分布
pub fn process_cld(
    case_dir: &Path,
    patterns: &FilePatterns,
    duplicates: DuplicatePolicy,
) -> Result<CldMap> {
    let files = FileCollector::new(case_dir.to_path_buf())
        .with_pattern(&patterns.cld)?
        .collect();

    let mut cld = CldMap::new();
    for file in &files {
        let tag = tag_file(file)?;
        let snapshot = parse_cld_file(file)?;
        insert_snapshot(&mut cld, tag, snapshot, file, duplicates)?;
    }

    Ok(cld)
}

/// 收集浓度时间序列
///
/// `c*dat` 也会匹配以 `c` 开头的 MWD 文件，这里把它们排除。
pub fn process_conc(
    case_dir: &Path,
    patterns: &FilePatterns,
    duplicates: DuplicatePolicy,
) -> Result<ConcMap> {
    let files = FileCollector::new(case_dir.to_path_buf())
        .with_pattern(&patterns.conc)?
        .excluding(&patterns.mwd)?
        .collect();

    let mut conc = ConcMap::new();
    for file in &files {
        let id = concentration_id(file)?;
        let table = read_table(file, 0)?;
        if duplicates == DuplicatePolicy::Reject && conc.contains_key(&id) {
            return Err(PolymapError::DuplicateEntry {
                kind: "concentration series".to_string(),
                key: id,
                path: file.display().to_string(),
            });
        }
        conc.insert(id, table);
    }

    Ok(conc)
}

/// 写入 id -> 时间 -> 值，总是赋值（不存在时先创建 id 层）
fn insert_snapshot<V>(
    map: &mut BTreeMap<String, BTreeMap<Timestamp, V>>,
    tag: FileTag,
    value: V,
    path: &Path,
    duplicates: DuplicatePolicy,
) -> Result<()> {
    let per_id = map.entry(tag.id.clone()).or_default();
    if duplicates == DuplicatePolicy::Reject && per_id.contains_key(&tag.time) {
        return Err(PolymapError::DuplicateEntry {
            kind: "snapshot".to_string(),
            key: tag.to_string(),
            path: path.display().to_string(),
        });
    }
    per_id.insert(tag.time, value);
    Ok(())
}
