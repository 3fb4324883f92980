//! # 顶层聚合驱动
//!
//! ## 流程
//! 1. 读取根目录下的 `desc.txt`（缺失则整个运行失败）
//! 2. 按字典序枚举 `case*` 目录
//! 3. 并行聚合每个算例（`process_case`）
//! 4. 按输入顺序合并，键为扫描标签 `"<param>=<value>"`
//!
//! ## 依赖关系
//! - 被 `commands/collect.rs` 调用
//! - 使用 `aggregate/case.rs`, `batch/`

use crate::aggregate::{process_case, AggregateConfig, DuplicatePolicy, ErrorPolicy};
use crate::batch::{BatchRunner, FileCollector};
use crate::error::{PolymapError, Result};
use crate::models::{CaseFailure, CaseResult, Simulation};

use std::fs;
use std::path::Path;

/// 聚合整个目录树
pub fn aggregate(config: &AggregateConfig) -> Result<Simulation> {
    if !config.root.is_dir() {
        return Err(PolymapError::DirectoryNotFound {
            path: config.root.display().to_string(),
        });
    }

    let desc_path = config.root.join(&config.patterns.desc_file);
    if !desc_path.is_file() {
        return Err(PolymapError::FileNotFound {
            path: desc_path.display().to_string(),
        });
    }
    let desc = fs::read_to_string(&desc_path).map_err(|e| PolymapError::FileReadError {
        path: desc_path.display().to_string(),
        source: e,
    })?;

    let cases = FileCollector::new(config.root.clone())
        .with_pattern(&config.patterns.case)?
        .directories()
        .collect();

    let runner = BatchRunner::new(config.jobs).with_progress(config.show_progress);
    let results = runner.run(&cases, |dir| {
        process_case(dir, &config.patterns, config.duplicate_policy)
    })?;

    let mut sim = Simulation::new(desc);
    for (dir, result) in cases.iter().zip(results) {
        let merged = result.and_then(|case| merge_case(&mut sim, case, config.duplicate_policy));
        if let Err(e) = merged {
            match config.error_policy {
                ErrorPolicy::FailFast => return Err(e),
                ErrorPolicy::Collect => sim.failures.push(CaseFailure {
                    case_dir: dir.clone(),
                    error: e.to_string(),
                }),
            }
        }
    }

    Ok(sim)
}

/// 算例的扫描标签；没有 `#var!` 记录时使用目录名
pub fn case_label(case: &CaseResult) -> String {
    case.params.sweep_label().unwrap_or_else(|| dir_name(&case.case_dir))
}

fn dir_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| dir.display().to_string())
}

fn merge_case(sim: &mut Simulation, case: CaseResult, duplicates: DuplicatePolicy) -> Result<()> {
    let label = case_label(&case);
    if duplicates == DuplicatePolicy::Reject && sim.cases.contains_key(&label) {
        return Err(PolymapError::DuplicateEntry {
            kind: "sweep label".to_string(),
            key: label,
            path: case.case_dir.display().to_string(),
        });
    }
    sim.cases.insert(label, case);
    Ok(())
}
