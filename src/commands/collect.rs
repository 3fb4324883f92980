//! # collect 命令实现
//!
//! 聚合整个模拟目录树并可选导出。
//!
//! ## 功能
//! - 扫描 `case*` 目录并聚合 MWD/CLD/浓度/参数
//! - 终端表格汇总每个算例
//! - 报告失败的算例
//! - 导出 JSON 和 CLD 统计量 CSV
//!
//! ## 依赖关系
//! - 使用 `cli/collect.rs` 定义的参数
//! - 使用 `aggregate/`, `export/`
//! - 使用 `utils/output.rs`

use crate::aggregate::{self, AggregateConfig, DuplicatePolicy, ErrorPolicy, FilePatterns};
use crate::cli::collect::CollectArgs;
use crate::error::{PolymapError, Result};
use crate::export;
use crate::models::{format_float, Simulation};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 算例汇总行
#[derive(Debug, Clone, Tabled)]
struct CaseRow {
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Case")]
    case: String,
    #[tabled(rename = "t_end")]
    time: String,
    #[tabled(rename = "MWD species")]
    mwd_species: usize,
    #[tabled(rename = "MWD snapshots")]
    mwd_snapshots: usize,
    #[tabled(rename = "CLD snapshots")]
    cld_snapshots: usize,
    #[tabled(rename = "Conc. series")]
    conc_series: usize,
}

/// 执行 collect 命令
pub fn execute(args: CollectArgs) -> Result<()> {
    output::print_header("Aggregating mcPolymer Results");

    let config = build_config(&args);
    output::print_info(&format!(
        "Scanning '{}' for '{}' directories...",
        config.root.display(),
        config.patterns.case
    ));

    let sim = aggregate::aggregate(&config)?;

    if sim.cases.is_empty() && sim.failures.is_empty() {
        // 仍然导出空数据集
        output::print_warning(&format!(
            "No case directories matching '{}' found.",
            config.patterns.case
        ));
    }

    print_summary(&sim);
    print_failures(&sim);

    if sim.cases.is_empty() && !sim.failures.is_empty() {
        return Err(PolymapError::Other(format!(
            "All {} case(s) failed",
            sim.failures.len()
        )));
    }

    if let Some(ref path) = args.json {
        export::write_json(&sim, path, args.pretty)?;
        output::print_success(&format!("Data set saved to '{}'", path.display()));
    }

    if let Some(ref path) = args.csv {
        let rows = export::write_cld_moments(&sim, path)?;
        output::print_success(&format!(
            "{} CLD summary rows saved to '{}'",
            rows,
            path.display()
        ));
    }

    output::print_done(&format!(
        "Aggregated {} case(s), {} failed",
        sim.cases.len(),
        sim.failures.len()
    ));

    Ok(())
}

/// 命令行参数 -> 聚合配置
fn build_config(args: &CollectArgs) -> AggregateConfig {
    let mut config = AggregateConfig::new(args.root.clone());
    config.patterns = FilePatterns {
        case: args.case_pattern.clone(),
        descriptor: args.descriptor.clone(),
        desc_file: args.desc_file.clone(),
        ..FilePatterns::default()
    };
    config.jobs = args.jobs;
    config.error_policy = if args.fail_fast {
        ErrorPolicy::FailFast
    } else {
        ErrorPolicy::Collect
    };
    config.duplicate_policy = if args.reject_duplicates {
        DuplicatePolicy::Reject
    } else {
        DuplicatePolicy::Overwrite
    };
    config.show_progress = true;
    config
}

/// 打印算例汇总表
fn print_summary(sim: &Simulation) {
    let rows: Vec<CaseRow> = sim
        .cases
        .iter()
        .map(|(label, case)| CaseRow {
            label: label.clone(),
            case: case
                .case_dir
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
            time: case.params.time.map(format_float).unwrap_or_default(),
            mwd_species: case.mwd.len(),
            mwd_snapshots: case.mwd_snapshots(),
            cld_snapshots: case.cld_snapshots(),
            conc_series: case.conc.len(),
        })
        .collect();

    if rows.is_empty() {
        return;
    }

    output::print_header(&format!("{} Aggregated Case(s)", rows.len()));
    let first_line = sim.desc.lines().next().unwrap_or("").trim();
    if !first_line.is_empty() {
        output::print_info(first_line);
    }
    println!("{}", Table::new(&rows));
}

/// 打印失败的算例
fn print_failures(sim: &Simulation) {
    if sim.is_complete() {
        return;
    }

    output::print_warning(&format!("{} case(s) could not be aggregated:", sim.failures.len()));
    for failure in &sim.failures {
        output::print_error(&format!(
            "  {}: {}",
            failure.case_dir.display(),
            failure.error
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::{Path, PathBuf};

    fn collect_args(root: &Path) -> CollectArgs {
        CollectArgs {
            root: root.to_path_buf(),
            desc_file: "desc.txt".to_string(),
            case_pattern: "case*".to_string(),
            descriptor: "sim*tcl".to_string(),
            jobs: 1,
            fail_fast: false,
            reject_duplicates: false,
            json: None,
            pretty: false,
            csv: None,
        }
    }

    fn scratch_root(name: &str) -> PathBuf {
        let root = std::env::temp_dir().join(name);
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("desc.txt"), "empty sweep\n").unwrap();
        root
    }

    #[test]
    fn test_exports_written_without_cases() {
        let root = scratch_root("mcpolymap_collect_no_cases");
        let mut args = collect_args(&root);
        args.json = Some(root.join("out.json"));
        args.csv = Some(root.join("moments.csv"));

        execute(args).unwrap();

        let json = fs::read_to_string(root.join("out.json")).unwrap();
        assert_eq!(json, r#"{"desc":"empty sweep\n","cases":{}}"#);
        let csv = fs::read_to_string(root.join("moments.csv")).unwrap();
        assert_eq!(csv.lines().count(), 1);

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn test_all_cases_failed_is_an_error() {
        let root = scratch_root("mcpolymap_collect_all_failed");
        // 缺少描述文件的算例
        fs::create_dir_all(root.join("case1")).unwrap();
        let mut args = collect_args(&root);
        args.json = Some(root.join("out.json"));

        assert!(matches!(execute(args), Err(PolymapError::Other(_))));
        assert!(!root.join("out.json").exists());

        let _ = fs::remove_dir_all(&root);
    }
}
