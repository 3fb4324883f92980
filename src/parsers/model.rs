//! # mcPolymer 模拟描述文件解析器
//!
//! 解析算例目录中的 `sim*.tcl` 描述文件，提取速率常数、初始浓度、物种等参数。
//!
//! ## 描述文件格式
//! ```text
//! #desc!
//! free radical polymerisation, base case      <- 下一行是描述
//! #var!
//! set kp 2.5                                  <- 下一行是扫描变量
//! Species A
//! SpeciesMacro P
//! Monomer M 1.0
//! Initiator I 0.01
//! Concentration A 0.25
//! RateConstant kd 1e-3
//! Simulation 3600
//! InitSimulation 1e9
//! ```
//!
//! 记录按文件顺序处理，后出现的记录覆盖先前的值。
//!
//! ## 依赖关系
//! - 被 `aggregate/case.rs`, `commands/model.rs` 使用
//! - 使用 `models/model.rs`, `batch/collector.rs`

use crate::batch::FileCollector;
use crate::error::{PolymapError, Result};
use crate::models::{ParsedModel, SweepVar};

use std::fs;
use std::path::{Path, PathBuf};

/// 在算例目录中查找唯一的描述文件
pub fn find_descriptor(case_dir: &Path, pattern: &str) -> Result<PathBuf> {
    let mut matches = FileCollector::new(case_dir.to_path_buf())
        .with_pattern(pattern)?
        .collect();

    match matches.len() {
        0 => Err(PolymapError::DescriptorNotFound {
            dir: case_dir.display().to_string(),
            pattern: pattern.to_string(),
        }),
        1 => Ok(matches.remove(0)),
        n => Err(PolymapError::AmbiguousInput {
            dir: case_dir.display().to_string(),
            pattern: pattern.to_string(),
            count: n,
            candidates: matches
                .iter()
                .filter_map(|p| p.file_name())
                .map(|n| n.to_string_lossy().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        }),
    }
}

/// 解析描述文件
pub fn parse_model_file(path: &Path) -> Result<ParsedModel> {
    let content = fs::read_to_string(path).map_err(|e| PolymapError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_model_content(&content, path)
}

/// 从字符串内容解析描述文件
pub fn parse_model_content(content: &str, path: &Path) -> Result<ParsedModel> {
    let lines: Vec<&str> = content.lines().collect();
    let mut model = ParsedModel::new(path);

    let mut i = 0;
    while i < lines.len() {
        let line_no = i + 1;
        let parts: Vec<&str> = lines[i].split_whitespace().collect();
        i += 1;

        let Some(keyword) = parts.first() else {
            continue;
        };

        match *keyword {
            // 标记行：内容在下一行，下一行不再作为记录解析
            "#var!" => {
                let payload = payload_line(&lines, i, path, line_no, "#var!")?;
                model.var = Some(parse_sweep_var(payload, path, line_no + 1)?);
                i += 1;
            }
            "#desc!" => {
                let payload = payload_line(&lines, i, path, line_no, "#desc!")?;
                model.desc = Some(payload.trim_end().to_string());
                i += 1;
            }
            "Monomer" => {
                let (name, value) = name_value(&parts, path, line_no)?;
                model.monomers.insert(name, value);
            }
            "Initiator" => {
                let (name, value) = name_value(&parts, path, line_no)?;
                model.initiator.insert(name, value);
            }
            "Species" => {
                let name = field(&parts, 1, "species name", path, line_no)?.to_string();
                model.conc0.insert(name.clone(), 0.0);
                model.species.insert(name);
            }
            "SpeciesMacro" => {
                let name = field(&parts, 1, "species name", path, line_no)?.to_string();
                model.conc0.insert(name.clone(), 0.0);
                model.speciesmacro.insert(name);
            }
            "Concentration" => {
                let (name, value) = name_value(&parts, path, line_no)?;
                model.conc0.insert(name, value);
            }
            "RateConstant" => {
                let (name, value) = name_value(&parts, path, line_no)?;
                model.rates.insert(name, value);
            }
            "Simulation" => {
                model.time = Some(number(&parts, 1, "simulation time", path, line_no)?);
            }
            "InitSimulation" => {
                model.nmc = Some(number(&parts, 1, "Monte Carlo steps", path, line_no)?);
            }
            _ => {}
        }
    }

    Ok(model)
}

/// 取标记行之后的内容行
fn payload_line<'a>(
    lines: &[&'a str],
    idx: usize,
    path: &Path,
    marker_line: usize,
    marker: &str,
) -> Result<&'a str> {
    lines.get(idx).copied().ok_or_else(|| PolymapError::MalformedModel {
        path: path.display().to_string(),
        line: marker_line,
        reason: format!("'{}' marker on the last line has no payload", marker),
    })
}

/// 解析扫描变量
///
/// `<param> <value>` 或 `<cmd> <param> <value> ...`（如 tcl 的 `set kp 2.5`）
fn parse_sweep_var(payload: &str, path: &Path, line_no: usize) -> Result<SweepVar> {
    let parts: Vec<&str> = payload.split_whitespace().collect();
    let (param_idx, value_idx) = if parts.len() >= 3 { (1, 2) } else { (0, 1) };

    let param = field(&parts, param_idx, "sweep parameter", path, line_no)?;
    let val = number(&parts, value_idx, "sweep value", path, line_no)?;

    Ok(SweepVar {
        param: param.to_string(),
        val,
    })
}

fn name_value(parts: &[&str], path: &Path, line_no: usize) -> Result<(String, f64)> {
    let name = field(parts, 1, "name", path, line_no)?;
    let value = number(parts, 2, "value", path, line_no)?;
    Ok((name.to_string(), value))
}

fn field<'a>(
    parts: &[&'a str],
    idx: usize,
    what: &str,
    path: &Path,
    line_no: usize,
) -> Result<&'a str> {
    parts
        .get(idx)
        .copied()
        .ok_or_else(|| PolymapError::MalformedModel {
            path: path.display().to_string(),
            line: line_no,
            reason: format!("missing {} (token {})", what, idx),
        })
}

fn number(parts: &[&str], idx: usize, what: &str, path: &Path, line_no: usize) -> Result<f64> {
    let token = field(parts, idx, what, path, line_no)?;
    token.parse().map_err(|_| PolymapError::MalformedModel {
        path: path.display().to_string(),
        line: line_no,
        reason: format!("{} '{}' is not a number", what, token),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<ParsedModel> {
        parse_model_content(content, Path::new("case1/sim.tcl"))
    }

    #[test]
    fn test_parse_full_descriptor() {
        let content = r#"
# mcPolymer input
#desc!
free radical polymerisation, base case
#var!
set kp 2.5
Species A
Species I
SpeciesMacro P
Monomer M 1.0
Initiator I 0.01
Concentration A 0.25
RateConstant kd 1e-3
RateConstant kp 2.5
Simulation 3600
InitSimulation 1e9
Reaction A + I -> P
"#;
        let model = parse(content).unwrap();
        assert_eq!(
            model.desc.as_deref(),
            Some("free radical polymerisation, base case")
        );
        assert_eq!(
            model.var,
            Some(SweepVar {
                param: "kp".to_string(),
                val: 2.5
            })
        );
        assert!(model.species.contains("A"));
        assert!(model.species.contains("I"));
        assert!(model.speciesmacro.contains("P"));
        assert_eq!(model.monomers["M"], 1.0);
        assert_eq!(model.initiator["I"], 0.01);
        assert_eq!(model.conc0["A"], 0.25);
        assert_eq!(model.conc0["I"], 0.0);
        assert_eq!(model.conc0["P"], 0.0);
        assert_eq!(model.rates["kd"], 1e-3);
        assert_eq!(model.time, Some(3600.0));
        assert_eq!(model.nmc, Some(1e9));
        assert_eq!(model.model, PathBuf::from("case1/sim.tcl"));
        assert_eq!(model.sweep_label(), Some("kp=2.5".to_string()));
    }

    #[test]
    fn test_later_concentration_overrides_default() {
        let model = parse("Species A\nMonomer M 1.0\nConcentration A 0.25\n").unwrap();
        assert_eq!(model.conc0["A"], 0.25);
    }

    #[test]
    fn test_species_declaration_resets_earlier_concentration() {
        let model = parse("Concentration A 0.25\nSpecies A\n").unwrap();
        assert_eq!(model.conc0["A"], 0.0);

        let model = parse("Concentration P 0.5\nSpeciesMacro P\n").unwrap();
        assert_eq!(model.conc0["P"], 0.0);
    }

    #[test]
    fn test_two_token_sweep_var() {
        let model = parse("#var!\nrate 2.5\n").unwrap();
        assert_eq!(
            model.var,
            Some(SweepVar {
                param: "rate".to_string(),
                val: 2.5
            })
        );
    }

    #[test]
    fn test_payload_line_is_not_a_record() {
        let model = parse("#var!\nRateConstant kp 3.0\n").unwrap();
        assert_eq!(model.var.as_ref().map(|v| v.param.as_str()), Some("kp"));
        assert!(model.rates.is_empty());
    }

    #[test]
    fn test_marker_on_last_line() {
        match parse("Species A\n#desc!") {
            Err(PolymapError::MalformedModel { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(
            parse("#var!\n"),
            Err(PolymapError::MalformedModel { .. })
        ));
    }

    #[test]
    fn test_bad_value() {
        match parse("Species A\nRateConstant kd fast\n") {
            Err(PolymapError::MalformedModel { line, reason, .. }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("fast"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(parse("Monomer M\n").is_err());
    }

    #[test]
    fn test_unrecognized_lines_ignored() {
        let model = parse("puts hello\nReaction A -> B 1.0\n\n").unwrap();
        assert_eq!(model, ParsedModel::new("case1/sim.tcl"));
    }

    #[test]
    fn test_find_descriptor() {
        let dir = std::env::temp_dir().join("mcpolymap_find_descriptor");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();

        assert!(matches!(
            find_descriptor(&dir, "sim*tcl"),
            Err(PolymapError::DescriptorNotFound { .. })
        ));

        fs::write(dir.join("sim_base.tcl"), "Species A\n").unwrap();
        fs::write(dir.join("notes.txt"), "").unwrap();
        assert_eq!(
            find_descriptor(&dir, "sim*tcl").unwrap(),
            dir.join("sim_base.tcl")
        );

        fs::write(dir.join("sim_other.tcl"), "Species B\n").unwrap();
        match find_descriptor(&dir, "sim*tcl") {
            Err(PolymapError::AmbiguousInput { count, .. }) => assert_eq!(count, 2),
            other => panic!("unexpected result: {:?}", other),
        }

        let _ = fs::remove_dir_all(&dir);
    }
}
