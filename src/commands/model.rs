//! # model 命令实现
//!
//! 解析单个算例的模拟描述文件并以表格显示。
//!
//! ## 依赖关系
//! - 使用 `cli/model.rs` 定义的参数
//! - 使用 `parsers/model.rs`
//! - 使用 `utils/output.rs`

use crate::cli::model::ModelArgs;
use crate::error::{PolymapError, Result};
use crate::models::{format_float, ParsedModel};
use crate::parsers;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 参数表行
#[derive(Debug, Clone, Tabled)]
struct ParamRow {
    #[tabled(rename = "Group")]
    group: &'static str,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// 执行 model 命令
pub fn execute(args: ModelArgs) -> Result<()> {
    output::print_header("Simulation Descriptor");

    let descriptor = if args.input.is_dir() {
        parsers::find_descriptor(&args.input, &args.pattern)?
    } else if args.input.is_file() {
        args.input.clone()
    } else {
        return Err(PolymapError::FileNotFound {
            path: args.input.display().to_string(),
        });
    };

    let model = parsers::parse_model_file(&descriptor)?;
    output::print_success(&format!("Parsed '{}'", descriptor.display()));

    match model.sweep_label() {
        Some(label) => output::print_info(&format!("Sweep label: {}", label)),
        None => output::print_warning("No '#var!' record; the case directory name is used as label"),
    }
    if let Some(ref desc) = model.desc {
        output::print_info(&format!("Description: {}", desc));
    }
    if let Some(time) = model.time {
        output::print_info(&format!("Simulation time: {}", format_float(time)));
    }
    if let Some(nmc) = model.nmc {
        output::print_info(&format!("Monte Carlo steps: {}", format_float(nmc)));
    }

    let rows = param_rows(&model);
    if rows.is_empty() {
        output::print_warning("No parameter records found.");
    } else {
        println!("{}", Table::new(&rows));
    }

    Ok(())
}

/// 展开参数映射为表格行
fn param_rows(model: &ParsedModel) -> Vec<ParamRow> {
    let groups = [
        ("monomer", &model.monomers),
        ("initiator", &model.initiator),
        ("conc0", &model.conc0),
        ("rate", &model.rates),
    ];

    let mut rows: Vec<ParamRow> = groups
        .iter()
        .flat_map(|(group, map)| {
            map.iter().map(move |(name, value)| ParamRow {
                group: *group,
                name: name.clone(),
                value: format_float(*value),
            })
        })
        .collect();

    for name in &model.species {
        rows.push(ParamRow {
            group: "species",
            name: name.clone(),
            value: String::new(),
        });
    }
    for name in &model.speciesmacro {
        rows.push(ParamRow {
            group: "macro",
            name: name.clone(),
            value: String::new(),
        });
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_param_rows() {
        let model = parsers::model::parse_model_content(
            "Species A\nSpeciesMacro P\nMonomer M 1.0\nRateConstant kp 2.5\n",
            Path::new("sim.tcl"),
        )
        .unwrap();
        let rows = param_rows(&model);

        // monomer M, conc0 A, conc0 P, rate kp, species A, macro P
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].group, "monomer");
        assert_eq!(rows[0].value, "1.0");
        assert_eq!(rows[3].name, "kp");
        assert_eq!(rows[5].group, "macro");
    }
}
