//! # CLD 统计量 CSV 导出
//!
//! 每个 (扫描标签, 物种, 时间) 一行，`bins` 为链长分布的行数:
//!
//! ```text
//! label,species,time,nchains,nmonomers,pn,pw,pd,bins
//! kp=2.5,P,0.5,10,200,1.1,2.2,3.3,120
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/collect.rs` 调用
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{PolymapError, Result};
use crate::models::Simulation;

use std::path::Path;

/// CSV 表头
const HEADER: [&str; 9] = [
    "label",
    "species",
    "time",
    "nchains",
    "nmonomers",
    "pn",
    "pw",
    "pd",
    "bins",
];

/// 导出 CLD 统计量，返回写入的行数
pub fn write_cld_moments(sim: &Simulation, output_path: &Path) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(output_path)?;
    wtr.write_record(HEADER)?;

    let mut rows = 0;
    for (label, case) in &sim.cases {
        for (species, series) in &case.cld {
            for (time, snapshot) in series {
                let s = &snapshot.summary;
                wtr.write_record(&[
                    label.clone(),
                    species.clone(),
                    time.to_string(),
                    s.nchains.to_string(),
                    s.nmonomers.to_string(),
                    s.pn.to_string(),
                    s.pw.to_string(),
                    s.pd.to_string(),
                    snapshot.cld.nrows().to_string(),
                ])?;
                rows += 1;
            }
        }
    }

    wtr.flush().map_err(|e| PolymapError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(rows)
}
