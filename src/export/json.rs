//! # JSON 导出
//!
//! 使用 `serde_json` 写出完整的聚合结果。时间键序列化为字符串，
//! 数值表序列化为嵌套数组。
//!
//! ## 依赖关系
//! - 被 `commands/collect.rs` 调用
//! - 使用 `serde_json`

use crate::error::{PolymapError, Result};
use crate::models::Simulation;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 导出为 JSON 文件
pub fn write_json(sim: &Simulation, output_path: &Path, pretty: bool) -> Result<()> {
    let file = File::create(output_path).map_err(|e| PolymapError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    if pretty {
        serde_json::to_writer_pretty(&mut writer, sim)?;
    } else {
        serde_json::to_writer(&mut writer, sim)?;
    }

    writer.flush().map_err(|e| PolymapError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
