//! # 解析器模块
//!
//! 提供 mcPolymer 输出文件名和各种文本格式的解析器。
//!
//! ## 依赖关系
//! - 被 `aggregate/` 和 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: filename, numeric, model, cld

pub mod cld;
pub mod filename;
pub mod model;
pub mod numeric;

pub use cld::parse_cld_file;
pub use filename::{concentration_id, tag_file, FileTag};
pub use model::{find_descriptor, parse_model_file};
pub use numeric::read_table;
