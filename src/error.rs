//! # 统一错误处理模块
//!
//! 定义 mcpolymap 的所有错误类型，使用 `thiserror` 派生。
//! 每个错误都携带出错的文件路径，便于批量运行时定位问题。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// mcpolymap 统一错误类型
#[derive(Error, Debug)]
pub enum PolymapError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误 (缺失文件)
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("No simulation descriptor matching '{pattern}' in {dir}")]
    DescriptorNotFound { dir: String, pattern: String },

    // ─────────────────────────────────────────────────────────────
    // 文件名错误
    // ─────────────────────────────────────────────────────────────
    #[error("Unparsable filename: {path}\nReason: {reason}")]
    MalformedFilename { path: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 内容解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    #[error("Malformed model file: {path} (line {line})\nReason: {reason}")]
    MalformedModel {
        path: String,
        line: usize,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 歧义输入
    // ─────────────────────────────────────────────────────────────
    #[error("Ambiguous input in {dir}: {count} files match '{pattern}' ({candidates})")]
    AmbiguousInput {
        dir: String,
        pattern: String,
        count: usize,
        candidates: String,
    },

    #[error("Duplicate {kind} '{key}' from {path}")]
    DuplicateEntry {
        kind: String,
        key: String,
        path: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // 导出错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, PolymapError>;
