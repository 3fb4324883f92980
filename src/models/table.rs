//! # 数值表格
//!
//! 以行为主序存储的二维浮点数组，对应模拟器输出的空白分隔数值文件。
//!
//! ## 依赖关系
//! - 被 `parsers/numeric.rs` 生成
//! - 被 `models/simulation.rs` 使用

use serde::Serialize;

/// 矩形二维数值表（行 x 列）
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NumericTable {
    /// 行数据，每行长度一致
    pub rows: Vec<Vec<f64>>,
}

impl NumericTable {
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        NumericTable { rows }
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape() {
        let table = NumericTable::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(table.nrows(), 2);
        assert_eq!(table.rows[1][2], 6.0);
        assert_eq!(NumericTable::default().nrows(), 0);
    }

    #[test]
    fn test_serializes_as_nested_array() {
        let table = NumericTable::from_rows(vec![vec![1.0, 2.5]]);
        assert_eq!(serde_json::to_string(&table).unwrap(), "[[1.0,2.5]]");
    }
}
