//! # 批量执行器
//!
//! 并行执行批量处理任务，结果顺序与输入顺序一致。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代
//! - 进度条显示
//! - 每个条目独立返回 `Result`，由调用方决定失败策略
//!
//! ## 依赖关系
//! - 被 `aggregate/driver.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::error::{PolymapError, Result};
use crate::utils::progress;

use rayon::prelude::*;
use std::path::PathBuf;

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
    /// 是否显示进度条
    show_progress: bool,
}

impl BatchRunner {
    /// 创建新的批量执行器（0 = 自动检测 CPU 数）
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self {
            jobs,
            show_progress: false,
        }
    }

    /// 设置是否显示进度条
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// 并行处理条目列表，返回与输入同序的结果
    pub fn run<T, F>(&self, items: &[PathBuf], processor: F) -> Result<Vec<Result<T>>>
    where
        T: Send,
        F: Fn(&PathBuf) -> Result<T> + Sync + Send,
    {
        let pb = if self.show_progress {
            progress::create_progress_bar(items.len() as u64, "Aggregating")
        } else {
            progress::create_hidden_bar()
        };

        // 配置 rayon 线程池
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| PolymapError::Other(format!("Failed to build thread pool: {}", e)))?;

        let results: Vec<Result<T>> = pool.install(|| {
            items
                .par_iter()
                .map(|item| {
                    let result = processor(item);
                    pb.inc(1);
                    result
                })
                .collect()
        });

        pb.finish_and_clear();

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_keep_input_order() {
        let items: Vec<PathBuf> = (0..32).map(|i| PathBuf::from(format!("case{:02}", i))).collect();
        let runner = BatchRunner::new(4);
        let results = runner
            .run(&items, |p| {
                let name = p.display().to_string();
                if name.ends_with('7') {
                    Err(PolymapError::Other(name))
                } else {
                    Ok(name)
                }
            })
            .unwrap();

        assert_eq!(results.len(), 32);
        assert_eq!(results[0].as_ref().unwrap(), "case00");
        assert_eq!(results[31].as_ref().unwrap(), "case31");
        assert!(results[7].is_err());
        assert!(results[17].is_err());
    }

    #[test]
    fn test_single_job_runs_sequentially() {
        let items: Vec<PathBuf> = vec![PathBuf::from("a"), PathBuf::from("b")];
        let results = BatchRunner::new(1)
            .run(&items, |p| Ok(p.display().to_string()))
            .unwrap();
        let names: Vec<String> = results.into_iter().map(|r| r.unwrap()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
