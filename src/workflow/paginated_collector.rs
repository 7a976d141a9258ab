//! 分页收集 - 流程层
//!
//! 从第 1 页开始逐页抓取，直到没有下一页或某页没有数据行

use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::AppResult;

/// 单页抓取结果
#[derive(Debug, Clone, PartialEq)]
pub struct PageOutcome<T> {
    /// None 表示本页没有数据行
    pub records: Option<Vec<T>>,
    /// 分页控件显示还有下一页
    pub has_next_page: bool,
}

impl<T> PageOutcome<T> {
    pub fn new(records: Option<Vec<T>>, has_next_page: bool) -> Self {
        Self {
            records,
            has_next_page,
        }
    }

    pub fn empty() -> Self {
        Self::new(None, false)
    }
}

/// 分页数据来源
#[async_trait]
pub trait PageSource<T: Send>: Send + Sync {
    /// 用于进度日志的名称
    fn label(&self) -> &str;

    async fn fetch(&self, page_number: u32) -> AppResult<PageOutcome<T>>;
}

/// 重试策略，只对可重试的错误生效
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: usize,
    /// 第 n 次重试前等待 delay * n
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            delay: Duration::ZERO,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            max_retries: config.max_retries,
            delay: config.retry_delay(),
        }
    }

    /// 第 attempt 次重试前的等待时间，溢出时取最大值
    pub fn backoff(&self, attempt: usize) -> Duration {
        let attempt = u32::try_from(attempt).unwrap_or(u32::MAX);
        self.delay.saturating_mul(attempt)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::none()
    }
}

/// 分页收集器
#[derive(Debug, Clone, Default)]
pub struct PaginatedCollector {
    retry: RetryPolicy,
}

impl PaginatedCollector {
    pub fn new(retry: RetryPolicy) -> Self {
        Self { retry }
    }

    /// 逐页收集所有记录，保持“页序 + 页内顺序”
    ///
    /// 某页没有数据行时立即结束，即使分页控件显示还有下一页
    pub async fn collect<T, S>(&self, source: &S) -> AppResult<Vec<T>>
    where
        T: Send,
        S: PageSource<T> + ?Sized,
    {
        let mut records = Vec::new();
        let mut page_number = 1;

        loop {
            info!("正在加载{} (第 {} 页)...", source.label(), page_number);
            let outcome = self.fetch_with_retry(source, page_number).await?;

            let Some(page_records) = outcome.records else {
                debug!("{} 第 {} 页没有数据，结束", source.label(), page_number);
                break;
            };

            debug!(
                "{} 第 {} 页: {} 条记录, 下一页: {}",
                source.label(),
                page_number,
                page_records.len(),
                outcome.has_next_page
            );
            records.extend(page_records);

            if !outcome.has_next_page {
                break;
            }
            page_number += 1;
        }

        info!("✓ {} 收集完成: 共 {} 条", source.label(), records.len());
        Ok(records)
    }

    async fn fetch_with_retry<T, S>(&self, source: &S, page_number: u32) -> AppResult<PageOutcome<T>>
    where
        T: Send,
        S: PageSource<T> + ?Sized,
    {
        let mut attempt = 0;
        loop {
            match source.fetch(page_number).await {
                Ok(outcome) => return Ok(outcome),
                Err(e) if e.is_transient() && attempt < self.retry.max_retries => {
                    attempt += 1;
                    warn!(
                        "⚠️ {} 第 {} 页失败: {} (重试 {}/{})",
                        source.label(),
                        page_number,
                        e,
                        attempt,
                        self.retry.max_retries
                    );
                    sleep(self.retry.backoff(attempt)).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
