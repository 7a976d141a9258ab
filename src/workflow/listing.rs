//! 作者列表页 - 流程层
//!
//! 把分页收集算法绑定到具体的列表页：URL 模板 + 提取约定 + 错误页检查

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use tracing::warn;

use crate::error::{AppError, AppResult};
use crate::infrastructure::{extract_as, Extraction, PageDriver};
use crate::workflow::paginated_collector::{PageOutcome, PageSource};

/// 服务端错误页
pub const ERROR_PAGE: &str = "page_error.asp";

/// 一种分页列表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub label: &'static str,
    pub endpoint: String,
    pub extraction: Extraction,
    /// 导航后落到该页面时视为服务端错误
    pub error_page: Option<&'static str>,
}

impl Listing {
    /// 作者的出版物列表
    pub fn items(base_url: &str) -> Self {
        Self {
            label: "作者的出版物",
            endpoint: format!("{}/author_items.asp", base_url.trim_end_matches('/')),
            extraction: Extraction::ItemList,
            error_page: None,
        }
    }

    /// 引用作者出版物的文献列表
    pub fn references(base_url: &str) -> Self {
        Self {
            label: "作者出版物的引用",
            endpoint: format!("{}/author_refs.asp", base_url.trim_end_matches('/')),
            extraction: Extraction::ReferenceList,
            error_page: Some(ERROR_PAGE),
        }
    }

    pub fn page_url(&self, author_id: &str, page_number: u32) -> String {
        format!(
            "{}?authorid={}&pagenum={}",
            self.endpoint, author_id, page_number
        )
    }
}

/// 通过页面驱动抓取某个作者的分页列表
pub struct DriverPageSource<'a, D: PageDriver + ?Sized, T> {
    driver: &'a D,
    listing: Listing,
    author_id: String,
    _record: PhantomData<fn() -> T>,
}

impl<'a, D: PageDriver + ?Sized, T> DriverPageSource<'a, D, T> {
    pub fn new(driver: &'a D, listing: Listing, author_id: impl Into<String>) -> Self {
        Self {
            driver,
            listing,
            author_id: author_id.into(),
            _record: PhantomData,
        }
    }
}

#[async_trait]
impl<'a, D, T> PageSource<T> for DriverPageSource<'a, D, T>
where
    D: PageDriver + ?Sized,
    T: DeserializeOwned + Send,
{
    fn label(&self) -> &str {
        self.listing.label
    }

    async fn fetch(&self, page_number: u32) -> AppResult<PageOutcome<T>> {
        let url = self.listing.page_url(&self.author_id, page_number);
        self.driver.navigate(&url).await?;

        if let Some(error_page) = self.listing.error_page {
            let current = self.driver.current_url().await?;
            if current.ends_with(error_page) {
                warn!("⚠️ {} 第 {} 页被重定向到错误页", self.listing.label, page_number);
                return Err(AppError::ServerError { url: current });
            }
        }

        let has_next_page = extract_as::<bool, _>(self.driver, Extraction::Pagination)
            .await?
            .unwrap_or(false);
        let records = extract_as::<Vec<T>, _>(self.driver, self.listing.extraction).await?;

        Ok(PageOutcome::new(records, has_next_page))
    }
}
