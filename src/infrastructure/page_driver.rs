//! 页面驱动能力 - 基础设施层
//!
//! 抓取流程只通过这个 trait 与浏览器交互，不直接接触页面结构

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::error::{AppError, AppResult};
use crate::infrastructure::extraction::Extraction;
use crate::models::Cookie;

/// 导航结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// 主文档的 HTTP 状态码（取不到时为 None）
    pub status: Option<u16>,
    /// 导航结束后的地址
    pub url: String,
}

impl Navigation {
    pub fn is_server_failure(&self) -> bool {
        matches!(self.status, Some(code) if (500..600).contains(&code))
    }
}

/// 页面驱动
///
/// 职责：
/// - 导航、填写表单、点击控件
/// - 按具名提取约定从当前页取数据
/// - 读写 cookie
#[async_trait]
pub trait PageDriver: Send + Sync {
    async fn navigate(&self, url: &str) -> AppResult<Navigation>;

    async fn current_url(&self) -> AppResult<String>;

    /// 设置指定 ID 的输入框的值
    async fn fill_field(&self, field_id: &str, text: &str) -> AppResult<()>;

    /// 点击控件，不等待导航
    async fn click(&self, selector: &str) -> AppResult<()>;

    /// 点击控件并等待由此触发的导航完成
    async fn click_and_wait(&self, selector: &str) -> AppResult<Navigation>;

    /// 执行提取约定，页面上没有对应数据时返回 JSON null
    async fn extract(&self, extraction: Extraction) -> AppResult<JsonValue>;

    async fn cookies(&self) -> AppResult<Vec<Cookie>>;

    async fn set_cookies(&self, cookies: &[Cookie]) -> AppResult<()>;
}

/// 执行提取约定并反序列化；null 视为“页面上没有数据”
pub async fn extract_as<T, D>(driver: &D, extraction: Extraction) -> AppResult<Option<T>>
where
    T: DeserializeOwned,
    D: PageDriver + ?Sized,
{
    let value = driver.extract(extraction).await?;
    if value.is_null() {
        return Ok(None);
    }
    serde_json::from_value(value)
        .map(Some)
        .map_err(|e| AppError::extraction(extraction.name(), e.to_string()))
}
