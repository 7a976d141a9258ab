//! Chrome 页面驱动 - 基础设施层
//!
//! 持有唯一的 page 资源，通过 CDP 实现 `PageDriver`

use async_trait::async_trait;
use chromiumoxide::cdp::browser_protocol::network::{CookieParam, TimeSinceEpoch};
use chromiumoxide::Page;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::infrastructure::extraction::Extraction;
use crate::infrastructure::page_driver::{Navigation, PageDriver};
use crate::models::session::session_expiry;
use crate::models::Cookie;

/// Chrome 页面驱动
///
/// 职责：
/// - 持有唯一的 Page 资源
/// - 不认识 Author / Item / Reference
/// - 不处理业务流程
pub struct ChromeDriver {
    page: Page,
}

impl ChromeDriver {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// 执行 JS 代码并返回 JSON 结果，脚本返回 null/undefined 时得到 JSON null
    async fn eval(&self, js_code: impl Into<String>) -> AppResult<JsonValue> {
        let result = self.page.evaluate(js_code.into()).await?;
        Ok(result.value().cloned().unwrap_or(JsonValue::Null))
    }
}

#[async_trait]
impl PageDriver for ChromeDriver {
    async fn navigate(&self, url: &str) -> AppResult<Navigation> {
        debug!("导航到: {}", url);
        self.page.goto(url).await?;
        Ok(Navigation {
            status: None,
            url: self.current_url().await?,
        })
    }

    async fn current_url(&self) -> AppResult<String> {
        Ok(self.page.url().await?.unwrap_or_default())
    }

    async fn fill_field(&self, field_id: &str, text: &str) -> AppResult<()> {
        let js_code = format!(
            r#"
            (() => {{
                const el = document.getElementById({});
                if (!el) {{
                    return false;
                }}
                el.value = {};
                el.dispatchEvent(new Event('input', {{ bubbles: true }}));
                return true;
            }})()
            "#,
            serde_json::to_string(field_id)?,
            serde_json::to_string(text)?,
        );

        match self.eval(js_code).await? {
            JsonValue::Bool(true) => Ok(()),
            _ => Err(AppError::Browser(format!("找不到输入框 #{}", field_id))),
        }
    }

    async fn click(&self, selector: &str) -> AppResult<()> {
        self.page.find_element(selector).await?.click().await?;
        Ok(())
    }

    async fn click_and_wait(&self, selector: &str) -> AppResult<Navigation> {
        self.page.find_element(selector).await?.click().await?;
        let request = self.page.wait_for_navigation_response().await?;

        let status = request
            .as_ref()
            .and_then(|r| r.response.as_ref())
            .and_then(|r| u16::try_from(r.status).ok());
        let url = self.current_url().await?;
        debug!("点击 {} 后导航完成: {} (状态码: {:?})", selector, url, status);

        Ok(Navigation { status, url })
    }

    async fn extract(&self, extraction: Extraction) -> AppResult<JsonValue> {
        debug!("执行提取约定: {}", extraction.name());
        self.eval(extraction.script()).await
    }

    async fn cookies(&self) -> AppResult<Vec<Cookie>> {
        let cookies = self.page.get_cookies().await?;
        Ok(cookies
            .into_iter()
            .map(|c| Cookie {
                name: c.name,
                value: c.value,
                domain: c.domain,
                path: c.path,
                expires: session_expiry(c.expires),
                http_only: c.http_only,
                secure: c.secure,
            })
            .collect())
    }

    async fn set_cookies(&self, cookies: &[Cookie]) -> AppResult<()> {
        if cookies.is_empty() {
            return Ok(());
        }

        let params = cookies
            .iter()
            .map(to_cookie_param)
            .collect::<Result<Vec<_>, _>>()
            .map_err(AppError::Browser)?;

        self.page.set_cookies(params).await?;
        Ok(())
    }
}

fn to_cookie_param(cookie: &Cookie) -> Result<CookieParam, String> {
    let mut builder = CookieParam::builder()
        .name(cookie.name.clone())
        .value(cookie.value.clone())
        .path(cookie.path.clone())
        .http_only(cookie.http_only)
        .secure(cookie.secure);

    if !cookie.domain.is_empty() {
        builder = builder.domain(cookie.domain.clone());
    }
    if let Some(expires) = cookie.expires.and_then(session_expiry) {
        builder = builder.expires(TimeSinceEpoch::new(expires));
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_param_omits_empty_domain_and_session_expiry() {
        let cookie = Cookie {
            domain: String::new(),
            ..Cookie::new("SUserID", "42", "")
        };

        let param = to_cookie_param(&cookie).unwrap();

        assert!(param.domain.is_none());
        assert!(param.expires.is_none());
    }

    #[test]
    fn test_cookie_param_keeps_cookie_values() {
        let cookie = Cookie {
            path: "/defaultx.asp".to_string(),
            expires: Some(1893456000.5),
            http_only: true,
            secure: true,
            ..Cookie::new("SCookieID", "abc", ".elibrary.ru")
        };

        let param = to_cookie_param(&cookie).unwrap();

        assert_eq!(param.name, "SCookieID");
        assert_eq!(param.value, "abc");
        assert_eq!(param.domain.as_deref(), Some(".elibrary.ru"));
        assert_eq!(param.path.as_deref(), Some("/defaultx.asp"));
        assert_eq!(param.http_only, Some(true));
        assert_eq!(param.secure, Some(true));
        assert_eq!(param.expires.map(|e| *e.inner()), Some(1893456000.5));
    }

    #[test]
    fn test_cookie_param_drops_negative_expiry() {
        let cookie = Cookie {
            expires: Some(-1.0),
            ..Cookie::new("SUserID", "42", ".elibrary.ru")
        };

        assert!(to_cookie_param(&cookie).unwrap().expires.is_none());
    }
}
