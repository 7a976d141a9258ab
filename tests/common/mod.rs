#![allow(dead_code)]

use async_trait::async_trait;
use elibrary_harvest::error::{AppError, AppResult};
use elibrary_harvest::{Config, Cookie, Extraction, Navigation, PageDriver};
use serde_json::{json, Value as JsonValue};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

pub const BASE_URL: &str = "https://elibrary.test";

/// 一个假页面：落地地址、分页控件状态和数据行
#[derive(Debug, Clone)]
pub struct FakePage {
    pub url: String,
    pub has_next_page: bool,
    pub rows: JsonValue,
}

impl FakePage {
    pub fn rows(url: impl Into<String>, rows: JsonValue, has_next_page: bool) -> Self {
        Self {
            url: url.into(),
            has_next_page,
            rows,
        }
    }

    /// 落到错误页
    pub fn redirect(to: impl Into<String>) -> Self {
        Self {
            url: to.into(),
            has_next_page: false,
            rows: JsonValue::Null,
        }
    }
}

#[derive(Default)]
struct State {
    pages: HashMap<String, FakePage>,
    current: Option<FakePage>,
    authors: JsonValue,
    login_response: Option<Navigation>,
    login_cookies: Vec<Cookie>,
    browser_cookies: Vec<Cookie>,
    visited: Vec<String>,
    filled: Vec<(String, String)>,
    clicked: Vec<String>,
}

/// 回放预设页面的页面驱动
#[derive(Default)]
pub struct FakeDriver {
    state: Mutex<State>,
}

impl FakeDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, url: impl Into<String>, page: FakePage) -> Self {
        self.state.lock().unwrap().pages.insert(url.into(), page);
        self
    }

    pub fn with_authors(self, authors: JsonValue) -> Self {
        self.state.lock().unwrap().authors = authors;
        self
    }

    pub fn with_login(self, response: Navigation, cookies: Vec<Cookie>) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.login_response = Some(response);
            state.login_cookies = cookies;
        }
        self
    }

    pub fn visited(&self) -> Vec<String> {
        self.state.lock().unwrap().visited.clone()
    }

    pub fn filled(&self) -> Vec<(String, String)> {
        self.state.lock().unwrap().filled.clone()
    }

    pub fn clicked(&self) -> Vec<String> {
        self.state.lock().unwrap().clicked.clone()
    }

    pub fn browser_cookies(&self) -> Vec<Cookie> {
        self.state.lock().unwrap().browser_cookies.clone()
    }
}

#[async_trait]
impl PageDriver for FakeDriver {
    async fn navigate(&self, url: &str) -> AppResult<Navigation> {
        let mut state = self.state.lock().unwrap();
        state.visited.push(url.to_string());
        let page = state
            .pages
            .get(url)
            .cloned()
            .unwrap_or_else(|| FakePage::rows(url, JsonValue::Null, false));
        let landed = page.url.clone();
        state.current = Some(page);
        Ok(Navigation {
            status: Some(200),
            url: landed,
        })
    }

    async fn current_url(&self) -> AppResult<String> {
        let state = self.state.lock().unwrap();
        Ok(state
            .current
            .as_ref()
            .map(|p| p.url.clone())
            .unwrap_or_default())
    }

    async fn fill_field(&self, field_id: &str, text: &str) -> AppResult<()> {
        self.state
            .lock()
            .unwrap()
            .filled
            .push((field_id.to_string(), text.to_string()));
        Ok(())
    }

    async fn click(&self, selector: &str) -> AppResult<()> {
        self.state.lock().unwrap().clicked.push(selector.to_string());
        Ok(())
    }

    async fn click_and_wait(&self, selector: &str) -> AppResult<Navigation> {
        let mut state = self.state.lock().unwrap();
        state.clicked.push(selector.to_string());

        match selector {
            "#show_param .butred" => {
                let url = format!("{}/authors.asp", BASE_URL);
                let rows = state.authors.clone();
                state.current = Some(FakePage::rows(url.clone(), rows, false));
                Ok(Navigation {
                    status: Some(200),
                    url,
                })
            }
            "#win_login .butred" => {
                let response = state
                    .login_response
                    .clone()
                    .ok_or_else(|| AppError::Browser("login not scripted".into()))?;
                if response.status != Some(500) {
                    state.browser_cookies = state.login_cookies.clone();
                }
                state.current = Some(FakePage::redirect(response.url.clone()));
                Ok(response)
            }
            other => Err(AppError::Browser(format!("unexpected click: {}", other))),
        }
    }

    async fn extract(&self, extraction: Extraction) -> AppResult<JsonValue> {
        let state = self.state.lock().unwrap();
        let Some(page) = state.current.as_ref() else {
            return Ok(JsonValue::Null);
        };
        Ok(match extraction {
            Extraction::Pagination => JsonValue::Bool(page.has_next_page),
            _ => page.rows.clone(),
        })
    }

    async fn cookies(&self) -> AppResult<Vec<Cookie>> {
        Ok(self.state.lock().unwrap().browser_cookies.clone())
    }

    async fn set_cookies(&self, cookies: &[Cookie]) -> AppResult<()> {
        self.state.lock().unwrap().browser_cookies = cookies.to_vec();
        Ok(())
    }
}

pub fn test_config(cookies_path: &Path) -> Config {
    Config {
        base_url: BASE_URL.to_string(),
        cookies_path: cookies_path.display().to_string(),
        max_retries: 0,
        retry_delay_ms: 0,
        ..Config::default()
    }
}

pub fn items_url(author_id: &str, page: u32) -> String {
    format!("{}/author_items.asp?authorid={}&pagenum={}", BASE_URL, author_id, page)
}

pub fn refs_url(author_id: &str, page: u32) -> String {
    format!("{}/author_refs.asp?authorid={}&pagenum={}", BASE_URL, author_id, page)
}

pub fn item_rows(ids: std::ops::Range<u32>) -> JsonValue {
    JsonValue::Array(
        ids.map(|i| {
            json!({
                "id": format!("arw{}", i),
                "title": format!("Статья {}", i),
                "authors": ["Иванов И.И.", "Петров П.П."],
                "description": format!("Журнал, 2019, № {}", i),
            })
        })
        .collect(),
    )
}

pub fn ref_row(count: u32, anchored: bool) -> JsonValue {
    json!({
        "id": format!("arw{}", 1000 + count),
        "countNumber": format!("{}.", count),
        "source": format!("Цитируемая статья {}", count),
        "citeItem": format!("Ссылающаяся статья {}", count),
        "hasCitationAnchor": anchored,
    })
}

pub fn authenticated_cookies() -> Vec<Cookie> {
    vec![
        Cookie::new("ASPSESSIONID", "abc", ".elibrary.test"),
        Cookie::new("SUserID", "42", ".elibrary.test"),
    ]
}
