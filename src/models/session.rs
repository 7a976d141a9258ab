use serde::{Deserialize, Serialize};

/// 标识已登录会话的 cookie 名称
pub const IDENTITY_MARKERS: [&str; 2] = ["SCookieID", "SUserID"];

/// 单条 cookie，字段与浏览器导出的 cookie 对象一致
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cookie {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default = "default_path")]
    pub path: String,
    /// 过期时间（秒）；会话 cookie 为 None
    #[serde(
        default,
        deserialize_with = "deserialize_expiry",
        skip_serializing_if = "Option::is_none"
    )]
    pub expires: Option<f64>,
    #[serde(default)]
    pub http_only: bool,
    #[serde(default)]
    pub secure: bool,
}

/// 浏览器用 -1 等非正数表示会话 cookie
pub(crate) fn session_expiry(expires: f64) -> Option<f64> {
    (expires > 0.0).then_some(expires)
}

fn deserialize_expiry<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let expires = <Option<f64> as Deserialize>::deserialize(deserializer)?;
    Ok(expires.and_then(session_expiry))
}

fn default_path() -> String {
    "/".to_string()
}

impl Cookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            domain: domain.into(),
            path: default_path(),
            expires: None,
            http_only: false,
            secure: false,
        }
    }
}

/// 会话：一组 cookie，只会整体替换，不会原地修改
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Session {
    cookies: Vec<Cookie>,
}

impl Session {
    pub fn new(cookies: Vec<Cookie>) -> Self {
        Self { cookies }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn cookies(&self) -> &[Cookie] {
        &self.cookies
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    /// 包含任一身份标记 cookie 即视为已登录
    pub fn is_authenticated(&self) -> bool {
        self.cookies
            .iter()
            .any(|c| IDENTITY_MARKERS.contains(&c.name.as_str()))
    }
}
