//! 登录流程 - 业务能力层
//!
//! 状态转换：Unauthenticated → Authenticating → {Authenticated | Blocked}

use tracing::{error, info, warn};

use crate::error::{AppError, AppResult};
use crate::infrastructure::{Navigation, PageDriver};
use crate::models::Session;
use crate::services::session_store::SessionStore;

const LOGIN_FIELD: &str = "login";
const PASSWORD_FIELD: &str = "password";
const REMEMBER_ME: &str = r#"input[name="knowme"]"#;
const SUBMIT_BUTTON: &str = "#win_login .butred";
const IP_BLOCKED_PAGE: &str = "ip_blocked.asp";

/// 登录凭据
#[derive(Clone)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticating,
    Authenticated,
    Blocked,
}

/// 登录流程
///
/// 只尝试一次，失败即终止本次运行
pub struct AuthenticationFlow<'a, D: PageDriver + ?Sized> {
    driver: &'a D,
    store: &'a SessionStore,
    login_url: String,
    state: AuthState,
}

impl<'a, D: PageDriver + ?Sized> AuthenticationFlow<'a, D> {
    pub fn new(driver: &'a D, store: &'a SessionStore, login_url: impl Into<String>) -> Self {
        Self {
            driver,
            store,
            login_url: login_url.into(),
            state: AuthState::Unauthenticated,
        }
    }

    pub fn state(&self) -> AuthState {
        self.state
    }

    /// 提交凭据；成功时保存新会话并返回
    pub async fn authenticate(&mut self, credentials: &Credentials) -> AppResult<Session> {
        self.state = AuthState::Authenticating;
        info!("🔐 正在登录: {}", credentials.login);

        let navigation = match self.submit(credentials).await {
            Ok(navigation) => navigation,
            Err(e) => {
                self.state = AuthState::Unauthenticated;
                return Err(e);
            }
        };

        if is_blocked(&navigation) {
            self.state = AuthState::Blocked;
            error!(
                "❌ 登录被拒绝: 状态码 {:?}, 地址 {}",
                navigation.status, navigation.url
            );
            return Err(AppError::AccountBlocked);
        }

        let session = Session::new(self.driver.cookies().await?);
        if !session.is_authenticated() {
            warn!("⚠️ 登录后的 cookie 中没有身份标记，会话可能无效");
        }

        self.store.persist(&session).await?;
        self.state = AuthState::Authenticated;
        info!("✓ 登录成功");

        Ok(session)
    }

    async fn submit(&self, credentials: &Credentials) -> AppResult<Navigation> {
        self.driver.navigate(&self.login_url).await?;
        self.driver
            .fill_field(LOGIN_FIELD, &credentials.login)
            .await?;
        self.driver
            .fill_field(PASSWORD_FIELD, &credentials.password)
            .await?;
        self.driver.click(REMEMBER_ME).await?;
        self.driver.click_and_wait(SUBMIT_BUTTON).await
    }
}

fn is_blocked(navigation: &Navigation) -> bool {
    navigation.is_server_failure() || navigation.url.ends_with(IP_BLOCKED_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav(status: Option<u16>, url: &str) -> Navigation {
        Navigation {
            status,
            url: url.to_string(),
        }
    }

    #[test]
    fn test_block_detection() {
        assert!(is_blocked(&nav(Some(500), "https://elibrary.ru/defaultx.asp")));
        assert!(is_blocked(&nav(Some(503), "https://elibrary.ru/defaultx.asp")));
        assert!(is_blocked(&nav(Some(200), "https://elibrary.ru/ip_blocked.asp")));
        assert!(!is_blocked(&nav(Some(200), "https://elibrary.ru/defaultx.asp")));
        assert!(!is_blocked(&nav(None, "https://elibrary.ru/defaultx.asp")));
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let credentials = Credentials {
            login: "user".into(),
            password: "secret".into(),
        };
        let text = format!("{:?}", credentials);
        assert!(text.contains("user"));
        assert!(!text.contains("secret"));
    }
}
