use crate::error::{AppError, AppResult};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// 默认的机构过滤条件
pub const DEFAULT_ORGANIZATION_NAME: &str =
    "Санкт-Петербургский государственный университет телекоммуникаций им. проф. М.А. Бонч-Бруевича";

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 服务地址
    pub base_url: String,
    /// 会话 cookie 文件
    pub cookies_path: String,
    /// 作者查询使用的机构名称
    pub organization_name: String,
    /// 作者查询使用的机构 ID
    pub organization_id: String,
    /// 浏览器调试端口，设置后连接已运行的浏览器
    pub browser_debug_port: Option<u16>,
    /// 是否使用无头模式启动浏览器
    pub headless: bool,
    /// 浏览器可执行文件路径
    pub chrome_executable: Option<String>,
    /// 代理地址，例如 socks5://localhost:9050
    pub proxy_server: Option<String>,
    // --- 重试配置 ---
    pub max_retries: usize,
    pub retry_delay_ms: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://elibrary.ru".to_string(),
            cookies_path: "cookies.json".to_string(),
            organization_name: DEFAULT_ORGANIZATION_NAME.to_string(),
            organization_id: "1193".to_string(),
            browser_debug_port: None,
            headless: false,
            chrome_executable: None,
            proxy_server: None,
            max_retries: 2,
            retry_delay_ms: 1000,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 加载配置：默认值 → TOML 文件（可选）→ 环境变量
    pub fn load() -> AppResult<Self> {
        let path = std::env::var("HARVEST_CONFIG").unwrap_or_else(|_| "harvest.toml".to_string());
        let config = Self::from_file(Path::new(&path))?.unwrap_or_default();
        Ok(config.apply_env())
    }

    /// 从 TOML 文件读取配置，文件不存在时返回 None
    pub fn from_file(path: &Path) -> AppResult<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(Some(config))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// 用环境变量覆盖配置
    pub fn apply_env(self) -> Self {
        Self {
            base_url: std::env::var("ELIBRARY_BASE_URL").unwrap_or(self.base_url),
            cookies_path: std::env::var("COOKIES_PATH").unwrap_or(self.cookies_path),
            organization_name: std::env::var("ORGANIZATION_NAME").unwrap_or(self.organization_name),
            organization_id: std::env::var("ORGANIZATION_ID").unwrap_or(self.organization_id),
            browser_debug_port: std::env::var("BROWSER_DEBUG_PORT").ok().and_then(|v| v.parse().ok()).or(self.browser_debug_port),
            headless: std::env::var("HEADLESS").ok().and_then(|v| v.parse().ok()).unwrap_or(self.headless),
            chrome_executable: std::env::var("CHROME_EXECUTABLE").ok().or(self.chrome_executable),
            proxy_server: std::env::var("PROXY_SERVER").ok().or(self.proxy_server),
            max_retries: std::env::var("MAX_RETRIES").ok().and_then(|v| v.parse().ok()).unwrap_or(self.max_retries),
            retry_delay_ms: std::env::var("RETRY_DELAY_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(self.retry_delay_ms),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(self.verbose_logging),
        }
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}
