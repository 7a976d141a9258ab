use anyhow::{Context, Result};
use chromiumoxide::{Browser, BrowserConfig, Page};
use tracing::{debug, info};

use super::spawn_handler;
use crate::config::Config;

/// 按配置启动浏览器
///
/// 默认有界面启动；设置了代理时通过 `--proxy-server` 传入
pub async fn launch_browser(config: &Config) -> Result<(Browser, Page)> {
    info!(
        "🚀 启动浏览器 ({})...",
        if config.headless { "无头模式" } else { "有界面" }
    );

    let mut builder = BrowserConfig::builder();
    builder = if config.headless {
        builder.new_headless_mode()
    } else {
        builder.with_head()
    };
    if let Some(executable) = &config.chrome_executable {
        builder = builder.chrome_executable(executable);
    }
    if let Some(proxy) = &config.proxy_server {
        debug!("使用代理: {}", proxy);
        builder = builder.arg(format!("--proxy-server={}", proxy));
    }

    let browser_config = builder
        .args(vec!["--disable-gpu", "--disable-dev-shm-usage"])
        .build()
        .map_err(|e| anyhow::anyhow!("配置浏览器失败: {}", e))?;

    let (browser, handler) = Browser::launch(browser_config)
        .await
        .context("启动浏览器失败")?;
    spawn_handler(handler).await;
    debug!("浏览器启动成功");

    let page = browser
        .new_page("about:blank")
        .await
        .context("创建页面失败")?;

    Ok((browser, page))
}
