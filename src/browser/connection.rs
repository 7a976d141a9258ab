use anyhow::{Context, Result};
use chromiumoxide::{Browser, Page};
use tracing::{debug, info};

use super::spawn_handler;

/// 连接到已运行的浏览器，并打开一个新页面
pub async fn connect_to_browser_and_page(port: u16) -> Result<(Browser, Page)> {
    let browser_url = format!("http://localhost:{}", port);
    info!("正在连接到浏览器: {}", browser_url);

    let (browser, handler) = Browser::connect(&browser_url)
        .await
        .with_context(|| format!("连接浏览器失败: {}", browser_url))?;
    spawn_handler(handler).await;
    debug!("浏览器连接成功");

    let page = browser
        .new_page("about:blank")
        .await
        .context("创建新页面失败")?;

    Ok((browser, page))
}
