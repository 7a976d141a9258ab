mod connection;
mod launch;

pub use connection::connect_to_browser_and_page;
pub use launch::launch_browser;

use chromiumoxide::Handler;
use futures::StreamExt;
use std::time::Duration;
use tokio::time::sleep;

/// 在后台处理浏览器事件，并稍等浏览器状态同步
async fn spawn_handler(mut handler: Handler) {
    tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    sleep(Duration::from_millis(300)).await;
}
