use elibrary_harvest::orchestrator::{failure_message, print_outcome};
use elibrary_harvest::utils::logging;
use elibrary_harvest::{App, Config};
use tracing::error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    let app = App::initialize(config).await?;
    let result = app.run().await;
    // 退出前关闭浏览器
    drop(app);

    match result {
        Ok(outcome) => {
            print_outcome(&outcome);
            Ok(())
        }
        Err(e) => {
            error!("❌ {}", e);
            println!("{}", failure_message(&e));
            std::process::exit(1);
        }
    }
}
