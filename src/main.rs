// ==========================================
// MES 容器层级查询工具 - 终端入口
// ==========================================
// 单线程运行时：所有操作顺序执行，阻塞调用期间界面不响应
// ==========================================

use container_hierarchy::config::MesClientConfig;
use container_hierarchy::{i18n, logging};

#[cfg(feature = "shell")]
#[tokio::main(flavor = "current_thread")]
async fn main() {
    logging::init();

    let config = MesClientConfig::default();
    i18n::set_locale(&config.ui_locale);

    tracing::info!("{} v{}", container_hierarchy::APP_NAME, container_hierarchy::VERSION);

    if let Err(e) = container_hierarchy::app::shell::run(config).await {
        tracing::error!("程序退出: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "shell"))]
fn main() {
    logging::init();
    i18n::set_locale(&MesClientConfig::default().ui_locale);

    println!("==================================================");
    println!("{}", container_hierarchy::APP_NAME);
    println!("版本: {}", container_hierarchy::VERSION);
    println!("==================================================");
    println!();
    println!("此可执行文件需要启用 shell 特性");
    println!("使用: cargo run --features shell");
    println!();
    println!("或者使用库模式:");
    println!("use container_hierarchy::app::{{AppState, extract, export_last}};");
}
