//! Web 服务器主程序入口

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lyview::env::{core::LogLevel, EnvVar};
use lyview::translation::{ConfigManager, TranslationResolver};
use lyview::web::{WebConfig, WebServer};

#[derive(Parser)]
#[command(name = "lyview-web")]
#[command(version)]
#[command(about = "Legislative Yuan open data in English")]
struct Args {
    /// 绑定地址（覆盖 LYVIEW_BIND_ADDRESS）
    #[arg(short, long, value_name = "ADDRESS")]
    bind: Option<String>,

    /// 端口（覆盖 PORT）
    #[arg(short, long)]
    port: Option<u16>,

    /// 翻译配置文件（TOML 或 JSON）
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// 打印环境变量说明后退出
    #[arg(long)]
    env_docs: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(LogLevel::get().unwrap_or_else(|_| "info".to_string())))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.env_docs {
        print!("{}", lyview::env::generate_env_docs());
        return Ok(());
    }

    // 先加载配置（含 .env），日志级别可能来自 .env
    let manager = ConfigManager::load(args.config.as_deref())?;
    init_tracing();

    let translation_config = manager.into_config();
    let resolver = TranslationResolver::from_config(&translation_config)?;
    tracing::info!(
        "翻译解析器就绪: 外部翻译 {}，缓存容量 {}",
        if resolver.has_external() { "已启用" } else { "未启用" },
        translation_config.cache_capacity
    );

    let mut web_config = WebConfig::from_env()?;
    if let Some(bind) = args.bind {
        web_config.bind_addr = bind;
    }
    if let Some(port) = args.port {
        web_config.port = port;
    }

    WebServer::new(web_config, resolver).start().await?;

    Ok(())
}
