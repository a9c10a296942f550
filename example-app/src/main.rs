//! # 示例应用程序
//!
//! 演示分层服务注册表：根注册表提供全局服务，请求作用域遮蔽其中的日志服务，
//! 并通过构造函数注入创建业务服务。

use anyhow::Context;
use clap::Parser;
use di_impl::Services;
use injectable_macros::Injectable;
use registry_common::{ConfigSection, RegistryOptions};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "example-app")]
#[command(about = "分层服务注册表示例应用")]
struct Args {
    /// 根注册表选项文件 (JSON)
    #[arg(short, long)]
    config: Option<String>,

    /// 日志级别
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// 日志服务
#[derive(Debug)]
struct Logger {
    target: &'static str,
}

impl Logger {
    fn log(&self, message: &str) {
        info!("[{}] {}", self.target, message);
    }
}

/// 报表服务，依赖日志和可选的缓存
#[derive(Debug, Injectable)]
struct ReportService {
    #[inject("log")]
    log: Arc<Logger>,
    #[inject("cache")]
    cache: Option<Arc<String>>,
    generated: u32,
}

impl ReportService {
    fn generate(&mut self) {
        self.generated += 1;
        match &self.cache {
            Some(cache) => self.log.log(&format!("生成报表 #{} (缓存: {})", self.generated, cache)),
            None => self.log.log(&format!("生成报表 #{} (无缓存)", self.generated)),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日志
    tracing_subscriber::fmt()
        .with_max_level(parse_log_level(&args.log_level))
        .init();

    info!("启动服务注册表示例应用");

    let options = load_options(args.config.as_deref())?;
    let root = Arc::new(Services::with_options(None, options));
    root.register("log", Logger { target: "console" })?
        .register("cache", "memory".to_string())?;

    // 全局作用域下构造
    let mut report = root.create::<ReportService>()?;
    report.generate();

    // 请求作用域遮蔽日志服务
    let request = root.named_child("request");
    request.register("log", Logger { target: "file" })?;

    let mut scoped = request.create::<ReportService>()?;
    scoped.generate();
    report.generate();

    if let Err(error) = root.register("log", Logger { target: "stderr" }) {
        warn!("重复注册被拒绝: {}", error);
    }

    info!(
        "作用域 {} 共 {} 个服务, 作用域 {} 共 {} 个服务",
        root.name(),
        root.len(),
        request.name(),
        request.len()
    );
    Ok(())
}

/// 加载根注册表选项
fn load_options(path: Option<&str>) -> anyhow::Result<RegistryOptions> {
    let Some(path) = path else {
        return Ok(RegistryOptions::default());
    };

    if !Path::new(path).exists() {
        info!("配置文件不存在，将使用默认配置: {}", path);
        return Ok(RegistryOptions::default());
    }

    let content =
        std::fs::read_to_string(path).with_context(|| format!("读取配置文件失败: {path}"))?;
    let section = ConfigSection::from_json_str(&content)?;
    Ok(RegistryOptions::from_section(&section)?)
}

fn parse_log_level(level: &str) -> tracing::Level {
    match level.to_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    }
}
