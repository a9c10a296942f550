//! 派生宏集成测试

use di_impl::Services;
use injectable_macros::Injectable;
use registry_common::{DependencyError, Injectable as _};
use std::sync::Arc;

/// 测试日志服务
#[derive(Debug, PartialEq)]
pub struct ConsoleLogger {
    prefix: &'static str,
}

/// 测试缓存服务
#[derive(Debug)]
pub struct MemoryCache {
    capacity: usize,
}

/// 带必需和可选依赖的服务
#[derive(Debug, Injectable)]
pub struct ReportService {
    #[inject("log")]
    log: Arc<ConsoleLogger>,
    #[inject(name = "cache")]
    cache: Option<Arc<MemoryCache>>,
    retries: u32,
    history: Vec<String>,
}

/// 无依赖的服务
#[derive(Debug, Default, Injectable)]
pub struct Clock {
    ticks: u64,
}

#[test]
fn test_wants_follow_field_order() {
    assert_eq!(ReportService::wants(), &["log", "cache"]);
    assert!(Clock::wants().is_empty());
}

#[test]
fn test_create_with_all_dependencies() {
    let services = Services::new();
    services
        .register("log", ConsoleLogger { prefix: "app" })
        .unwrap()
        .register("cache", MemoryCache { capacity: 16 })
        .unwrap();

    let report = services.create::<ReportService>().unwrap();
    assert_eq!(*report.log, ConsoleLogger { prefix: "app" });
    assert_eq!(report.cache.unwrap().capacity, 16);
    assert_eq!(report.retries, 0);
    assert!(report.history.is_empty());
}

#[test]
fn test_optional_dependency_may_be_absent() {
    let services = Services::new();
    services.register("log", ConsoleLogger { prefix: "app" }).unwrap();

    let report = services.create::<ReportService>().unwrap();
    assert!(report.cache.is_none());
}

#[test]
fn test_required_dependency_absent() {
    let services = Services::new();
    services.register("cache", MemoryCache { capacity: 1 }).unwrap();

    let error = services.create::<ReportService>().unwrap_err();
    match error {
        DependencyError::ConstructionFailed { type_name, .. } => {
            assert!(type_name.ends_with("ReportService"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_child_scope_overrides_injected_service() {
    let root = Arc::new(Services::new());
    root.register("log", ConsoleLogger { prefix: "root" }).unwrap();
    let child = root.child();
    child.register("log", ConsoleLogger { prefix: "child" }).unwrap();

    assert_eq!(child.create::<ReportService>().unwrap().log.prefix, "child");
    assert_eq!(root.create::<ReportService>().unwrap().log.prefix, "root");
}

#[test]
fn test_create_without_dependencies() {
    let clock = Services::new().create::<Clock>().unwrap();

    assert_eq!(clock.ticks, 0);
}
