//! 服务注册表集成测试

use di_abstractions::{ServiceRegistry, ServiceRegistryExt};
use di_impl::Services;
use registry_common::{
    BoxError, Dependencies, DependencyError, Injectable, InjectionError, RegistryOptions,
    ServiceRef,
};
use std::error::Error as _;
use std::sync::Arc;

/// 测试日志服务
#[derive(Debug, PartialEq)]
struct Logger {
    target: String,
}

impl Logger {
    fn new(target: &str) -> Self {
        Self {
            target: target.to_string(),
        }
    }
}

/// 需要日志和数据库的服务，位置参数原样保存
#[derive(Debug)]
struct Repository {
    log: Option<Arc<Logger>>,
    db: Option<Arc<String>>,
    received: usize,
}

impl Injectable for Repository {
    fn wants() -> &'static [&'static str] {
        &["log", "db"]
    }

    fn construct(deps: Dependencies) -> Result<Self, BoxError> {
        Ok(Self {
            log: deps.optional(0)?,
            db: deps.optional(1)?,
            received: deps.len(),
        })
    }
}

/// 自行校验依赖的服务
#[derive(Debug)]
struct Mailer {
    log: Arc<Logger>,
}

impl Injectable for Mailer {
    fn wants() -> &'static [&'static str] {
        &["log"]
    }

    fn construct(deps: Dependencies) -> Result<Self, BoxError> {
        Ok(Self {
            log: deps.required(0)?,
        })
    }
}

#[test]
fn test_scoped_override_scenario() {
    let root = Arc::new(Services::new());
    root.register("log", Logger::new("console")).unwrap();

    let child = Services::with_parent(Arc::clone(&root));
    child.register("log", Logger::new("file")).unwrap();

    assert_eq!(*child.get_as::<Logger>("log").unwrap(), Logger::new("file"));
    assert_eq!(*root.get_as::<Logger>("log").unwrap(), Logger::new("console"));
}

#[test]
fn test_missing_on_empty_registry() {
    let services = Services::new();

    assert!(services.get("missing").is_none());
}

#[test]
fn test_fallback_to_parent_and_absent_in_both() {
    let root = Arc::new(Services::new());
    root.register("db", "postgres".to_string()).unwrap();
    let child = root.child();

    assert_eq!(child.get_as::<String>("db").unwrap().as_str(), "postgres");
    assert!(child.get("cache").is_none());
    assert!(Arc::ptr_eq(
        &child.get("db").unwrap(),
        &root.get("db").unwrap()
    ));
}

#[test]
fn test_duplicate_in_same_registry_only() {
    let root = Arc::new(Services::new());
    root.register("log", Logger::new("console")).unwrap();

    let error = root.register("log", Logger::new("other")).unwrap_err();
    assert!(error.is_duplicate());
    assert_eq!(*root.get_as::<Logger>("log").unwrap(), Logger::new("console"));

    // 子注册表可以注册同名服务
    let child = root.child();
    assert!(child.register("log", Logger::new("file")).is_ok());
}

#[test]
fn test_create_with_partially_resolved_dependencies() {
    let services = Services::new();
    services.register("log", Logger::new("console")).unwrap();

    let repository = services.create::<Repository>().unwrap();
    assert_eq!(repository.received, 2);
    assert_eq!(repository.log.as_deref(), Some(&Logger::new("console")));
    assert!(repository.db.is_none());
}

#[test]
fn test_create_uses_shadowed_services() {
    let root = Arc::new(Services::new());
    root.register("log", Logger::new("console"))
        .unwrap()
        .register("db", "sqlite".to_string())
        .unwrap();
    let request = root.named_child("request");
    request.register("log", Logger::new("request")).unwrap();

    let scoped = request.create::<Repository>().unwrap();
    let global = root.create::<Repository>().unwrap();

    assert_eq!(scoped.log.unwrap().target, "request");
    assert_eq!(global.log.unwrap().target, "console");
    assert_eq!(scoped.db.unwrap().as_str(), "sqlite");
}

#[test]
fn test_missing_required_dependency_is_construction_error() {
    let services = Services::new();

    let error = services.create::<Mailer>().unwrap_err();
    assert!(matches!(error, DependencyError::ConstructionFailed { .. }));

    let cause = error
        .source()
        .and_then(|source| source.downcast_ref::<InjectionError>())
        .unwrap();
    assert_eq!(
        cause,
        &InjectionError::Missing {
            key: "log".to_string(),
            position: 0
        }
    );
}

#[test]
fn test_wrong_service_type_is_construction_error() {
    let services = Services::new();
    services.register("log", 42_u32).unwrap();

    let error = services.create::<Mailer>().unwrap_err();
    let cause = error
        .source()
        .and_then(|source| source.downcast_ref::<InjectionError>())
        .unwrap();
    assert!(matches!(cause, InjectionError::TypeMismatch { position: 0, .. }));

}

#[test]
fn test_child_scope_fixes_wrong_service_type() {
    let root = Arc::new(Services::new());
    root.register("log", 42_u32).unwrap();
    let child = root.child();
    child.register("log", Logger::new("mail")).unwrap();

    assert!(root.create::<Mailer>().is_err());
    assert_eq!(child.create::<Mailer>().unwrap().log.target, "mail");
}

#[test]
fn test_registry_through_trait_object() {
    let root = Arc::new(Services::with_options(None, RegistryOptions::named("app")));
    let shared: ServiceRef = Arc::new(Logger::new("console"));
    root.register_shared("log", Arc::clone(&shared)).unwrap();
    let child = root.child();

    let registry: &dyn ServiceRegistry = &child;
    assert_eq!(registry.scope(), "app.child");
    assert!(registry.contains("log"));
    assert!(!registry.contains_local("log"));

    let mailer = registry.create::<Mailer>().unwrap();
    assert_eq!(mailer.log.target, "console");
    assert!(Arc::ptr_eq(&registry.get("log").unwrap(), &shared));
}

#[test]
fn test_same_instance_registered_in_two_scopes() {
    let shared: ServiceRef = Arc::new(Logger::new("shared"));
    let first = Services::new();
    let second = Services::new();

    first.register_shared("log", Arc::clone(&shared)).unwrap();
    second.register_shared("logger", Arc::clone(&shared)).unwrap();

    assert!(Arc::ptr_eq(
        &first.get("log").unwrap(),
        &second.get("logger").unwrap()
    ));
}

#[test]
fn test_parent_is_fixed_at_construction() {
    let root = Arc::new(Services::new());
    let child = root.child();

    assert!(Arc::ptr_eq(child.parent().unwrap(), &root));
    assert!(root.parent().is_none());
    assert_eq!(child.depth(), 1);

    // 上级之后注册的服务对子注册表可见
    root.register("late", 1_u8).unwrap();
    assert!(child.contains("late"));
}
