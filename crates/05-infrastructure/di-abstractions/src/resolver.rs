//! 依赖解析与注入构造
//!
//! 只解析被构造类型直接声明的依赖，不递归构造未注册的服务。

use crate::registry::ServiceRegistry;
use registry_common::{Dependencies, DependencyError, DependencyResult, Injectable};
use tracing::debug;

/// 按声明顺序解析依赖
///
/// 未解析到的名称保留为空位，不视为错误。
pub fn resolve_dependencies<R>(registry: &R, wants: &'static [&'static str]) -> Dependencies
where
    R: ServiceRegistry + ?Sized,
{
    let mut deps = Dependencies::with_capacity(wants.len());
    for &key in wants {
        let service = registry.get(key);
        if service.is_none() {
            debug!("依赖未解析: {} (作用域 {})", key, registry.scope());
        }
        deps.push(key, service);
    }
    deps
}

/// 解析 `T` 的依赖并调用其构造函数
pub fn construct<T, R>(registry: &R) -> DependencyResult<T>
where
    T: Injectable,
    R: ServiceRegistry + ?Sized,
{
    let wants = T::wants();
    debug!(
        "构造 {} (作用域 {}), 依赖: {:?}",
        T::type_name(),
        registry.scope(),
        wants
    );

    let deps = resolve_dependencies(registry, wants);
    T::construct(deps).map_err(|source| DependencyError::ConstructionFailed {
        type_name: T::type_name().to_string(),
        source,
    })
}
