//! 服务注册表抽象接口

use crate::resolver::construct;
use registry_common::{DependencyResult, Injectable, ServiceRef};
use std::any::Any;
use std::sync::Arc;

/// 服务注册表 trait
///
/// 以字符串名称保存不透明的服务实例。查找在本地未命中时由实现决定是否
/// 继续向上级注册表查找。
pub trait ServiceRegistry: Send + Sync {
    /// 注册共享服务实例
    ///
    /// 名称已存在于本注册表自身时返回 [`DependencyError::DuplicateService`]，
    /// 原有实例保持不变。
    ///
    /// [`DependencyError::DuplicateService`]: registry_common::DependencyError::DuplicateService
    fn register_service(&self, name: &str, instance: ServiceRef) -> DependencyResult<()>;

    /// 查找服务，未找到返回 `None`
    fn get(&self, name: &str) -> Option<ServiceRef>;

    /// 检查本注册表自身是否已注册（不查找上级）
    fn contains_local(&self, name: &str) -> bool;

    /// 检查服务是否可解析（包括上级）
    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// 作用域名称，用于日志
    fn scope(&self) -> &str {
        "anonymous"
    }
}

/// 服务注册表扩展方法
///
/// 为任意 [`ServiceRegistry`] 提供类型化的注册、查找和注入构造。
pub trait ServiceRegistryExt: ServiceRegistry {
    /// 注册服务实例，返回注册表自身以便链式调用
    fn register<T>(&self, name: &str, instance: T) -> DependencyResult<&Self>
    where
        T: Any + Send + Sync,
    {
        self.register_service(name, Arc::new(instance))?;
        Ok(self)
    }

    /// 注册已共享的服务实例，返回注册表自身以便链式调用
    fn register_shared(&self, name: &str, instance: ServiceRef) -> DependencyResult<&Self> {
        self.register_service(name, instance)?;
        Ok(self)
    }

    /// 按具体类型查找服务，未找到或类型不匹配时返回 `None`
    fn get_as<T>(&self, name: &str) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        self.get(name).and_then(|service| service.downcast::<T>().ok())
    }

    /// 解析 `T` 声明的依赖并构造新实例
    fn create<T>(&self) -> DependencyResult<T>
    where
        T: Injectable,
    {
        construct::<T, _>(self)
    }

    /// 构造新实例并包装为 `Arc`
    fn create_shared<T>(&self) -> DependencyResult<Arc<T>>
    where
        T: Injectable,
    {
        self.create::<T>().map(Arc::new)
    }
}

impl<R: ServiceRegistry + ?Sized> ServiceRegistryExt for R {}
