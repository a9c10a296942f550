//! # 服务注册表具体实现
//!
//! 提供分层的服务注册表 [`Services`]：按名称注册服务实例，本地未命中时沿上级
//! 注册表查找，并可通过构造函数注入创建新实例。
//!
//! 子注册表可以用同名服务遮蔽上级的服务，而不会修改上级。
//!
//! ```
//! use di_impl::Services;
//! use std::sync::Arc;
//!
//! let root = Arc::new(Services::new());
//! root.register("log", "console").unwrap();
//!
//! let request = root.child();
//! request.register("log", "file").unwrap();
//!
//! assert_eq!(*request.get_as::<&str>("log").unwrap(), "file");
//! assert_eq!(*root.get_as::<&str>("log").unwrap(), "console");
//! ```

use di_abstractions::{construct, ServiceRegistry};
use parking_lot::RwLock;
use registry_common::{
    DependencyError, DependencyResult, Injectable, RegistryOptions, ServiceRef,
};
use std::any::Any;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// 分层服务注册表
///
/// 上级注册表在构造时确定，之后不可更改。注册表只会增加服务，不支持移除。
pub struct Services {
    /// 本注册表自身的服务
    services: RwLock<HashMap<String, ServiceRef>>,
    /// 上级注册表
    parent: Option<Arc<Services>>,
    options: RegistryOptions,
}

impl Services {
    /// 创建没有上级的根注册表
    pub fn new() -> Self {
        Self::with_options(None, RegistryOptions::default())
    }

    /// 创建以 `parent` 为上级的注册表
    pub fn with_parent(parent: Arc<Services>) -> Self {
        let options = child_options(&parent, "child");
        Self::with_options(Some(parent), options)
    }

    /// 使用指定选项创建注册表
    pub fn with_options(parent: Option<Arc<Services>>, options: RegistryOptions) -> Self {
        debug!(
            "创建注册表: {} (上级: {})",
            options.name,
            parent.as_ref().map_or("无", |p| p.name())
        );

        Self {
            services: RwLock::new(HashMap::new()),
            parent,
            options,
        }
    }

    /// 创建子注册表
    pub fn child(self: &Arc<Self>) -> Self {
        Self::with_parent(Arc::clone(self))
    }

    /// 创建带标签的子注册表，名称为 `<上级名称>.<label>`
    pub fn named_child(self: &Arc<Self>, label: &str) -> Self {
        let options = child_options(self, label);
        Self::with_options(Some(Arc::clone(self)), options)
    }

    /// 注册服务实例
    ///
    /// 名称已在本注册表中注册时返回 [`DependencyError::DuplicateService`]，
    /// 不检查上级注册表，因此可以遮蔽上级的同名服务。
    pub fn register<T>(&self, name: &str, instance: T) -> DependencyResult<&Self>
    where
        T: Any + Send + Sync,
    {
        self.register_shared(name, Arc::new(instance))
    }

    /// 注册已共享的服务实例
    pub fn register_shared(&self, name: &str, instance: ServiceRef) -> DependencyResult<&Self> {
        if name.is_empty() {
            return Err(DependencyError::InvalidName);
        }

        let inserted = match self.services.write().entry(name.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(instance);
                true
            }
        };

        if !inserted {
            warn!("服务已注册: {} (作用域 {})", name, self.name());
            return Err(DependencyError::duplicate_service(name));
        }

        debug!("注册服务: {} (作用域 {})", name, self.name());
        Ok(self)
    }

    /// 查找服务
    ///
    /// 先查找本注册表，未命中时逐级查找上级。都未找到时返回 `None`。
    pub fn get(&self, name: &str) -> Option<ServiceRef> {
        for registry in self.chain() {
            if let Some(service) = registry.get_local(name) {
                if self.options.trace_lookups {
                    trace!("查找 {}: 命中作用域 {}", name, registry.name());
                }
                return Some(service);
            }
        }

        if self.options.trace_lookups {
            trace!("查找 {}: 未找到 (作用域 {})", name, self.name());
        }
        None
    }

    /// 按具体类型查找服务，未找到或类型不匹配时返回 `None`
    pub fn get_as<T>(&self, name: &str) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        self.get(name).and_then(|service| service.downcast::<T>().ok())
    }

    /// 解析 `T` 声明的依赖并构造新实例
    ///
    /// 未解析的依赖以空位传给构造函数；构造函数失败时返回
    /// [`DependencyError::ConstructionFailed`]。
    pub fn create<T>(&self) -> DependencyResult<T>
    where
        T: Injectable,
    {
        construct::<T, _>(self)
    }

    /// 构造新实例并包装为 `Arc`
    pub fn create_shared<T>(&self) -> DependencyResult<Arc<T>>
    where
        T: Injectable,
    {
        self.create::<T>().map(Arc::new)
    }

    /// 服务是否可解析（包括上级）
    pub fn contains(&self, name: &str) -> bool {
        self.chain().any(|registry| registry.contains_local(name))
    }

    /// 本注册表自身是否已注册
    pub fn contains_local(&self, name: &str) -> bool {
        self.services.read().contains_key(name)
    }

    /// 本注册表自身的服务名称，按字母排序
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.services.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// 本注册表自身的服务数量
    pub fn len(&self) -> usize {
        self.services.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.read().is_empty()
    }

    /// 上级注册表
    pub fn parent(&self) -> Option<&Arc<Services>> {
        self.parent.as_ref()
    }

    /// 上级注册表的层数
    pub fn depth(&self) -> usize {
        self.chain().count() - 1
    }

    /// 作用域名称
    pub fn name(&self) -> &str {
        &self.options.name
    }

    pub fn options(&self) -> &RegistryOptions {
        &self.options
    }

    /// 从本注册表开始逐级遍历到根注册表
    pub fn chain(&self) -> impl Iterator<Item = &Services> + '_ {
        std::iter::successors(Some(self), |registry| registry.parent.as_deref())
    }

    fn get_local(&self, name: &str) -> Option<ServiceRef> {
        self.services.read().get(name).cloned()
    }
}

fn child_options(parent: &Services, label: &str) -> RegistryOptions {
    RegistryOptions {
        name: format!("{}.{}", parent.name(), label),
        trace_lookups: parent.options.trace_lookups,
    }
}

impl Default for Services {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Services {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Services")
            .field("name", &self.options.name)
            .field("services", &self.names())
            .field("parent", &self.parent.as_ref().map(|p| p.name()))
            .finish()
    }
}

impl ServiceRegistry for Services {
    fn register_service(&self, name: &str, instance: ServiceRef) -> DependencyResult<()> {
        self.register_shared(name, instance).map(|_| ())
    }

    fn get(&self, name: &str) -> Option<ServiceRef> {
        Services::get(self, name)
    }

    fn contains_local(&self, name: &str) -> bool {
        Services::contains_local(self, name)
    }

    fn contains(&self, name: &str) -> bool {
        Services::contains(self, name)
    }

    fn scope(&self) -> &str {
        self.name()
    }
}
