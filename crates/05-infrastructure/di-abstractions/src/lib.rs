//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义服务注册和构造函数注入的核心接口。
//!
//! ## 核心接口
//!
//! - [`ServiceRegistry`] - 服务注册表接口
//! - [`ServiceRegistryExt`] - 类型化注册、查找和注入构造
//! - [`resolve_dependencies`] - 按声明顺序解析依赖

pub mod registry;
pub mod resolver;

pub use registry::*;
pub use resolver::*;

pub use registry_common::{
    BoxError, Dependencies, DependencyError, DependencyResult, Injectable, InjectionError,
    ServiceRef,
};
