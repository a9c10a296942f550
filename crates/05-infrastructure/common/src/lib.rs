//! # Registry Common
//!
//! 服务注册表的公共类型：服务实例、可注入类型描述、构造参数和错误类型。
//!
//! ## 核心类型
//!
//! - [`ServiceRef`] - 共享的不透明服务实例
//! - [`Injectable`] - 声明依赖列表的可构造类型
//! - [`Dependencies`] - 按位置排列的构造参数
//! - [`DependencyError`] - 注册和构造错误
//! - [`RegistryOptions`] - 注册表选项

pub mod component;
pub mod configuration;
pub mod errors;

pub use component::*;
pub use configuration::*;
pub use errors::*;
