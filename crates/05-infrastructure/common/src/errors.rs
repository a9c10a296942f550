//! 错误类型定义

use thiserror::Error;

/// 构造函数可返回的任意错误
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置序列化失败: {source}")]
    SerializationError {
        #[from]
        source: serde_json::Error,
    },

    #[error("配置验证失败: {message}")]
    ValidationError { message: String },
}

/// 服务注册表错误类型
#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("服务已注册: {name}")]
    DuplicateService { name: String },

    #[error("服务名称不能为空")]
    InvalidName,

    #[error("服务创建失败: {type_name}, 原因: {source}")]
    ConstructionFailed {
        type_name: String,
        source: BoxError,
    },
}

impl DependencyError {
    /// 创建重复注册错误
    pub fn duplicate_service(name: impl Into<String>) -> Self {
        Self::DuplicateService { name: name.into() }
    }

    /// 包装构造函数失败
    pub fn construction_failed(type_name: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::ConstructionFailed {
            type_name: type_name.into(),
            source: source.into(),
        }
    }

    /// 是否为重复注册错误
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateService { .. })
    }
}

/// 构造参数访问错误
///
/// 由被构造类型自己在读取位置参数时产生，注册表本身从不返回此错误。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InjectionError {
    #[error("缺少依赖: {key} (位置 {position})")]
    Missing { key: String, position: usize },

    #[error("依赖类型不匹配: {key} (位置 {position}), 期望 {expected}")]
    TypeMismatch {
        key: String,
        position: usize,
        expected: &'static str,
    },

    #[error("参数位置越界: {position}, 共 {len} 个参数")]
    OutOfRange { position: usize, len: usize },
}

/// 结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type DependencyResult<T> = Result<T, DependencyError>;
pub type InjectionResult<T> = Result<T, InjectionError>;
