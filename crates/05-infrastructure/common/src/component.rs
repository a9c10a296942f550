//! 服务与可注入类型的基础接口定义
//!
//! 注册表中保存的服务实例对注册表是不透明的，只通过 [`ServiceRef`] 共享。
//! 需要构造函数注入的类型实现 [`Injectable`]，声明自己依赖的服务名称列表。

use crate::errors::{BoxError, InjectionError, InjectionResult};
use std::any::Any;
use std::sync::Arc;

/// 共享的服务实例
pub type ServiceRef = Arc<dyn Any + Send + Sync>;

/// 可注入类型 trait
///
/// `wants` 返回有序的依赖名称列表，`construct` 以同样顺序接收解析结果。
/// 未解析到的依赖以空位传入，是否接受由类型自己决定。
pub trait Injectable: Sized + 'static {
    /// 依赖的服务名称，按构造参数顺序排列
    fn wants() -> &'static [&'static str] {
        &[]
    }

    /// 使用按位置排列的依赖构建实例
    fn construct(deps: Dependencies) -> Result<Self, BoxError>;

    /// 类型名称，用于日志和错误信息
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// 按位置排列的构造参数
///
/// 每个位置记录依赖名称以及解析结果，未解析的依赖为 `None`。
#[derive(Debug, Clone, Default)]
pub struct Dependencies {
    slots: Vec<(&'static str, Option<ServiceRef>)>,
}

impl Dependencies {
    /// 创建空参数列表
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// 创建指定容量的参数列表
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// 追加一个位置参数
    pub fn push(&mut self, key: &'static str, value: Option<ServiceRef>) {
        self.slots.push((key, value));
    }

    /// 参数个数（包括未解析的位置）
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// 指定位置的依赖名称
    pub fn key(&self, position: usize) -> Option<&'static str> {
        self.slots.get(position).map(|(key, _)| *key)
    }

    /// 指定位置的原始服务实例
    pub fn get(&self, position: usize) -> Option<&ServiceRef> {
        self.slots.get(position).and_then(|(_, value)| value.as_ref())
    }

    /// 指定位置是否已解析到服务
    pub fn is_resolved(&self, position: usize) -> bool {
        self.get(position).is_some()
    }

    /// 读取必需依赖
    pub fn required<T>(&self, position: usize) -> InjectionResult<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        let key = self.slot_key(position)?;
        self.optional::<T>(position)?
            .ok_or_else(|| InjectionError::Missing {
                key: key.to_string(),
                position,
            })
    }

    /// 读取可选依赖，未解析时返回 `None`
    pub fn optional<T>(&self, position: usize) -> InjectionResult<Option<Arc<T>>>
    where
        T: Any + Send + Sync,
    {
        let key = self.slot_key(position)?;
        match self.get(position) {
            None => Ok(None),
            Some(service) => service
                .clone()
                .downcast::<T>()
                .map(Some)
                .map_err(|_| InjectionError::TypeMismatch {
                    key: key.to_string(),
                    position,
                    expected: std::any::type_name::<T>(),
                }),
        }
    }

    /// 遍历所有位置
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<&ServiceRef>)> + '_ {
        self.slots.iter().map(|(key, value)| (*key, value.as_ref()))
    }

    /// 取出原始位置参数
    pub fn into_values(self) -> Vec<Option<ServiceRef>> {
        self.slots.into_iter().map(|(_, value)| value).collect()
    }

    fn slot_key(&self, position: usize) -> InjectionResult<&'static str> {
        self.key(position).ok_or(InjectionError::OutOfRange {
            position,
            len: self.slots.len(),
        })
    }
}

impl FromIterator<(&'static str, Option<ServiceRef>)> for Dependencies {
    fn from_iter<I: IntoIterator<Item = (&'static str, Option<ServiceRef>)>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}
