//! 配置相关的基础接口定义

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 根注册表的默认作用域名称
pub const ROOT_SCOPE_NAME: &str = "root";

/// 注册表选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryOptions {
    /// 作用域名称，仅用于日志输出
    pub name: String,
    /// 是否记录每次查找
    pub trace_lookups: bool,
}

impl RegistryOptions {
    /// 创建指定名称的选项
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// 设置是否记录查找
    pub fn with_trace_lookups(mut self, enabled: bool) -> Self {
        self.trace_lookups = enabled;
        self
    }

    /// 从配置节绑定选项
    pub fn from_section(section: &ConfigSection) -> Result<Self, ConfigError> {
        let options: Self = section.bind()?;
        options.validate()?;
        Ok(options)
    }

    /// 验证选项
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "作用域名称不能为空".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            name: ROOT_SCOPE_NAME.to_string(),
            trace_lookups: false,
        }
    }
}

/// 配置节
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigSection {
    /// 配置数据
    pub data: HashMap<String, serde_json::Value>,
}

impl ConfigSection {
    /// 创建新的配置节
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// 从 JSON 文本解析配置节
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let data = serde_json::from_str(json)?;
        Ok(Self { data })
    }

    /// 插入配置项
    pub fn insert(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.data.insert(key.into(), value);
    }

    /// 获取配置项
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }

    /// 绑定到具体类型
    pub fn bind<T>(&self) -> Result<T, ConfigError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let value = serde_json::Value::Object(
            self.data
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        );

        serde_json::from_value(value).map_err(|e| ConfigError::SerializationError { source: e })
    }
}
