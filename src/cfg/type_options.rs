// TypeOptions 序列化相关实现

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// 类型选项结构
///
/// `type` 指定注册表中的组件名称，`options` 为该组件自身的配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeOptions {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default = "empty_options")]
    pub options: JsonValue,
}

fn empty_options() -> JsonValue {
    serde_json::json!({})
}

impl TypeOptions {
    /// 使用类型名称和选项创建 TypeOptions
    pub fn new(type_name: impl Into<String>, options: JsonValue) -> Self {
        Self {
            type_name: type_name.into(),
            options,
        }
    }

    /// 从 JSON 字符串创建 TypeOptions（支持 JSON5 格式）
    pub fn from_json(json_str: &str) -> Result<Self> {
        // 使用 json5 解析（支持注释、尾随逗号、未引用的键等）
        Ok(json5::from_str(json_str)?)
    }

    /// 从 YAML 字符串创建 TypeOptions
    pub fn from_yaml(yaml_str: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml_str)?)
    }

    /// 从 TOML 字符串创建 TypeOptions
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }
}
