// 类型注册表和工厂函数

use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::RwLock;

use super::type_options::TypeOptions;

// Trait-based 构造函数类型
// 返回 Box<dyn Any>，实际包含的是 Box<dyn Trait>
type TraitConstructor =
    Box<dyn Fn(JsonValue) -> Result<Box<dyn Any + Send + Sync>> + Send + Sync>;

// Trait 注册表：为每个 Trait 类型维护一个独立的注册表
// 外层 HashMap 的 key 是 Trait 的 TypeId，内层 HashMap 的 key 是类型名称
static TRAIT_REGISTRY: Lazy<RwLock<HashMap<TypeId, HashMap<String, TraitConstructor>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// 为实现特定 Trait 的类型注册构造函数
///
/// 构造通过 `TryFrom<Config>` 完成，只实现了 `From<Config>` 的类型同样适用。
/// 同名重复注册会覆盖之前的构造函数。
///
/// # 示例
/// ```ignore
/// register_trait::<NullDestination, dyn LogDestination, NullDestinationConfig>("NullDestination")?;
/// let dest: Box<dyn LogDestination> = create_trait_from_type_options(&type_options)?;
/// ```
pub fn register_trait<T, Trait, Config>(type_name: &str) -> Result<()>
where
    T: Send + Sync + 'static,
    Trait: ?Sized + Send + Sync + 'static,
    Config: DeserializeOwned + Send + Sync + 'static,
    T: TryFrom<Config>,
    <T as TryFrom<Config>>::Error: Into<anyhow::Error>,
    Box<T>: Into<Box<Trait>>,
{
    let type_name = type_name.to_string();
    let trait_id = TypeId::of::<Trait>();

    let constructor: TraitConstructor = Box::new(move |value| {
        let config: Config = serde_json::from_value(value)?;
        let instance = T::try_from(config).map_err(Into::<anyhow::Error>::into)?;
        let trait_object: Box<Trait> = Box::new(instance).into();
        // 将 Box<dyn Trait> 包装成 Box<dyn Any>
        Ok(Box::new(trait_object) as Box<dyn Any + Send + Sync>)
    });

    let mut registry = TRAIT_REGISTRY
        .write()
        .map_err(|_| anyhow!("Failed to acquire write lock"))?;
    registry
        .entry(trait_id)
        .or_default()
        .insert(type_name, constructor);

    Ok(())
}

/// 根据 TypeOptions 创建 trait object
pub fn create_trait_from_type_options<Trait>(type_options: &TypeOptions) -> Result<Box<Trait>>
where
    Trait: ?Sized + Send + Sync + 'static,
{
    let trait_id = TypeId::of::<Trait>();
    let registry = TRAIT_REGISTRY
        .read()
        .map_err(|_| anyhow!("Failed to acquire read lock"))?;

    let trait_registry = registry
        .get(&trait_id)
        .ok_or_else(|| anyhow!("No implementations registered for trait"))?;

    let constructor = trait_registry.get(&type_options.type_name).ok_or_else(|| {
        anyhow!(
            "Type '{}' not registered for this trait",
            type_options.type_name
        )
    })?;

    let any_box = constructor(type_options.options.clone())?;

    // 从 Box<dyn Any> 中提取 Box<dyn Trait>
    any_box
        .downcast::<Box<Trait>>()
        .map(|boxed| *boxed)
        .map_err(|_| anyhow!("Failed to downcast to target trait type"))
}
