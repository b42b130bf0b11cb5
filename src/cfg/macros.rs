//! 配置管理相关的宏定义
//!
//! 提供简化 From / TryFrom trait 实现的宏

/// 为配置类型自动实现 From trait
///
/// 用法：`impl_from!(ConfigType => Type)`，调用 Type::new(config)
#[macro_export]
macro_rules! impl_from {
    ($config_type:ty => $target_type:ty) => {
        impl From<$config_type> for $target_type {
            fn from(config: $config_type) -> Self {
                <$target_type>::new(config)
            }
        }
    };
}

/// 为构造可能失败的类型实现 TryFrom trait
///
/// 用法：`impl_try_from!(ConfigType => Type)`，调用返回 `anyhow::Result<Type>` 的 Type::new(config)
#[macro_export]
macro_rules! impl_try_from {
    ($config_type:ty => $target_type:ty) => {
        impl TryFrom<$config_type> for $target_type {
            type Error = anyhow::Error;

            fn try_from(config: $config_type) -> anyhow::Result<Self> {
                <$target_type>::new(config)
            }
        }
    };
}

/// 为 Box<T> 类型自动实现到 Box<dyn Trait> 的转换
///
/// 用法：`impl_box_from!(Type => dyn TraitName)`
#[macro_export]
macro_rules! impl_box_from {
    ($source_type:ty => dyn $trait_name:path) => {
        impl From<Box<$source_type>> for Box<dyn $trait_name> {
            fn from(source: Box<$source_type>) -> Self {
                source as Box<dyn $trait_name>
            }
        }
    };
}

#[cfg(test)]
mod tests {

    #[derive(Debug)]
    struct TestConfig {
        value: String,
    }

    #[derive(Debug)]
    struct TestService {
        config: TestConfig,
    }

    impl TestService {
        fn new(config: TestConfig) -> Self {
            Self { config }
        }
    }

    #[derive(Debug)]
    struct FallibleService {
        value: String,
    }

    impl FallibleService {
        fn new(config: TestConfig) -> anyhow::Result<Self> {
            if config.value.is_empty() {
                anyhow::bail!("value must not be empty");
            }
            Ok(Self {
                value: config.value,
            })
        }
    }

    trait TestTrait {
        fn get_value(&self) -> &str;
    }

    impl TestTrait for TestService {
        fn get_value(&self) -> &str {
            &self.config.value
        }
    }

    impl_from!(TestConfig => TestService);
    impl_try_from!(TestConfig => FallibleService);
    impl_box_from!(TestService => dyn TestTrait);

    #[test]
    fn test_impl_from_new() {
        let config = TestConfig {
            value: "test".to_string(),
        };
        let service = TestService::from(config);
        assert_eq!(service.config.value, "test");
    }

    #[test]
    fn test_impl_try_from() {
        let ok = FallibleService::try_from(TestConfig {
            value: "ok".to_string(),
        });
        assert_eq!(ok.unwrap().value, "ok");

        let err = FallibleService::try_from(TestConfig {
            value: String::new(),
        });
        assert!(err.is_err());
    }

    #[test]
    fn test_impl_box_from() {
        let config = TestConfig {
            value: "test".to_string(),
        };
        let service = TestService::from(config);
        let boxed_service = Box::new(service);
        let boxed_trait: Box<dyn TestTrait> = boxed_service.into();
        assert_eq!(boxed_trait.get_value(), "test");
    }
}
