//! cfg 模块 - 配置管理
//!
//! 提供基于 `TypeOptions` 的组件注册与创建，日志目标等组件都通过它从配置构建

pub mod macros;
pub mod registry;
pub mod type_options;

// 重新导出公共 API
pub use registry::{create_trait_from_type_options, register_trait};
pub use type_options::TypeOptions;
