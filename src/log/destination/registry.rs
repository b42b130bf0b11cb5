use crate::cfg::{create_trait_from_type_options, register_trait, TypeOptions};
use crate::log::destination::{
    file_destination::{FileDestination, FileDestinationConfig},
    null_destination::{NullDestination, NullDestinationConfig},
    LogDestination,
};
use anyhow::Result;

/// 注册所有可通过配置创建的 Destination 实现
pub fn register_destinations() -> Result<()> {
    register_trait::<NullDestination, dyn LogDestination, NullDestinationConfig>("NullDestination")?;
    register_trait::<FileDestination, dyn LogDestination, FileDestinationConfig>("FileDestination")?;
    Ok(())
}

/// 从 TypeOptions 创建 Destination
pub fn create_destination_from_options(options: &TypeOptions) -> Result<Box<dyn LogDestination>> {
    create_trait_from_type_options(options)
}
