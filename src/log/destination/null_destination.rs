use crate::log::destination::LogDestination;
use anyhow::Result;
use serde::Deserialize;
use std::io::{self, Write};

/// NullDestination 配置（无可选项）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NullDestinationConfig {}

/// 空目标
///
/// 丢弃所有写入内容，对应系统的空设备。日志接收器在绑定真实目标之前使用它
#[derive(Debug, Default)]
pub struct NullDestination;

impl NullDestination {
    pub fn new(_config: NullDestinationConfig) -> Self {
        Self
    }
}

impl LogDestination for NullDestination {
    fn write(&self, text: &str) -> Result<()> {
        io::sink().write_all(text.as_bytes())?;
        Ok(())
    }

    fn discards(&self) -> bool {
        true
    }
}

crate::impl_from!(NullDestinationConfig => NullDestination);
crate::impl_box_from!(NullDestination => dyn LogDestination);
