use crate::log::destination::LogDestination;
use anyhow::{anyhow, Result};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct Buffer {
    bytes: Vec<u8>,
    flushes: usize,
}

/// 内存缓冲区目标
///
/// 克隆出的实例共享同一块缓冲区，交给日志接收器后仍可通过保留的克隆读取内容
#[derive(Debug, Clone, Default)]
pub struct BufferDestination {
    buffer: Arc<Mutex<Buffer>>,
}

impl BufferDestination {
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取目前写入的全部内容
    pub fn contents(&self) -> String {
        match self.buffer.lock() {
            Ok(buffer) => String::from_utf8_lossy(&buffer.bytes).into_owned(),
            Err(poisoned) => String::from_utf8_lossy(&poisoned.into_inner().bytes).into_owned(),
        }
    }

    /// 获取 flush 被调用的次数
    pub fn flush_count(&self) -> usize {
        match self.buffer.lock() {
            Ok(buffer) => buffer.flushes,
            Err(poisoned) => poisoned.into_inner().flushes,
        }
    }
}

impl LogDestination for BufferDestination {
    fn write(&self, text: &str) -> Result<()> {
        let mut buffer = self
            .buffer
            .lock()
            .map_err(|_| anyhow!("Failed to acquire buffer lock"))?;
        buffer.bytes.extend_from_slice(text.as_bytes());
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        let mut buffer = self
            .buffer
            .lock()
            .map_err(|_| anyhow!("Failed to acquire buffer lock"))?;
        buffer.flushes += 1;
        Ok(())
    }
}

crate::impl_box_from!(BufferDestination => dyn LogDestination);
