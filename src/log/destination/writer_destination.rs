use crate::log::destination::LogDestination;
use anyhow::{anyhow, Result};
use std::io::Write;
use std::sync::Mutex;

/// 通用写入目标
///
/// 将调用方提供的任意 `Write` 实现（管道、socket、标准错误等）适配为日志目标
pub struct WriterDestination<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterDestination<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// 取回内部 writer
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|_| anyhow!("Writer lock poisoned"))
    }
}

impl<W: Write + Send> LogDestination for WriterDestination<W> {
    fn write(&self, text: &str) -> Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| anyhow!("Failed to acquire writer lock"))?;
        writer.write_all(text.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| anyhow!("Failed to acquire writer lock"))?;
        writer.flush()?;
        Ok(())
    }
}
