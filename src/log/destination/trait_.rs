use anyhow::Result;

/// 日志写入目标 trait
///
/// 日志接收器持有的可写目标：文件、内存缓冲区或丢弃一切的空目标
pub trait LogDestination: Send + Sync {
    /// 原样写入文本
    fn write(&self, text: &str) -> Result<()>;

    /// 刷新缓冲区（默认实现为空操作）
    fn flush(&self) -> Result<()> {
        Ok(())
    }

    /// 是否丢弃所有写入内容
    fn discards(&self) -> bool {
        false
    }
}
