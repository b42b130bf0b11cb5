use crate::log::destination::{FileDestination, FileDestinationConfig, LogDestination};
use crate::log::print::{self, PrintOptions};
use crate::log::sink::LogSink;
use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;
use std::io;
use std::sync::Mutex;

/// 全局 LogSink 单例
///
/// 初始指向空目标，flush_after_log 为 true
static GLOBAL_LOG_SINK: Lazy<Mutex<LogSink>> = Lazy::new(|| Mutex::new(LogSink::default()));

/// 在持有全局 LogSink 锁的情况下执行闭包
///
/// 锁不可重入：闭包内调用 `interface_print`、`set_global_log_file` 等全局函数会死锁，
/// 只应通过参数 `sink` 操作接收器
pub fn with_global_log_sink<R>(f: impl FnOnce(&mut LogSink) -> R) -> Result<R> {
    let mut sink = GLOBAL_LOG_SINK
        .lock()
        .map_err(|_| anyhow!("Failed to acquire global log sink lock"))?;
    Ok(f(&mut sink))
}

/// 重新绑定全局日志目标，通常在进程启动时调用一次
///
/// # 示例
///
/// ```no_run
/// use teeprint::log::{set_global_log_file, interface_print, FileDestination};
///
/// fn main() -> anyhow::Result<()> {
///     let file = std::fs::File::create("session.log")?;
///     set_global_log_file(FileDestination::from_file(file))?;
///     interface_print("started")?;
///     Ok(())
/// }
/// ```
pub fn set_global_log_file(destination: impl LogDestination + 'static) -> Result<()> {
    with_global_log_sink(|sink| sink.configure(destination))
}

/// 打开指定路径的日志文件（追加模式）并绑定为全局目标
pub fn set_global_log_path(path: impl Into<String>) -> Result<()> {
    let destination = FileDestination::new(FileDestinationConfig {
        file_path: path.into(),
        ..Default::default()
    })?;
    set_global_log_file(destination)
}

/// 以默认选项打印到标准输出并写入全局日志
pub fn interface_print(text: &str) -> Result<()> {
    interface_print_with(text, &PrintOptions::default())
}

/// 打印到标准输出并写入全局日志
pub fn interface_print_with(text: &str, options: &PrintOptions) -> Result<()> {
    let sink = GLOBAL_LOG_SINK
        .lock()
        .map_err(|_| anyhow!("Failed to acquire global log sink lock"))?;
    let mut stdout = io::stdout().lock();
    print::interface_print(&mut stdout, &sink, text, options)
}
