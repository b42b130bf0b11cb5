use crate::log::destination::LogDestination;
use crate::log::sink::LogSink;
use anyhow::Result;
use serde::Deserialize;
use smart_default::SmartDefault;
use std::io::{self, Stdout, Write};

/// 打印选项
#[derive(Debug, Clone, Deserialize, SmartDefault, PartialEq, Eq)]
#[serde(default)]
pub struct PrintOptions {
    /// 写入后立即刷新控制台
    pub flush: bool,

    /// 控制台输出的行结束符，日志始终以换行结尾
    #[default = "\n"]
    pub end: String,
}

impl PrintOptions {
    pub fn flush(mut self, flush: bool) -> Self {
        self.flush = flush;
        self
    }

    pub fn end(mut self, end: impl Into<String>) -> Self {
        self.end = end.into();
        self
    }
}

/// 将文本写入控制台，并把同样的文本转发给日志接收器
///
/// 控制台写入 `text` 与 `options.end`，只有 `options.flush` 为 true 时才刷新控制台；
/// 无论 flush 取值如何，`text` 都会交给 `sink.log`。
pub fn interface_print<W: Write + ?Sized>(
    out: &mut W,
    sink: &LogSink,
    text: &str,
    options: &PrintOptions,
) -> Result<()> {
    out.write_all(text.as_bytes())?;
    out.write_all(options.end.as_bytes())?;
    if options.flush {
        out.flush()?;
    }
    sink.log(text)
}

/// 控制台打印器
///
/// 显式持有控制台 writer 与日志接收器，替代进程级全局状态；
/// 测试中可以用内存 writer 和缓冲区目标替换两端。
pub struct Printer<W: Write> {
    out: W,
    sink: LogSink,
}

impl Printer<Stdout> {
    /// 输出到标准输出，日志默认丢弃
    pub fn stdout() -> Self {
        Self::new(io::stdout(), LogSink::default())
    }
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, sink: LogSink) -> Self {
        Self { out, sink }
    }

    /// 按默认选项打印
    pub fn print(&mut self, text: &str) -> Result<()> {
        self.print_with(text, &PrintOptions::default())
    }

    pub fn print_with(&mut self, text: &str, options: &PrintOptions) -> Result<()> {
        interface_print(&mut self.out, &self.sink, text, options)
    }

    /// 重新绑定日志目标
    pub fn configure(&mut self, destination: impl LogDestination + 'static) {
        self.sink.configure(destination);
    }

    pub fn sink(&self) -> &LogSink {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut LogSink {
        &mut self.sink
    }

    pub fn into_parts(self) -> (W, LogSink) {
        (self.out, self.sink)
    }
}
