//! 日志模块
//!
//! 控制台输出的同时把相同文本写入日志目标（tee）。
//!
//! # 特性
//!
//! - 可替换的写入目标：NullDestination、FileDestination、BufferDestination、WriterDestination
//! - 未配置前写入全部丢弃，随时可以重新绑定目标
//! - 可配置每次写入后是否立即 flush
//! - 基于配置（JSON5 / YAML / TOML）创建
//!
//! # 快速开始
//!
//! ```rust,no_run
//! use teeprint::log::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = LogSinkConfig::from_json(r#"
//!         {
//!             flush_after_log: true,
//!             destination: {
//!                 type: "FileDestination",
//!                 options: {
//!                     file_path: "logs/session.log"
//!                 }
//!             }
//!         }
//!     "#)?;
//!
//!     let mut printer = Printer::new(std::io::stdout(), LogSink::new(config)?);
//!     printer.print("Application started")?;
//!     printer.print_with("no newline on console", &PrintOptions::default().end(""))?;
//!
//!     Ok(())
//! }
//! ```

pub mod destination;
pub mod global;
pub mod print;
pub mod sink;

// 重新导出核心类型
pub use destination::{
    create_destination_from_options, register_destinations, BufferDestination, FileDestination,
    FileDestinationConfig, LogDestination, NullDestination, NullDestinationConfig,
    WriterDestination,
};
pub use global::{
    interface_print, interface_print_with, set_global_log_file, set_global_log_path,
    with_global_log_sink,
};
pub use print::{PrintOptions, Printer};
pub use sink::{LogSink, LogSinkConfig, SinkState};
