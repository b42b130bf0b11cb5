//! teeprint - 控制台输出与日志文件同步写入的工具库
//!
//! ## 模块
//!
//! - **cfg**: 配置管理模块（TypeOptions、组件注册表）
//! - **log**: 日志模块（写入目标、日志接收器、打印函数）
//!
//! ## 设计理念
//!
//! - 🔌 **可替换目标**: 文件、内存缓冲区、空目标统一抽象为 `LogDestination`
//! - 🧪 **显式上下文**: `Printer` 持有接收器，测试无需触碰全局状态
//! - 🔒 **类型安全**: 配置通过 serde 反序列化为强类型结构

pub mod cfg;
pub mod log;

// 重新导出主要的公共 API
pub use cfg::{create_trait_from_type_options, register_trait, TypeOptions};

pub use log::{
    interface_print, interface_print_with, set_global_log_file, LogDestination, LogSink,
    LogSinkConfig, PrintOptions, Printer,
};
