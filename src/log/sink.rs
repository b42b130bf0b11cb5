use crate::cfg::TypeOptions;
use crate::log::destination::{
    create_destination_from_options, register_destinations, LogDestination, NullDestination,
};
use anyhow::{Context, Result};
use serde::Deserialize;
use smart_default::SmartDefault;
use std::sync::Once;

/// LogSink 配置
#[derive(Debug, Clone, Deserialize, SmartDefault, PartialEq)]
#[serde(default)]
pub struct LogSinkConfig {
    /// 每次写入后是否立即刷新到底层存储
    #[default = true]
    pub flush_after_log: bool,

    /// Destination 配置
    #[default(TypeOptions { type_name: "NullDestination".to_string(), options: serde_json::json!({}) })]
    pub destination: TypeOptions,
}

impl LogSinkConfig {
    /// 从 JSON5 字符串解析
    pub fn from_json(json_str: &str) -> Result<Self> {
        Ok(json5::from_str(json_str)?)
    }

    /// 从 YAML 字符串解析
    pub fn from_yaml(yaml_str: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml_str)?)
    }

    /// 从 TOML 字符串解析
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }
}

/// 日志接收器当前状态
///
/// 只由当前目标决定：目标丢弃写入（`LogDestination::discards`）时为 Discarding，否则为 Bound。
/// 无论目标来自配置还是 `configure`，规则相同
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkState {
    /// 初始状态，写入全部丢弃
    Discarding,
    /// 已绑定到会保留写入内容的目标
    Bound,
}

/// 注册所有 Destination（只执行一次）
static REGISTER_ONCE: Once = Once::new();

/// 日志接收器
///
/// 持有唯一的写入目标与 flush 策略。创建后默认指向空目标，
/// 因此在完成配置前调用 `log` 是安全的，内容会被丢弃。
pub struct LogSink {
    destination: Box<dyn LogDestination>,
    flush_after_log: bool,
}

impl Default for LogSink {
    fn default() -> Self {
        Self {
            destination: Box::new(NullDestination),
            flush_after_log: true,
        }
    }
}

impl LogSink {
    /// 从配置创建 LogSink
    pub fn new(config: LogSinkConfig) -> Result<Self> {
        REGISTER_ONCE.call_once(|| {
            if let Err(err) = register_destinations() {
                tracing::warn!(error = %err, "failed to register log destinations");
            }
        });

        let destination = create_destination_from_options(&config.destination).with_context(
            || format!("Failed to create destination '{}'", config.destination.type_name),
        )?;
        Ok(Self {
            destination,
            flush_after_log: config.flush_after_log,
        })
    }

    /// 使用给定目标创建 LogSink
    pub fn with_destination(destination: impl LogDestination + 'static) -> Self {
        let mut sink = Self::default();
        sink.configure(destination);
        sink
    }

    /// 替换当前写入目标，可多次调用
    ///
    /// 旧目标随之释放
    pub fn configure(&mut self, destination: impl LogDestination + 'static) {
        self.configure_boxed(Box::new(destination));
    }

    /// 与 `configure` 相同，接收已装箱的目标（例如来自 `create_destination_from_options`）
    pub fn configure_boxed(&mut self, destination: Box<dyn LogDestination>) {
        tracing::debug!(previous = ?self.state(), "rebinding log sink destination");
        self.destination = destination;
    }

    /// 写入文本并追加换行；flush_after_log 为 true 时随后刷新目标
    ///
    /// 底层写入或刷新的错误原样向上传递
    pub fn log(&self, text: &str) -> Result<()> {
        self.destination.write(text)?;
        self.destination.write("\n")?;
        if self.flush_after_log {
            self.destination.flush()?;
        }
        Ok(())
    }

    /// 主动刷新当前目标
    pub fn flush(&self) -> Result<()> {
        self.destination.flush()
    }

    pub fn flush_after_log(&self) -> bool {
        self.flush_after_log
    }

    pub fn set_flush_after_log(&mut self, flush_after_log: bool) {
        self.flush_after_log = flush_after_log;
    }

    pub fn state(&self) -> SinkState {
        if self.destination.discards() {
            SinkState::Discarding
        } else {
            SinkState::Bound
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::destination::BufferDestination;

    #[test]
    fn test_default_sink_discards() -> Result<()> {
        let sink = LogSink::default();
        assert_eq!(sink.state(), SinkState::Discarding);
        assert!(sink.flush_after_log());

        sink.log("nobody hears this")?;
        sink.log("")?;
        Ok(())
    }

    #[test]
    fn test_log_appends_newline() -> Result<()> {
        let buffer = BufferDestination::new();
        let sink = LogSink::with_destination(buffer.clone());

        sink.log("hello")?;
        sink.log("")?;
        sink.log("line\r\n")?;

        assert_eq!(buffer.contents(), "hello\n\nline\r\n\n");
        Ok(())
    }

    #[test]
    fn test_flush_after_log_policy() -> Result<()> {
        let buffer = BufferDestination::new();
        let mut sink = LogSink::with_destination(buffer.clone());

        sink.log("one")?;
        sink.log("two")?;
        assert_eq!(buffer.flush_count(), 2);

        sink.set_flush_after_log(false);
        sink.log("three")?;
        assert_eq!(buffer.flush_count(), 2);

        sink.flush()?;
        assert_eq!(buffer.flush_count(), 3);
        Ok(())
    }

    #[test]
    fn test_configure_rebinds_multiple_times() -> Result<()> {
        let first = BufferDestination::new();
        let second = BufferDestination::new();
        let mut sink = LogSink::default();

        sink.log("before")?;
        sink.configure(first.clone());
        assert_eq!(sink.state(), SinkState::Bound);
        sink.log("to first")?;

        sink.configure(second.clone());
        sink.log("to second")?;

        assert_eq!(first.contents(), "to first\n");
        assert_eq!(second.contents(), "to second\n");
        Ok(())
    }

    #[test]
    fn test_state_follows_destination() -> Result<()> {
        let mut sink = LogSink::default();
        assert_eq!(sink.state(), SinkState::Discarding);

        sink.configure(BufferDestination::new());
        assert_eq!(sink.state(), SinkState::Bound);

        sink.configure(NullDestination);
        assert_eq!(sink.state(), SinkState::Discarding);

        let from_config = LogSink::new(LogSinkConfig::default())?;
        assert_eq!(from_config.state(), LogSink::with_destination(NullDestination).state());
        Ok(())
    }

    #[test]
    fn test_new_from_default_config() -> Result<()> {
        let sink = LogSink::new(LogSinkConfig::default())?;
        assert_eq!(sink.state(), SinkState::Discarding);
        assert!(sink.flush_after_log());
        sink.log("discarded")?;
        Ok(())
    }

    #[test]
    fn test_new_with_file_destination() -> Result<()> {
        let temp_file = tempfile::NamedTempFile::new()?;
        let config = LogSinkConfig::from_json(&format!(
            r#"{{
                flush_after_log: true,
                destination: {{
                    type: "FileDestination",
                    options: {{ file_path: "{}" }}
                }}
            }}"#,
            temp_file.path().display()
        ))?;

        let sink = LogSink::new(config)?;
        assert_eq!(sink.state(), SinkState::Bound);
        sink.log("persisted")?;

        assert_eq!(std::fs::read_to_string(temp_file.path())?, "persisted\n");
        Ok(())
    }

    #[test]
    fn test_config_formats() -> Result<()> {
        let from_yaml = LogSinkConfig::from_yaml(
            r#"
flush_after_log: false
destination:
  type: NullDestination
"#,
        )?;
        assert!(!from_yaml.flush_after_log);

        let from_toml = LogSinkConfig::from_toml("flush_after_log = false")?;
        assert_eq!(from_toml, from_yaml);

        let empty = LogSinkConfig::from_json("{}")?;
        assert_eq!(empty, LogSinkConfig::default());
        Ok(())
    }

    #[test]
    fn test_new_with_unknown_destination() {
        let config = LogSinkConfig {
            destination: TypeOptions::new("Nowhere", serde_json::json!({})),
            ..Default::default()
        };
        assert!(LogSink::new(config).is_err());
    }
}
