use crate::log::destination::LogDestination;
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use smart_default::SmartDefault;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// FileDestination 配置
#[derive(Debug, Clone, Deserialize, SmartDefault, PartialEq)]
#[serde(default)]
pub struct FileDestinationConfig {
    /// 日志文件路径
    pub file_path: String,

    /// 追加写入；为 false 时打开文件会清空已有内容
    #[default = true]
    pub append: bool,
}

/// 文件目标
///
/// 不做用户态缓冲，每次写入都直接交给操作系统；flush 只是 File::flush
pub struct FileDestination {
    file: Mutex<File>,
    path: Option<PathBuf>,
}

impl FileDestination {
    /// 按配置打开日志文件，父目录不存在时自动创建
    pub fn new(config: FileDestinationConfig) -> Result<Self> {
        if config.file_path.is_empty() {
            return Err(anyhow!("file_path is required"));
        }
        let path = PathBuf::from(&config.file_path);

        // 确保父目录存在
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create log directory: {}", parent.display())
                })?;
            }
        }

        let mut options = OpenOptions::new();
        options.create(true);
        if config.append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }
        let file = options
            .open(&path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), append = config.append, "opened log file");

        Ok(Self {
            file: Mutex::new(file),
            path: Some(path),
        })
    }

    /// 绑定一个已打开的文件句柄
    pub fn from_file(file: File) -> Self {
        Self {
            file: Mutex::new(file),
            path: None,
        }
    }

    /// 获取日志文件路径（由句柄创建时为 None）
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl LogDestination for FileDestination {
    fn write(&self, text: &str) -> Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| anyhow!("Failed to acquire log file lock"))?;
        file.write_all(text.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| anyhow!("Failed to acquire log file lock"))?;
        file.flush()?;
        Ok(())
    }
}

crate::impl_try_from!(FileDestinationConfig => FileDestination);
crate::impl_box_from!(FileDestination => dyn LogDestination);
