//! 配置文件加载与管理

use crate::decoder::DecodeOptions;
use crate::lang::Locale;
use crate::nbt_json::DEFAULT_EXPORT_DEPTH;
use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 当前目录下的配置文件名
pub const LOCAL_CONFIG_FILE: &str = "mcsave.toml";

/// 主配置结构
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 解码配置
    pub decode: DecodeOptions,
    /// 导出配置
    pub export: ExportConfig,
    /// 显示配置
    pub display: DisplayConfig,
}

/// 导出配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// 通用值转换的最大递归深度
    pub max_depth: usize,
    /// 输出带缩进的 JSON
    pub pretty: bool,
}

/// 显示配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub locale: Locale,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_EXPORT_DEPTH,
            pretty: true,
        }
    }
}

impl Config {
    /// 从文件加载配置
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("无法读取配置文件 {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("配置文件格式错误 {}", path.display()))?;
        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, content)?;
        Ok(())
    }

    /// 获取用户配置文件路径
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mcsave").join("config.toml"))
    }

    /// 按优先级加载配置：
    /// 1. 当前目录的 mcsave.toml
    /// 2. 用户配置目录的 config.toml
    /// 3. 默认配置
    pub fn load() -> Self {
        let local_config = Path::new(LOCAL_CONFIG_FILE);
        if let Some(config) = Self::try_load(local_config) {
            return config;
        }

        if let Some(user_config) = Self::default_config_path() {
            if let Some(config) = Self::try_load(&user_config) {
                return config;
            }
        }

        Self::default()
    }

    fn try_load(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        match Self::load_from_file(path) {
            Ok(config) => {
                debug!("已加载配置: {}", path.display());
                Some(config)
            }
            Err(e) => {
                warn!("忽略无效配置 {}: {:#}", path.display(), e);
                None
            }
        }
    }

    /// 生成默认配置文件内容
    pub fn default_toml() -> String {
        toml::to_string_pretty(&Self::default()).unwrap_or_default()
    }
}
