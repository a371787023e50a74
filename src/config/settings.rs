// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含服务器、数据库、上传存储、扫描规则、模型文件和指标导出等配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 数据库配置
    pub database: DatabaseSettings,
    /// 上传文件存储配置
    pub storage: StorageSettings,
    /// 扫描规则配置
    pub scan: ScanSettings,
    /// 模型文件配置
    pub models: ModelSettings,
    /// 指标导出配置
    pub metrics: MetricsSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 数据库配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// 数据库连接URL
    pub url: String,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout: Option<u64>,
}

/// 存储配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// 上传的原始 CSV 文件保存目录
    pub upload_dir: String,
}

/// 扫描规则配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ScanSettings {
    /// 存放攻击标签的列名
    pub required_column: String,
    /// 允许上传的文件扩展名（不区分大小写）
    pub allowed_extensions: Vec<String>,
    /// 上传请求体的最大字节数
    pub max_upload_bytes: usize,
}

/// 模型文件配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ModelSettings {
    /// 模型文件所在目录
    pub directory: String,
    /// 启动时需要加载的模型文件名
    pub artifacts: Vec<String>,
}

/// 指标导出配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    /// 是否启动 Prometheus 导出器
    pub enabled: bool,
    /// 导出器监听地址
    pub listen_address: String,
}

impl ScanSettings {
    /// 判断文件名的扩展名是否在允许列表中
    pub fn is_allowed_extension(&self, filename: &str) -> bool {
        match filename.rsplit_once('.') {
            Some((_, ext)) => self
                .allowed_extensions
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(ext)),
            None => false,
        }
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载默认值、`config/default`、`config/{APP_ENVIRONMENT}` 和
    /// `NETSCAN__` 前缀的环境变量，后者覆盖前者
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            // Default DB settings
            .set_default("database.url", "sqlite://results.db?mode=rwc")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            // Default Storage settings
            .set_default("storage.upload_dir", "./uploads")?
            // Default Scan settings
            .set_default("scan.required_column", "Num Attack")?
            .set_default("scan.allowed_extensions", vec!["csv"])?
            .set_default("scan.max_upload_bytes", 16 * 1024 * 1024)?
            // Default Model settings
            .set_default("models.directory", ".")?
            .set_default("models.artifacts", vec!["GRU_model.pkl"])?
            // Default Metrics settings
            .set_default("metrics.enabled", false)?
            .set_default("metrics.listen_address", "0.0.0.0:9000")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("NETSCAN")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("scan.allowed_extensions")
                    .with_list_parse_key("models.artifacts"),
            );

        builder.build()?.try_deserialize()
    }
}
