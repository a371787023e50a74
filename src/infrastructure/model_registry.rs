// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};

use crate::config::settings::ModelSettings;

/// 已加载的模型文件
#[derive(Debug, Clone)]
pub struct ModelArtifact {
    pub name: String,
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

/// 模型文件注册表
///
/// 启动时加载配置的模型文件。分类直接读取 CSV 中的标签列，
/// 这些文件只用于报告进程是否处于完整模式，不参与推理。
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    artifacts: Vec<ModelArtifact>,
    missing: Vec<String>,
    loaded: bool,
}

impl ModelRegistry {
    /// 按配置加载模型文件
    ///
    /// 任一文件缺失或读取失败时进入演示模式，`models_loaded()` 返回 false
    pub async fn load(settings: &ModelSettings) -> Self {
        let directory = Path::new(&settings.directory);

        let missing: Vec<String> = settings
            .artifacts
            .iter()
            .filter(|name| !directory.join(name).is_file())
            .cloned()
            .collect();

        if !missing.is_empty() {
            warn!("Missing model files: {:?}", missing);
            warn!("Running in demo mode - no ML models available");
            return Self {
                artifacts: Vec::new(),
                missing,
                loaded: false,
            };
        }

        let mut artifacts = Vec::with_capacity(settings.artifacts.len());
        for name in &settings.artifacts {
            let path = directory.join(name);
            match fs::read(&path).await {
                Ok(bytes) => artifacts.push(ModelArtifact {
                    name: name.clone(),
                    path,
                    bytes,
                }),
                Err(e) => {
                    warn!("Error loading model {}: {}", path.display(), e);
                    return Self {
                        artifacts: Vec::new(),
                        missing: vec![name.clone()],
                        loaded: false,
                    };
                }
            }
        }

        info!("All {} models loaded successfully", artifacts.len());
        Self {
            artifacts,
            missing: Vec::new(),
            loaded: true,
        }
    }

    /// 演示模式下的空注册表
    pub fn demo() -> Self {
        Self::default()
    }

    pub fn models_loaded(&self) -> bool {
        self.loaded
    }

    pub fn artifacts(&self) -> &[ModelArtifact] {
        &self.artifacts
    }

    pub fn missing(&self) -> &[String] {
        &self.missing
    }
}
