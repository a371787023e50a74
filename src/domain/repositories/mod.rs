// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
///
/// 包含的仓库接口：
/// - 扫描结果仓库（scan_result_repository）：管理扫描记录的持久化与归档
/// - 存储仓库（storage_repository）：管理上传文件的存储
pub mod scan_result_repository;
pub mod storage_repository;
