// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 置信度（confidence）：按类别生成合成置信度
/// - 标签提取（label_extractor）：从CSV中读取并解码攻击标签
/// - 最近扫描（latest_scan）：进程内的最近一次扫描缓存
/// - 扫描服务（scan_service）：串联上传、解析、入库与查询
pub mod confidence;
pub mod label_extractor;
pub mod latest_scan;
pub mod scan_service;
