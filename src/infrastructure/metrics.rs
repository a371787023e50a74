// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::describe_counter;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

use crate::config::settings::MetricsSettings;

/// 初始化指标系统
///
/// 未启用时不安装任何 recorder，`metrics` 宏退化为空操作
pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        info!("Metrics exporter disabled");
        return;
    }

    let addr: SocketAddr = match settings.listen_address.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!(
                "Invalid metrics address '{}': {}. Metrics exporter not started.",
                settings.listen_address, e
            );
            return;
        }
    };

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}. This might happen if the port is already in use.", e);
        return;
    }

    describe_counter!(
        "scan_uploads_total",
        "Total number of successfully processed uploads, labelled by attack category"
    );
    describe_counter!(
        "scan_upload_failures_total",
        "Total number of rejected or failed uploads, labelled by reason"
    );
    describe_counter!(
        "scan_results_archived_total",
        "Total number of archive requests that succeeded"
    );

    info!("Metrics exporter listening on {}", addr);
}
