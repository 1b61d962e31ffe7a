// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::MetricsSettings;
use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

/// 实体写操作计数器
pub const ENTITY_OPERATIONS_TOTAL: &str = "entity_operations_total";
/// 条件查询计数器
pub const CRITERIA_QUERIES_TOTAL: &str = "criteria_queries_total";

/// 初始化指标系统
///
/// 未启用时不安装记录器，`counter!` 调用变为空操作
pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        info!("Metrics exporter disabled");
        return;
    }

    let addr: SocketAddr = match settings.listen_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!(
                "Invalid metrics listen address '{}': {}",
                settings.listen_addr, e
            );
            return;
        }
    };

    // Port may already be taken during development
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}", e);
        return;
    }

    describe_counter!(
        ENTITY_OPERATIONS_TOTAL,
        "Total number of create, update and delete operations per entity"
    );
    describe_counter!(
        CRITERIA_QUERIES_TOTAL,
        "Total number of criteria queries per entity and kind (list, page, count)"
    );

    info!("Metrics exporter listening on {}", addr);
}

/// 记录一次实体写操作
pub fn record_entity_operation(entity: &'static str, operation: &'static str) {
    counter!(ENTITY_OPERATIONS_TOTAL, "entity" => entity, "operation" => operation).increment(1);
}

/// 记录一次条件查询
pub fn record_criteria_query(entity: &'static str, kind: &'static str) {
    counter!(CRITERIA_QUERIES_TOTAL, "entity" => entity, "kind" => kind).increment(1);
}
