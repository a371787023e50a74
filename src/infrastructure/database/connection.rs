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

use crate::config::settings::DatabaseSettings;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use std::time::Duration;
use tracing::info;

/// 连接的最长存活时间
const MAX_LIFETIME: Duration = Duration::from_secs(3600);

/// 是否为进程内存 SQLite 数据库
fn is_in_memory_sqlite(url: &str) -> bool {
    url.starts_with("sqlite::memory:") || url.contains("mode=memory")
}

/// 根据配置构造连接选项
///
/// 内存 SQLite 的每个连接各自持有一个空库，因此固定为单连接
pub fn connect_options(settings: &DatabaseSettings) -> ConnectOptions {
    let mut opt = ConnectOptions::new(settings.url.clone());
    let in_memory = is_in_memory_sqlite(&settings.url);

    let (max, min) = if in_memory {
        (Some(1), Some(1))
    } else {
        (settings.max_connections, settings.min_connections)
    };
    if let Some(max) = max {
        opt.max_connections(max);
    }
    if let Some(min) = min {
        opt.min_connections(min);
    }

    if let Some(secs) = settings.connect_timeout {
        let timeout = Duration::from_secs(secs);
        opt.connect_timeout(timeout).acquire_timeout(timeout);
    }
    if let Some(secs) = settings.idle_timeout {
        opt.idle_timeout(Duration::from_secs(secs));
    }

    // Per-statement logging is noise next to the HTTP trace layer
    opt.max_lifetime(MAX_LIFETIME).sqlx_logging(false);
    opt
}

/// 创建数据库连接池
///
/// # 返回值
///
/// * `Ok(DatabaseConnection)` - 数据库连接
/// * `Err(DbErr)` - 连接过程中出现的错误
pub async fn create_pool(settings: &DatabaseSettings) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(connect_options(settings)).await?;
    info!("Connected to {:?} database", db.get_database_backend());
    Ok(db)
}

/// 连接数据库并应用全部迁移
pub async fn connect_and_migrate(
    settings: &DatabaseSettings,
) -> Result<DatabaseConnection, DbErr> {
    let db = create_pool(settings).await?;

    Migrator::up(&db, None).await?;
    info!("Database migrations applied");

    Ok(db)
}
