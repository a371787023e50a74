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

use crate::domain::models::scan_result::{NewScanResult, ScanResult};
use crate::domain::repositories::scan_result_repository::{
    RepositoryError, ScanResultQuery, ScanResultRepository,
};
use crate::infrastructure::database::entities::scan_result as scan_result_entity;
use async_trait::async_trait;
use chrono::{Duration, NaiveTime};
use sea_orm::sea_query::{Expr, Func};
use sea_orm::*;
use std::sync::Arc;

/// 扫描结果仓库实现
pub struct ScanResultRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl ScanResultRepositoryImpl {
    /// 创建新的扫描结果仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    ///
    /// # 返回值
    ///
    /// 返回新的扫描结果仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<scan_result_entity::Model> for ScanResult {
    fn from(m: scan_result_entity::Model) -> Self {
        ScanResult {
            id: m.id,
            filename: m.filename,
            result: m.result,
            created_at: m.created_at,
            archived: m.archived,
            probability: m.probability,
            prediction_correct: m.prediction_correct,
        }
    }
}

#[async_trait]
impl ScanResultRepository for ScanResultRepositoryImpl {
    async fn create(&self, result: NewScanResult) -> Result<ScanResult, RepositoryError> {
        let active_model = scan_result_entity::ActiveModel {
            id: NotSet,
            filename: Set(result.filename),
            result: Set(result.category.to_string()),
            created_at: Set(result.created_at),
            archived: Set(false),
            probability: Set(Some(result.probability)),
            prediction_correct: Set(None),
        };

        let model = active_model.insert(self.db.as_ref()).await?;
        Ok(model.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ScanResult>, RepositoryError> {
        let model = scan_result_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn list(&self, query: ScanResultQuery) -> Result<Vec<ScanResult>, RepositoryError> {
        let mut select = scan_result_entity::Entity::find();

        if let Some(archived) = query.archived {
            select = select.filter(scan_result_entity::Column::Archived.eq(archived));
        }

        if let Some(needle) = query.filename_contains {
            // LIKE is case-sensitive on Postgres, so compare lowercased
            let lowered = Func::lower(Expr::col((
                scan_result_entity::Entity,
                scan_result_entity::Column::Filename,
            )));
            select = select
                .filter(Expr::expr(lowered).like(format!("%{}%", needle.to_lowercase())));
        }

        if let Some(date) = query.date {
            let day_start = date.and_time(NaiveTime::MIN);
            let next_day = day_start + Duration::days(1);
            select = select
                .filter(scan_result_entity::Column::CreatedAt.gte(day_start))
                .filter(scan_result_entity::Column::CreatedAt.lt(next_day));
        }

        let models = select
            .order_by_desc(scan_result_entity::Column::CreatedAt)
            .order_by_desc(scan_result_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn archive(&self, id: i32) -> Result<ScanResult, RepositoryError> {
        let model = scan_result_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?;

        if model.archived {
            return Ok(model.into());
        }

        let mut active_model: scan_result_entity::ActiveModel = model.into();
        active_model.archived = Set(true);

        let updated = active_model.update(self.db.as_ref()).await?;
        Ok(updated.into())
    }
}
