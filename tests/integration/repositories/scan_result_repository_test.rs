// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::create_test_db;
use chrono::{NaiveDate, NaiveDateTime};
use netscan::domain::models::attack::AttackCategory;
use netscan::domain::models::scan_result::NewScanResult;
use netscan::domain::repositories::scan_result_repository::{
    RepositoryError, ScanResultQuery, ScanResultRepository,
};
use netscan::infrastructure::repositories::scan_result_repo_impl::ScanResultRepositoryImpl;

fn at(date: &str, time: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(&format!("{} {}", date, time), "%Y-%m-%d %H:%M:%S").unwrap()
}

async fn seeded_repo() -> ScanResultRepositoryImpl {
    let repo = ScanResultRepositoryImpl::new(create_test_db().await);

    for (name, category, created_at) in [
        ("Monday.csv", AttackCategory::Ddos, at("2024-03-04", "23:59:59")),
        ("tuesday.csv", AttackCategory::Benign, at("2024-03-05", "00:00:00")),
        ("tuesday_late.csv", AttackCategory::Xss, at("2024-03-05", "18:30:00")),
        // Inserted last, captured first
        ("backfill.csv", AttackCategory::Dos, at("2024-03-01", "08:00:00")),
    ] {
        repo.create(NewScanResult::new(name, category, 88.5, created_at))
            .await
            .unwrap();
    }

    repo
}

/// 测试记录的插入与读取
#[tokio::test]
async fn test_create_and_find() {
    let repo = ScanResultRepositoryImpl::new(create_test_db().await);

    let created = repo
        .create(NewScanResult::new(
            "capture.csv",
            AttackCategory::Injection,
            81.25,
            at("2024-01-01", "12:00:00"),
        ))
        .await
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.result, "injection");
    assert_eq!(created.category(), AttackCategory::Injection);
    assert_eq!(created.probability, Some(81.25));
    assert_eq!(created.prediction_correct, None);
    assert!(!created.archived);

    let found = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found.filename, "capture.csv");
    assert_eq!(found.created_at, at("2024-01-01", "12:00:00"));

    assert!(repo.find_by_id(created.id + 100).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_orders_newest_first() {
    let repo = seeded_repo().await;

    let all = repo.list(ScanResultQuery::default()).await.unwrap();
    let names: Vec<&str> = all.iter().map(|r| r.filename.as_str()).collect();
    assert_eq!(
        names,
        vec!["tuesday_late.csv", "tuesday.csv", "Monday.csv", "backfill.csv"]
    );
    // Highest id, oldest timestamp
    let last = all.last().unwrap();
    assert!(all.iter().all(|r| r.id <= last.id));
}

#[tokio::test]
async fn test_filename_filter_is_case_insensitive() {
    let repo = seeded_repo().await;

    let query = ScanResultQuery {
        filename_contains: Some("TUESDAY".to_string()),
        ..Default::default()
    };
    assert_eq!(repo.list(query).await.unwrap().len(), 2);

    let query = ScanResultQuery {
        filename_contains: Some("monday".to_string()),
        ..Default::default()
    };
    let hits = repo.list(query).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].filename, "Monday.csv");
}

#[tokio::test]
async fn test_date_filter_covers_whole_day() {
    let repo = seeded_repo().await;

    let query = ScanResultQuery {
        date: NaiveDate::from_ymd_opt(2024, 3, 5),
        ..Default::default()
    };
    let hits = repo.list(query).await.unwrap();
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|r| r.filename.starts_with("tuesday")));

    let query = ScanResultQuery {
        date: NaiveDate::from_ymd_opt(2024, 3, 4),
        filename_contains: Some("tues".to_string()),
        ..Default::default()
    };
    assert!(repo.list(query).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_archive_partitions_views() {
    let repo = seeded_repo().await;
    let all = repo.list(ScanResultQuery::default()).await.unwrap();
    let target = all[1].id;

    let archived = repo.archive(target).await.unwrap();
    assert!(archived.archived);

    let active = repo.list(ScanResultQuery::active()).await.unwrap();
    let archived_list = repo.list(ScanResultQuery::archived()).await.unwrap();
    assert_eq!(active.len(), 3);
    assert_eq!(archived_list.len(), 1);
    assert_eq!(archived_list[0].id, target);
    assert!(active.iter().all(|r| r.id != target));

    // Idempotent
    assert!(repo.archive(target).await.unwrap().archived);
}

#[tokio::test]
async fn test_archive_missing_record() {
    let repo = ScanResultRepositoryImpl::new(create_test_db().await);

    let err = repo.archive(7).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound));
}
