// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

use crate::domain::repositories::scan_result_repository::RepositoryError;
use crate::domain::repositories::storage_repository::StorageError;

/// 扫描流程错误类型
///
/// 覆盖上传校验、CSV 解析以及持久化过程中的所有失败情形
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("No file part")]
    NoFilePart,

    #[error("No file selected")]
    NoFileSelected,

    #[error("Invalid file type")]
    InvalidFileType,

    #[error("Column \"{0}\" not found in CSV file")]
    MissingColumn(String),

    #[error("Invalid date format. Use YYYY-MM-DD")]
    InvalidDate,

    #[error("Invalid upload: {0}")]
    Upload(String),

    #[error("Uploaded file is too large")]
    PayloadTooLarge,

    #[error("Result not found")]
    NotFound,

    #[error("Processing error: {0}")]
    Parse(String),

    #[error("Processing error: {0}")]
    Storage(#[from] StorageError),

    #[error("Processing error: {0}")]
    Repository(#[from] RepositoryError),
}

impl ScanError {
    /// 是否由客户端输入引起
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ScanError::NoFilePart
                | ScanError::NoFileSelected
                | ScanError::InvalidFileType
                | ScanError::MissingColumn(_)
                | ScanError::InvalidDate
                | ScanError::Upload(_)
                | ScanError::PayloadTooLarge
                | ScanError::NotFound
        )
    }

    /// 用于指标标签的简短原因
    pub fn reason(&self) -> &'static str {
        match self {
            ScanError::NoFilePart => "no_file_part",
            ScanError::NoFileSelected => "no_file_selected",
            ScanError::InvalidFileType => "invalid_file_type",
            ScanError::MissingColumn(_) => "missing_column",
            ScanError::InvalidDate => "invalid_date",
            ScanError::Upload(_) => "upload",
            ScanError::PayloadTooLarge => "payload_too_large",
            ScanError::NotFound => "not_found",
            ScanError::Parse(_) => "parse",
            ScanError::Storage(_) => "storage",
            ScanError::Repository(_) => "repository",
        }
    }
}
