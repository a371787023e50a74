// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use deunicode::deunicode;
use once_cell::sync::Lazy;
use regex::Regex;

static UNSAFE_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^A-Za-z0-9_.\-]").expect("filename character class is a valid regex")
});

/// 清洗上传文件名
///
/// 转写为 ASCII，去掉路径分隔符，空白折叠为下划线，只保留
/// `[A-Za-z0-9_.-]`，并去除首尾的点和下划线。结果可以安全地
/// 作为上传目录下的文件名使用，可能为空字符串。
pub fn secure_filename(filename: &str) -> String {
    let ascii = deunicode(filename).replace(['/', '\\'], " ");
    let joined = ascii.split_whitespace().collect::<Vec<_>>().join("_");
    UNSAFE_CHARS
        .replace_all(&joined, "")
        .trim_matches(|c| c == '.' || c == '_')
        .to_string()
}
