// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use rand::Rng;

use crate::domain::models::attack::AttackCategory;

/// 为攻击类别生成合成置信度
///
/// 在类别的置信度区间内均匀取值并保留两位小数。该值仅用于展示，
/// 并非模型输出的概率。
///
/// # 参数
///
/// * `category` - 攻击类别
/// * `rng` - 随机数生成器
///
/// # 返回值
///
/// 落在 `category.confidence_range()` 闭区间内的百分比
pub fn generate_confidence<R: Rng + ?Sized>(category: AttackCategory, rng: &mut R) -> f64 {
    let (min, max) = category.confidence_range();
    let raw = rng.random_range(min..=max);
    round_to_hundredths(raw).clamp(min, max)
}

/// 使用线程本地随机数生成器生成置信度
pub fn random_confidence(category: AttackCategory) -> f64 {
    generate_confidence(category, &mut rand::rng())
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
