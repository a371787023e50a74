// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 攻击类别枚举
///
/// 流量捕获文件中 `Num Attack` 列的数值标签所对应的语义类别。
/// 0 到 9 对应十个固定类别，其余数值一律归入 `Unknown`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AttackCategory {
    /// 正常流量
    #[serde(rename = "Benign")]
    Benign,
    #[serde(rename = "backdoor")]
    Backdoor,
    #[serde(rename = "ddos")]
    Ddos,
    #[serde(rename = "dos")]
    Dos,
    #[serde(rename = "injection")]
    Injection,
    /// 中间人攻击
    #[serde(rename = "mitm")]
    Mitm,
    #[serde(rename = "password")]
    Password,
    #[serde(rename = "ransomware")]
    Ransomware,
    #[serde(rename = "scanning")]
    Scanning,
    #[serde(rename = "xss")]
    Xss,
    /// 无法识别的标签
    #[default]
    #[serde(rename = "Unknown")]
    Unknown,
}

impl AttackCategory {
    /// 全部十个已知类别，按标签编码排序
    pub const KNOWN: [AttackCategory; 10] = [
        AttackCategory::Benign,
        AttackCategory::Backdoor,
        AttackCategory::Ddos,
        AttackCategory::Dos,
        AttackCategory::Injection,
        AttackCategory::Mitm,
        AttackCategory::Password,
        AttackCategory::Ransomware,
        AttackCategory::Scanning,
        AttackCategory::Xss,
    ];

    /// 将数值标签解码为攻击类别
    ///
    /// # 参数
    ///
    /// * `code` - CSV 中读取到的标签编码
    ///
    /// # 返回值
    ///
    /// 0-9 返回对应类别，其他任何数值返回 `Unknown`
    pub fn from_code(code: i64) -> Self {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::KNOWN.get(index).copied())
            .unwrap_or(AttackCategory::Unknown)
    }

    /// 类别名称，与持久化及接口输出中使用的字符串一致
    pub fn as_str(&self) -> &'static str {
        match self {
            AttackCategory::Benign => "Benign",
            AttackCategory::Backdoor => "backdoor",
            AttackCategory::Ddos => "ddos",
            AttackCategory::Dos => "dos",
            AttackCategory::Injection => "injection",
            AttackCategory::Mitm => "mitm",
            AttackCategory::Password => "password",
            AttackCategory::Ransomware => "ransomware",
            AttackCategory::Scanning => "scanning",
            AttackCategory::Xss => "xss",
            AttackCategory::Unknown => "Unknown",
        }
    }

    /// 该类别的置信度取值区间（百分比，闭区间）
    ///
    /// 越容易从流量特征中辨认的类别区间越高
    pub fn confidence_range(&self) -> (f64, f64) {
        match self {
            AttackCategory::Benign => (85.0, 97.0),
            AttackCategory::Ddos => (75.0, 92.0),
            AttackCategory::Dos => (78.0, 90.0),
            AttackCategory::Scanning => (82.0, 95.0),
            AttackCategory::Xss => (70.0, 88.0),
            AttackCategory::Injection => (65.0, 85.0),
            AttackCategory::Password => (72.0, 90.0),
            AttackCategory::Backdoor => (60.0, 82.0),
            AttackCategory::Mitm => (55.0, 78.0),
            AttackCategory::Ransomware => (68.0, 85.0),
            AttackCategory::Unknown => (50.0, 70.0),
        }
    }

    /// 是否为正常流量
    pub fn is_benign(&self) -> bool {
        matches!(self, AttackCategory::Benign)
    }

    /// 面向展示的标签，非正常流量追加 " attack" 后缀
    pub fn display_label(&self) -> String {
        if self.is_benign() {
            self.as_str().to_string()
        } else {
            format!("{} attack", self.as_str())
        }
    }
}

impl fmt::Display for AttackCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttackCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Benign" => Ok(AttackCategory::Benign),
            "backdoor" => Ok(AttackCategory::Backdoor),
            "ddos" => Ok(AttackCategory::Ddos),
            "dos" => Ok(AttackCategory::Dos),
            "injection" => Ok(AttackCategory::Injection),
            "mitm" => Ok(AttackCategory::Mitm),
            "password" => Ok(AttackCategory::Password),
            "ransomware" => Ok(AttackCategory::Ransomware),
            "scanning" => Ok(AttackCategory::Scanning),
            "xss" => Ok(AttackCategory::Xss),
            "Unknown" => Ok(AttackCategory::Unknown),
            _ => Err(()),
        }
    }
}
