//! 使用量データモデル

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{PlannerError, Result};

/// ワークシートから読み取ったままの 1 行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawUsageRow {
    /// 工程名
    pub process: String,

    /// 使用量（"127.5g" のような単位付き自由入力）
    pub usage: String,
}

impl RawUsageRow {
    /// 新しい生データ行を作成
    pub fn new(process: impl Into<String>, usage: impl Into<String>) -> Self {
        Self {
            process: process.into(),
            usage: usage.into(),
        }
    }

    /// 使用量文字列を解析して正規化済みレコードへ変換
    pub fn normalize(&self) -> Result<UsageRecord> {
        Ok(UsageRecord {
            process: self.process.trim().to_string(),
            usage_grams: parse_usage(&self.usage)?,
        })
    }
}

/// 正規化済みの使用量レコード
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageRecord {
    /// 工程名（前後空白を除去済み）
    pub process: String,

    /// 1 台あたり使用量（g）
    pub usage_grams: Decimal,
}

/// 使用量文字列を g 単位の数値として解析する
///
/// 単位文字 "g"/"G" と空白（全角空白を含む）を取り除いたうえで数値として
/// 解釈する。残りが空文字列の場合は 0 とみなす。それ以外で数値として
/// 読めない場合、および負数はエラー。
pub fn parse_usage(raw: &str) -> Result<Decimal> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != 'g' && *c != 'G')
        .collect();

    if cleaned.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let value = Decimal::from_str(&cleaned)
        .map_err(|_| PlannerError::UsageParse(raw.to_string()))?;

    if value < Decimal::ZERO {
        return Err(PlannerError::UsageParse(raw.to_string()));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("127.5g", "127.5")]
    #[case("127.5 G", "127.5")]
    #[case(" 127.5 ", "127.5")]
    #[case("", "0")]
    #[case("  ", "0")]
    #[case("g", "0")]
    #[case("　450g　", "450")] // 全角空白
    #[case("1200", "1200")]
    fn test_parse_usage_strips_unit_and_whitespace(#[case] raw: &str, #[case] expected: &str) {
        let value = parse_usage(raw).unwrap();
        assert_eq!(value, Decimal::from_str(expected).unwrap());
    }

    #[rstest]
    #[case("abc")]
    #[case("12.5kg")]
    #[case("12..5g")]
    #[case("-50g")]
    fn test_parse_usage_rejects_garbage(#[case] raw: &str) {
        let err = parse_usage(raw).unwrap_err();
        assert!(matches!(err, PlannerError::UsageParse(ref s) if s == raw));
    }

    #[test]
    fn test_normalize_trims_process_label() {
        let row = RawUsageRow::new(" 接着 ", "100g");
        let record = row.normalize().unwrap();

        assert_eq!(record.process, "接着");
        assert_eq!(record.usage_grams, Decimal::from(100));
    }
}
