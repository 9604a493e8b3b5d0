//! 発注スケジュールグリッド

use serde::{Deserialize, Serialize};

use crate::{PlannerError, Result};

/// 曜日ラベル（発注入力の 5 枠、月〜金の固定サイクル）
pub const WEEKDAY_LABELS: [&str; 5] = ["月", "火", "水", "木", "金"];

/// 曜日ラベルから枠インデックスを引く
pub fn weekday_index(label: &str) -> Option<usize> {
    WEEKDAY_LABELS.iter().position(|l| *l == label.trim())
}

/// 週×曜日の発注数入力グリッド
///
/// 各枠は 0 で初期化される。平坦化は週→曜日の順（週 w の曜日 d が
/// スロット `w * 5 + d`）で、テンプレート書き込みの列順と一致する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderGrid {
    weeks: Vec<[u32; 5]>,
}

impl OrderGrid {
    /// 指定週数の空グリッドを作成
    pub fn new(week_count: usize) -> Self {
        Self {
            weeks: vec![[0; 5]; week_count],
        }
    }

    /// 振り分け日数から必要な週数（5 日 1 週の切り上げ）を割り出して作成
    pub fn for_distribution_days(distribution_days: u32) -> Self {
        Self::new(distribution_days.div_ceil(5) as usize)
    }

    /// 週数
    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    /// スロット総数（週数 × 5）
    pub fn slot_count(&self) -> usize {
        self.weeks.len() * WEEKDAY_LABELS.len()
    }

    /// 指定枠の発注数を設定する（週・曜日とも 0 始まり）
    pub fn set(&mut self, week: usize, weekday: usize, quantity: u32) -> Result<()> {
        if week >= self.weeks.len() || weekday >= WEEKDAY_LABELS.len() {
            return Err(PlannerError::InvalidConfig(format!(
                "発注枠の範囲外です: {}週目 {}番目（週数 {}）",
                week + 1,
                weekday + 1,
                self.weeks.len()
            )));
        }
        self.weeks[week][weekday] = quantity;
        Ok(())
    }

    /// 指定枠の発注数（範囲外は 0）
    pub fn get(&self, week: usize, weekday: usize) -> u32 {
        self.weeks
            .get(week)
            .and_then(|w| w.get(weekday))
            .copied()
            .unwrap_or(0)
    }

    /// 入力した合計本数
    pub fn total(&self) -> u32 {
        self.weeks.iter().flatten().sum()
    }

    /// 週→曜日の順で平坦化した値の列
    pub fn flattened(&self) -> impl Iterator<Item = u32> + '_ {
        self.weeks.iter().flatten().copied()
    }
}

/// 保存先の識別子（工程 × 材質）
///
/// テンプレート行の先頭 2 列とそれぞれ照合される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleTarget {
    /// 工程名
    pub process: String,

    /// 材質ラベル
    pub material: String,
}

impl ScheduleTarget {
    /// 前後空白を除去して識別子を作成
    pub fn new(process: impl Into<String>, material: impl Into<String>) -> Self {
        Self {
            process: process.into().trim().to_string(),
            material: material.into().trim().to_string(),
        }
    }
}
