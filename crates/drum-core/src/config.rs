//! 計画設定モデル

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{PlannerError, Result};

/// シミュレーション設定
///
/// 操作者が入力する 5 項目の数値。生成時に検証され、不正な組み合わせは
/// 計算が始まる前に弾かれる。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// 稼働日数（生産）
    pub operating_days: u32,

    /// 1 日あたり生産台数
    pub daily_units: u32,

    /// ドラム缶容量 (kg)
    pub drum_capacity_kg: Decimal,

    /// 振り分け日数（搬入）
    pub distribution_days: u32,

    /// 1 本交換時のロス量 (kg)
    pub loss_per_drum_kg: Decimal,
}

impl PlannerConfig {
    /// 検証付きで設定を作成する
    pub fn new(
        operating_days: u32,
        daily_units: u32,
        drum_capacity_kg: Decimal,
        distribution_days: u32,
        loss_per_drum_kg: Decimal,
    ) -> Result<Self> {
        if operating_days == 0 {
            return Err(PlannerError::InvalidConfig(
                "稼働日数は 1 以上を指定してください".to_string(),
            ));
        }
        if daily_units == 0 {
            return Err(PlannerError::InvalidConfig(
                "1日あたり生産台数は 1 以上を指定してください".to_string(),
            ));
        }
        if distribution_days == 0 {
            return Err(PlannerError::InvalidConfig(
                "振り分け日数は 1 以上を指定してください".to_string(),
            ));
        }
        if drum_capacity_kg <= Decimal::ZERO {
            return Err(PlannerError::InvalidConfig(format!(
                "ドラム缶容量は正の値を指定してください: {drum_capacity_kg} kg"
            )));
        }
        if loss_per_drum_kg < Decimal::ZERO {
            return Err(PlannerError::InvalidConfig(format!(
                "ロス量は負にできません: {loss_per_drum_kg} kg"
            )));
        }
        if loss_per_drum_kg >= drum_capacity_kg {
            return Err(PlannerError::InvalidConfig(format!(
                "ロス量 {loss_per_drum_kg} kg が容量 {drum_capacity_kg} kg 以上のため実質容量が残りません"
            )));
        }

        Ok(Self {
            operating_days,
            daily_units,
            drum_capacity_kg,
            distribution_days,
            loss_per_drum_kg,
        })
    }

    /// ロスを除いた実質使用可能容量 (kg)
    ///
    /// 検証済みのため常に正。
    pub fn usable_capacity_kg(&self) -> Decimal {
        self.drum_capacity_kg - self.loss_per_drum_kg
    }
}

impl Default for PlannerConfig {
    /// 既定値（20 日稼働、1,100 台/日、250 kg 缶、15 日搬入、20 kg ロス）
    fn default() -> Self {
        Self {
            operating_days: 20,
            daily_units: 1100,
            drum_capacity_kg: Decimal::from(250),
            distribution_days: 15,
            loss_per_drum_kg: Decimal::from(20),
        }
    }
}
