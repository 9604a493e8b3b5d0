//! # Drum Calc
//!
//! 使用量集計と発注照合の計算エンジン

pub mod aggregator;
pub mod reconciler;
pub mod report;

// Re-export 主要型
pub use aggregator::UsageAggregator;
pub use reconciler::{ScheduleCheck, ScheduleReconciler};

use rust_decimal::Decimal;
use serde::Serialize;

/// 工程ごとの必要量算定結果
#[derive(Debug, Clone, Serialize)]
pub struct ProcessRequirement {
    /// 工程名
    pub process: String,

    /// 1 台あたり使用量（g）
    pub usage_per_unit_g: Decimal,

    /// 総使用量（kg）
    pub total_mass_kg: Decimal,

    /// 必要ドラム缶数（実質容量で割った切り上げ）
    pub drums_required: u32,
}

/// 全工程の集計サマリ
#[derive(Debug, Clone, Serialize)]
pub struct FleetSummary {
    /// 総使用量（kg）
    pub total_mass_kg: Decimal,

    /// 必要本数（端数を含む連続量。丸めない）
    pub total_drums: Decimal,

    /// 1 日あたり搬入本数
    pub drums_per_distribution_day: Decimal,

    /// ドラム交換による総ロス見込み（kg）
    ///
    /// 工程ごとに切り上げた本数の合計 × 1 本あたりロス量。
    /// 連続量の `total_drums` からは計算しない。
    pub total_loss_kg: Decimal,
}

/// 集計の最終結果
#[derive(Debug, Clone, Serialize)]
pub struct UsagePlan {
    /// 工程別の必要量（工程名の昇順）
    pub requirements: Vec<ProcessRequirement>,

    /// 全体サマリ
    pub fleet: FleetSummary,
}

impl UsagePlan {
    /// 工程ごとの切り上げ本数の合計
    pub fn rounded_drum_total(&self) -> u32 {
        self.requirements.iter().map(|r| r.drums_required).sum()
    }
}
