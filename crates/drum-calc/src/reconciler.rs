//! 発注照合

use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use drum_core::{OrderGrid, PlannerError, Result};

use crate::FleetSummary;

/// 照合結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduleCheck {
    /// 自動計算した必要本数（連続量の切り上げ）
    pub required_drums: u32,

    /// 入力した合計本数
    pub entered_drums: u32,
}

impl ScheduleCheck {
    /// 入力合計が必要本数と一致しているか
    ///
    /// 表示用の判定であり、不一致でも保存は妨げない。
    pub fn matches(&self) -> bool {
        self.entered_drums == self.required_drums
    }
}

/// 発注スケジュール照合器
pub struct ScheduleReconciler;

impl ScheduleReconciler {
    /// 入力グリッドの合計本数と必要本数を突き合わせる
    pub fn reconcile(grid: &OrderGrid, fleet: &FleetSummary) -> Result<ScheduleCheck> {
        let required_drums = fleet.total_drums.ceil().to_u32().ok_or_else(|| {
            PlannerError::Calculation(format!(
                "必要本数が計算範囲を超えました: {}",
                fleet.total_drums
            ))
        })?;

        Ok(ScheduleCheck {
            required_drums,
            entered_drums: grid.total(),
        })
    }
}
