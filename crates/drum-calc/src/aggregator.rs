//! 使用量集計

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashSet};

use drum_core::{PlannerConfig, PlannerError, RawUsageRow, Result};

use crate::{FleetSummary, ProcessRequirement, UsagePlan};

/// 使用量集計器
pub struct UsageAggregator;

impl UsageAggregator {
    /// 使用量行を集計し、工程ごとの必要本数と全体サマリを計算する
    ///
    /// 選択されなかった工程は結果から除外される（0 として残さない）。
    /// 出力順は工程名の昇順で固定。
    pub fn aggregate(
        rows: &[RawUsageRow],
        selected: &HashSet<String>,
        config: &PlannerConfig,
    ) -> Result<UsagePlan> {
        tracing::info!(
            "使用量集計を開始: 入力 {} 行, 選択工程 {} 件",
            rows.len(),
            selected.len()
        );

        // 工程ごとに 1 台あたり使用量 (g) を合算する。
        // 選択外の行も先に解析する（データ異常は選択内容に関係なく致命的）。
        let mut per_unit: BTreeMap<String, Decimal> = BTreeMap::new();
        for row in rows {
            let record = row.normalize()?;
            if !selected.contains(&record.process) {
                continue;
            }
            *per_unit.entry(record.process).or_insert(Decimal::ZERO) += record.usage_grams;
        }

        let usable = config.usable_capacity_kg();
        let units = Decimal::from(config.daily_units);
        let days = Decimal::from(config.operating_days);

        let mut requirements = Vec::with_capacity(per_unit.len());
        let mut total_mass_kg = Decimal::ZERO;
        let mut rounded_total: u32 = 0;

        for (process, usage_per_unit_g) in per_unit {
            // 総使用量 (kg) = 使用量 (g) × 台数 × 稼働日数 / 1000
            let mass_kg = usage_per_unit_g * units * days / Decimal::from(1000);

            // 必要本数は実質容量で割って工程ごとに切り上げる
            let drums_required = (mass_kg / usable).ceil().to_u32().ok_or_else(|| {
                PlannerError::Calculation(format!("必要本数が計算範囲を超えました（工程: {process}）"))
            })?;

            tracing::debug!("工程 {}: {} kg → {} 本", process, mass_kg, drums_required);

            total_mass_kg += mass_kg;
            rounded_total += drums_required;
            requirements.push(ProcessRequirement {
                process,
                usage_per_unit_g,
                total_mass_kg: mass_kg,
                drums_required,
            });
        }

        // 全体の必要本数は連続量（丸めない）。実質容量は検証済みで常に正。
        let total_drums = total_mass_kg / usable;
        let fleet = FleetSummary {
            total_mass_kg,
            total_drums,
            drums_per_distribution_day: total_drums / Decimal::from(config.distribution_days),
            total_loss_kg: config.loss_per_drum_kg * Decimal::from(rounded_total),
        };

        tracing::info!(
            "集計完了: 工程 {} 件, 総使用量 {} kg, 必要本数 {} 本",
            requirements.len(),
            fleet.total_mass_kg,
            fleet.total_drums
        );

        Ok(UsagePlan {
            requirements,
            fleet,
        })
    }
}
