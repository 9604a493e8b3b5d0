//! 表示用レポート整形
//!
//! 画面描画は呼び出し側の責務とし、ここでは表示文字列の組み立てだけを行う。

use rust_decimal::Decimal;

use crate::{FleetSummary, ScheduleCheck, UsagePlan};

fn round1(value: Decimal) -> Decimal {
    value.round_dp(1)
}

/// 工程ごとの必要本数（kg）と必要ドラム缶数の表
pub fn requirement_table(plan: &UsagePlan, material_key: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "工程ごとの必要本数（kg）と必要ドラム缶数 [{material_key}]\n"
    ));
    out.push_str("工程 | 1台あたり使用量（g） | 総使用量（kg） | 必要ドラム缶数\n");

    for req in &plan.requirements {
        out.push_str(&format!(
            "{} | {} | {} kg | {} 本\n",
            req.process,
            req.usage_per_unit_g,
            round1(req.total_mass_kg),
            req.drums_required
        ));
    }

    out
}

/// 総使用量の合計と日別振り分けの表示行
pub fn fleet_summary_lines(fleet: &FleetSummary, distribution_days: u32) -> Vec<String> {
    vec![
        format!(
            "全工程の必要本数 合計: {} 本",
            round1(fleet.total_drums)
        ),
        format!(
            "{}日で振り分けた場合: 1日あたり {} 本",
            distribution_days,
            round1(fleet.drums_per_distribution_day)
        ),
        format!(
            "ドラム交換による総ロス見込み: {} kg",
            round1(fleet.total_loss_kg)
        ),
    ]
}

/// 照合結果の表示行（合計・必要本数・一致判定メッセージ）
pub fn check_lines(check: &ScheduleCheck) -> Vec<String> {
    let verdict = if check.matches() {
        "入力されたスケジュールと必要本数が一致しています。"
    } else {
        "入力された本数が必要本数と一致していません。"
    };

    vec![
        format!("入力した合計本数: {} 本", check.entered_drums),
        format!("自動計算した必要本数: {} 本", check.required_drums),
        verdict.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProcessRequirement;
    use std::str::FromStr;

    fn sample_plan() -> UsagePlan {
        UsagePlan {
            requirements: vec![ProcessRequirement {
                process: "接着".to_string(),
                usage_per_unit_g: Decimal::from(150),
                total_mass_kg: Decimal::from(3300),
                drums_required: 15,
            }],
            fleet: FleetSummary {
                total_mass_kg: Decimal::from(3300),
                total_drums: Decimal::from_str("14.348").unwrap(),
                drums_per_distribution_day: Decimal::from_str("0.957").unwrap(),
                total_loss_kg: Decimal::from(300),
            },
        }
    }

    #[test]
    fn test_requirement_table_contains_rows() {
        let table = requirement_table(&sample_plan(), "1085G");

        assert!(table.contains("[1085G]"));
        assert!(table.contains("接着"));
        assert!(table.contains("15 本"));
        assert!(table.contains("3300 kg"));
    }

    #[test]
    fn test_fleet_lines_round_to_one_decimal() {
        let lines = fleet_summary_lines(&sample_plan().fleet, 15);

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("14.3 本"));
        assert!(lines[1].contains("15日"));
        assert!(lines[2].contains("300 kg"));
    }

    #[test]
    fn test_check_lines_report_mismatch() {
        let check = ScheduleCheck {
            required_drums: 34,
            entered_drums: 30,
        };
        let lines = check_lines(&check);

        assert!(lines[0].contains("30 本"));
        assert!(lines[1].contains("34 本"));
        assert!(lines[2].contains("一致していません"));
    }

    #[test]
    fn test_check_lines_report_match() {
        let check = ScheduleCheck {
            required_drums: 34,
            entered_drums: 34,
        };
        let lines = check_lines(&check);

        assert!(lines[2].contains("一致しています"));
    }
}
