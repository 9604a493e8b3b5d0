//! 使用量集計の簡単な実行例

use drum_calc::{report, ScheduleReconciler, UsageAggregator};
use drum_core::{OrderGrid, PlannerConfig, RawUsageRow};
use std::collections::HashSet;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== 使用量と必要本数シミュレーション例 ===\n");

    // 使用量データ（本来はワークブックから読み込む）
    let rows = vec![
        RawUsageRow::new("接着", "127.5g"),
        RawUsageRow::new("接着", "32.5g"),
        RawUsageRow::new("シール貼付", "200g"),
    ];

    let config = PlannerConfig::default();
    let selected: HashSet<String> = rows.iter().map(|r| r.process.clone()).collect();

    let plan = UsageAggregator::aggregate(&rows, &selected, &config)?;

    print!("{}", report::requirement_table(&plan, "1085G"));
    println!();
    for line in report::fleet_summary_lines(&plan.fleet, config.distribution_days) {
        println!("{line}");
    }

    // 空の発注グリッドと照合してみる
    let grid = OrderGrid::for_distribution_days(config.distribution_days);
    let check = ScheduleReconciler::reconcile(&grid, &plan.fleet)?;
    println!();
    for line in report::check_lines(&check) {
        println!("{line}");
    }

    Ok(())
}
