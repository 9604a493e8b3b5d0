//! 結合テスト
//!
//! 使用量ワークブックの読み込みから集計・照合・テンプレート保存までを
//! 実ファイルで通しで確認する。

use rust_decimal::Decimal;
use rust_xlsxwriter::Workbook;
use std::collections::HashSet;
use std::path::Path;
use tempfile::TempDir;

use drumplan::{
    CellValue, OrderGrid, OrderTemplate, PlannerConfig, ScheduleReconciler, ScheduleTarget,
    UsageAggregator, UsageSource, SCHEDULE_START_COLUMN,
};

/// 使用量ワークブック（工程・使用量・無関係な列）を作る
fn write_usage_fixture(path: &Path) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    sheet.write_string(0, 0, "工程").unwrap();
    sheet.write_string(0, 1, "使用量").unwrap();
    sheet.write_string(0, 2, "備考").unwrap();

    sheet.write_string(1, 0, "接着").unwrap();
    sheet.write_string(1, 1, "100g").unwrap();
    sheet.write_string(1, 2, "ラインA").unwrap();

    sheet.write_string(2, 0, "接着").unwrap();
    sheet.write_string(2, 1, " 50 G ").unwrap();

    sheet.write_string(3, 0, "シール貼付").unwrap();
    sheet.write_string(3, 1, "200g").unwrap();

    workbook.save(path).unwrap();
}

/// 発注テンプレート（ヘッダー + 2 データ行）を作る
fn write_template_fixture(path: &Path) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("発注スケジュール").unwrap();

    sheet.write_string(0, 0, "工程").unwrap();
    sheet.write_string(0, 1, "材質").unwrap();

    sheet.write_string(1, 0, "接着").unwrap();
    sheet.write_string(1, 1, "1085G").unwrap();
    sheet.write_number(1, 2, 99.0).unwrap();

    sheet.write_string(2, 0, "シール貼付").unwrap();
    sheet.write_string(2, 1, "1085G").unwrap();

    workbook.save(path).unwrap();
}

#[test]
fn test_full_flow_from_workbook_to_saved_schedule() {
    let dir = TempDir::new().unwrap();
    let usage_path = dir.path().join("1085G使用量.xlsx");
    let template_path = dir.path().join("発注テンプレート.xlsx");
    write_usage_fixture(&usage_path);
    write_template_fixture(&template_path);

    // 1. 使用量の読み込み
    let rows = UsageSource::load(&usage_path).unwrap();
    assert_eq!(rows.len(), 3);

    // 2. 集計（接着 150g/台, シール貼付 200g/台）
    let config = PlannerConfig::new(20, 1100, Decimal::from(250), 15, Decimal::from(20)).unwrap();
    let selected: HashSet<String> = ["接着", "シール貼付"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let plan = UsageAggregator::aggregate(&rows, &selected, &config).unwrap();

    assert_eq!(plan.requirements.len(), 2);
    let bonding = plan
        .requirements
        .iter()
        .find(|r| r.process == "接着")
        .unwrap();
    assert_eq!(bonding.total_mass_kg, Decimal::from(3300));
    assert_eq!(bonding.drums_required, 15);

    let sealing = plan
        .requirements
        .iter()
        .find(|r| r.process == "シール貼付")
        .unwrap();
    assert_eq!(sealing.total_mass_kg, Decimal::from(4400));
    assert_eq!(sealing.drums_required, 20);

    assert_eq!(plan.fleet.total_mass_kg, Decimal::from(7700));
    assert_eq!(plan.fleet.total_loss_kg, Decimal::from(700));

    // 3. 発注グリッド入力（合計 34 本 = 必要本数の切り上げと一致）
    let mut grid = OrderGrid::for_distribution_days(config.distribution_days);
    assert_eq!(grid.week_count(), 3);
    for week in 0..3 {
        for weekday in 0..5 {
            grid.set(week, weekday, 2).unwrap();
        }
    }
    grid.set(0, 0, 6).unwrap(); // 30 - 2 + 6 = 34

    let check = ScheduleReconciler::reconcile(&grid, &plan.fleet).unwrap();
    assert_eq!(check.required_drums, 34);
    assert_eq!(check.entered_drums, 34);
    assert!(check.matches());

    // 4. テンプレートへ保存して読み直す
    let target = ScheduleTarget::new("シール貼付", "1085G");
    let mut template = OrderTemplate::load(&template_path).unwrap();
    let row = template.apply_schedule(&target, &grid).unwrap();
    assert_eq!(row, 2);
    template.save(&template_path).unwrap();

    let reloaded = OrderTemplate::load(&template_path).unwrap();
    assert_eq!(
        reloaded.cell(2, SCHEDULE_START_COLUMN),
        &CellValue::Number(6.0)
    );
    for slot in 1..grid.slot_count() {
        assert_eq!(
            reloaded.cell(2, SCHEDULE_START_COLUMN + slot),
            &CellValue::Number(2.0),
            "スロット {slot} の値が違う"
        );
    }

    // 別の行は手つかず
    assert_eq!(reloaded.cell(1, 0), &CellValue::Text("接着".to_string()));
    assert_eq!(reloaded.cell(1, 2), &CellValue::Number(99.0));
}

#[test]
fn test_filtered_process_stays_out_of_saved_plan() {
    let dir = TempDir::new().unwrap();
    let usage_path = dir.path().join("usage.xlsx");
    write_usage_fixture(&usage_path);

    let rows = UsageSource::load(&usage_path).unwrap();
    let config = PlannerConfig::new(20, 1100, Decimal::from(250), 15, Decimal::from(20)).unwrap();

    // シール貼付 を選択から外す
    let selected: HashSet<String> = ["接着"].iter().map(|s| s.to_string()).collect();
    let plan = UsageAggregator::aggregate(&rows, &selected, &config).unwrap();

    assert_eq!(plan.requirements.len(), 1);
    assert!(plan.requirements.iter().all(|r| r.process != "シール貼付"));
    assert_eq!(plan.fleet.total_mass_kg, Decimal::from(3300));

    // 必要本数 ceil(3300 / 230) = 15
    let check =
        ScheduleReconciler::reconcile(&OrderGrid::for_distribution_days(15), &plan.fleet).unwrap();
    assert_eq!(check.required_drums, 15);
    assert!(!check.matches());
}
