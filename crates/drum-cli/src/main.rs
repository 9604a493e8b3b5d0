//! 使用量と必要本数シミュレーター CLI
//!
//! フォーム境界のアダプター。1 回の起動で操作者の入力スナップショット
//! （材質選択・工程選択・数値設定・発注グリッド）を受け取り、集計結果の
//! 表示と、確認された場合のテンプレート保存を行う。

use anyhow::{bail, Context};
use clap::{Arg, ArgAction, ArgMatches, Command};
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

use drum_calc::{report, ScheduleReconciler, UsageAggregator};
use drum_core::{weekday_index, OrderGrid, PlannerConfig, ProfileCatalog, ScheduleTarget};
use drum_store::{OrderTemplate, UsageSource};

pub fn make_app() -> Command {
    Command::new("drumplan")
        .about("使用量と必要本数シミュレーター")
        .arg(
            Arg::new("catalog")
                .long("catalog")
                .value_name("FILE")
                .required(true)
                .help("材質プロファイル設定（JSON）のパス"),
        )
        .arg(
            Arg::new("material")
                .long("material")
                .value_name("KEY")
                .required(true)
                .help("材質選択（プロファイルキー）"),
        )
        .arg(
            Arg::new("process")
                .long("process")
                .value_name("NAME")
                .action(ArgAction::Append)
                .help("集計対象の工程（複数指定可。省略時は全工程）"),
        )
        .arg(
            Arg::new("operating-days")
                .long("operating-days")
                .value_name("DAYS")
                .value_parser(clap::value_parser!(u32))
                .default_value("20")
                .help("稼働日数（生産）"),
        )
        .arg(
            Arg::new("daily-units")
                .long("daily-units")
                .value_name("UNITS")
                .value_parser(clap::value_parser!(u32))
                .default_value("1100")
                .help("1日あたり生産台数"),
        )
        .arg(
            Arg::new("drum-capacity")
                .long("drum-capacity")
                .value_name("KG")
                .default_value("250")
                .help("ドラム缶容量 (kg)"),
        )
        .arg(
            Arg::new("distribution-days")
                .long("distribution-days")
                .value_name("DAYS")
                .value_parser(clap::value_parser!(u32))
                .default_value("15")
                .help("振り分け日数（搬入）"),
        )
        .arg(
            Arg::new("loss-per-drum")
                .long("loss-per-drum")
                .value_name("KG")
                .default_value("20")
                .help("1本交換時のロス量 (kg)"),
        )
        .arg(
            Arg::new("order")
                .long("order")
                .value_name("WEEK,DAY,QTY")
                .action(ArgAction::Append)
                .help("発注数の入力（例: 1,月,3。複数指定可）"),
        )
        .arg(
            Arg::new("template")
                .long("template")
                .value_name("FILE")
                .help("発注テンプレートのパス"),
        )
        .arg(
            Arg::new("target-process")
                .long("target-process")
                .value_name("NAME")
                .help("保存先テンプレート行の工程名"),
        )
        .arg(
            Arg::new("save")
                .long("save")
                .action(ArgAction::SetTrue)
                .help("照合結果の表示後にテンプレートへ保存する"),
        )
}

fn main() {
    init_tracing();

    let matches = make_app().get_matches();
    if let Err(e) = run(&matches) {
        // 失敗は操作者向けメッセージとして表示し、修正後の再実行に委ねる
        eprintln!("エラー: {e:#}");
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let catalog_path = matches.get_one::<String>("catalog").expect("required");
    let catalog = ProfileCatalog::load(Path::new(catalog_path))?;

    let material_key = matches.get_one::<String>("material").expect("required");
    let profile = catalog.get(material_key)?.clone();

    let config = PlannerConfig::new(
        *matches.get_one::<u32>("operating-days").expect("defaulted"),
        *matches.get_one::<u32>("daily-units").expect("defaulted"),
        parse_decimal(
            matches.get_one::<String>("drum-capacity").expect("defaulted"),
            "ドラム缶容量",
        )?,
        *matches.get_one::<u32>("distribution-days").expect("defaulted"),
        parse_decimal(
            matches.get_one::<String>("loss-per-drum").expect("defaulted"),
            "ロス量",
        )?,
    )?;

    let rows = UsageSource::load(&profile.source_path)?;

    let selected: HashSet<String> = match matches.get_many::<String>("process") {
        Some(values) => values.map(|v| v.trim().to_string()).collect(),
        None => rows.iter().map(|r| r.process.trim().to_string()).collect(),
    };

    let plan = UsageAggregator::aggregate(&rows, &selected, &config)?;

    print!("{}", report::requirement_table(&plan, &profile.key));
    println!();
    for line in report::fleet_summary_lines(&plan.fleet, config.distribution_days) {
        println!("{line}");
    }

    let mut grid = OrderGrid::for_distribution_days(config.distribution_days);
    if let Some(entries) = matches.get_many::<String>("order") {
        for entry in entries {
            let (week, weekday, quantity) = parse_order_entry(entry)?;
            grid.set(week, weekday, quantity)?;
        }
    }

    let check = ScheduleReconciler::reconcile(&grid, &plan.fleet)?;
    println!();
    for line in report::check_lines(&check) {
        println!("{line}");
    }

    // 一致判定は表示のみで、保存の可否には影響しない
    if matches.get_flag("save") {
        let template_path = matches
            .get_one::<String>("template")
            .context("保存には --template の指定が必要です")?;
        let target_process = matches
            .get_one::<String>("target-process")
            .context("保存には --target-process の指定が必要です")?;

        let target = ScheduleTarget::new(target_process.as_str(), profile.material_label.as_str());
        let path = Path::new(template_path);

        let mut template = OrderTemplate::load(path)?;
        let row = template.apply_schedule(&target, &grid)?;
        template.save(path)?;

        println!();
        println!("発注スケジュールを保存しました（行 {}）", row + 1);
    }

    Ok(())
}

/// 発注入力 1 件を解析する（形式: 週,曜日,本数。例: "1,月,3"）
///
/// 週は 1 始まり、曜日は 月〜金 のラベルか 1〜5 の番号。戻り値はいずれも
/// 0 始まりのインデックス。
fn parse_order_entry(entry: &str) -> anyhow::Result<(usize, usize, u32)> {
    let parts: Vec<&str> = entry.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        bail!("発注入力の形式が不正です（週,曜日,本数）: {entry:?}");
    }

    let week: usize = parts[0]
        .parse()
        .ok()
        .filter(|w| *w >= 1)
        .with_context(|| format!("週の指定が不正です: {entry:?}"))?;

    let weekday = match weekday_index(parts[1]) {
        Some(idx) => idx,
        None => {
            let n: usize = parts[1]
                .parse()
                .ok()
                .filter(|d| (1..=5).contains(d))
                .with_context(|| {
                    format!("曜日の指定が不正です（月〜金 または 1〜5）: {entry:?}")
                })?;
            n - 1
        }
    };

    let quantity: u32 = parts[2]
        .parse()
        .with_context(|| format!("本数の指定が不正です: {entry:?}"))?;

    Ok((week - 1, weekday, quantity))
}

fn parse_decimal(raw: &str, label: &str) -> anyhow::Result<Decimal> {
    Decimal::from_str(raw.trim())
        .map_err(|_| anyhow::anyhow!("{label}の値が不正です: {raw:?}"))
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}
