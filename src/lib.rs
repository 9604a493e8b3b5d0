//! # drumplan
//!
//! 使用量と必要本数シミュレーターのファサード crate。
//! 各メンバー crate の主要型をまとめて re-export する。

pub use drum_calc::{
    FleetSummary, ProcessRequirement, ScheduleCheck, ScheduleReconciler, UsageAggregator,
    UsagePlan,
};
pub use drum_core::{
    parse_usage, MaterialProfile, OrderGrid, PlannerConfig, PlannerError, ProfileCatalog,
    RawUsageRow, Result, ScheduleTarget, UsageRecord, WEEKDAY_LABELS,
};
pub use drum_store::{CellValue, OrderTemplate, UsageSource, SCHEDULE_START_COLUMN};
