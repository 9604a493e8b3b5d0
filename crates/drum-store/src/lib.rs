//! # Drum Store
//!
//! ワークシート入出力境界。使用量ワークブックの読み込みと、
//! 発注テンプレートの読み込み・書き戻しを担う。

pub mod template;
pub mod usage_source;

// Re-export 主要型
pub use template::{CellValue, OrderTemplate, SCHEDULE_START_COLUMN};
pub use usage_source::UsageSource;
