//! # Drum Core
//!
//! ドラム缶発注計画の中核データモデルと型定義

pub mod config;
pub mod grid;
pub mod profile;
pub mod usage;

// Re-export 主要型
pub use config::PlannerConfig;
pub use grid::{weekday_index, OrderGrid, ScheduleTarget, WEEKDAY_LABELS};
pub use profile::{MaterialProfile, ProfileCatalog};
pub use usage::{parse_usage, RawUsageRow, UsageRecord};

/// 計画ツールのエラー型
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    #[error("入力ファイルが見つかりません: {}", .0.display())]
    SourceNotFound(std::path::PathBuf),

    #[error("使用量の値を数値として解釈できません: {0:?}")]
    UsageParse(String),

    #[error("発注テンプレートに該当行がありません（工程: {process}, 材質: {material}）")]
    TargetNotFound { process: String, material: String },

    #[error("設定値が不正です: {0}")]
    InvalidConfig(String),

    #[error("材質プロファイルが見つかりません: {0}")]
    ProfileNotFound(String),

    #[error("ワークシートの形式が不正です: {0}")]
    SheetFormat(String),

    #[error("計算エラー: {0}")]
    Calculation(String),

    #[error("入出力エラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
