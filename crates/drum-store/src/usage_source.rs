//! 使用量ワークブックの読み込み

use calamine::{open_workbook, Data, Reader, Xlsx};
use std::path::Path;

use drum_core::{PlannerError, RawUsageRow, Result};

/// 工程列のヘッダーラベル
pub const PROCESS_COLUMN: &str = "工程";

/// 使用量列のヘッダーラベル
pub const USAGE_COLUMN: &str = "使用量";

/// 使用量ワークブックリーダー
///
/// 先頭シートの 1 行目をヘッダーとして「工程」「使用量」列を探す。
/// それ以外の列は無視する。
pub struct UsageSource;

impl UsageSource {
    /// ワークブックから生の使用量行を読み込む
    pub fn load(path: &Path) -> Result<Vec<RawUsageRow>> {
        if !path.exists() {
            return Err(PlannerError::SourceNotFound(path.to_path_buf()));
        }

        let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e| {
            PlannerError::SheetFormat(format!("ワークブックを開けません: {e}"))
        })?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| PlannerError::SheetFormat("シートがありません".to_string()))?;

        let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
            PlannerError::SheetFormat(format!("シート {sheet_name} を読み込めません: {e}"))
        })?;

        let mut rows = range.rows();
        let header = rows
            .next()
            .ok_or_else(|| PlannerError::SheetFormat("ヘッダー行がありません".to_string()))?;

        let process_idx = Self::column_index(header, PROCESS_COLUMN)?;
        let usage_idx = Self::column_index(header, USAGE_COLUMN)?;

        let mut records = Vec::new();
        for row in rows {
            let process = cell_text(row.get(process_idx).unwrap_or(&Data::Empty));
            if process.trim().is_empty() {
                continue;
            }
            let usage = cell_text(row.get(usage_idx).unwrap_or(&Data::Empty));
            records.push(RawUsageRow::new(process, usage));
        }

        tracing::debug!(
            "使用量ワークブックを読み込み: {} ({} 行)",
            path.display(),
            records.len()
        );

        Ok(records)
    }

    fn column_index(header: &[Data], label: &str) -> Result<usize> {
        header
            .iter()
            .position(|cell| cell_text(cell).trim() == label)
            .ok_or_else(|| {
                PlannerError::SheetFormat(format!("必要な列が見つかりません: {label}"))
            })
    }
}

/// セル値を表示文字列として取り出す
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}
