//! 発注テンプレートの読み書き
//!
//! テンプレートは全体読み込み → メモリ上で書き換え → 全体上書きで扱う。
//! 部分書き込みの経路は持たない。ロックも行わないため、同じファイルへの
//! 同時保存は後勝ちになる（運用上の制約として許容）。

use calamine::{open_workbook, Data, Reader, Xlsx};
use rust_xlsxwriter::Workbook;
use serde::{Deserialize, Serialize};
use std::path::Path;

use drum_core::{OrderGrid, PlannerError, Result, ScheduleTarget};

/// スケジュール枠の開始列（0 始まり。1・2 列目は工程・材質ラベル）
pub const SCHEDULE_START_COLUMN: usize = 2;

/// セル値のメモリ内表現
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
}

impl CellValue {
    /// 表示文字列（識別子照合に使う）
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Text(s) => s.clone(),
        }
    }
}

impl From<&Data> for CellValue {
    fn from(cell: &Data) -> Self {
        match cell {
            Data::Empty => CellValue::Empty,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Float(f) => CellValue::Number(*f),
            Data::Int(i) => CellValue::Number(*i as f64),
            other => CellValue::Text(other.to_string()),
        }
    }
}

/// 発注テンプレート
///
/// 1 行目はヘッダー。データ行は先頭 2 列が（工程, 材質）の識別子で、
/// 3 列目以降が（週 × 曜日）の発注枠。
#[derive(Debug, Clone, PartialEq)]
pub struct OrderTemplate {
    sheet_name: String,
    rows: Vec<Vec<CellValue>>,
}

impl OrderTemplate {
    /// テンプレートファイル全体を読み込む
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PlannerError::SourceNotFound(path.to_path_buf()));
        }

        let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e| {
            PlannerError::SheetFormat(format!("テンプレートを開けません: {e}"))
        })?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| PlannerError::SheetFormat("シートがありません".to_string()))?;

        let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
            PlannerError::SheetFormat(format!("シート {sheet_name} を読み込めません: {e}"))
        })?;

        let rows: Vec<Vec<CellValue>> = range
            .rows()
            .map(|row| row.iter().map(CellValue::from).collect())
            .collect();

        tracing::debug!(
            "テンプレートを読み込み: {} ({} 行)",
            path.display(),
            rows.len()
        );

        Ok(Self { sheet_name, rows })
    }

    /// 行数（ヘッダー行を含む）
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// セル参照（範囲外は Empty）
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&CellValue::Empty)
    }

    /// 識別子に一致するデータ行を探す
    ///
    /// 先頭 2 列を前後空白を除いた文字列として完全一致で照合する。
    /// ヘッダー行（1 行目）は対象外。
    pub fn find_row(&self, target: &ScheduleTarget) -> Result<usize> {
        self.rows
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, row)| {
                row.first()
                    .is_some_and(|c| c.as_text().trim() == target.process)
                    && row.get(1).is_some_and(|c| c.as_text().trim() == target.material)
            })
            .map(|(idx, _)| idx)
            .ok_or_else(|| PlannerError::TargetNotFound {
                process: target.process.clone(),
                material: target.material.clone(),
            })
    }

    /// 発注グリッドを該当行へ書き込む（メモリ上のみ）
    ///
    /// 行の特定に失敗した場合は何も書き換えない。書き込みは週→曜日の順で
    /// スロット k が列 `SCHEDULE_START_COLUMN + k` に対応する。
    pub fn apply_schedule(&mut self, target: &ScheduleTarget, grid: &OrderGrid) -> Result<usize> {
        let row = self.find_row(target)?;

        for (slot, quantity) in grid.flattened().enumerate() {
            self.set_cell(
                row,
                SCHEDULE_START_COLUMN + slot,
                CellValue::Number(quantity as f64),
            );
        }

        tracing::debug!(
            "発注スケジュールを反映: 行 {} に {} 枠",
            row + 1,
            grid.slot_count()
        );

        Ok(row)
    }

    /// テンプレート全体をファイルへ上書き保存する
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&self.sheet_name).map_err(|e| {
            PlannerError::SheetFormat(format!("シート名を設定できません: {e}"))
        })?;

        for (r, row) in self.rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                match cell {
                    CellValue::Empty => {}
                    CellValue::Number(n) => {
                        worksheet.write_number(r as u32, c as u16, *n).map_err(|e| {
                            PlannerError::SheetFormat(format!("セルを書き込めません: {e}"))
                        })?;
                    }
                    CellValue::Text(s) => {
                        worksheet.write_string(r as u32, c as u16, s).map_err(|e| {
                            PlannerError::SheetFormat(format!("セルを書き込めません: {e}"))
                        })?;
                    }
                }
            }
        }

        workbook.save(path).map_err(|e| {
            PlannerError::SheetFormat(format!("テンプレートを保存できません: {e}"))
        })?;

        tracing::debug!("テンプレートを保存: {}", path.display());

        Ok(())
    }

    fn set_cell(&mut self, row: usize, col: usize, value: CellValue) {
        if row >= self.rows.len() {
            self.rows.resize(row + 1, Vec::new());
        }
        let cells = &mut self.rows[row];
        if col >= cells.len() {
            cells.resize(col + 1, CellValue::Empty);
        }
        cells[col] = value;
    }
}
