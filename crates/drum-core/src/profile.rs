//! 材質プロファイル

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{PlannerError, Result};

/// 材質プロファイル（使用量ワークブックの選択肢 1 件）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialProfile {
    /// 選択キー（例: "K40"）
    pub key: String,

    /// 発注テンプレート上の材質ラベル（例: "1085G"）
    ///
    /// 保存時の行特定には選択キーではなく必ずこのラベルを使う。
    pub material_label: String,

    /// 使用量ワークブックのパス
    pub source_path: PathBuf,
}

/// プロファイルカタログ
///
/// 入力ワークブックのパスをコードに埋め込む代わりに、JSON 設定ファイル
/// から注入する。
///
/// # 設定例
/// ```
/// let json = r#"{
///     "profiles": [
///         { "key": "K40", "material_label": "K40", "source_path": "data/32Rk40.xlsx" },
///         { "key": "1085G", "material_label": "1085G", "source_path": "data/1085G使用量.xlsx" }
///     ]
/// }"#;
/// let catalog = drum_core::ProfileCatalog::from_json(json).unwrap();
/// assert_eq!(catalog.get("K40").unwrap().material_label, "K40");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileCatalog {
    profiles: Vec<MaterialProfile>,
}

impl ProfileCatalog {
    /// JSON 文字列からカタログを読み込む
    pub fn from_json(text: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(text).map_err(|e| {
            PlannerError::InvalidConfig(format!("プロファイル設定を解析できません: {e}"))
        })?;

        if catalog.profiles.is_empty() {
            return Err(PlannerError::InvalidConfig(
                "プロファイルが 1 件も定義されていません".to_string(),
            ));
        }

        Ok(catalog)
    }

    /// 設定ファイルからカタログを読み込む
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PlannerError::SourceNotFound(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// 選択キーでプロファイルを引く
    pub fn get(&self, key: &str) -> Result<&MaterialProfile> {
        self.profiles
            .iter()
            .find(|p| p.key == key)
            .ok_or_else(|| PlannerError::ProfileNotFound(key.to_string()))
    }

    /// 定義済みの選択キー一覧
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
