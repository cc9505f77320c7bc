// src/config/game_config.rs
//! ゲームの設定だよ。ホスト側から JSON で渡せる。

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// エンジンの挙動を変える設定。
///
/// ```json
/// { "seed": 42, "undo_limit": 200, "auto_reveal": true }
/// ```
/// 省略したフィールドはデフォルト値になるよ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// シャッフルのシード。None なら OS のエントロピーを使う。
    pub seed: Option<u64>,
    /// undo 履歴の上限。None なら無制限 (メモリが許す限り)。
    pub undo_limit: Option<usize>,
    /// 場札の一番上が裏向きになったら自動で表にする。
    pub auto_reveal: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            undo_limit: None,
            auto_reveal: true,
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_undo_limit(mut self, limit: usize) -> Self {
        self.undo_limit = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = GameConfig::from_json("{}").expect("empty object parses");
        assert_eq!(config, GameConfig::default());
        assert!(config.auto_reveal);
    }

    #[test]
    fn parses_all_fields() {
        let config = GameConfig::from_json(r#"{"seed": 7, "undo_limit": 3, "auto_reveal": false}"#)
            .expect("valid config");
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.undo_limit, Some(3));
        assert!(!config.auto_reveal);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(GameConfig::from_json("{ seed: ").is_err());
        assert!(GameConfig::from_json(r#"{"seed": "abc"}"#).is_err());
    }
}
