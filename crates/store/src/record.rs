//! The persisted shape of a finished game.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::GameConfig;

/// One line of the high-score list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Player name as typed, possibly empty.
    pub name: String,
    /// Board dimensions, `"<rows>x<columns>"`.
    pub matrix: String,
    /// Tiles per group.
    pub matches: u32,
    pub score: u32,
    /// UTC timestamp, e.g. `"Sat, 17 Oct 2026 12:00:00 GMT"`.
    pub date: String,
}

impl ScoreRecord {
    pub fn new(
        name: impl Into<String>,
        config: &GameConfig,
        score: u32,
        date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            matrix: config.matrix_label(),
            matches: config.match_size,
            score,
            date: date.into(),
        }
    }

    /// Record stamped with the current time.
    pub fn now(name: impl Into<String>, config: &GameConfig, score: u32) -> Self {
        Self::new(name, config, score, format_utc_date(Utc::now()))
    }
}

/// HTTP-date style UTC string: `Sat, 17 Oct 2026 12:00:00 GMT`.
pub fn format_utc_date(at: DateTime<Utc>) -> String {
    at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_record_fields() {
        let config = GameConfig::new(4, 6, 3, "hard");
        let r = ScoreRecord::new("", &config, 9, "x");
        assert_eq!(r.name, "");
        assert_eq!(r.matrix, "4x6");
        assert_eq!(r.matches, 3);
        assert_eq!(r.score, 9);
    }

    #[test]
    fn test_format_utc_date() {
        let at = Utc.with_ymd_and_hms(2026, 10, 17, 9, 5, 3).unwrap();
        assert_eq!(format_utc_date(at), "Sat, 17 Oct 2026 09:05:03 GMT");
    }

    #[test]
    fn test_json_shape() {
        let config = GameConfig::new(2, 2, 2, "easy");
        let r = ScoreRecord::new("bo", &config, 2, "d");
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(
            v,
            serde_json::json!({
                "name": "bo",
                "matrix": "2x2",
                "matches": 2,
                "score": 2,
                "date": "d"
            })
        );
    }
}
