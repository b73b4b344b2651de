//! Reconciling the store with live controls and exporting the result.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};
use rubric_survey_types::{ControlValue, QuestionKind, Responses, Survey, SurveyView};
use serde::{Deserialize, Serialize};

/// File name of the exported document.
pub const EXPORT_FILE_NAME: &str = "survey_responses.json";

/// Snapshot of all collected answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    /// When the snapshot was taken.
    pub collected_at: DateTime<Utc>,

    /// The selected branch key, or empty.
    pub setting: String,

    /// Every answer in the store, including answers for branches that are
    /// no longer shown.
    pub responses: BTreeMap<String, String>,
}

impl ExportDocument {
    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write the document as `file_name` into `dir`, returning the file path.
    pub fn write_to(&self, dir: &Path, file_name: &str) -> anyhow::Result<PathBuf> {
        let path = dir.join(file_name);
        let json = self.to_json().context("failed to serialize responses")?;
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }
}

/// Re-read every control of `survey` into the store, then snapshot it.
///
/// A selected choice or any text overwrites the stored answer. A choice with
/// nothing selected, or an item without a mounted control, leaves the store
/// untouched. `setting_id` names the branch selector.
pub fn collect_responses<V: SurveyView + ?Sized>(
    survey: &Survey,
    view: &V,
    responses: &mut Responses,
    setting_id: &str,
) -> ExportDocument {
    for question in survey.items() {
        let Some(value) = view.control_value(question.id()) else {
            tracing::debug!("no control mounted for '{}', skipping", question.id());
            continue;
        };

        match (question.kind(), value) {
            (
                QuestionKind::Setting(_) | QuestionKind::Rubric(_),
                ControlValue::Choice(Some(key)),
            ) => {
                if question.accepts(&key) {
                    responses.insert(question.id(), key);
                } else {
                    tracing::warn!("control for '{}' holds unknown key '{key}'", question.id());
                }
            }
            (QuestionKind::Setting(_) | QuestionKind::Rubric(_), ControlValue::Choice(None)) => {}
            (QuestionKind::Textarea(_), ControlValue::Text(text)) => {
                responses.insert(question.id(), text);
            }
            (kind, value) => {
                tracing::warn!(
                    "control for {} item '{}' reports {value:?}, skipping",
                    kind.name(),
                    question.id()
                );
            }
        }
    }

    ExportDocument {
        collected_at: Utc::now(),
        setting: responses.get(setting_id).unwrap_or_default().to_string(),
        responses: responses.to_map(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_fields() {
        let document = ExportDocument {
            collected_at: DateTime::parse_from_rfc3339("2026-10-18T09:30:00Z")
                .unwrap()
                .with_timezone(&Utc),
            setting: "SURGERY".to_string(),
            responses: BTreeMap::from([
                ("setting_context".to_string(), "SURGERY".to_string()),
                ("q7_humanism".to_string(), "4".to_string()),
            ]),
        };

        let value: serde_json::Value = serde_json::from_str(&document.to_json().unwrap()).unwrap();
        assert_eq!(value["collectedAt"], "2026-10-18T09:30:00Z");
        assert_eq!(value["setting"], "SURGERY");
        assert_eq!(value["responses"]["q7_humanism"], "4");
    }

    #[test]
    fn write_to_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let document = ExportDocument {
            collected_at: Utc::now(),
            setting: String::new(),
            responses: BTreeMap::new(),
        };

        let path = document.write_to(dir.path(), EXPORT_FILE_NAME).unwrap();

        assert_eq!(path, dir.path().join("survey_responses.json"));
        let read: ExportDocument =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(read, document);
    }

    #[test]
    fn write_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let document = ExportDocument {
            collected_at: Utc::now(),
            setting: String::new(),
            responses: BTreeMap::new(),
        };

        let result = document.write_to(&dir.path().join("missing"), EXPORT_FILE_NAME);
        assert!(result.is_err());
    }
}
