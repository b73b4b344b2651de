use rubric_survey_types::{Question, QuestionBank, Section, Survey};

/// Id of the section holding the setting selector.
pub const SETTING_SECTION_ID: &str = "setting";
/// Id of the section holding branch and shared items.
pub const EVALUATION_SECTION_ID: &str = "evaluation";
/// Id of the section holding the comments block.
pub const COMMENTS_SECTION_ID: &str = "comments";

/// Build the sections shown for a branch selection.
///
/// Without a branch (`None` or an empty key) only the setting section is
/// returned. With a branch, the evaluation section holds the branch items
/// followed by the shared items, and the comments section follows. An
/// unknown branch key yields no branch items rather than an error.
pub fn build_survey(bank: &QuestionBank, setting_key: Option<&str>) -> Survey {
    let setting = Section::new(SETTING_SECTION_ID, "Setting", vec![bank.setting.clone()]);

    let Some(key) = setting_key.filter(|key| !key.is_empty()) else {
        return Survey::new(vec![setting]);
    };

    let branch_items: &[Question] = match bank.branch(key) {
        Some(items) => items,
        None => {
            tracing::debug!("no branch items for setting '{key}'");
            &[]
        }
    };

    let evaluation = Section::new(
        EVALUATION_SECTION_ID,
        "Evaluation",
        branch_items
            .iter()
            .chain(bank.shared.iter())
            .cloned()
            .collect(),
    );
    let comments = Section::new(COMMENTS_SECTION_ID, "Comments", bank.comments.clone());

    Survey::new(vec![setting, evaluation, comments])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rubric_survey_types::{Level, SettingOption, TextareaQuestion};

    fn bank() -> QuestionBank {
        let rubric = |id: &str, number| {
            Question::rubric(id, number, id.to_uppercase(), vec![Level::not_observed()])
        };
        QuestionBank::new(Question::setting(
            "setting_context",
            "Setting?",
            vec![
                SettingOption::new("A", "Alpha"),
                SettingOption::new("B", "Beta"),
            ],
        ))
        .with_branch("A", vec![rubric("a1", 1), rubric("a2", 2)])
        .with_branch("B", vec![rubric("b1", 1)])
        .with_shared(vec![rubric("s1", 6), rubric("s2", 7)])
        .with_comments(vec![Question::textarea(
            "notes",
            "Comments",
            TextareaQuestion::new(),
        )])
    }

    fn ids(section: &Section) -> Vec<&str> {
        section.items.iter().map(|q| q.id().as_str()).collect()
    }

    #[test]
    fn no_branch_shows_only_setting() {
        let survey = build_survey(&bank(), None);

        assert_eq!(survey.len(), 1);
        assert_eq!(ids(&survey.sections[0]), vec!["setting_context"]);
    }

    #[test]
    fn empty_key_is_no_branch() {
        let survey = build_survey(&bank(), Some(""));
        assert_eq!(survey.len(), 1);
    }

    #[test]
    fn branch_items_precede_shared_items() {
        let survey = build_survey(&bank(), Some("A"));

        let titles: Vec<_> = survey.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Setting", "Evaluation", "Comments"]);
        assert_eq!(
            ids(survey.section(EVALUATION_SECTION_ID).unwrap()),
            vec!["a1", "a2", "s1", "s2"]
        );
        assert_eq!(ids(survey.section(COMMENTS_SECTION_ID).unwrap()), vec!["notes"]);
    }

    #[test]
    fn unknown_branch_has_only_shared_items() {
        let survey = build_survey(&bank(), Some("Z"));

        assert_eq!(survey.len(), 3);
        assert_eq!(
            ids(survey.section(EVALUATION_SECTION_ID).unwrap()),
            vec!["s1", "s2"]
        );
    }

    #[test]
    fn deterministic() {
        let bank = bank();
        assert_eq!(build_survey(&bank, Some("B")), build_survey(&bank, Some("B")));
    }
}
