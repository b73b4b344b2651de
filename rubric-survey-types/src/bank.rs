use std::collections::HashSet;

use crate::{ItemId, Question, QuestionKind, SurveyError};

/// The questions that only apply to one branch.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    /// The setting option key selecting this branch.
    pub key: String,

    /// Branch items in display order.
    pub items: Vec<Question>,
}

impl Branch {
    pub fn new(key: impl Into<String>, items: Vec<Question>) -> Self {
        Self {
            key: key.into(),
            items,
        }
    }
}

/// The static catalog of every question a survey can show.
///
/// A bank has a leading setting selector, branch-specific item sets keyed
/// by the selector's option keys, shared items shown for every branch and
/// a trailing comments block.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionBank {
    /// The branch selector, always shown first.
    pub setting: Question,

    /// Branch item sets, in declaration order.
    pub branches: Vec<Branch>,

    /// Items following the branch items for every branch.
    pub shared: Vec<Question>,

    /// The trailing free-text block.
    pub comments: Vec<Question>,
}

impl QuestionBank {
    /// Create a bank with only a setting selector.
    pub fn new(setting: Question) -> Self {
        Self {
            setting,
            branches: Vec::new(),
            shared: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Add a branch item set.
    pub fn with_branch(mut self, key: impl Into<String>, items: Vec<Question>) -> Self {
        self.branches.push(Branch::new(key, items));
        self
    }

    /// Set the shared items.
    pub fn with_shared(mut self, shared: Vec<Question>) -> Self {
        self.shared = shared;
        self
    }

    /// Set the comments block.
    pub fn with_comments(mut self, comments: Vec<Question>) -> Self {
        self.comments = comments;
        self
    }

    /// The id of the setting selector.
    pub fn setting_id(&self) -> &ItemId {
        self.setting.id()
    }

    /// Items for a branch key. `None` for unknown keys.
    pub fn branch(&self, key: &str) -> Option<&[Question]> {
        self.branches
            .iter()
            .find(|branch| branch.key == key)
            .map(|branch| branch.items.as_slice())
    }

    /// Iterate over every question in the bank.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        std::iter::once(&self.setting)
            .chain(self.branches.iter().flat_map(|branch| branch.items.iter()))
            .chain(self.shared.iter())
            .chain(self.comments.iter())
    }

    /// Find a question anywhere in the bank.
    pub fn find(&self, id: &str) -> Option<&Question> {
        self.questions().find(|question| question.id().as_str() == id)
    }

    /// Check the bank's structural invariants.
    ///
    /// The selector must be a setting question and the only one, branch keys
    /// must be selector options, ids must be unique and every rubric needs
    /// at least one level with unique keys.
    pub fn validate(&self) -> Result<(), SurveyError> {
        let QuestionKind::Setting(selector) = self.setting.kind() else {
            return Err(SurveyError::InvalidBank(format!(
                "'{}' must be a setting question, found {}",
                self.setting.id(),
                self.setting.kind().name()
            )));
        };

        for branch in &self.branches {
            if selector.option(&branch.key).is_none() {
                return Err(SurveyError::InvalidBank(format!(
                    "branch '{}' is not an option of '{}'",
                    branch.key,
                    self.setting.id()
                )));
            }
        }

        let mut seen = HashSet::new();
        for question in self.questions() {
            if !seen.insert(question.id()) {
                return Err(SurveyError::DuplicateItem(question.id().clone()));
            }

            match question.kind() {
                QuestionKind::Setting(_) if question.id() != self.setting.id() => {
                    return Err(SurveyError::InvalidBank(format!(
                        "'{}' is a second setting question",
                        question.id()
                    )));
                }
                QuestionKind::Setting(_) | QuestionKind::Textarea(_) => {}
                QuestionKind::Rubric(rubric) => {
                    if rubric.levels.is_empty() {
                        return Err(SurveyError::InvalidBank(format!(
                            "rubric '{}' has no levels",
                            question.id()
                        )));
                    }
                    let mut keys = HashSet::new();
                    if let Some(level) = rubric.levels.iter().find(|l| !keys.insert(&l.key)) {
                        return Err(SurveyError::InvalidBank(format!(
                            "rubric '{}' repeats level '{}'",
                            question.id(),
                            level.key
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Level, SettingOption, TextareaQuestion};

    fn selector() -> Question {
        Question::setting(
            "setting_context",
            "Setting?",
            vec![
                SettingOption::new("A", "Alpha"),
                SettingOption::new("B", "Beta"),
            ],
        )
        .required(true)
    }

    fn rubric(id: &str) -> Question {
        Question::rubric(id, 1, "CRITERION", vec![Level::not_observed()])
    }

    #[test]
    fn valid_bank() {
        let bank = QuestionBank::new(selector())
            .with_branch("A", vec![rubric("a1")])
            .with_branch("B", vec![rubric("b1")])
            .with_shared(vec![rubric("s1")])
            .with_comments(vec![Question::textarea(
                "notes",
                "Notes",
                TextareaQuestion::new(),
            )]);

        assert!(bank.validate().is_ok());
        assert_eq!(bank.questions().count(), 5);
        assert!(bank.find("b1").is_some());
        assert!(bank.branch("C").is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let bank = QuestionBank::new(selector())
            .with_branch("A", vec![rubric("dup")])
            .with_shared(vec![rubric("dup")]);

        assert!(matches!(
            bank.validate(),
            Err(SurveyError::DuplicateItem(id)) if id.as_str() == "dup"
        ));
    }

    #[test]
    fn branch_key_must_be_an_option() {
        let bank = QuestionBank::new(selector()).with_branch("Z", vec![rubric("z1")]);
        assert!(matches!(bank.validate(), Err(SurveyError::InvalidBank(_))));
    }

    #[test]
    fn selector_must_be_setting() {
        let bank = QuestionBank::new(rubric("not_a_selector"));
        assert!(matches!(bank.validate(), Err(SurveyError::InvalidBank(_))));
    }

    #[test]
    fn repeated_level_keys_are_rejected() {
        let bad = Question::rubric(
            "bad",
            2,
            "BAD",
            vec![Level::not_observed(), Level::not_observed()],
        );
        let bank = QuestionBank::new(selector()).with_shared(vec![bad]);
        assert!(matches!(bank.validate(), Err(SurveyError::InvalidBank(_))));
    }
}
