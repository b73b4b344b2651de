use crate::ItemId;

/// A single question item in a survey.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// Stable id, unique across the whole bank. Also the response key.
    id: ItemId,

    /// Display ordinal. Unnumbered items (like the setting selector) show none.
    number: Option<u32>,

    /// Display-only emphasis marker. Not enforced.
    required: bool,

    /// The prompt text shown to the user.
    prompt: String,

    /// The kind of question (determines which control is rendered).
    kind: QuestionKind,
}

impl Question {
    /// Create a new unnumbered, optional question.
    pub fn new(id: impl Into<ItemId>, prompt: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id: id.into(),
            number: None,
            required: false,
            prompt: prompt.into(),
            kind,
        }
    }

    /// Create a branch selector.
    pub fn setting(
        id: impl Into<ItemId>,
        prompt: impl Into<String>,
        options: Vec<SettingOption>,
    ) -> Self {
        Self::new(id, prompt, QuestionKind::Setting(SettingQuestion::new(options)))
    }

    /// Create a graded rubric item.
    pub fn rubric(
        id: impl Into<ItemId>,
        number: u32,
        prompt: impl Into<String>,
        levels: Vec<Level>,
    ) -> Self {
        Self::new(id, prompt, QuestionKind::Rubric(RubricQuestion::new(levels)))
            .with_number(number)
    }

    /// Create a free-text item.
    pub fn textarea(
        id: impl Into<ItemId>,
        prompt: impl Into<String>,
        text: TextareaQuestion,
    ) -> Self {
        Self::new(id, prompt, QuestionKind::Textarea(text))
    }

    /// Set the display number.
    pub fn with_number(mut self, number: u32) -> Self {
        self.number = Some(number);
        self
    }

    /// Set the required marker.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Get the item id.
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Get the display number.
    pub fn number(&self) -> Option<u32> {
        self.number
    }

    /// Whether the item carries the required marker.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Get the prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Check whether `value` is a valid stored answer for this item.
    pub fn accepts(&self, value: &str) -> bool {
        self.kind.accepts(value)
    }
}

/// The kind of question, determining which control is rendered.
///
/// The set is closed: every renderer, dispatcher and collector matches
/// exhaustively, so a new kind has to be handled everywhere.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionKind {
    /// Single-select branch selector. Selecting changes which sections exist.
    Setting(SettingQuestion),

    /// Single-select graded criterion with ordered levels.
    Rubric(RubricQuestion),

    /// Optional multi-line narrative.
    Textarea(TextareaQuestion),
}

impl QuestionKind {
    /// Check if this kind is answered by picking one of a fixed set of keys.
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Setting(_) | Self::Rubric(_))
    }

    /// Short name of the kind, for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Setting(_) => "setting",
            Self::Rubric(_) => "rubric",
            Self::Textarea(_) => "textarea",
        }
    }

    /// Check whether `value` is a valid stored answer for this kind.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Self::Setting(setting) => setting.option(value).is_some(),
            Self::Rubric(rubric) => rubric.level(value).is_some(),
            Self::Textarea(_) => true,
        }
    }
}

/// One option of a setting selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingOption {
    /// Branch key, e.g. `"INPATIENT"`.
    pub key: String,

    /// Display label, e.g. `"Inpatient"`.
    pub label: String,
}

impl SettingOption {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Configuration for a setting (branch selector) question.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingQuestion {
    /// The branches to choose from, in display order.
    pub options: Vec<SettingOption>,
}

impl SettingQuestion {
    pub fn new(options: Vec<SettingOption>) -> Self {
        Self { options }
    }

    /// Find an option by key.
    pub fn option(&self, key: &str) -> Option<&SettingOption> {
        self.options.iter().find(|option| option.key == key)
    }
}

/// One discrete score option of a rubric item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    /// The score as stored, `"0"` to `"4"`.
    pub key: String,

    /// Score and qualitative label, e.g. `"(3) Meets Expectations"`.
    pub headline: String,

    /// Descriptive anchors, in display order.
    pub bullets: Vec<String>,
}

impl Level {
    /// Create a level for `score` with the given label and descriptors.
    pub fn new(score: u8, label: &str, bullets: &[&str]) -> Self {
        Self {
            key: score.to_string(),
            headline: format!("({score}) {label}"),
            bullets: bullets.iter().map(|b| b.to_string()).collect(),
        }
    }

    /// The level-0 "not observed" sentinel shared by every rubric item.
    pub fn not_observed() -> Self {
        Self::new(
            0,
            "N/A",
            &[
                "Insufficient contact or no observation",
                "Unable to evaluate fairly",
            ],
        )
    }
}

/// Configuration for a rubric question.
#[derive(Debug, Clone, PartialEq)]
pub struct RubricQuestion {
    /// Levels in display order.
    pub levels: Vec<Level>,
}

impl RubricQuestion {
    pub fn new(levels: Vec<Level>) -> Self {
        Self { levels }
    }

    /// Find a level by key.
    pub fn level(&self, key: &str) -> Option<&Level> {
        self.levels.iter().find(|level| level.key == key)
    }
}

/// Configuration for a free-text question.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextareaQuestion {
    /// Help text shown above the text box.
    pub help: Option<String>,

    /// Placeholder shown while the text box is empty.
    pub placeholder: Option<String>,
}

impl TextareaQuestion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Set the placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}
