use crate::Question;

/// A titled, ordered group of questions.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Section id, e.g. `"evaluation"`.
    pub id: String,

    /// Display title, e.g. `"Evaluation"`.
    pub title: String,

    /// Items in display order.
    pub items: Vec<Question>,
}

impl Section {
    pub fn new(id: impl Into<String>, title: impl Into<String>, items: Vec<Question>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            items,
        }
    }
}

/// The sections currently shown, built from a bank and a branch selection.
///
/// A survey is presentation-agnostic: it can be rendered to egui widgets,
/// an HTML document, or an in-memory test view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Survey {
    /// Sections in display order.
    pub sections: Vec<Section>,
}

impl Survey {
    /// Create a survey from its sections.
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Get the sections.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Find a section by id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    /// Iterate over every item of every section, in display order.
    pub fn items(&self) -> impl Iterator<Item = &Question> {
        self.sections.iter().flat_map(|section| section.items.iter())
    }

    /// Find an item by id.
    pub fn find(&self, id: &str) -> Option<&Question> {
        self.items().find(|question| question.id().as_str() == id)
    }

    /// Check if the survey has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Get the number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }
}
