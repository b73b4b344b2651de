//! Presentation-agnostic description of rendered controls.

use crate::ItemId;

/// The live state of one control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlValue {
    /// Exclusive choice (setting option or rubric level). `None` if nothing is selected.
    Choice(Option<String>),

    /// Multi-line text.
    Text(String),
}

impl ControlValue {
    /// Get the selected key, if this is a choice with a selection.
    pub fn as_choice(&self) -> Option<&str> {
        match self {
            Self::Choice(selected) => selected.as_deref(),
            Self::Text(_) => None,
        }
    }

    /// Get the text, if this is a text control.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Choice(_) => None,
        }
    }
}

/// Something the user did to a control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// An option or level was selected.
    Select { item: ItemId, key: String },

    /// The text of a text control changed.
    Input { item: ItemId, text: String },
}

impl Event {
    /// Create a select event.
    pub fn select(item: impl Into<ItemId>, key: impl Into<String>) -> Self {
        Self::Select {
            item: item.into(),
            key: key.into(),
        }
    }

    /// Create an input event.
    pub fn input(item: impl Into<ItemId>, text: impl Into<String>) -> Self {
        Self::Input {
            item: item.into(),
            text: text.into(),
        }
    }

    /// The item this event targets.
    pub fn item(&self) -> &ItemId {
        match self {
            Self::Select { item, .. } | Self::Input { item, .. } => item,
        }
    }
}

/// The full control tree for one survey.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderTree {
    pub sections: Vec<SectionNode>,
}

impl RenderTree {
    /// Find a section node by section id.
    pub fn section(&self, id: &str) -> Option<&SectionNode> {
        self.sections.iter().find(|section| section.id == id)
    }

    /// Iterate over every card, in display order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.sections.iter().flat_map(|section| section.cards.iter())
    }

    /// Find the card for an item.
    pub fn card(&self, id: &str) -> Option<&Card> {
        self.cards().find(|card| card.item.as_str() == id)
    }

    /// Find the card for an item, mutably.
    pub fn card_mut(&mut self, id: &str) -> Option<&mut Card> {
        self.sections
            .iter_mut()
            .flat_map(|section| section.cards.iter_mut())
            .find(|card| card.item.as_str() == id)
    }

    /// Read the live state of the control bound to `id`.
    pub fn control_value(&self, id: &str) -> Option<ControlValue> {
        self.card(id).map(Card::control_value)
    }
}

/// A section header and its cards.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionNode {
    pub id: String,
    pub title: String,
    pub cards: Vec<Card>,
}

/// One rendered question.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// The item this card renders.
    pub item: ItemId,

    pub title: CardTitle,

    /// The section title, upper-cased.
    pub meta: String,

    pub body: CardBody,
}

impl Card {
    /// Read the live state of this card's control.
    pub fn control_value(&self) -> ControlValue {
        match &self.body {
            CardBody::Setting(group) | CardBody::Rubric(group) => {
                ControlValue::Choice(group.selected().map(str::to_string))
            }
            CardBody::Textarea(field) => ControlValue::Text(field.value.clone()),
        }
    }
}

/// The title line of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardTitle {
    /// Ordinal shown before the prompt.
    pub number: Option<u32>,
    pub prompt: String,
    /// Show the required marker after the prompt.
    pub required: bool,
}

impl CardTitle {
    /// Ordinal and prompt, e.g. `"7. HUMANISM"`. The required marker is not included.
    pub fn text(&self) -> String {
        match self.number {
            Some(number) => format!("{number}. {}", self.prompt),
            None => self.prompt.clone(),
        }
    }
}

/// The control part of a card.
#[derive(Debug, Clone, PartialEq)]
pub enum CardBody {
    /// Branch selector; selecting re-renders the survey.
    Setting(ChoiceGroup),

    /// Rubric levels; selecting writes the level key through.
    Rubric(ChoiceGroup),

    /// Free text; every edit writes through.
    Textarea(TextField),
}

/// A group of mutually exclusive choices sharing one control name.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceGroup {
    pub name: ItemId,
    pub choices: Vec<Choice>,
}

impl ChoiceGroup {
    /// The key of the checked choice, if any.
    pub fn selected(&self) -> Option<&str> {
        self.choices
            .iter()
            .find(|choice| choice.checked)
            .map(|choice| choice.key.as_str())
    }

    /// Check `key` and uncheck every other choice.
    ///
    /// Returns `false` and leaves the group unchanged if there is no such key.
    pub fn select(&mut self, key: &str) -> bool {
        if !self.choices.iter().any(|choice| choice.key == key) {
            return false;
        }
        for choice in &mut self.choices {
            choice.checked = choice.key == key;
        }
        true
    }
}

/// One exclusive choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub key: String,
    /// Option label or level headline.
    pub label: String,
    /// Level descriptors. Empty for setting options.
    pub bullets: Vec<String>,
    pub checked: bool,
}

/// A multi-line text control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    pub name: ItemId,
    pub help: Option<String>,
    pub placeholder: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group() -> ChoiceGroup {
        ChoiceGroup {
            name: ItemId::new("q7_humanism"),
            choices: ["0", "1", "2"]
                .into_iter()
                .map(|key| Choice {
                    key: key.to_string(),
                    label: format!("({key})"),
                    bullets: Vec::new(),
                    checked: false,
                })
                .collect(),
        }
    }

    #[test]
    fn select_is_exclusive() {
        let mut group = group();
        assert_eq!(group.selected(), None);

        assert!(group.select("1"));
        assert!(group.select("2"));

        assert_eq!(group.selected(), Some("2"));
        assert_eq!(group.choices.iter().filter(|c| c.checked).count(), 1);
    }

    #[test]
    fn select_unknown_key_is_ignored() {
        let mut group = group();
        group.select("1");

        assert!(!group.select("9"));
        assert_eq!(group.selected(), Some("1"));
    }

    #[test]
    fn title_text() {
        let numbered = CardTitle {
            number: Some(7),
            prompt: "HUMANISM".to_string(),
            required: true,
        };
        let unnumbered = CardTitle {
            number: None,
            prompt: "Which setting?".to_string(),
            required: true,
        };

        assert_eq!(numbered.text(), "7. HUMANISM");
        assert_eq!(unnumbered.text(), "Which setting?");
    }

    #[test]
    fn card_control_value() {
        let mut card = Card {
            item: ItemId::new("q7_humanism"),
            title: CardTitle {
                number: Some(7),
                prompt: "HUMANISM".to_string(),
                required: true,
            },
            meta: "EVALUATION".to_string(),
            body: CardBody::Rubric(group()),
        };
        assert_eq!(card.control_value(), ControlValue::Choice(None));

        if let CardBody::Rubric(group) = &mut card.body {
            group.select("2");
        }
        assert_eq!(card.control_value().as_choice(), Some("2"));
    }
}
