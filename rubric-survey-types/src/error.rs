use crate::ItemId;

/// Error type for survey operations.
#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    /// The hosting environment has no container with the given id.
    #[error("Missing mount point: no container with id '{0}'")]
    MissingMount(String),

    /// An event referred to an item that is not part of the current survey.
    #[error("Unknown item: {0}")]
    UnknownItem(ItemId),

    /// A value that is not one of the item's option or level keys.
    #[error("Invalid answer '{value}' for item '{item}'")]
    InvalidAnswer { item: ItemId, value: String },

    /// A choice event for a text item, or a text event for a choice item.
    #[error("Item '{item}' is a {kind} question and cannot take this event")]
    KindMismatch { item: ItemId, kind: &'static str },

    /// Two items in a bank share an id.
    #[error("Duplicate item id: {0}")]
    DuplicateItem(ItemId),

    /// The bank is structurally inconsistent.
    #[error("Invalid question bank: {0}")]
    InvalidBank(String),
}

impl SurveyError {
    /// Check if this error is the missing mount point condition.
    pub fn is_missing_mount(&self) -> bool {
        matches!(self, Self::MissingMount(_))
    }
}
