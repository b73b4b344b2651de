//! Core types for the rubric-survey crate.
//!
//! This crate provides the foundational types for branching rubric surveys:
//! - `Question` and `QuestionKind` - Setting selectors, graded rubric items and free text
//! - `QuestionBank`, `Section` and `Survey` - The static catalog and the sections built from it
//! - `Responses` and `ItemId` - The in-memory answer store and its keys
//! - `RenderTree` and `SurveyView` - Presentation-agnostic controls and the adapter seam

mod item_id;
pub use item_id::ItemId;

mod responses;
pub use responses::Responses;

mod question;
pub use question::{
    Level, Question, QuestionKind, RubricQuestion, SettingOption, SettingQuestion,
    TextareaQuestion,
};

mod bank;
pub use bank::{Branch, QuestionBank};

mod survey;
pub use survey::{Section, Survey};

mod view;
pub use view::{
    Card, CardBody, CardTitle, Choice, ChoiceGroup, ControlValue, Event, RenderTree, SectionNode,
    TextField,
};

mod error;
pub use error::SurveyError;

mod traits;
pub use traits::{Host, SurveyView};
