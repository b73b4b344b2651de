//! # rubric-survey
//!
//! Branching rubric surveys. Presentation-agnostic.
//!
//! A `QuestionBank` holds a setting selector, per-branch rubric items, shared
//! items and a comments block. The pipeline is:
//!
//! 1. [`build_survey`] picks the sections for the current branch selection.
//! 2. [`render_survey`] turns the survey and the current [`Responses`] into a
//!    [`RenderTree`], a pure description of the controls.
//! 3. A [`SurveyView`] adapter applies the tree to a UI toolkit and reports
//!    user [`Event`]s.
//! 4. The [`Controller`] writes events through to the store and rebuilds the
//!    survey when the setting changes.
//! 5. [`collect_responses`] reconciles the store with the live controls and
//!    produces an [`ExportDocument`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rubric_survey::{SurveyOptions, TestHost, Event, bootstrap};
//!
//! let mut host = TestHost::new();
//! let bank = clerkship_surveys::clerkship_bank();
//! let mut controller =
//!     bootstrap(&mut host, bank, SurveyOptions::new()).expect("mount point exists");
//!
//! controller.handle(Event::select("setting_context", "INPATIENT"))?;
//! controller.handle(Event::select("q1_information_gathering", "3"))?;
//!
//! let document = controller.collect();
//! println!("{}", document.to_json()?);
//! ```
//!
//! ## Backends
//!
//! Views are separate crates that implement `SurveyView`:
//! - `rubric-survey-egui` - desktop form via egui
//! - `rubric-survey-html` - printable HTML document

pub use rubric_survey_types::*;

mod builder;
pub use builder::{COMMENTS_SECTION_ID, EVALUATION_SECTION_ID, SETTING_SECTION_ID, build_survey};

mod render;
pub use render::render_survey;

mod collect;
pub use collect::{EXPORT_FILE_NAME, ExportDocument, collect_responses};

mod controller;
pub use controller::{Controller, DEFAULT_MOUNT_ID, SurveyOptions, bootstrap};

mod test_view;
pub use test_view::{TestHost, TestView};
