//! # rubric-survey-egui
//!
//! An egui view for rubric-survey that renders surveys as a desktop form.
//!
//! All sections of the current survey are shown at once. Picking a setting
//! rebuilds the form for that branch; every other control writes straight
//! into the response store. The toolbar exports the answers as JSON and
//! writes a printable HTML snapshot of the form.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rubric_survey_egui::EguiRunner;
//!
//! fn main() -> anyhow::Result<()> {
//!     EguiRunner::new()
//!         .with_title("Clerkship Evaluation")
//!         .with_output_dir("exports")
//!         .run(clerkship_surveys::clerkship_bank())?;
//!     Ok(())
//! }
//! ```

mod app;
mod view;

pub use app::{EguiError, EguiRunner, SurveyApp};
pub use view::{EguiHost, EguiView};
