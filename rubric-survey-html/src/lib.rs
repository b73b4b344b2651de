//! # rubric-survey-html
//!
//! Renders a rubric-survey `RenderTree` as an HTML document, with the
//! current selections and text filled in. Open the document in a browser
//! and use its print or export-to-PDF facility.
//!
//! ```rust,ignore
//! use rubric_survey_html::{HtmlOptions, to_html};
//!
//! let options = HtmlOptions::new().with_title("Evaluation");
//! let html = to_html(controller.view().tree().unwrap(), &options);
//! ```

mod generator;

pub use generator::{HtmlOptions, PRINT_FILE_NAME, escape_html, to_html, write_html};
