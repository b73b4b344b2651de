//! The eframe application hosting a survey.

use std::path::PathBuf;

use rubric_survey::{Controller, QuestionBank, SurveyError, SurveyOptions, bootstrap};
use rubric_survey_html::{HtmlOptions, PRINT_FILE_NAME, write_html};
use thiserror::Error;

use crate::{EguiHost, EguiView};

/// Error type for the egui runner.
#[derive(Debug, Error)]
pub enum EguiError {
    /// The question bank failed validation.
    #[error(transparent)]
    Survey(#[from] SurveyError),

    /// An error occurred in the egui/eframe backend.
    #[error("Egui error: {0}")]
    EguiError(String),
}

/// Builder/configuration for the egui window.
#[derive(Debug, Clone)]
pub struct EguiRunner {
    /// Window title, also used as the printed document title.
    title: String,
    /// Window size [width, height].
    window_size: [f32; 2],
    /// Where exports and print snapshots are written.
    output_dir: PathBuf,
    options: SurveyOptions,
}

impl Default for EguiRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl EguiRunner {
    /// Create a new runner with default settings.
    pub fn new() -> Self {
        Self {
            title: "Survey".to_string(),
            window_size: [820.0, 900.0],
            output_dir: PathBuf::from("."),
            options: SurveyOptions::new(),
        }
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the window size.
    pub fn with_window_size(mut self, size: [f32; 2]) -> Self {
        self.window_size = size;
        self
    }

    /// Set the directory exports and print snapshots are written to.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the mount and export options.
    pub fn with_options(mut self, options: SurveyOptions) -> Self {
        self.options = options;
        self
    }

    /// Open the window and run until it is closed.
    ///
    /// If the survey cannot be mounted this logs the problem and returns
    /// without opening a window.
    pub fn run(self, bank: QuestionBank) -> Result<(), EguiError> {
        bank.validate()?;

        let Some(controller) = bootstrap(&mut EguiHost::new(), bank, self.options) else {
            return Ok(());
        };

        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(self.title.clone())
                .with_inner_size(self.window_size),
            ..Default::default()
        };

        let app = SurveyApp::new(controller, self.title.clone(), self.output_dir);

        // Blocks until the window is closed.
        eframe::run_native(
            &self.title,
            native_options,
            Box::new(move |_cc| Ok(Box::new(app) as Box<dyn eframe::App>)),
        )
        .map_err(|e| EguiError::EguiError(e.to_string()))
    }
}

/// The survey form with its Export and Print toolbar.
pub struct SurveyApp {
    controller: Controller<EguiView>,
    title: String,
    output_dir: PathBuf,
    status: Option<String>,
}

impl SurveyApp {
    pub fn new(controller: Controller<EguiView>, title: String, output_dir: PathBuf) -> Self {
        Self {
            controller,
            title,
            output_dir,
            status: None,
        }
    }

    pub fn controller(&self) -> &Controller<EguiView> {
        &self.controller
    }

    /// The last message shown in the status bar.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Collect the answers and write the export document.
    pub fn export(&mut self) {
        self.status = Some(match self.controller.export_to(&self.output_dir) {
            Ok(path) => format!("Saved {}", path.display()),
            Err(err) => {
                tracing::error!("export failed: {err:#}");
                format!("Export failed: {err:#}")
            }
        });
    }

    /// Write the current form as a printable HTML document.
    pub fn print(&mut self) {
        let Some(tree) = self.controller.view().tree() else {
            tracing::warn!("print requested before the survey was rendered");
            self.status = Some("Nothing to print: the survey is not rendered".to_string());
            return;
        };
        let path = self.output_dir.join(PRINT_FILE_NAME);
        let options = HtmlOptions::new()
            .with_title(self.title.as_str())
            .with_root_id(self.controller.options().mount_id.as_str());

        self.status = Some(match write_html(tree, &options, &path) {
            Ok(()) => {
                tracing::info!("print document written to {}", path.display());
                format!(
                    "Wrote {}; open it in a browser to print or save as PDF",
                    path.display()
                )
            }
            Err(err) => {
                tracing::error!("print failed: {err:#}");
                format!("Print failed: {err:#}")
            }
        });
    }

    /// Apply the events one frame produced.
    pub fn apply(&mut self, events: Vec<rubric_survey::Event>) {
        for event in events {
            if let Err(err) = self.controller.handle(event) {
                tracing::warn!("ignored event: {err}");
                self.status = Some(err.to_string());
            }
        }
    }
}

impl eframe::App for SurveyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.title.as_str());
                ui.separator();
                if ui.button("Export JSON").clicked() {
                    self.export();
                }
                if ui.button("Print").clicked() {
                    self.print();
                }
            });
        });

        if let Some(status) = &self.status {
            egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
                ui.label(status.as_str());
            });
        }

        let events = egui::CentralPanel::default()
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .show(ui, |ui| self.controller.view_mut().show(ui))
                    .inner
            })
            .inner;

        self.apply(events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rubric_survey::Event;

    fn app(dir: &std::path::Path) -> SurveyApp {
        let controller = bootstrap(
            &mut EguiHost::new(),
            clerkship_surveys::clerkship_bank(),
            SurveyOptions::new(),
        )
        .unwrap();
        SurveyApp::new(controller, "Clerkship".to_string(), dir.to_path_buf())
    }

    #[test]
    fn apply_routes_events_to_the_controller() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());

        app.apply(vec![
            Event::select(clerkship_surveys::SETTING_ID, clerkship_surveys::AMBULATORY),
            Event::select("q1_information_gathering_amb", "2"),
        ]);

        assert_eq!(app.controller().setting(), "AMBULATORY");
        assert_eq!(
            app.controller().responses().get("q1_information_gathering_amb"),
            Some("2")
        );
        assert!(app.status().is_none());
    }

    #[test]
    fn rejected_events_show_in_status() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());

        app.apply(vec![Event::select("q7_humanism", "3")]);

        assert_eq!(app.status(), Some("Unknown item: q7_humanism"));
    }

    #[test]
    fn export_and_print_write_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());
        app.apply(vec![Event::select(
            clerkship_surveys::SETTING_ID,
            clerkship_surveys::INPATIENT,
        )]);

        app.export();
        app.print();

        assert!(dir.path().join("survey_responses.json").exists());
        let printed = std::fs::read_to_string(dir.path().join(PRINT_FILE_NAME)).unwrap();
        assert!(printed.contains("1. INFORMATION GATHERING"));
    }

    #[test]
    fn export_into_missing_dir_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir.path().join("missing"));

        app.export();

        assert!(app.status().unwrap().starts_with("Export failed"));
    }
}
