//! The application controller: owns the store and drives the view.

use std::path::{Path, PathBuf};

use rubric_survey_types::{
    Event, Host, QuestionBank, QuestionKind, Responses, Survey, SurveyError, SurveyView,
};

use crate::{EXPORT_FILE_NAME, ExportDocument, build_survey, collect_responses, render_survey};

/// Id of the container a survey is mounted into by default.
pub const DEFAULT_MOUNT_ID: &str = "surveyRoot";

/// Options for mounting and exporting a survey.
#[derive(Debug, Clone)]
pub struct SurveyOptions {
    /// Id of the container to mount into.
    pub mount_id: String,
    /// File name used by `Controller::export_to`.
    pub export_file_name: String,
}

impl Default for SurveyOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl SurveyOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self {
            mount_id: DEFAULT_MOUNT_ID.to_string(),
            export_file_name: EXPORT_FILE_NAME.to_string(),
        }
    }

    /// Set the mount container id.
    pub fn with_mount_id(mut self, id: impl Into<String>) -> Self {
        self.mount_id = id.into();
        self
    }

    /// Set the export file name.
    pub fn with_export_file_name(mut self, name: impl Into<String>) -> Self {
        self.export_file_name = name.into();
        self
    }
}

/// Mount a survey for `bank` into `host` and render the initial view.
///
/// A missing mount point is logged and yields `None`; nothing is rendered.
pub fn bootstrap<H: Host>(
    host: &mut H,
    bank: QuestionBank,
    options: SurveyOptions,
) -> Option<Controller<H::View>> {
    match Controller::attach(host, bank, options) {
        Ok(controller) => Some(controller),
        Err(err) => {
            tracing::error!("survey not rendered: {err}");
            None
        }
    }
}

/// Owns the response store, the current survey and the mounted view.
///
/// Every user event goes through `handle`. Setting changes rebuild and
/// re-render the whole survey, all other events only write to the store.
pub struct Controller<V> {
    bank: QuestionBank,
    responses: Responses,
    survey: Survey,
    view: V,
    options: SurveyOptions,
}

impl<V: SurveyView> Controller<V> {
    /// Create a controller with an empty store and render into `view`.
    pub fn new(bank: QuestionBank, view: V, options: SurveyOptions) -> Self {
        let survey = build_survey(&bank, None);
        let mut controller = Self {
            bank,
            responses: Responses::new(),
            survey,
            view,
            options,
        };
        controller.render();
        controller
    }

    /// Look up the mount point in `host` and create a controller for it.
    pub fn attach<H>(
        host: &mut H,
        bank: QuestionBank,
        options: SurveyOptions,
    ) -> Result<Self, SurveyError>
    where
        H: Host<View = V>,
    {
        let view = host
            .mount_point(&options.mount_id)
            .ok_or_else(|| SurveyError::MissingMount(options.mount_id.clone()))?;
        Ok(Self::new(bank, view, options))
    }

    /// The currently selected branch key, or empty.
    pub fn setting(&self) -> &str {
        self.responses
            .get(self.bank.setting_id().as_str())
            .unwrap_or_default()
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn responses(&self) -> &Responses {
        &self.responses
    }

    pub fn survey(&self) -> &Survey {
        &self.survey
    }

    pub fn options(&self) -> &SurveyOptions {
        &self.options
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Rebuild the survey from the stored setting and replace the view.
    pub fn render(&mut self) {
        let setting = self.setting().to_string();
        self.survey = build_survey(&self.bank, Some(setting.as_str()));
        let tree = render_survey(&self.survey, &self.responses);
        tracing::debug!(
            setting = %setting,
            sections = tree.sections.len(),
            "rendering survey"
        );
        self.view.replace(tree);
    }

    /// Select a branch and re-render.
    ///
    /// Re-selecting the current branch does nothing. Answers for items of
    /// the previous branch stay in the store.
    pub fn on_setting_change(&mut self, key: &str) -> Result<(), SurveyError> {
        if !self.bank.setting.accepts(key) {
            return Err(SurveyError::InvalidAnswer {
                item: self.bank.setting_id().clone(),
                value: key.to_string(),
            });
        }
        if self.setting() == key {
            tracing::trace!("setting '{key}' re-selected");
            return Ok(());
        }

        tracing::info!("setting changed to '{key}'");
        let id = self.bank.setting_id().clone();
        self.responses.insert(id, key);
        self.render();
        Ok(())
    }

    /// Apply a user event.
    pub fn handle(&mut self, event: Event) -> Result<(), SurveyError> {
        let Some(question) = self.survey.find(event.item().as_str()).cloned() else {
            tracing::warn!("event for item '{}' that is not rendered", event.item());
            return Err(SurveyError::UnknownItem(event.item().clone()));
        };

        match (question.kind(), event) {
            (QuestionKind::Setting(_), Event::Select { key, .. }) => self.on_setting_change(&key),
            (QuestionKind::Rubric(_), Event::Select { item, key }) => {
                if !question.accepts(&key) {
                    tracing::warn!("'{key}' is not a level of '{item}'");
                    return Err(SurveyError::InvalidAnswer { item, value: key });
                }
                tracing::debug!("{item} = {key}");
                self.responses.insert(item, key);
                Ok(())
            }
            (QuestionKind::Textarea(_), Event::Input { item, text }) => {
                self.responses.insert(item, text);
                Ok(())
            }
            (kind, event) => Err(SurveyError::KindMismatch {
                item: event.item().clone(),
                kind: kind.name(),
            }),
        }
    }

    /// Reconcile the store with the live controls and snapshot it.
    ///
    /// A setting control that diverged from the store switches the branch,
    /// so the rendered sections follow the exported setting.
    pub fn collect(&mut self) -> ExportDocument {
        let setting_id = self.bank.setting_id().as_str().to_string();
        let before = self.setting().to_string();
        let document = collect_responses(&self.survey, &self.view, &mut self.responses, &setting_id);
        if document.setting != before {
            tracing::info!("setting changed to '{}' during collection", document.setting);
            self.render();
        }
        document
    }

    /// Collect and write the export document into `dir`.
    pub fn export_to(&mut self, dir: &Path) -> anyhow::Result<PathBuf> {
        let document = self.collect();
        let path = document.write_to(dir, &self.options.export_file_name)?;
        tracing::info!(
            "exported {} responses to {}",
            document.responses.len(),
            path.display()
        );
        Ok(path)
    }
}
