//! In-memory view for driving surveys without a UI toolkit.
//!
//! `TestView` keeps the mounted render tree and lets you act on its controls
//! the way a user would. Acting on a control changes its state and returns
//! the `Event` a real toolkit would emit; pass it to `Controller::handle`.
//!
//! # Example
//!
//! ```rust,ignore
//! use rubric_survey::{SurveyOptions, TestHost, bootstrap};
//!
//! let mut controller = bootstrap(&mut TestHost::new(), bank, SurveyOptions::new()).unwrap();
//!
//! let event = controller.view_mut().select("setting_context", "INPATIENT").unwrap();
//! controller.handle(event)?;
//!
//! assert_eq!(controller.responses().get("setting_context"), Some("INPATIENT"));
//! ```

use rubric_survey_types::{CardBody, ControlValue, Event, Host, ItemId, RenderTree, SurveyView};

/// A view that holds the mounted tree in memory.
#[derive(Debug, Clone, Default)]
pub struct TestView {
    tree: Option<RenderTree>,
    mounts: usize,
}

impl TestView {
    /// Create a new view with nothing mounted.
    pub fn new() -> Self {
        Self::default()
    }

    /// The mounted tree, if anything was mounted.
    pub fn tree(&self) -> Option<&RenderTree> {
        self.tree.as_ref()
    }

    /// How many times a tree was mounted.
    pub fn mount_count(&self) -> usize {
        self.mounts
    }

    /// Select `key` in the choice control for `item`.
    ///
    /// Returns `None` if there is no such choice control or key.
    pub fn select(&mut self, item: &str, key: &str) -> Option<Event> {
        let card = self.tree.as_mut()?.card_mut(item)?;
        match &mut card.body {
            CardBody::Setting(group) | CardBody::Rubric(group) => {
                group.select(key).then(|| Event::select(item, key))
            }
            CardBody::Textarea(_) => None,
        }
    }

    /// Replace the text of the text control for `item`.
    ///
    /// Returns `None` if there is no such text control.
    pub fn type_text(&mut self, item: &str, text: &str) -> Option<Event> {
        let card = self.tree.as_mut()?.card_mut(item)?;
        match &mut card.body {
            CardBody::Textarea(field) => {
                field.value = text.to_string();
                Some(Event::input(item, text))
            }
            CardBody::Setting(_) | CardBody::Rubric(_) => None,
        }
    }
}

impl SurveyView for TestView {
    fn replace(&mut self, tree: RenderTree) {
        self.tree = Some(tree);
        self.mounts += 1;
    }

    fn control_value(&self, id: &ItemId) -> Option<ControlValue> {
        self.tree.as_ref()?.control_value(id.as_str())
    }
}

/// A host that hands out `TestView`s.
#[derive(Debug, Clone)]
pub struct TestHost {
    mount_ids: Vec<String>,
}

impl Default for TestHost {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHost {
    /// Create a host with the default `surveyRoot` container.
    pub fn new() -> Self {
        Self::with_mount_ids([crate::DEFAULT_MOUNT_ID])
    }

    /// Create a host with exactly the given containers.
    pub fn with_mount_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mount_ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a host without any container.
    pub fn without_mount() -> Self {
        Self {
            mount_ids: Vec::new(),
        }
    }
}

impl Host for TestHost {
    type View = TestView;

    fn mount_point(&mut self, id: &str) -> Option<TestView> {
        self.mount_ids
            .iter()
            .any(|mount| mount == id)
            .then(TestView::new)
    }
}
