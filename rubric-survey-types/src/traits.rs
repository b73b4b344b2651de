use crate::{ControlValue, ItemId, RenderTree};

/// Trait for adapters that apply a render tree to a UI toolkit.
///
/// A view owns the live controls. Mounting is destructive: `replace`
/// discards whatever was mounted before, nothing is diffed.
pub trait SurveyView {
    /// Replace the mounted contents with `tree`.
    fn replace(&mut self, tree: RenderTree);

    /// Read the live state of the control bound to `id`.
    ///
    /// Returns `None` if no such control is currently mounted.
    fn control_value(&self, id: &ItemId) -> Option<ControlValue>;
}

/// Trait for the environment hosting a survey.
pub trait Host {
    /// The view type this host mounts surveys into.
    type View: SurveyView;

    /// Look up the container with the given id.
    ///
    /// Returns `None` if the host has no such container.
    fn mount_point(&mut self, id: &str) -> Option<Self::View>;
}
