//! Applying render trees to egui widgets.

use rubric_survey::{
    Card, CardBody, ChoiceGroup, ControlValue, DEFAULT_MOUNT_ID, Event, Host, ItemId, RenderTree,
    SurveyView, TextField,
};

/// A view that draws the mounted tree with egui.
///
/// egui is immediate mode: the tree is the control state, and `show` both
/// draws it and applies the user's input to it.
#[derive(Debug, Clone, Default)]
pub struct EguiView {
    tree: Option<RenderTree>,
}

impl EguiView {
    /// Create a new view with nothing mounted.
    pub fn new() -> Self {
        Self::default()
    }

    /// The mounted tree, if anything was mounted.
    pub fn tree(&self) -> Option<&RenderTree> {
        self.tree.as_ref()
    }

    /// Draw the mounted tree and return the events the user produced this frame.
    pub fn show(&mut self, ui: &mut egui::Ui) -> Vec<Event> {
        let mut events = Vec::new();

        let Some(tree) = &mut self.tree else {
            return events;
        };

        for section in &mut tree.sections {
            ui.add_space(12.0);
            ui.heading(section.title.as_str());
            ui.separator();

            for card in &mut section.cards {
                let id = card.item.as_str().to_owned();
                ui.push_id(id, |ui| {
                    ui.group(|ui| {
                        ui.set_width(ui.available_width());
                        show_card(ui, card, &mut events);
                    });
                });
                ui.add_space(6.0);
            }
        }

        events
    }
}

fn show_card(ui: &mut egui::Ui, card: &mut Card, events: &mut Vec<Event>) {
    ui.horizontal(|ui| {
        ui.strong(card.title.text());
        if card.title.required {
            ui.colored_label(egui::Color32::RED, "*");
        }
    });
    ui.label(egui::RichText::new(card.meta.as_str()).small().weak());
    ui.add_space(4.0);

    match &mut card.body {
        CardBody::Setting(group) => show_setting(ui, group, events),
        CardBody::Rubric(group) => show_rubric(ui, group, events),
        CardBody::Textarea(field) => show_textarea(ui, field, events),
    }
}

fn show_setting(ui: &mut egui::Ui, group: &mut ChoiceGroup, events: &mut Vec<Event>) {
    let mut picked = None;
    ui.horizontal(|ui| {
        for choice in &group.choices {
            if ui.radio(choice.checked, choice.label.as_str()).clicked() {
                picked = Some(choice.key.clone());
            }
        }
    });
    push_selection(group, picked, events);
}

fn show_rubric(ui: &mut egui::Ui, group: &mut ChoiceGroup, events: &mut Vec<Event>) {
    let mut picked = None;
    for choice in &group.choices {
        if ui.radio(choice.checked, choice.label.as_str()).clicked() {
            picked = Some(choice.key.clone());
        }
        if !choice.bullets.is_empty() {
            ui.indent(choice.key.as_str(), |ui| {
                for bullet in &choice.bullets {
                    ui.label(format!("• {bullet}"));
                }
            });
        }
    }
    push_selection(group, picked, events);
}

fn push_selection(group: &mut ChoiceGroup, picked: Option<String>, events: &mut Vec<Event>) {
    if let Some(key) = picked
        && group.select(&key)
    {
        events.push(Event::select(&group.name, key));
    }
}

fn show_textarea(ui: &mut egui::Ui, field: &mut TextField, events: &mut Vec<Event>) {
    if let Some(help) = &field.help {
        ui.label(help.as_str());
    }
    let response = ui.add(
        egui::TextEdit::multiline(&mut field.value)
            .hint_text(field.placeholder.as_str())
            .desired_rows(4)
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        events.push(Event::input(&field.name, field.value.clone()));
    }
}

impl SurveyView for EguiView {
    fn replace(&mut self, tree: RenderTree) {
        self.tree = Some(tree);
    }

    fn control_value(&self, id: &ItemId) -> Option<ControlValue> {
        self.tree.as_ref()?.control_value(id.as_str())
    }
}

/// The egui window as a host: it has exactly one survey container.
#[derive(Debug, Clone)]
pub struct EguiHost {
    mount_id: String,
}

impl Default for EguiHost {
    fn default() -> Self {
        Self::new()
    }
}

impl EguiHost {
    /// Create a host whose container has the default id.
    pub fn new() -> Self {
        Self {
            mount_id: DEFAULT_MOUNT_ID.to_string(),
        }
    }
}

impl Host for EguiHost {
    type View = EguiView;

    fn mount_point(&mut self, id: &str) -> Option<EguiView> {
        (self.mount_id == id).then(EguiView::new)
    }
}
