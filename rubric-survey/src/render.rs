//! Pure rendering from a survey and the response store to a control tree.

use rubric_survey_types::{
    Card, CardBody, CardTitle, Choice, ChoiceGroup, Question, QuestionKind, RenderTree, Responses,
    RubricQuestion, Section, SectionNode, SettingQuestion, Survey, TextField, TextareaQuestion,
};

/// Render a survey into a control tree.
///
/// Pre-selection and pre-filled text mirror the store. The same survey and
/// store always produce an equal tree.
pub fn render_survey(survey: &Survey, responses: &Responses) -> RenderTree {
    RenderTree {
        sections: survey
            .sections()
            .iter()
            .map(|section| render_section(section, responses))
            .collect(),
    }
}

fn render_section(section: &Section, responses: &Responses) -> SectionNode {
    let meta = section.title.to_uppercase();
    SectionNode {
        id: section.id.clone(),
        title: section.title.clone(),
        cards: section
            .items
            .iter()
            .map(|question| render_card(question, &meta, responses))
            .collect(),
    }
}

fn render_card(question: &Question, meta: &str, responses: &Responses) -> Card {
    let current = responses.get(question.id().as_str());

    let body = match question.kind() {
        QuestionKind::Setting(setting) => {
            CardBody::Setting(render_setting(question, setting, current))
        }
        QuestionKind::Rubric(rubric) => CardBody::Rubric(render_rubric(question, rubric, current)),
        QuestionKind::Textarea(text) => {
            CardBody::Textarea(render_textarea(question, text, current))
        }
    };

    Card {
        item: question.id().clone(),
        // Numbers are shown exactly as stored.
        title: CardTitle {
            number: question.number(),
            prompt: question.prompt().to_string(),
            required: question.is_required(),
        },
        meta: meta.to_string(),
        body,
    }
}

fn render_setting(
    question: &Question,
    setting: &SettingQuestion,
    current: Option<&str>,
) -> ChoiceGroup {
    ChoiceGroup {
        name: question.id().clone(),
        choices: setting
            .options
            .iter()
            .map(|option| Choice {
                key: option.key.clone(),
                label: option.label.clone(),
                bullets: Vec::new(),
                checked: current == Some(option.key.as_str()),
            })
            .collect(),
    }
}

fn render_rubric(
    question: &Question,
    rubric: &RubricQuestion,
    current: Option<&str>,
) -> ChoiceGroup {
    ChoiceGroup {
        name: question.id().clone(),
        choices: rubric
            .levels
            .iter()
            .map(|level| Choice {
                key: level.key.clone(),
                label: level.headline.clone(),
                bullets: level.bullets.clone(),
                checked: current == Some(level.key.as_str()),
            })
            .collect(),
    }
}

fn render_textarea(
    question: &Question,
    text: &TextareaQuestion,
    current: Option<&str>,
) -> TextField {
    TextField {
        name: question.id().clone(),
        help: text.help.clone().filter(|help| !help.is_empty()),
        placeholder: text.placeholder.clone().unwrap_or_default(),
        value: current.unwrap_or_default().to_string(),
    }
}
