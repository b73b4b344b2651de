//! End-to-end scenarios on the clerkship rubric.

use clerkship_surveys::{
    AMBULATORY, INPATIENT, SETTING_ID, SURGERY, ambulatory_items, clerkship_bank,
    inpatient_items, shared_items, surgery_items,
};
use rubric_survey::{
    COMMENTS_SECTION_ID, CardBody, Controller, EVALUATION_SECTION_ID, Question, Responses,
    SETTING_SECTION_ID, SurveyOptions, TestHost, TestView, bootstrap, build_survey, render_survey,
};

fn ids(items: &[Question]) -> Vec<String> {
    items.iter().map(|q| q.id().to_string()).collect()
}

fn controller() -> Controller<TestView> {
    bootstrap(&mut TestHost::new(), clerkship_bank(), SurveyOptions::new()).unwrap()
}

fn pick(controller: &mut Controller<TestView>, item: &str, key: &str) {
    let event = controller.view_mut().select(item, key).unwrap();
    controller.handle(event).unwrap();
}

#[test]
fn every_branch_builds_setting_evaluation_and_comments() {
    let bank = clerkship_bank();
    let cases = [
        (INPATIENT, inpatient_items()),
        (AMBULATORY, ambulatory_items()),
        (SURGERY, surgery_items()),
    ];

    for (key, branch_items) in cases {
        let survey = build_survey(&bank, Some(key));

        let section_ids: Vec<_> = survey.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            section_ids,
            vec![SETTING_SECTION_ID, EVALUATION_SECTION_ID, COMMENTS_SECTION_ID]
        );

        let mut expected = ids(&branch_items);
        expected.extend(ids(&shared_items()));
        assert_eq!(ids(&survey.section(EVALUATION_SECTION_ID).unwrap().items), expected);
        assert_eq!(
            ids(&survey.section(COMMENTS_SECTION_ID).unwrap().items),
            vec!["mspe_placeholder"]
        );
    }
}

#[test]
fn no_branch_builds_only_the_setting_item() {
    let survey = build_survey(&clerkship_bank(), None);

    assert_eq!(survey.sections.len(), 1);
    assert_eq!(ids(&survey.sections[0].items), vec![SETTING_ID]);
}

#[test]
fn initial_render_shows_three_unselected_options() {
    let controller = controller();
    let tree = controller.view().tree().unwrap();

    assert_eq!(tree.sections.len(), 1);
    assert!(tree.section(EVALUATION_SECTION_ID).is_none());
    assert!(tree.section(COMMENTS_SECTION_ID).is_none());

    let CardBody::Setting(group) = &tree.card(SETTING_ID).unwrap().body else {
        panic!("Expected setting body");
    };
    let labels: Vec<_> = group.choices.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["Inpatient", "Ambulatory", "Surgery"]);
    assert!(group.choices.iter().all(|c| !c.checked));
}

#[test]
fn rendering_twice_gives_identical_trees() {
    let bank = clerkship_bank();
    let survey = build_survey(&bank, Some(INPATIENT));
    let responses = Responses::new();

    let first = render_survey(&survey, &responses);
    let second = render_survey(&survey, &responses);

    assert_eq!(first, second);
    assert!(first.cards().all(|card| match &card.body {
        CardBody::Setting(group) | CardBody::Rubric(group) => group.selected().is_none(),
        CardBody::Textarea(field) => field.value.is_empty(),
    }));
}

#[test]
fn numbers_are_displayed_verbatim() {
    let mut controller = controller();
    pick(&mut controller, SETTING_ID, INPATIENT);

    let tree = controller.view().tree().unwrap();
    let titles: Vec<_> = tree.cards().map(|card| card.title.text()).collect();
    assert_eq!(
        titles,
        vec![
            "What setting did you work with this student in?",
            "1. INFORMATION GATHERING",
            "6. INTERPROFESSIONAL COMMUNICATION",
            "7. HUMANISM",
            "8. INTEGRITY AND WORK ETHIC",
            "11. Comments",
        ]
    );
}

#[test]
fn rubric_selection_writes_through_immediately() {
    let mut controller = controller();
    pick(&mut controller, SETTING_ID, INPATIENT);
    pick(&mut controller, "q7_humanism", "3");

    assert_eq!(controller.responses().get("q7_humanism"), Some("3"));
}

#[test]
fn round_trip_export() {
    let mut controller = controller();
    pick(&mut controller, SETTING_ID, INPATIENT);
    pick(&mut controller, "q1_information_gathering", "2");
    let event = controller
        .view_mut()
        .type_text("mspe_placeholder", "looks good")
        .unwrap();
    controller.handle(event).unwrap();

    let document = controller.collect();

    assert_eq!(document.setting, INPATIENT);
    let get = |id: &str| document.responses.get(id).map(String::as_str);
    assert_eq!(get("setting_context"), Some(INPATIENT));
    assert_eq!(get("q1_information_gathering"), Some("2"));
    assert_eq!(get("mspe_placeholder"), Some("looks good"));
}

#[test]
fn branch_switch_keeps_inpatient_answer() {
    let mut controller = controller();
    pick(&mut controller, SETTING_ID, INPATIENT);
    pick(&mut controller, "q1_information_gathering", "4");
    pick(&mut controller, SETTING_ID, AMBULATORY);

    let tree = controller.view().tree().unwrap();
    assert!(tree.card("q1_information_gathering").is_none());
    assert!(tree.card("q1_information_gathering_amb").is_some());
    assert_eq!(
        controller.responses().get("q1_information_gathering"),
        Some("4")
    );

    let document = controller.collect();
    assert_eq!(document.setting, AMBULATORY);
    assert_eq!(
        document.responses.get("q1_information_gathering").map(String::as_str),
        Some("4")
    );
}

#[test]
fn collected_at_is_a_parseable_timestamp() {
    let before = chrono::Utc::now();
    let document = controller().collect();
    let after = chrono::Utc::now();

    let json: serde_json::Value = serde_json::from_str(&document.to_json().unwrap()).unwrap();
    let stamp = json["collectedAt"].as_str().unwrap();
    let parsed = chrono::DateTime::parse_from_rfc3339(stamp).unwrap();

    assert!(parsed >= before && parsed <= after);
}

#[test]
fn printable_document_reflects_current_view() {
    let mut controller = controller();
    pick(&mut controller, SETTING_ID, SURGERY);
    pick(&mut controller, "q8_integrity_work_ethic", "1");

    let html = rubric_survey_html::to_html(
        controller.view().tree().unwrap(),
        &rubric_survey_html::HtmlOptions::new().with_title("Clerkship Evaluation"),
    );

    assert!(html.contains("Clerkship Evaluation"));
    assert!(html.contains("8. INTEGRITY AND WORK ETHIC"));
    assert!(html.contains("value=\"1\" checked"));
    assert!(html.contains("window.print()"));
    assert!(!html.contains("q1_information_gathering_amb"));
}
