//! Write a printable clerkship evaluation with a few answers filled in.
//!
//! Run with: cargo run -p rubric-survey-html --example print_clerkship

use std::path::Path;

use rubric_survey::{SurveyOptions, TestHost, bootstrap};
use rubric_survey_html::{HtmlOptions, PRINT_FILE_NAME, write_html};

fn main() -> anyhow::Result<()> {
    let mut controller = bootstrap(
        &mut TestHost::new(),
        clerkship_surveys::clerkship_bank(),
        SurveyOptions::new(),
    )
    .ok_or_else(|| anyhow::anyhow!("no mount point"))?;

    for (item, key) in [
        (clerkship_surveys::SETTING_ID, clerkship_surveys::INPATIENT),
        ("q1_information_gathering", "3"),
        ("q7_humanism", "4"),
    ] {
        if let Some(event) = controller.view_mut().select(item, key) {
            controller.handle(event)?;
        }
    }

    let tree = controller
        .view()
        .tree()
        .ok_or_else(|| anyhow::anyhow!("nothing rendered"))?;
    let options = HtmlOptions::new().with_title("Clerkship Evaluation");
    write_html(tree, &options, Path::new(PRINT_FILE_NAME))?;

    println!("Generated {PRINT_FILE_NAME}");
    Ok(())
}
