//! Clerkship evaluation form.
//!
//! Run with: cargo run -p rubric-survey-egui --bin clerkship-eval
//!
//! Exports and print snapshots go to the working directory.

use rubric_survey_egui::EguiRunner;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("rubric_survey=info".parse()?)
                .add_directive("rubric_survey_egui=info".parse()?),
        )
        .init();

    EguiRunner::new()
        .with_title("Clerkship Evaluation")
        .run(clerkship_surveys::clerkship_bank())?;

    Ok(())
}
