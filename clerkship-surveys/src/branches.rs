//! Setting-specific information gathering criteria.

use rubric_survey::{Level, Question};

const PROMPT: &str = "INFORMATION GATHERING";

fn information_gathering(id: &str, levels: [&[&str]; 4]) -> Question {
    let [needs, progressing, meets, exceeds] = levels;
    Question::rubric(
        id,
        1,
        PROMPT,
        vec![
            Level::not_observed(),
            Level::new(1, "Needs Improvement", needs),
            Level::new(2, "Progressing towards Expectations", progressing),
            Level::new(3, "Meets Expectations", meets),
            Level::new(4, "Exceeds Expectations", exceeds),
        ],
    )
    .required(true)
}

pub fn inpatient_items() -> Vec<Question> {
    vec![information_gathering(
        "q1_information_gathering",
        [
            &[
                "Misses key inpatient priorities and safety-critical details",
                "Overlooks essential history or exam findings relevant to acute management",
                "Uses generic templates or irrelevant exam steps",
            ],
            &[
                "Obtains core story and basic exam but loses focus with complex or unstable patients",
                "Misses qualifiers, context, or maneuvers important for inpatient decisions",
                "Adjusts inconsistently and includes low-yield questions or steps",
            ],
            &[
                "Organized, efficient history and exam aligned with inpatient priorities",
                "Provides accurate, relevant details that inform daily assessment",
                "Adapts well to changes in patient condition and comfort",
            ],
            &[
                "Exceptionally efficient and focused information gathering for acute care",
                "Identifies subtle, high-impact findings that shift management",
                "Dynamically tailors questions and maneuvers with clear real-time analysis",
            ],
        ],
    )]
}

pub fn ambulatory_items() -> Vec<Question> {
    vec![information_gathering(
        "q1_information_gathering_amb",
        [
            &[
                "Misses key ambulatory priorities",
                "Overlooks essential preventive or chronic care elements",
                "Uses generic templates",
            ],
            &[
                "Obtains core story but misses important context",
                "Adjusts inconsistently to patient needs",
                "Includes some low-yield questions",
            ],
            &[
                "Organized, efficient history and exam",
                "Provides accurate, relevant details",
                "Adapts well to patient needs",
            ],
            &[
                "Exceptionally efficient information gathering",
                "Identifies subtle findings",
                "Dynamically tailors approach",
            ],
        ],
    )]
}

pub fn surgery_items() -> Vec<Question> {
    vec![information_gathering(
        "q1_information_gathering_surg",
        [
            &[
                "Misses key surgical priorities",
                "Overlooks essential perioperative details",
                "Uses generic templates",
            ],
            &[
                "Obtains core story but misses important context",
                "Adjusts inconsistently",
                "Includes some low-yield steps",
            ],
            &[
                "Organized, efficient surgical assessment",
                "Provides accurate, relevant details",
                "Adapts well to surgical context",
            ],
            &[
                "Exceptionally efficient surgical assessment",
                "Identifies subtle findings",
                "Dynamically tailors approach",
            ],
        ],
    )]
}
