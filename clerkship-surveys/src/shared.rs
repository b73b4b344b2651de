//! Criteria evaluated in every setting.

use rubric_survey::{Level, Question};

fn criterion(id: &str, number: u32, prompt: &str, levels: [&[&str]; 4]) -> Question {
    let [needs, progressing, meets, exceeds] = levels;
    Question::rubric(
        id,
        number,
        prompt,
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

pub fn shared_items() -> Vec<Question> {
    vec![interprofessional(), humanism(), integrity_work_ethic()]
}

fn interprofessional() -> Question {
    criterion(
        "q6_interprofessional",
        6,
        "INTERPROFESSIONAL COMMUNICATION",
        [
            &[
                "Frequently uncommunicative or unclear with team members",
                "Creates confusion with delayed, incomplete, or inaccurate handoffs",
                "Fails to respond promptly or professionally to staff inquiries",
            ],
            &[
                "Communicates respectfully but with limited clarity or timeliness",
                "Handoffs are functional but lack important context or detail",
                "Requires prompting to follow up or coordinate across roles",
            ],
            &[
                "Communicates clearly, promptly, and professionally with all staff",
                "Collaborates well across disciplines and supports smooth workflow",
                "Provides timely updates and dependable handoffs that ensure shared understanding",
            ],
            &[
                "Delivers polished, proactive, well-coordinated interprofessional communication",
                "Anticipates team needs, supports workflow, and communicates confidently across roles",
                "Builds strong, respectful relationships that enhance coordinated care and team efficiency",
            ],
        ],
    )
}

fn humanism() -> Question {
    criterion(
        "q7_humanism",
        7,
        "HUMANISM",
        [
            &[
                "Disrespectful, impatient, or judgmental under stress",
                "Shows bias, dismisses concerns, or appears detached with patients",
                "Prioritizes personal convenience over patient needs and shows limited sensitivity",
            ],
            &[
                "Polite and courteous but with limited warmth or emotional awareness",
                "Recognizes distress but responds briefly or superficially",
                "Maintains professionalism but focuses more on tasks than patient experience",
            ],
            &[
                "Consistently respectful, kind, and patient with individuals and families",
                "Shows empathy even under time pressure or stress",
                "Communicates inclusively, without judgment, and with appropriate emotional awareness",
            ],
            &[
                "Demonstrates exceptional compassion, humility, and emotional insight",
                "Responds to distress with a calm, reassuring presence",
                "Models humanistic care that positively shapes team culture",
            ],
        ],
    )
}

fn integrity_work_ethic() -> Question {
    criterion(
        "q8_integrity_work_ethic",
        8,
        "INTEGRITY AND WORK ETHIC",
        [
            &[
                "Frequently late, unprepared, or unreliable in availability",
                "Fails to complete tasks, orders, or follow-through and avoids accountability",
                "Shows limited initiative with lapses in professionalism",
            ],
            &[
                "Generally dependable with reminders and oversight",
                "Completes tasks but shows little initiative and acknowledges errors only when prompted",
                "Maintains basic professionalism but rarely takes independent ownership",
            ],
            &[
                "Reliable, punctual, and consistently prepared for responsibilities",
                "Takes responsibility for errors and corrects issues independently",
                "Maintains confidentiality, professionalism, and steady follow-through",
            ],
            &[
                "Demonstrates exceptional reliability, initiative, and accountability under stress",
                "Anticipates team needs and contributes proactively without prompting",
                "Models exemplary professionalism and ethical conduct for peers and staff",
            ],
        ],
    )
}
