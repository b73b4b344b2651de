//! Clinical clerkship evaluation rubric.
//!
//! The evaluator first picks the setting they worked with the student in.
//! Each setting has its own information gathering criterion; the
//! interprofessional communication, humanism and integrity criteria and the
//! MSPE comments block are shared.

use rubric_survey::{Question, QuestionBank, SettingOption};

pub mod branches;
pub mod comments;
pub mod shared;

pub use branches::{ambulatory_items, inpatient_items, surgery_items};
pub use comments::comments_block;
pub use shared::shared_items;

/// Id of the setting selector.
pub const SETTING_ID: &str = "setting_context";

pub const INPATIENT: &str = "INPATIENT";
pub const AMBULATORY: &str = "AMBULATORY";
pub const SURGERY: &str = "SURGERY";

/// The setting selector shown before anything else.
pub fn setting_question() -> Question {
    Question::setting(
        SETTING_ID,
        "What setting did you work with this student in?",
        vec![
            SettingOption::new(INPATIENT, "Inpatient"),
            SettingOption::new(AMBULATORY, "Ambulatory"),
            SettingOption::new(SURGERY, "Surgery"),
        ],
    )
    .required(true)
}

/// The complete clerkship bank.
pub fn clerkship_bank() -> QuestionBank {
    QuestionBank::new(setting_question())
        .with_branch(INPATIENT, inpatient_items())
        .with_branch(AMBULATORY, ambulatory_items())
        .with_branch(SURGERY, surgery_items())
        .with_shared(shared_items())
        .with_comments(comments_block())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_is_valid() {
        clerkship_bank().validate().unwrap();
    }

    #[test]
    fn every_option_has_a_branch() {
        let bank = clerkship_bank();
        for key in [INPATIENT, AMBULATORY, SURGERY] {
            assert_eq!(bank.branch(key).map(<[_]>::len), Some(1), "{key}");
        }
    }
}
