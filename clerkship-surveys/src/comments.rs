use rubric_survey::{Question, TextareaQuestion};

/// The MSPE narrative placeholder.
///
/// The text box mirrors the narrative section of the MSPE; entries are only
/// kept in memory and in the exported document.
pub fn comments_block() -> Vec<Question> {
    vec![
        Question::textarea(
            "mspe_placeholder",
            "Comments",
            TextareaQuestion::new()
                .with_help(
                    "Additional comments on performance (may be included in the MSPE). \
                     This text box is a placeholder to represent the format of the official MSPE narrative. \
                     No information entered here is collected or stored.",
                )
                .with_placeholder(
                    "This space intentionally mirrors the narrative comment section of the MSPE. \
                     In the official evaluation, faculty comments would appear here in paragraph form.",
                ),
        )
        .with_number(11),
    ]
}
