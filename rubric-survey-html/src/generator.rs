//! HTML document generator implementation.

use std::path::Path;

use anyhow::Context;
use rubric_survey::{
    Card, CardBody, ChoiceGroup, DEFAULT_MOUNT_ID, RenderTree, SectionNode, TextField,
};

/// File name used for printable snapshots.
pub const PRINT_FILE_NAME: &str = "survey_print.html";

/// How a render tree snapshot is printed.
///
/// The defaults give a standalone page with print styles and a button that
/// opens the browser's print dialog.
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Heading and `<title>` of the page.
    pub title: Option<String>,
    /// Embed the screen and `@media print` styles.
    pub include_styles: bool,
    /// Wrap the survey in html/head/body. Off yields an embeddable fragment.
    pub standalone: bool,
    /// Prefix of every generated CSS class.
    pub class_prefix: String,
    /// Id of the survey root element.
    pub root_id: String,
    /// Add a button calling `window.print()`. Hidden on paper.
    pub print_button: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            title: None,
            include_styles: true,
            standalone: true,
            class_prefix: "survey".to_string(),
            root_id: DEFAULT_MOUNT_ID.to_string(),
            print_button: true,
        }
    }
}

impl HtmlOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }

    /// Emit only the survey root, for embedding in another page.
    pub fn fragment(mut self) -> Self {
        self.standalone = false;
        self
    }

    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Match the root element id to the mount point the survey was drawn in.
    pub fn with_root_id(mut self, id: impl Into<String>) -> Self {
        self.root_id = id.into();
        self
    }

    pub fn with_print_button(mut self, enabled: bool) -> Self {
        self.print_button = enabled;
        self
    }
}

/// Render a control tree as HTML.
pub fn to_html(tree: &RenderTree, options: &HtmlOptions) -> String {
    let mut html = String::new();
    let prefix = &options.class_prefix;

    if options.standalone {
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");
        html.push_str(
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );

        if let Some(title) = &options.title {
            html.push_str(&format!("  <title>{}</title>\n", escape_html(title)));
        }

        if options.include_styles {
            html.push_str(&generate_styles(prefix));
        }

        html.push_str("</head>\n<body>\n");
    }

    html.push_str(&format!(
        "<div class=\"{prefix}-root\" id=\"{}\">\n",
        escape_html(&options.root_id)
    ));

    if let Some(title) = &options.title {
        html.push_str(&format!(
            "  <h1 class=\"{prefix}-title\">{}</h1>\n",
            escape_html(title)
        ));
    }

    if options.print_button {
        html.push_str(&format!(
            "  <button type=\"button\" class=\"{prefix}-print\" onclick=\"window.print()\">Print</button>\n"
        ));
    }

    for section in &tree.sections {
        html.push_str(&generate_section(section, prefix));
    }

    html.push_str("</div>\n");

    if options.standalone {
        html.push_str("</body>\n</html>\n");
    }

    html
}

/// Render a control tree and write it to `path`.
pub fn write_html(tree: &RenderTree, options: &HtmlOptions, path: &Path) -> anyhow::Result<()> {
    std::fs::write(path, to_html(tree, options))
        .with_context(|| format!("failed to write {}", path.display()))
}

fn generate_section(section: &SectionNode, prefix: &str) -> String {
    let mut html = String::new();

    html.push_str(&format!(
        "  <div class=\"{prefix}-section\" id=\"section-{}\">\n",
        escape_html(&section.id)
    ));
    html.push_str(&format!(
        "    <div class=\"{prefix}-section-header\">{}</div>\n",
        escape_html(&section.title)
    ));

    for card in &section.cards {
        html.push_str(&generate_card(card, prefix));
    }

    html.push_str("  </div>\n");
    html
}

fn generate_card(card: &Card, prefix: &str) -> String {
    let ind = "    ";
    let mut html = String::new();

    let required = if card.title.required {
        format!("<span class=\"{prefix}-required\">*</span>")
    } else {
        String::new()
    };

    html.push_str(&format!("{ind}<section class=\"{prefix}-card\">\n"));
    html.push_str(&format!("{ind}  <div class=\"{prefix}-card-top\">\n"));
    html.push_str(&format!(
        "{ind}    <div class=\"{prefix}-card-title\">{}{required}</div>\n",
        escape_html(&card.title.text())
    ));
    html.push_str(&format!(
        "{ind}    <div class=\"{prefix}-card-meta\">{}</div>\n",
        escape_html(&card.meta)
    ));
    html.push_str(&format!("{ind}  </div>\n"));

    match &card.body {
        CardBody::Setting(group) => html.push_str(&generate_setting(group, prefix)),
        CardBody::Rubric(group) => html.push_str(&generate_rubric(group, prefix)),
        CardBody::Textarea(field) => html.push_str(&generate_textarea(field, prefix)),
    }

    html.push_str(&format!("{ind}</section>\n"));
    html
}

fn generate_setting(group: &ChoiceGroup, prefix: &str) -> String {
    let ind = "      ";
    let name = escape_html(group.name.as_str());
    let mut html = String::new();

    html.push_str(&format!("{ind}<div class=\"{prefix}-inline-choices\">\n"));
    for choice in &group.choices {
        let key = escape_html(&choice.key);
        let checked = if choice.checked { " checked" } else { "" };
        html.push_str(&format!("{ind}  <label for=\"{name}-{key}\">\n"));
        html.push_str(&format!(
            "{ind}    <input type=\"radio\" id=\"{name}-{key}\" name=\"{name}\" value=\"{key}\"{checked}>\n"
        ));
        html.push_str(&format!(
            "{ind}    <span>{}</span>\n",
            escape_html(&choice.label)
        ));
        html.push_str(&format!("{ind}  </label>\n"));
    }
    html.push_str(&format!("{ind}</div>\n"));

    html
}

fn generate_rubric(group: &ChoiceGroup, prefix: &str) -> String {
    let ind = "      ";
    let name = escape_html(group.name.as_str());
    let mut html = String::new();

    html.push_str(&format!("{ind}<div class=\"{prefix}-levels\">\n"));
    for choice in &group.choices {
        let key = escape_html(&choice.key);
        let checked = if choice.checked { " checked" } else { "" };

        html.push_str(&format!("{ind}  <div class=\"{prefix}-level\">\n"));
        html.push_str(&format!(
            "{ind}    <label class=\"{prefix}-level-label\" for=\"{name}-{key}\">\n"
        ));
        html.push_str(&format!(
            "{ind}      <input type=\"radio\" id=\"{name}-{key}\" name=\"{name}\" value=\"{key}\"{checked}>\n"
        ));
        html.push_str(&format!("{ind}      <div class=\"{prefix}-level-text\">\n"));
        html.push_str(&format!(
            "{ind}        <div class=\"{prefix}-level-headline\">{}</div>\n",
            escape_html(&choice.label)
        ));
        if !choice.bullets.is_empty() {
            html.push_str(&format!("{ind}        <ul class=\"{prefix}-bullets\">\n"));
            for bullet in &choice.bullets {
                html.push_str(&format!("{ind}          <li>{}</li>\n", escape_html(bullet)));
            }
            html.push_str(&format!("{ind}        </ul>\n"));
        }
        html.push_str(&format!("{ind}      </div>\n"));
        html.push_str(&format!("{ind}    </label>\n"));
        html.push_str(&format!("{ind}  </div>\n"));
    }
    html.push_str(&format!("{ind}</div>\n"));

    html
}

fn generate_textarea(field: &TextField, prefix: &str) -> String {
    let ind = "      ";
    let name = escape_html(field.name.as_str());
    let mut html = String::new();

    html.push_str(&format!("{ind}<div class=\"{prefix}-free-text\">\n"));
    if let Some(help) = &field.help {
        html.push_str(&format!(
            "{ind}  <div class=\"{prefix}-help\">{}</div>\n",
            escape_html(help)
        ));
    }
    html.push_str(&format!(
        "{ind}  <textarea id=\"{name}\" name=\"{name}\" rows=\"6\" class=\"{prefix}-textarea\" placeholder=\"{}\">{}</textarea>\n",
        escape_html(&field.placeholder),
        escape_html(&field.value)
    ));
    html.push_str(&format!("{ind}</div>\n"));

    html
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate default CSS styles.
fn generate_styles(prefix: &str) -> String {
    format!(
        r#"  <style>
    .{prefix}-root {{
      max-width: 860px;
      margin: 2rem auto;
      padding: 1rem;
      font-family: sans-serif;
    }}
    .{prefix}-section-header {{
      margin: 1.5rem 0 0.5rem;
      font-size: 1.25rem;
      font-weight: bold;
    }}
    .{prefix}-card {{
      margin: 0.75rem 0;
      padding: 1rem;
      border: 1px solid #ddd;
      border-radius: 6px;
    }}
    .{prefix}-card-top {{
      display: flex;
      justify-content: space-between;
      align-items: baseline;
      margin-bottom: 0.5rem;
    }}
    .{prefix}-card-title {{
      font-weight: bold;
    }}
    .{prefix}-required {{
      color: #c00;
      margin-left: 0.25rem;
    }}
    .{prefix}-card-meta {{
      font-size: 0.75rem;
      color: #777;
    }}
    .{prefix}-inline-choices {{
      display: flex;
      gap: 1rem;
    }}
    .{prefix}-levels {{
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
      gap: 0.5rem;
    }}
    .{prefix}-level {{
      padding: 0.5rem;
      background: #f5f5f5;
    }}
    .{prefix}-level-headline {{
      font-weight: bold;
    }}
    .{prefix}-bullets {{
      margin: 0.25rem 0 0;
      padding-left: 1.1rem;
      font-size: 0.85rem;
    }}
    .{prefix}-help {{
      margin-bottom: 0.5rem;
      color: #555;
    }}
    .{prefix}-textarea {{
      width: 100%;
      padding: 0.5rem;
      box-sizing: border-box;
    }}
    @media print {{
      .{prefix}-print {{
        display: none;
      }}
      .{prefix}-card {{
        break-inside: avoid;
      }}
    }}
  </style>
"#
    )
}
