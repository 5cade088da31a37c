use once_cell::sync::Lazy;
use regex::Regex;
use strum::{AsRefStr, Display};

const MAIN_MARKER: &str = r#"<div class="main">"#;
const FOOTER_MARKER: &str = r#"<div class="footer">"#;
const FRONT_MATTER_DELIMITER: &str = "---\n";
const FRONT_MATTER_END: &str = "\n---\n";

static TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<title>(.*?)</title>").unwrap());

static OG_TITLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<meta\s+property="og:title"\s+content="(.*?)"\s*/?>"#).unwrap()
});

static OG_DESCRIPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<meta\s+property="og:description"\s+content="(.*?)"\s*/?>"#).unwrap()
});

/// The inline responsive nav script each legacy page carried. The shared
/// layout loads the nav behaviour instead.
static NAV_SCRIPT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<script>\s*function\s+myFunction\s*\(\s*\)\s*\{[\s\S]*?\}\s*</script>\s*")
        .unwrap()
});

#[derive(Copy, Clone, Debug, Eq, PartialEq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Lang {
    En,
    Pt,
}

impl Lang {
    /// Pages live in a directory named after their language. Anything other
    /// than `en` is Portuguese.
    pub fn from_dir_name(name: Option<&str>) -> Self {
        match name {
            Some("en") => Self::En,
            _ => Self::Pt,
        }
    }
}

/// Convert one page, returning its new text if it should be rewritten.
///
/// Pages that already have front matter are re-cut to their main column.
/// Legacy pages get front matter built from their `<title>` and Open Graph
/// tags, and are left alone if they have no main column.
pub fn convert(raw: &str, lang: Lang, default_title: &str) -> Option<String> {
    if raw.trim_start().starts_with(FRONT_MATTER_DELIMITER) {
        let cleaned = match split_front_matter(raw) {
            Some((front_matter, rest)) => format!(
                "{front_matter}\n{}",
                strip_nav_script(cut_main(rest)).trim_start()
            ),
            None => strip_nav_script(raw),
        };

        return (cleaned != raw).then_some(cleaned);
    }

    let main = raw.find(MAIN_MARKER)?;
    let title = first_match(&TITLE, raw).unwrap_or_else(|| default_title.to_owned());
    let og_title = first_match(&OG_TITLE, raw).unwrap_or_else(|| title.clone());
    let og_description = first_match(&OG_DESCRIPTION, raw)
        .map(|description| description.split_whitespace().collect::<Vec<_>>().join(" "));

    let mut front_matter = vec![
        "---".to_owned(),
        "layout: default".to_owned(),
        format!("lang: {lang}"),
        format!(r#"title: "{}""#, yaml_escape(&title)),
        format!(r#"og_title: "{}""#, yaml_escape(&og_title)),
    ];

    if let Some(description) = og_description {
        front_matter.push(format!(
            r#"og_description: "{}""#,
            yaml_escape(&description)
        ));
    }

    front_matter.push("---".to_owned());

    let content = strip_nav_script(cut_main(&raw[main..]));

    Some(format!(
        "{}\n\n{}\n",
        front_matter.join("\n"),
        content.trim_end()
    ))
}

/// Split off front matter that starts at the very beginning of `text`.
fn split_front_matter(text: &str) -> Option<(&str, &str)> {
    let body = text.strip_prefix(FRONT_MATTER_DELIMITER)?;
    let end = FRONT_MATTER_DELIMITER.len() + body.find(FRONT_MATTER_END)? + FRONT_MATTER_END.len();

    Some(text.split_at(end))
}

/// The text from the main column up to the footer.
fn cut_main(text: &str) -> &str {
    let text = &text[text.find(MAIN_MARKER).unwrap_or(0)..];

    match text.find(FOOTER_MARKER) {
        Some(footer) => &text[..footer],
        None => text,
    }
}

fn strip_nav_script(text: &str) -> String {
    NAV_SCRIPT.replace_all(text, "").into_owned()
}

fn first_match(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .map(|captures| captures[1].trim().to_owned())
        .filter(|text| !text.is_empty())
}

/// Escape for a YAML double quoted scalar.
fn yaml_escape(value: &str) -> String {
    value.replace('\\', r"\\").replace('"', r#"\""#)
}
