//! Plain-text rendering of agent answers and section banners.

use std::fmt::Write;

use crate::error::MedAssistError;
use crate::types::{QueryResponse, RetrievalContent};

pub const WIDE_RULE: usize = 60;
pub const NARROW_RULE: usize = 40;

/// How much of an answer and its sources to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Maximum characters of the answer; `None` shows it in full.
    pub max_content_chars: Option<usize>,
    pub max_sources: usize,
    pub preview_chars: usize,
}

impl RenderOptions {
    /// Interactive chat and scripted demo.
    pub const FULL: Self = Self {
        max_content_chars: None,
        max_sources: 5,
        preview_chars: 100,
    };

    /// Post-provisioning smoke test.
    pub const SMOKE_TEST: Self = Self {
        max_content_chars: Some(600),
        max_sources: 3,
        preview_chars: 80,
    };
}

/// Cut `text` to at most `max_chars` characters on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

pub fn rule(ch: char, width: usize) -> String {
    std::iter::repeat(ch).take(width).collect()
}

/// Title framed by `=` rules.
pub fn banner(title: &str) -> String {
    let line = rule('=', WIDE_RULE);
    format!("{line}\n{title}\n{line}")
}

fn source_parts(source: &RetrievalContent, preview_chars: usize) -> (String, String, String) {
    let doc = source
        .doc_name
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or("Unknown")
        .to_string();
    let page = source
        .page
        .filter(|p| *p != 0)
        .map(|p| p.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let preview = source
        .content_text
        .as_deref()
        .filter(|t| !t.is_empty())
        .map(|t| truncate_chars(t, preview_chars).to_string())
        .unwrap_or_else(|| "(no content)".to_string());
    (doc, page, preview)
}

/// Full answer block with a numbered source list.
pub fn format_response(response: &QueryResponse, options: RenderOptions) -> String {
    let mut out = String::new();
    let wide = rule('─', WIDE_RULE);
    let content = match options.max_content_chars {
        Some(max) => truncate_chars(response.content(), max),
        None => response.content(),
    };

    let _ = writeln!(out, "\n{wide}\nMedAssist Response:\n{wide}\n{content}");

    let sources = &response.retrieval_contents;
    if !sources.is_empty() && options.max_sources > 0 {
        let narrow = rule('─', NARROW_RULE);
        let _ = writeln!(
            out,
            "\n{narrow}\nSources ({} retrieved):\n{narrow}",
            sources.len()
        );
        for (i, source) in sources.iter().take(options.max_sources).enumerate() {
            let (doc, page, preview) = source_parts(source, options.preview_chars);
            let _ = writeln!(out, "  {}. {doc} (p.{page})\n     {preview}...", i + 1);
        }
    }

    out
}

/// Compact one-line-per-source rendering used by the smoke test.
pub fn format_compact(response: &QueryResponse, options: RenderOptions) -> String {
    let mut out = String::new();
    let content = match options.max_content_chars {
        Some(max) => truncate_chars(response.content(), max),
        None => response.content(),
    };
    let _ = writeln!(out, "\nMedAssist Response:\n{content}");

    if !response.retrieval_contents.is_empty() {
        out.push_str("\nSources:\n");
        for source in response.retrieval_contents.iter().take(options.max_sources) {
            let (doc, page, preview) = source_parts(source, options.preview_chars);
            let _ = writeln!(out, "  - {doc} (p.{page}): {preview}...");
        }
    }

    out
}

/// Error text with its category and a recovery hint.
pub fn describe_error(error: &MedAssistError) -> String {
    format!(
        "{error} [{}] ({})",
        error.category(),
        error.recovery_suggestion().hint()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ConversationHandle, Message, Role};

    fn response(content: &str, sources: Vec<RetrievalContent>) -> QueryResponse {
        QueryResponse {
            conversation_id: ConversationHandle::new("conv-1"),
            message: Message {
                role: Role::Assistant,
                content: content.to_string(),
            },
            message_id: None,
            retrieval_contents: sources,
        }
    }

    #[test]
    fn truncation_respects_multibyte_characters() {
        assert_eq!(truncate_chars("héllo wörld", 4), "héll");
        assert_eq!(truncate_chars("short", 100), "short");
        assert_eq!(truncate_chars("", 3), "");
    }

    #[test]
    fn missing_source_fields_use_placeholders() {
        let out = format_response(
            &response("Answer", vec![RetrievalContent::default()]),
            RenderOptions::FULL,
        );
        assert!(out.contains("Sources (1 retrieved):"));
        assert!(out.contains("1. Unknown (p.N/A)"));
        assert!(out.contains("(no content)..."));
    }

    #[test]
    fn page_zero_renders_as_unavailable() {
        let source = RetrievalContent {
            doc_name: Some("guide.pdf".into()),
            page: Some(0),
            content_text: Some("text".into()),
            ..Default::default()
        };
        let out = format_compact(&response("Answer", vec![source]), RenderOptions::FULL);
        assert!(out.contains("- guide.pdf (p.N/A): text..."), "unexpected output: {out}");
    }

    #[test]
    fn source_list_is_capped() {
        let sources = (1..=7)
            .map(|i| RetrievalContent {
                doc_name: Some(format!("doc{i}.pdf")),
                page: Some(i),
                content_text: Some("x".repeat(200)),
                ..Default::default()
            })
            .collect();
        let out = format_response(&response("Answer", sources), RenderOptions::FULL);
        assert!(out.contains("Sources (7 retrieved):"));
        assert!(out.contains("5. doc5.pdf (p.5)"));
        assert!(!out.contains("doc6.pdf"));
        assert!(out.contains(&format!("     {}...", "x".repeat(100))));
    }

    #[test]
    fn error_description_includes_category_and_hint() {
        let text = describe_error(&MedAssistError::api(503, "maintenance"));
        assert!(text.starts_with("API error (status 503): maintenance [server]"));
        assert!(text.contains("try again"));
    }

    #[test]
    fn compact_rendering_truncates_answer() {
        let long = "a".repeat(700);
        let out = format_compact(&response(&long, vec![]), RenderOptions::SMOKE_TEST);
        assert!(out.contains(&"a".repeat(600)));
        assert!(!out.contains(&"a".repeat(601)));
        assert!(!out.contains("Sources:"));
    }
}
