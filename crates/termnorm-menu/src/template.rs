//! Minimal field-substitution templates.
//!
//! Supports literal text interleaved with `{{ .name }}` field references.
//! Whitespace inside the braces is ignored. Nothing else from richer template
//! languages (pipelines, conditionals) is recognised.

use std::collections::HashMap;

use crate::TemplateError;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(String),
}

/// A parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template text.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let syntax = |reason| TemplateError::Syntax { template: source.to_owned(), reason };

        let mut segments = Vec::new();
        let mut rest = source;
        while let Some(start) = rest.find(OPEN) {
            if start > 0 {
                segments.push(Segment::Literal(rest[..start].to_owned()));
            }
            let after_open = &rest[start + OPEN.len()..];
            let end = after_open.find(CLOSE).ok_or_else(|| syntax("unclosed action"))?;

            let action = after_open[..end].trim();
            let name = action.strip_prefix('.').ok_or_else(|| syntax("expected a .field reference"))?;
            if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
                return Err(syntax("invalid field name"));
            }
            segments.push(Segment::Field(name.to_owned()));

            rest = &after_open[end + CLOSE.len()..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_owned()));
        }

        Ok(Self { source: source.to_owned(), segments })
    }

    /// Original template text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns true if the template text is empty.
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Field names referenced, in order of appearance (may repeat).
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Field(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Render against a field context.
    pub fn render(&self, context: &HashMap<&str, &str>) -> Result<String, TemplateError> {
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(name) => {
                    let value = context
                        .get(name.as_str())
                        .ok_or_else(|| TemplateError::UnknownField { name: name.clone() })?;
                    out.push_str(value);
                },
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context<'a>(pairs: &[(&'a str, &'a str)]) -> HashMap<&'a str, &'a str> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn renders_fields_and_literals() {
        let template = Template::parse("Remote: {{ .remote }} ({{.branch}})").unwrap();
        let out = template.render(&context(&[("remote", "upstream"), ("branch", "pr-1")])).unwrap();
        assert_eq!(out, "Remote: upstream (pr-1)");
        assert_eq!(template.fields().collect::<Vec<_>>(), vec!["remote", "branch"]);
    }

    #[test]
    fn plain_text_has_no_fields() {
        let template = Template::parse("just text }} here").unwrap();
        assert_eq!(template.fields().count(), 0);
        assert_eq!(template.render(&HashMap::new()).unwrap(), "just text }} here");
    }

    #[test]
    fn empty_template_renders_empty() {
        let template = Template::parse("").unwrap();
        assert!(template.is_empty());
        assert_eq!(template.render(&HashMap::new()).unwrap(), "");
    }

    #[test]
    fn rejects_malformed_actions() {
        assert!(matches!(
            Template::parse("{{ .remote"),
            Err(TemplateError::Syntax { reason: "unclosed action", .. })
        ));
        assert!(matches!(
            Template::parse("{{ remote }}"),
            Err(TemplateError::Syntax { reason: "expected a .field reference", .. })
        ));
        assert!(matches!(
            Template::parse("{{ . }}"),
            Err(TemplateError::Syntax { reason: "invalid field name", .. })
        ));
        assert!(matches!(
            Template::parse("{{ .a b }}"),
            Err(TemplateError::Syntax { reason: "invalid field name", .. })
        ));
    }

    #[test]
    fn missing_field_is_an_error() {
        let template = Template::parse("{{ .nope }}").unwrap();
        assert_eq!(
            template.render(&HashMap::new()),
            Err(TemplateError::UnknownField { name: "nope".into() })
        );
    }
}
