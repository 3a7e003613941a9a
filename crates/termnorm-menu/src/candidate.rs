//! Candidate extraction from command output.
//!
//! Each line of output is matched against a filter pattern. On a match the
//! capture groups become template fields: every group is available
//! positionally as `group_N` (`group_0` is the whole match) and named groups
//! additionally under their name. The value template renders the candidate's
//! value; the label template, if not empty, renders its display label.

use std::{collections::HashMap, fmt};

use regex::Regex;

use crate::{ExtractError, Template, TemplateError};

/// One selectable menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Display text.
    pub label: String,
    /// Actionable payload.
    pub value: String,
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.label, self.value)
    }
}

/// Compiled filter and templates, reusable across outputs.
#[derive(Debug, Clone)]
pub struct Extractor {
    regex: Regex,
    /// Template field names in insertion order, paired with their group index.
    /// A named group is listed after its positional key, so it wins when a
    /// name collides with a `group_N` key.
    fields: Vec<(String, usize)>,
    value: Template,
    label: Option<Template>,
}

impl Extractor {
    /// Compile `pattern` and check both templates against its groups.
    ///
    /// An empty `label_template` means the label is the rendered value.
    pub fn new(
        pattern: &str,
        value_template: &str,
        label_template: &str,
    ) -> Result<Self, ExtractError> {
        let regex = Regex::new(pattern)?;

        let mut fields = Vec::new();
        for (index, name) in regex.capture_names().enumerate() {
            fields.push((format!("group_{index}"), index));
            if let Some(name) = name {
                fields.push((name.to_owned(), index));
            }
        }

        let value = Template::parse(value_template)?;
        let label = if label_template.is_empty() {
            None
        } else {
            Some(Template::parse(label_template)?)
        };

        let extractor = Self { regex, fields, value, label };
        extractor.check_fields()?;
        Ok(extractor)
    }

    /// Every template reference must name a field the pattern provides.
    fn check_fields(&self) -> Result<(), TemplateError> {
        let templates = std::iter::once(&self.value).chain(self.label.as_ref());
        for name in templates.flat_map(Template::fields) {
            if !self.fields.iter().any(|(field, _)| field == name) {
                return Err(TemplateError::UnknownField { name: name.to_owned() });
            }
        }
        Ok(())
    }

    /// The compiled filter.
    pub fn pattern(&self) -> &Regex {
        &self.regex
    }

    /// Build a candidate from one line, or `None` if the filter does not match.
    pub fn extract_line(&self, line: &str) -> Result<Option<Candidate>, TemplateError> {
        let Some(captures) = self.regex.captures(line) else {
            return Ok(None);
        };

        let mut context = HashMap::with_capacity(self.fields.len());
        for (field, index) in &self.fields {
            let text = captures.get(*index).map_or("", |m| m.as_str());
            context.insert(field.as_str(), text);
        }

        let value = self.value.render(&context)?;
        let label = match &self.label {
            Some(label) => label.render(&context)?,
            None => value.clone(),
        };
        Ok(Some(Candidate { label, value }))
    }

    /// Build candidates from every matching line, in line order.
    ///
    /// Lines are split on `\n` or `\r\n`; a trailing empty line is ignored.
    pub fn extract(&self, text: &str) -> Result<Vec<Candidate>, TemplateError> {
        let mut candidates = Vec::new();
        for (number, line) in text.lines().enumerate() {
            match self.extract_line(line)? {
                Some(candidate) => candidates.push(candidate),
                None => tracing::trace!(line = number + 1, "filter did not match, skipping"),
            }
        }
        tracing::debug!(count = candidates.len(), "extracted menu candidates");
        Ok(candidates)
    }
}

/// Compile and run an extraction in one call.
///
/// Fails before reading any line if `pattern` is not a valid regular
/// expression or a template references a group the pattern does not define.
pub fn extract(
    text: &str,
    pattern: &str,
    value_template: &str,
    label_template: &str,
) -> Result<Vec<Candidate>, ExtractError> {
    let extractor = Extractor::new(pattern, value_template, label_template)?;
    Ok(extractor.extract(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BRANCH_PATTERN: &str = "(?P<remote>[a-z_]+)/(?P<branch>.*)";

    #[test]
    fn named_groups_with_label() {
        let candidates =
            extract("upstream/pr-1", BRANCH_PATTERN, "{{ .branch }}", "Remote: {{ .remote }}")
                .unwrap();
        assert_eq!(
            candidates,
            vec![Candidate { label: "Remote: upstream".into(), value: "pr-1".into() }]
        );
    }

    #[test]
    fn group_zero_is_whole_match() {
        let candidates = extract("  origin/main  ", BRANCH_PATTERN, "{{ .group_0 }}", "").unwrap();
        assert_eq!(candidates[0].value, "origin/main  ");
    }

    #[test]
    fn optional_group_renders_empty() {
        let candidates = extract("main", r"(?P<remote>\w+/)?(?P<branch>\w+)", "[{{ .remote }}]", "")
            .unwrap();
        assert_eq!(candidates[0].value, "[]");
    }

    #[test]
    fn later_insertion_wins_on_key_collision() {
        let candidates = extract("a-b", "(?P<group_2>a)-(b)", "{{ .group_2 }}", "").unwrap();
        assert_eq!(candidates[0].value, "b");

        let candidates = extract("a-b", "(a)-(?P<group_1>b)", "{{ .group_1 }}", "").unwrap();
        assert_eq!(candidates[0].value, "b");
    }

    #[test]
    fn empty_pattern_matches_every_line() {
        let candidates = extract("one\r\ntwo\n", "", "{{ .group_0 }}", "").unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].value, "");
    }

    #[test]
    fn unknown_reference_fails_even_without_matches() {
        let err = extract("no slash here", BRANCH_PATTERN, "{{ .group_3 }}", "").unwrap_err();
        assert!(matches!(
            err,
            ExtractError::Template(TemplateError::UnknownField { ref name }) if name == "group_3"
        ));
    }

    #[test]
    fn candidate_display_is_tab_separated() {
        let candidate = Candidate { label: "Remote: upstream".into(), value: "pr-1".into() };
        assert_eq!(candidate.to_string(), "Remote: upstream\tpr-1");
    }
}
