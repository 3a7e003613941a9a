//! Property-based and scenario tests for candidate extraction.
//!
//! # Oracle Pattern
//!
//! Generated inputs are built from known `remote/branch` pairs, so the
//! expected candidates are known without re-implementing the extractor.

use proptest::prelude::*;
use termnorm_menu::{Candidate, ExtractError, Extractor, TemplateError, extract};

const BRANCH_PATTERN: &str = "(?P<remote>[a-z_]+)/(?P<branch>.*)";

fn remote_strategy() -> impl Strategy<Value = String> {
    "[a-z_]{1,8}"
}

fn branch_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9.-]{0,12}"
}

fn refs_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((remote_strategy(), branch_strategy()), 0..16)
}

fn join_refs(refs: &[(String, String)]) -> String {
    refs.iter().map(|(remote, branch)| format!("{remote}/{branch}\n")).collect()
}

proptest! {
    #[test]
    fn prop_one_candidate_per_matching_line(refs in refs_strategy()) {
        let text = join_refs(&refs);
        let candidates = extract(&text, BRANCH_PATTERN, "{{ .branch }}", "Remote: {{ .remote }}")
            .unwrap();

        let expected: Vec<Candidate> = refs
            .iter()
            .map(|(remote, branch)| Candidate {
                label: format!("Remote: {remote}"),
                value: branch.clone(),
            })
            .collect();
        prop_assert_eq!(candidates, expected);
    }

    #[test]
    fn prop_non_matching_lines_are_skipped(
        refs in refs_strategy(),
        noise in prop::collection::vec("[A-Z0-9 ]{0,10}", 0..8),
    ) {
        let mut text = String::new();
        for (index, (remote, branch)) in refs.iter().enumerate() {
            text.push_str(&format!("{remote}/{branch}\n"));
            if let Some(line) = noise.get(index) {
                text.push_str(line);
                text.push('\n');
            }
        }

        let candidates = extract(&text, BRANCH_PATTERN, "{{ .branch }}", "").unwrap();
        prop_assert_eq!(candidates.len(), refs.len());
    }

    #[test]
    fn prop_empty_label_mirrors_value(refs in refs_strategy()) {
        let candidates = extract(&join_refs(&refs), BRANCH_PATTERN, "{{ .remote }}:{{ .branch }}", "")
            .unwrap();
        for candidate in &candidates {
            prop_assert_eq!(&candidate.label, &candidate.value);
        }
    }

    #[test]
    fn prop_positional_and_named_groups_agree(refs in refs_strategy()) {
        let text = join_refs(&refs);
        let named = extract(&text, BRANCH_PATTERN, "{{ .branch }}", "{{ .remote }}").unwrap();
        let positional = extract(&text, BRANCH_PATTERN, "{{ .group_2 }}", "{{ .group_1 }}").unwrap();
        prop_assert_eq!(named, positional);
    }

    #[test]
    fn prop_crlf_and_lf_agree(refs in refs_strategy()) {
        let lf = join_refs(&refs);
        let crlf = lf.replace('\n', "\r\n");
        let a = extract(&lf, BRANCH_PATTERN, "{{ .group_0 }}", "").unwrap();
        let b = extract(&crlf, BRANCH_PATTERN, "{{ .group_0 }}", "").unwrap();
        prop_assert_eq!(a, b);
    }
}

#[test]
fn branch_listing_scenario() {
    let text = "upstream/pr-1\norigin/main\nnot a ref\n";
    let candidates =
        extract(text, BRANCH_PATTERN, "{{ .branch }}", "Remote: {{ .remote }}").unwrap();
    assert_eq!(
        candidates,
        vec![
            Candidate { label: "Remote: upstream".into(), value: "pr-1".into() },
            Candidate { label: "Remote: origin".into(), value: "main".into() },
        ]
    );
}

#[test]
fn no_matching_line_yields_nothing() {
    let candidates = extract("hello world", BRANCH_PATTERN, "{{ .branch }}", "").unwrap();
    assert!(candidates.is_empty());
}

#[test]
fn empty_output_yields_nothing() {
    let candidates = extract("", BRANCH_PATTERN, "{{ .branch }}", "").unwrap();
    assert!(candidates.is_empty());
}

#[test]
fn malformed_pattern_fails_up_front() {
    let err = extract("upstream/pr-1", "(?P<remote>[a-z", "{{ .remote }}", "").unwrap_err();
    assert!(err.is_pattern());
    assert!(err.to_string().starts_with("invalid filter pattern"));
}

#[test]
fn malformed_template_fails_up_front() {
    let err = Extractor::new(BRANCH_PATTERN, "{{ .branch", "").unwrap_err();
    assert!(matches!(err, ExtractError::Template(TemplateError::Syntax { .. })));

    let err = Extractor::new(BRANCH_PATTERN, "{{ .branch }}", "{{ .nope }}").unwrap_err();
    assert!(matches!(err, ExtractError::Template(TemplateError::UnknownField { .. })));
}

#[test]
fn extractor_is_reusable() {
    let extractor = Extractor::new(BRANCH_PATTERN, "{{ .branch }}", "").unwrap();
    assert_eq!(extractor.extract("a/one").unwrap()[0].value, "one");
    assert_eq!(extractor.extract("b/two").unwrap()[0].value, "two");
    assert_eq!(extractor.pattern().as_str(), BRANCH_PATTERN);
}

#[test]
fn literal_only_template_is_constant() {
    let candidates = extract("a/x\nb/y", BRANCH_PATTERN, "fixed", "").unwrap();
    assert_eq!(candidates.len(), 2);
    assert!(candidates.iter().all(|c| c.value == "fixed" && c.label == "fixed"));
}
