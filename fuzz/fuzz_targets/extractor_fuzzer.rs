//! Fuzz target for menu candidate extraction
//!
//! Feed arbitrary patterns, templates and command output to the Extractor
//!
//! # Strategy
//!
//! - Patterns: arbitrary strings, most of them invalid regular expressions
//! - Templates: arbitrary text with and without `{{ .name }}` actions
//! - Output: arbitrary text with mixed line endings
//!
//! # Invariants
//!
//! - Invalid patterns and templates are rejected with an error
//! - A compiled Extractor never fails on output it did not see at build time
//! - Never more candidates than lines
//! - An empty label template yields label == value
//! - NEVER panic

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use termnorm_menu::Extractor;

#[derive(Debug, Arbitrary)]
struct Input {
    pattern: String,
    value_template: String,
    label_template: String,
    output: String,
}

fuzz_target!(|input: Input| {
    // Bound regex compile cost.
    if input.pattern.len() > 64 {
        return;
    }

    let Ok(extractor) =
        Extractor::new(&input.pattern, &input.value_template, &input.label_template)
    else {
        return;
    };

    let candidates = extractor
        .extract(&input.output)
        .expect("templates were checked against the pattern's groups");
    assert!(candidates.len() <= input.output.lines().count());

    if input.label_template.is_empty() {
        for candidate in &candidates {
            assert_eq!(candidate.label, candidate.value);
        }
    }
});
