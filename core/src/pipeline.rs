/// Pipeline assembly: which steps run, in what order, over which part
/// of the project tree.
use serde::{Deserialize, Serialize};

use crate::replacements::apply_replacements;
use crate::transform::{insert_accessor, insert_import, rewrite_deprecated, strip_const_qualifiers};

/// The two fixer passes. They share the first four steps; the
/// full-source pass widens the scan scope and appends the
/// const-qualifier correction. They are independent stages: either can
/// run alone, or `screens` then `full_source` as a two-pass fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassKind {
    /// Screen files only (`lib/screens`), steps 1-4.
    Screens,
    /// The whole source tree (`lib`), steps 1-5.
    FullSource,
}

impl PassKind {
    pub fn name(self) -> &'static str {
        match self {
            PassKind::Screens => "screens",
            PassKind::FullSource => "full-source",
        }
    }

    fn strips_const(self) -> bool {
        matches!(self, PassKind::FullSource)
    }
}

/// Result of applying a pipeline to one file's text. `changed` is exact
/// value comparison against the input; the runner writes if and only if
/// it is set.
#[derive(Debug, Clone, Serialize)]
pub struct TransformOutcome {
    pub text: String,
    pub changed: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct FixPipeline {
    kind: PassKind,
}

impl FixPipeline {
    pub fn new(kind: PassKind) -> Self {
        Self { kind }
    }

    pub fn screens() -> Self {
        Self::new(PassKind::Screens)
    }

    pub fn full_source() -> Self {
        Self::new(PassKind::FullSource)
    }

    pub fn kind(&self) -> PassKind {
        self.kind
    }

    /// Run the ordered steps over one file's text. Each step feeds the
    /// next; the whole pipeline is idempotent because every step is.
    pub fn apply(&self, input: &str) -> TransformOutcome {
        let mut text = insert_import(input);
        text = insert_accessor(&text);
        text = apply_replacements(&text);
        text = rewrite_deprecated(&text);
        if self.kind.strips_const() {
            text = strip_const_qualifiers(&text);
        }

        let changed = text != input;
        TransformOutcome { text, changed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: &str = "import 'package:flutter/material.dart';\n\
                          \n\
                          class CartScreen extends StatelessWidget {\n\
                          \x20 @override\n\
                          \x20 Widget build(BuildContext context) {\n\
                          \x20   return Text('Your cart is empty');\n\
                          \x20 }\n\
                          }\n";

    #[test]
    fn screens_pass_applies_all_four_steps() {
        let outcome = FixPipeline::screens().apply(SCREEN);
        assert!(outcome.changed);
        assert!(outcome.text.contains("gen_l10n/app_localizations.dart"));
        assert!(outcome.text.contains("final l10n = AppLocalizations.of(context)!;"));
        assert!(outcome.text.contains("Text(l10n.yourCartIsEmpty)"));
    }

    #[test]
    fn screens_pass_leaves_const_contexts_alone() {
        let input = "const Text(l10n.cancel)";
        let outcome = FixPipeline::screens().apply(input);
        assert!(outcome.text.contains("const Text(l10n.cancel)"));
    }

    #[test]
    fn full_source_pass_strips_const_contexts() {
        let input = "child: const Text(l10n.cancel),";
        let outcome = FixPipeline::full_source().apply(input);
        assert!(outcome.changed);
        assert_eq!(outcome.text, "child: Text(l10n.cancel),");
    }

    #[test]
    fn unchanged_input_reports_no_change() {
        let outcome = FixPipeline::full_source().apply("void main() {}\n");
        assert!(!outcome.changed);
        assert_eq!(outcome.text, "void main() {}\n");
    }

    #[test]
    fn pipeline_is_idempotent() {
        for pipeline in [FixPipeline::screens(), FixPipeline::full_source()] {
            let once = pipeline.apply(SCREEN);
            let twice = pipeline.apply(&once.text);
            assert_eq!(twice.text, once.text, "{} pass drifted", pipeline.kind().name());
            assert!(!twice.changed);
        }
    }
}
