/// The ordered text-rewriting steps. Every step is pure and idempotent:
/// running the full pipeline twice yields the same text as running it
/// once, so re-walking an already-fixed tree is safe.
///
/// All matching is textual. The build-method and const-context patterns
/// are structural heuristics over known input shapes, not Dart parsing,
/// and the fixed lookahead and short-circuit windows are part of the
/// contract rather than tunables.
use once_cell::sync::Lazy;
use regex::Regex;

/// Import line inserted after the last existing import.
pub const IMPORT_LINE: &str = "import '../../gen_l10n/app_localizations.dart';";

/// Marker that the localization import is already present.
const IMPORT_MARKER: &str = "app_localizations.dart";

/// Accessor declaration, sans the trailing `!;` so the check also
/// matches hand-written nullable variants.
const ACCESSOR_DECL: &str = "final l10n = AppLocalizations.of(context)";

/// Short-circuit window for the import check (characters).
const IMPORT_HEAD_WINDOW: usize = 500;

/// Lookahead window for the accessor-presence check (characters).
const ACCESSOR_LOOKAHEAD: usize = 200;

static BUILD_METHOD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@override\s+Widget build\(BuildContext context\)\s*\{")
        .expect("valid build method regex")
});

static WITH_OPACITY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.withOpacity\(").expect("valid withOpacity regex"));

static CONST_LIST_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bconst\s+(\[\s*\w+\(\s*l10n\.)").expect("valid const list regex")
});

static CONST_CALL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bconst\s+(\w+\(\s*l10n\.)").expect("valid const call regex"));

static CONST_PREFIX_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bconst\s+(l10n\.)").expect("valid const prefix regex"));

/// Slice off the first `count` characters (not bytes, to stay safe on
/// multi-byte content).
fn char_prefix(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Insert the localization import after the last top-of-file import
/// statement, unless the file already references the localization
/// module. With no import statement at all there is no insertion point
/// and the text passes through unchanged.
pub fn insert_import(content: &str) -> String {
    if content.contains(IMPORT_MARKER)
        || char_prefix(content, IMPORT_HEAD_WINDOW).contains("AppLocalizations")
    {
        return content.to_string();
    }

    let mut lines: Vec<&str> = content.split('\n').collect();
    let mut last_import = None;
    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with("import ") && trimmed.ends_with(';') {
            last_import = Some(i);
        }
    }

    match last_import {
        Some(i) => {
            lines.insert(i + 1, IMPORT_LINE);
            lines.join("\n")
        }
        None => content.to_string(),
    }
}

/// Declare the `l10n` accessor right after the opening brace of the
/// first build method, unless the declaration already appears within
/// the fixed lookahead window. First match only; later build methods in
/// the same file are left alone.
pub fn insert_accessor(content: &str) -> String {
    let m = match BUILD_METHOD_REGEX.find(content) {
        Some(m) => m,
        None => return content.to_string(),
    };

    let window = char_prefix(&content[m.end()..], ACCESSOR_LOOKAHEAD);
    if window.contains(ACCESSOR_DECL) {
        return content.to_string();
    }

    let mut result = String::with_capacity(content.len() + 64);
    result.push_str(&content[..m.end()]);
    result.push_str("\n    final l10n = AppLocalizations.of(context)!;\n");
    result.push_str(&content[m.end()..]);
    result
}

/// Rewrite deprecated `.withOpacity(x)` calls to
/// `.withValues(alpha: x)`. Only the call prefix is rewritten; the
/// argument expression is carried over untouched.
pub fn rewrite_deprecated(content: &str) -> String {
    WITH_OPACITY_REGEX
        .replace_all(content, ".withValues(alpha: ")
        .into_owned()
}

/// Drop `const` qualifiers from contexts that now contain the runtime
/// `l10n` accessor: a const constructor call wrapping the accessor, a
/// const list whose first element wraps it, and a bare const prefix
/// directly before it.
pub fn strip_const_qualifiers(content: &str) -> String {
    let content = CONST_LIST_REGEX.replace_all(content, "$1");
    let content = CONST_CALL_REGEX.replace_all(&content, "$1");
    CONST_PREFIX_REGEX.replace_all(&content, "$1").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: &str = "import 'package:flutter/material.dart';\n\
                          import 'widgets/app_bar.dart';\n\
                          \n\
                          class HomeScreen extends StatelessWidget {\n\
                          \x20 @override\n\
                          \x20 Widget build(BuildContext context) {\n\
                          \x20   return Text('Home');\n\
                          \x20 }\n\
                          }\n";

    #[test]
    fn inserts_import_after_last_import() {
        let result = insert_import(SCREEN);
        let lines: Vec<&str> = result.split('\n').collect();
        assert_eq!(lines[1], "import 'widgets/app_bar.dart';");
        assert_eq!(lines[2], IMPORT_LINE);
        // Inserted exactly once.
        assert_eq!(result.matches(IMPORT_LINE).count(), 1);
    }

    #[test]
    fn import_skipped_when_already_present() {
        let fixed = insert_import(SCREEN);
        assert_eq!(insert_import(&fixed), fixed);
    }

    #[test]
    fn import_skipped_when_accessor_type_in_head() {
        let content = "// uses AppLocalizations directly\nimport 'a.dart';\n";
        assert_eq!(insert_import(content), content);
    }

    #[test]
    fn no_import_statement_means_no_insertion() {
        let content = "class Plain {}\n";
        assert_eq!(insert_import(content), content);
    }

    #[test]
    fn inserts_accessor_after_build_brace() {
        let result = insert_accessor(SCREEN);
        assert!(result.contains(
            "Widget build(BuildContext context) {\n    final l10n = AppLocalizations.of(context)!;\n"
        ));
    }

    #[test]
    fn accessor_only_inserted_at_first_build_method() {
        let two = format!("{SCREEN}\n{SCREEN}");
        let result = insert_accessor(&two);
        assert_eq!(result.matches("final l10n =").count(), 1);
        let first_build = result.find("Widget build").unwrap();
        let decl = result.find("final l10n =").unwrap();
        assert!(decl > first_build);
        assert!(decl < result.rfind("Widget build").unwrap());
    }

    #[test]
    fn accessor_skipped_when_within_lookahead_window() {
        let fixed = insert_accessor(SCREEN);
        assert_eq!(insert_accessor(&fixed), fixed);
    }

    #[test]
    fn accessor_reinserted_when_outside_lookahead_window() {
        // Declaration pushed past the 200-character window is invisible
        // to the check; the duplicate insert is a documented quirk.
        let padding = "// filler\n".repeat(30);
        let content = format!(
            "@override\nWidget build(BuildContext context) {{\n{padding}    final l10n = AppLocalizations.of(context)!;\n}}\n"
        );
        let result = insert_accessor(&content);
        assert_eq!(result.matches("final l10n =").count(), 2);
    }

    #[test]
    fn rewrites_with_opacity_calls() {
        let result = rewrite_deprecated("color.withOpacity(0.5)");
        assert_eq!(result, "color.withValues(alpha: 0.5)");
    }

    #[test]
    fn rewrites_every_with_opacity_occurrence() {
        let result = rewrite_deprecated("a.withOpacity(0.1); b.withOpacity(0.2)");
        assert_eq!(result, "a.withValues(alpha: 0.1); b.withValues(alpha: 0.2)");
    }

    #[test]
    fn strips_const_from_call_wrapping_accessor() {
        let result = strip_const_qualifiers("child: const Text(l10n.cancel)");
        assert_eq!(result, "child: Text(l10n.cancel)");
    }

    #[test]
    fn strips_const_from_list_with_accessor_first() {
        let result = strip_const_qualifiers("children: const [Text(l10n.home), other]");
        assert_eq!(result, "children: [Text(l10n.home), other]");
    }

    #[test]
    fn strips_const_directly_before_accessor() {
        let result = strip_const_qualifiers("title: const l10n.settings");
        assert_eq!(result, "title: l10n.settings");
    }

    #[test]
    fn const_without_accessor_is_preserved() {
        let content = "const SizedBox(height: 8)";
        assert_eq!(strip_const_qualifiers(content), content);
    }

    #[test]
    fn const_strip_is_idempotent() {
        let once = strip_const_qualifiers("const Text(l10n.yes), const [Icon(l10n.no)]");
        assert_eq!(strip_const_qualifiers(&once), once);
    }
}
