//! Application shell cleanup.
//!
//! Once every call site is migrated, the old toaster components mounted in the
//! application shell have nothing left to render. This removes their imports
//! and their self-closing tags.

use std::sync::LazyLock;

use regex::Regex;

static SHELL_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        r#"(?m)^[ \t]*import\s*\{\s*Toaster\s*\}\s*from\s*["']@/components/ui/toaster["'][ \t]*;?[ \t]*\r?\n?"#,
        r#"(?m)^[ \t]*import\s*\{\s*Toaster\s+as\s+Sonner\s*\}\s*from\s*["']@/components/ui/sonner["'][ \t]*;?[ \t]*\r?\n?"#,
        r"[ \t]*<Toaster\s*/>[ \t]*\r?\n?",
        r"[ \t]*<Sonner\s*/>[ \t]*\r?\n?",
    ]
    .map(|pattern| Regex::new(pattern).unwrap())
});

/// Result of [`clean_shell`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCleanup {
    pub text: String,
    pub changed: bool,
}

/// Remove the toaster imports and `<Toaster />` / `<Sonner />` tags.
pub fn clean_shell(text: &str) -> ShellCleanup {
    let cleaned = SHELL_PATTERNS
        .iter()
        .fold(text.to_string(), |acc, pattern| {
            pattern.replace_all(&acc, "").into_owned()
        });

    ShellCleanup {
        changed: cleaned != text,
        text: cleaned,
    }
}

#[cfg(test)]
mod tests {
    use crate::rewrite::shell::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clean_shell() {
        let text = r#"import { Toaster } from "@/components/ui/toaster";
import { Toaster as Sonner } from "@/components/ui/sonner";
import { Routes } from "react-router-dom";

const App = () => (
  <Providers>
    <Toaster />
    <Sonner />
    <Routes />
  </Providers>
);
"#;
        let cleanup = clean_shell(text);

        assert!(cleanup.changed);
        assert_eq!(
            cleanup.text,
            r#"import { Routes } from "react-router-dom";

const App = () => (
  <Providers>
    <Routes />
  </Providers>
);
"#
        );
    }

    #[test]
    fn test_clean_shell_single_quotes_without_semicolon() {
        let text = "import {Toaster} from '@/components/ui/toaster'\nexport default 1;\n";
        assert_eq!(clean_shell(text).text, "export default 1;\n");
    }

    #[test]
    fn test_clean_shell_unchanged() {
        let text = "import { Toaster } from \"sonner\";\n<Toaster richColors />\n";
        let cleanup = clean_shell(text);

        assert!(!cleanup.changed);
        assert_eq!(cleanup.text, text);
    }

    #[test]
    fn test_clean_shell_is_idempotent() {
        let once = clean_shell("<Toaster />\n<Sonner/>\n<App />\n").text;
        assert_eq!(once, "<App />\n");
        assert!(!clean_shell(&once).changed);
    }
}
