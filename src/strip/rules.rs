//! Comment rule tables
//!
//! Each comment syntax is an ordered list of rules. The order is part of the
//! behaviour: line comments are removed before block comments, so a block rule
//! never sees a `#` or `//` tail that the line rule already dropped.

use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

/// Comment syntax family a file-type tag maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommentSyntax {
    /// `#` line comments plus `"""` and `'''` blocks
    Python,
    /// `//` line comments plus `/* */` blocks
    CFamily,
    /// `#` line comments only
    Shell,
}

impl CommentSyntax {
    pub const ALL: [CommentSyntax; 3] = [CommentSyntax::Python, CommentSyntax::CFamily, CommentSyntax::Shell];

    /// Ordered rule specs for this syntax
    pub fn rule_specs(self) -> &'static [RuleSpec] {
        match self {
            CommentSyntax::Python => PYTHON_RULES,
            CommentSyntax::CFamily => C_FAMILY_RULES,
            CommentSyntax::Shell => SHELL_RULES,
        }
    }

    /// Compiled rules for this syntax, shared process-wide
    pub fn rules(self) -> Arc<[CommentRule]> {
        COMPILED_RULES
            .get(&self)
            .cloned()
            .unwrap_or_else(|| Arc::from(Vec::new()))
    }
}

impl fmt::Display for CommentSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CommentSyntax::Python => "python",
            CommentSyntax::CFamily => "c-family",
            CommentSyntax::Shell => "shell",
        };
        f.write_str(name)
    }
}

/// Uncompiled rule: pattern, literal replacement, and whether `.` may cross newlines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSpec {
    pub pattern: &'static str,
    pub replacement: &'static str,
    pub multi_line: bool,
}

const HASH_LINE: RuleSpec = RuleSpec { pattern: r"\s*#.*", replacement: "", multi_line: false };
const SLASH_LINE: RuleSpec = RuleSpec { pattern: r"\s*//.*", replacement: "", multi_line: false };
const TRIPLE_DOUBLE_BLOCK: RuleSpec = RuleSpec { pattern: r#""""(.*?)""""#, replacement: "", multi_line: true };
const TRIPLE_SINGLE_BLOCK: RuleSpec = RuleSpec { pattern: r"'''(.*?)'''", replacement: "", multi_line: true };
const SLASH_STAR_BLOCK: RuleSpec = RuleSpec { pattern: r"/\*.*?\*/", replacement: "", multi_line: true };

const PYTHON_RULES: &[RuleSpec] = &[HASH_LINE, TRIPLE_DOUBLE_BLOCK, TRIPLE_SINGLE_BLOCK];
const C_FAMILY_RULES: &[RuleSpec] = &[SLASH_LINE, SLASH_STAR_BLOCK];
const SHELL_RULES: &[RuleSpec] = &[HASH_LINE];

/// Built-in file-type tags
pub const BUILTIN_TAGS: &[(&str, CommentSyntax)] = &[
    (".py", CommentSyntax::Python),
    (".js", CommentSyntax::CFamily),
    (".c", CommentSyntax::CFamily),
    (".cpp", CommentSyntax::CFamily),
    (".h", CommentSyntax::CFamily),
    (".sh", CommentSyntax::Shell),
    (".bash", CommentSyntax::Shell),
];

/// A compiled comment rule
#[derive(Debug, Clone)]
pub struct CommentRule {
    regex: Regex,
    replacement: &'static str,
}

impl CommentRule {
    pub fn compile(spec: &RuleSpec) -> Result<Self, regex::Error> {
        let pattern = if spec.multi_line {
            format!("(?s){}", spec.pattern)
        } else {
            spec.pattern.to_string()
        };
        Ok(Self {
            regex: Regex::new(&pattern)?,
            replacement: spec.replacement,
        })
    }

    /// Replace every non-overlapping match, leftmost first
    pub fn apply<'a>(&self, content: &'a str) -> Cow<'a, str> {
        self.regex.replace_all(content, NoExpand(self.replacement))
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

/// Compiled rules for every syntax, built once on first use
static COMPILED_RULES: LazyLock<HashMap<CommentSyntax, Arc<[CommentRule]>>> = LazyLock::new(|| {
    tracing::debug!("Compiling comment rules");
    let mut compiled = HashMap::new();

    for syntax in CommentSyntax::ALL {
        let mut rules = Vec::new();
        for spec in syntax.rule_specs() {
            match CommentRule::compile(spec) {
                Ok(rule) => rules.push(rule),
                Err(e) => {
                    tracing::error!("Failed to compile {} comment rule '{}': {}", syntax, spec.pattern, e);
                }
            }
        }
        compiled.insert(syntax, Arc::from(rules));
    }

    compiled
});
