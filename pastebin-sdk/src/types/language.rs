use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::errors::ParseError;

/// Syntax-highlighting format of a paste (`api_paste_format` / `paste_format_short`).
///
/// Pastebin's list of formats is long and grows over time, so this is an open
/// vocabulary: any non-empty code parses, and codes the SDK knows about carry a
/// display name ([`Language::name`]). The default is plain text (`text`).
///
/// ```
/// use pastebin::Language;
///
/// let rust: Language = "rust".parse()?;
/// assert_eq!(rust, Language::RUST);
/// assert_eq!(rust.name(), Some("Rust"));
/// assert_eq!(rust.to_string(), "rust");
///
/// let exotic: Language = "apache".parse()?;
/// assert_eq!(exotic.code(), "apache");
/// # Ok::<_, pastebin::errors::ParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Language(Cow<'static, str>);

/// `(code, display name)` for every format with a named constant, plus a few more.
const KNOWN: &[(&str, &str)] = &[
    ("text", "None"),
    ("bash", "Bash"),
    ("c", "C"),
    ("csharp", "C#"),
    ("cpp", "C++"),
    ("css", "CSS"),
    ("diff", "Diff"),
    ("go", "Go"),
    ("haskell", "Haskell"),
    ("html5", "HTML 5"),
    ("ini", "INI file"),
    ("java", "Java"),
    ("javascript", "JavaScript"),
    ("json", "JSON"),
    ("kotlin", "Kotlin"),
    ("lua", "Lua"),
    ("markdown", "Markdown"),
    ("perl", "Perl"),
    ("php", "PHP"),
    ("powershell", "PowerShell"),
    ("python", "Python"),
    ("ruby", "Ruby"),
    ("rust", "Rust"),
    ("sql", "SQL"),
    ("swift", "Swift"),
    ("typescript", "TypeScript"),
    ("xml", "XML"),
    ("yaml", "YAML"),
];

impl Language {
    /// Plain text, no highlighting. The default.
    pub const TEXT: Language = Language::from_static("text");
    /// Bash.
    pub const BASH: Language = Language::from_static("bash");
    /// C.
    pub const C: Language = Language::from_static("c");
    /// C#.
    pub const CSHARP: Language = Language::from_static("csharp");
    /// C++.
    pub const CPP: Language = Language::from_static("cpp");
    /// Go.
    pub const GO: Language = Language::from_static("go");
    /// Java.
    pub const JAVA: Language = Language::from_static("java");
    /// JavaScript.
    pub const JAVASCRIPT: Language = Language::from_static("javascript");
    /// JSON.
    pub const JSON: Language = Language::from_static("json");
    /// Python.
    pub const PYTHON: Language = Language::from_static("python");
    /// Rust.
    pub const RUST: Language = Language::from_static("rust");
    /// SQL.
    pub const SQL: Language = Language::from_static("sql");
    /// XML.
    pub const XML: Language = Language::from_static("xml");

    const fn from_static(code: &'static str) -> Self {
        Language(Cow::Borrowed(code))
    }

    /// The format code, as sent on the wire.
    pub fn code(&self) -> &str {
        &self.0
    }

    /// Display name for codes the SDK knows about.
    pub fn name(&self) -> Option<&'static str> {
        KNOWN
            .iter()
            .find(|(code, _)| *code == self.code())
            .map(|(_, name)| *name)
    }

    /// Whether [`Language::name`] has an entry for this code.
    pub fn is_known(&self) -> bool {
        self.name().is_some()
    }

    /// Every code with a display name.
    pub fn known() -> impl Iterator<Item = Language> {
        KNOWN.iter().map(|(code, _)| Language::from_static(*code))
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::TEXT
    }
}

/// Renders the format code.
impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Accepts any non-empty code. Known codes reuse the static registry entry.
impl FromStr for Language {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::InvalidValue {
                element: "language",
                value: s.to_string(),
            });
        }
        Ok(KNOWN
            .iter()
            .find(|(code, _)| *code == s)
            .map_or_else(|| Language(Cow::Owned(s.to_string())), |(code, _)| {
                Language::from_static(*code)
            }))
    }
}
