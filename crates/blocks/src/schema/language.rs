//! Code block languages accepted by the Notion API.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Fallback for languages Notion does not know.
pub const PLAIN_TEXT: &str = "plain text";

/// Every language name the Notion API accepts on a code block.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "abap",
    "agda",
    "arduino",
    "assembly",
    "bash",
    "basic",
    "bnf",
    "c",
    "c#",
    "c++",
    "clojure",
    "coffeescript",
    "coq",
    "css",
    "dart",
    "dhall",
    "diff",
    "docker",
    "ebnf",
    "elixir",
    "elm",
    "erlang",
    "f#",
    "flow",
    "fortran",
    "gherkin",
    "glsl",
    "go",
    "graphql",
    "groovy",
    "haskell",
    "html",
    "idris",
    "java",
    "javascript",
    "json",
    "julia",
    "kotlin",
    "latex",
    "less",
    "lisp",
    "livescript",
    "llvm ir",
    "lua",
    "makefile",
    "markdown",
    "markup",
    "matlab",
    "mathematica",
    "mermaid",
    "nix",
    "objective-c",
    "ocaml",
    "pascal",
    "perl",
    "php",
    "plain text",
    "powershell",
    "prolog",
    "protobuf",
    "purescript",
    "python",
    "r",
    "racket",
    "reason",
    "ruby",
    "rust",
    "sass",
    "scala",
    "scheme",
    "scss",
    "shell",
    "smalltalk",
    "solidity",
    "sql",
    "swift",
    "toml",
    "typescript",
    "vb.net",
    "verilog",
    "vhdl",
    "visual basic",
    "webassembly",
    "xml",
    "yaml",
    "java/c/c++/c#",
];

static SUPPORTED: Lazy<HashSet<&'static str>> =
    Lazy::new(|| SUPPORTED_LANGUAGES.iter().copied().collect());

/// Common fence names and file extensions mapped onto Notion language names.
static ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("asm", "assembly"),
        ("nasm", "assembly"),
        ("sh", "shell"),
        ("zsh", "shell"),
        ("fish", "shell"),
        ("console", "shell"),
        ("shellsession", "shell"),
        ("cs", "c#"),
        ("csharp", "c#"),
        ("cpp", "c++"),
        ("cxx", "c++"),
        ("cc", "c++"),
        ("hpp", "c++"),
        ("h", "c"),
        ("clj", "clojure"),
        ("cljs", "clojure"),
        ("coffee", "coffeescript"),
        ("dockerfile", "docker"),
        ("patch", "diff"),
        ("ex", "elixir"),
        ("exs", "elixir"),
        ("erl", "erlang"),
        ("fs", "f#"),
        ("fsharp", "f#"),
        ("f90", "fortran"),
        ("feature", "gherkin"),
        ("golang", "go"),
        ("gql", "graphql"),
        ("hs", "haskell"),
        ("htm", "html"),
        ("xhtml", "html"),
        ("js", "javascript"),
        ("jsx", "javascript"),
        ("mjs", "javascript"),
        ("cjs", "javascript"),
        ("node", "javascript"),
        ("jsonc", "json"),
        ("json5", "json"),
        ("jl", "julia"),
        ("kt", "kotlin"),
        ("kts", "kotlin"),
        ("tex", "latex"),
        ("el", "lisp"),
        ("elisp", "lisp"),
        ("emacs-lisp", "lisp"),
        ("commonlisp", "lisp"),
        ("ls", "livescript"),
        ("ll", "llvm ir"),
        ("llvm", "llvm ir"),
        ("make", "makefile"),
        ("mk", "makefile"),
        ("md", "markdown"),
        ("mdx", "markdown"),
        ("wl", "mathematica"),
        ("objc", "objective-c"),
        ("objectivec", "objective-c"),
        ("ml", "ocaml"),
        ("pas", "pascal"),
        ("delphi", "pascal"),
        ("pl", "perl"),
        ("pm", "perl"),
        ("text", "plain text"),
        ("txt", "plain text"),
        ("plaintext", "plain text"),
        ("plain", "plain text"),
        ("ps1", "powershell"),
        ("pwsh", "powershell"),
        ("posh", "powershell"),
        ("proto", "protobuf"),
        ("purs", "purescript"),
        ("py", "python"),
        ("python3", "python"),
        ("py3", "python"),
        ("rkt", "racket"),
        ("re", "reason"),
        ("rb", "ruby"),
        ("rs", "rust"),
        ("scm", "scheme"),
        ("st", "smalltalk"),
        ("sol", "solidity"),
        ("mysql", "sql"),
        ("postgresql", "sql"),
        ("psql", "sql"),
        ("plsql", "sql"),
        ("ts", "typescript"),
        ("tsx", "typescript"),
        ("mts", "typescript"),
        ("vbnet", "vb.net"),
        ("v", "verilog"),
        ("sv", "verilog"),
        ("systemverilog", "verilog"),
        ("vhd", "vhdl"),
        ("vb", "visual basic"),
        ("vba", "visual basic"),
        ("wasm", "webassembly"),
        ("wat", "webassembly"),
        ("svg", "xml"),
        ("xsl", "xml"),
        ("plist", "xml"),
        ("yml", "yaml"),
    ])
});

/// Returns true if Notion accepts `lang` verbatim (already lowercase).
pub fn is_supported_code_language(lang: &str) -> bool {
    SUPPORTED.contains(lang)
}

/// Best-effort mapping of an arbitrary language name onto a Notion language.
///
/// Unknown names fall back to `plain text`.
pub fn normalize_code_language(lang: &str) -> &'static str {
    let lower = lang.trim().to_lowercase();
    if let Some(known) = SUPPORTED.get(lower.as_str()) {
        return *known;
    }
    ALIASES.get(lower.as_str()).copied().unwrap_or(PLAIN_TEXT)
}

/// Resolves a fence's info-string language for a code block.
///
/// Supported names are used verbatim (case-insensitively), other names go
/// through [`normalize_code_language`], and a missing language yields `None`.
pub fn code_block_language(lang: Option<&str>) -> Option<String> {
    let lang = lang?.to_lowercase();
    if is_supported_code_language(&lang) {
        Some(lang)
    } else {
        Some(normalize_code_language(&lang).to_string())
    }
}
