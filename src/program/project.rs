//! Project (`tsconfig*.json`) discovery and the bits of it the metrics use.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{ArtieError, Result};

/// ECMAScript target declared in `compilerOptions.target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LanguageTarget {
    Es3,
    Es5,
    #[default]
    Es2015,
    Es2016,
    Es2017,
    Es2018,
    Es2019,
    Es2020,
    Es2021,
    Es2022,
    Es2023,
    EsNext,
}

impl LanguageTarget {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Es3 => "ES3",
            Self::Es5 => "ES5",
            Self::Es2015 => "ES2015",
            Self::Es2016 => "ES2016",
            Self::Es2017 => "ES2017",
            Self::Es2018 => "ES2018",
            Self::Es2019 => "ES2019",
            Self::Es2020 => "ES2020",
            Self::Es2021 => "ES2021",
            Self::Es2022 => "ES2022",
            Self::Es2023 => "ES2023",
            Self::EsNext => "ESNext",
        }
    }
}

impl fmt::Display for LanguageTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageTarget {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "es3" => Ok(Self::Es3),
            "es5" => Ok(Self::Es5),
            "es6" | "es2015" => Ok(Self::Es2015),
            "es2016" => Ok(Self::Es2016),
            "es2017" => Ok(Self::Es2017),
            "es2018" => Ok(Self::Es2018),
            "es2019" => Ok(Self::Es2019),
            "es2020" => Ok(Self::Es2020),
            "es2021" => Ok(Self::Es2021),
            "es2022" => Ok(Self::Es2022),
            "es2023" => Ok(Self::Es2023),
            "esnext" | "latest" => Ok(Self::EsNext),
            _ => Err(format!("Unknown target: {s}")),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct TsConfigFile {
    #[serde(default, rename = "compilerOptions")]
    compiler_options: CompilerOptions,
}

#[derive(Debug, Default, Deserialize)]
struct CompilerOptions {
    #[serde(default)]
    target: Option<String>,
}

/// A located and parsed project configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub path: PathBuf,
    pub target: LanguageTarget,
}

impl ProjectConfig {
    /// Locate and load the project configuration of `dir`.
    ///
    /// # Errors
    /// Returns an error if no `tsconfig*.json` exists or it cannot be parsed.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = find_project_config(dir)?;
        Self::load(&path)
    }

    /// Locate the project configuration and read only its target. Content
    /// that does not parse yields the default target instead of an error.
    ///
    /// # Errors
    /// Returns an error if no `tsconfig*.json` exists or it cannot be read.
    pub fn discover_lenient(dir: &Path) -> Result<Self> {
        let path = find_project_config(dir)?;
        let content = fs::read_to_string(&path).map_err(|source| ArtieError::FileRead {
            path: path.clone(),
            source,
        })?;
        let target = project_target(&content);
        tracing::debug!("{} targets {}", path.display(), target);
        Ok(Self { path, target })
    }

    /// Load a project configuration file strictly.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid JSON(C).
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ArtieError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed: TsConfigFile = serde_json::from_str(&strip_json_comments(&content))
            .map_err(|e| ArtieError::ProjectConfig {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            target: target_from_option(parsed.compiler_options.target.as_deref()),
        })
    }
}

/// Find the first `tsconfig*.json` in `dir`, by file name order.
///
/// # Errors
/// Returns `ProjectConfigNotFound` if there is none.
pub fn find_project_config(dir: &Path) -> Result<PathBuf> {
    let mut candidates: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
        .filter(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            name.starts_with("tsconfig") && name.ends_with(".json")
        })
        .map(|entry| entry.path())
        .collect();
    candidates.sort();

    candidates
        .into_iter()
        .next()
        .ok_or_else(|| ArtieError::ProjectConfigNotFound {
            dir: dir.to_path_buf(),
        })
}

/// Read the language target from raw configuration text, falling back to
/// `ES2015` for unreadable text or a missing/unknown target.
#[must_use]
pub fn project_target(content: &str) -> LanguageTarget {
    serde_json::from_str::<TsConfigFile>(&strip_json_comments(content))
        .map_or_else(|_| LanguageTarget::default(), |parsed| {
            target_from_option(parsed.compiler_options.target.as_deref())
        })
}

fn target_from_option(target: Option<&str>) -> LanguageTarget {
    target
        .and_then(|t| t.parse().ok())
        .unwrap_or_default()
}

/// Remove `//` and `/* */` comments and trailing commas so that
/// `tsconfig.json` files parse as plain JSON.
#[must_use]
pub fn strip_json_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '/' if chars.peek() == Some(&'/') => {
                for next in chars.by_ref() {
                    if next == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for next in chars.by_ref() {
                    if prev == '*' && next == '/' {
                        break;
                    }
                    prev = next;
                }
            }
            _ => out.push(c),
        }
    }

    remove_trailing_commas(&out)
}

fn remove_trailing_commas(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut in_string = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if in_string {
            out.push(c);
            if c == '\\' {
                if let Some(&escaped) = chars.get(i + 1) {
                    out.push(escaped);
                    i += 1;
                }
            } else if c == '"' {
                in_string = false;
            }
        } else if c == '"' {
            in_string = true;
            out.push(c);
        } else if c == ',' {
            let next = chars[i + 1..].iter().find(|ch| !ch.is_whitespace());
            if !matches!(next, Some('}' | ']')) {
                out.push(c);
            }
        } else {
            out.push(c);
        }
        i += 1;
    }

    out
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
