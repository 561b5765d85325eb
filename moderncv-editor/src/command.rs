//! Line-oriented editing protocol.
//!
//! One command per line. Blank lines and lines starting with `#` are
//! skipped. Values run to the end of the line; a literal `\n` inside a value
//! becomes a newline.

use std::path::PathBuf;

use moderncv_core::{FieldPath, Language, Section, Theme};

use crate::error::EditorError;

pub const HELP: &str = "\
commands:
  set <field> <value...>                      edit personal info (name, title, phone, email, location, website)
  set <section> <index> <field> <value...>    edit an experience or education entry
  add <section>                               append a blank entry
  remove <section> <index>                    delete an entry
  skills <a, b, c...>                         replace the skills list
  picture <path>                              load a profile picture in the background
  wait                                        wait for pending pictures
  template <modern|classic|minimalist>        switch preview template
  lang <en|fr|es|de|ar>                       switch display language
  theme [dark|light|toggle]                   switch theme (toggles without argument)
  show [--json]                               print the document
  preview                                     print the rendered preview markup
  export <pdf|doc> [path]                     export the preview
  help                                        this text
  quit                                        wait for pending pictures and exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeChange {
    Set(Theme),
    Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Pdf,
    Doc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorCommand {
    Set { path: FieldPath, value: String },
    Add(Section),
    Remove(Section, usize),
    Skills(String),
    Picture(PathBuf),
    Wait,
    /// Raw id; unknown ids are resolved to modern by the session.
    Template(String),
    Lang(Language),
    Theme(ThemeChange),
    Show { json: bool },
    Preview,
    Export { kind: ExportKind, path: Option<PathBuf> },
    Help,
    Quit,
}

fn usage(text: &str) -> EditorError {
    EditorError::Command(format!("usage: {text}"))
}

/// Split off the first whitespace-delimited word.
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(pos) => (&s[..pos], s[pos..].trim_start()),
        None => (s, ""),
    }
}

fn parse_index(raw: &str) -> Result<usize, EditorError> {
    raw.parse::<usize>()
        .map_err(|_| EditorError::Command(format!("invalid index '{raw}'")))
}

fn unescape(value: &str) -> String {
    value.trim_end().replace("\\n", "\n")
}

impl EditorCommand {
    /// Parse one input line. `Ok(None)` for blank and comment lines.
    pub fn parse(line: &str) -> Result<Option<EditorCommand>, EditorError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let (verb, rest) = split_word(line);

        let cmd = match verb.to_ascii_lowercase().as_str() {
            "set" => parse_set(rest)?,
            "add" => {
                let (section, extra) = split_word(rest);
                if section.is_empty() || !extra.is_empty() {
                    return Err(usage("add <experience|education>"));
                }
                EditorCommand::Add(section.parse()?)
            }
            "remove" => {
                let (section, rest) = split_word(rest);
                let (index, extra) = split_word(rest);
                if index.is_empty() || !extra.is_empty() {
                    return Err(usage("remove <experience|education> <index>"));
                }
                EditorCommand::Remove(section.parse()?, parse_index(index)?)
            }
            "skills" => EditorCommand::Skills(rest.trim_end().to_string()),
            "picture" => {
                let path = rest.trim_end();
                if path.is_empty() {
                    return Err(usage("picture <path>"));
                }
                EditorCommand::Picture(PathBuf::from(path))
            }
            "wait" => EditorCommand::Wait,
            "template" => {
                let (id, _) = split_word(rest);
                if id.is_empty() {
                    return Err(usage("template <modern|classic|minimalist>"));
                }
                EditorCommand::Template(id.to_string())
            }
            "lang" | "language" => {
                let (code, _) = split_word(rest);
                EditorCommand::Lang(code.parse()?)
            }
            "theme" => {
                let (arg, _) = split_word(rest);
                match arg {
                    "" | "toggle" => EditorCommand::Theme(ThemeChange::Toggle),
                    other => EditorCommand::Theme(ThemeChange::Set(other.parse()?)),
                }
            }
            "show" => {
                let (flag, _) = split_word(rest);
                match flag {
                    "" => EditorCommand::Show { json: false },
                    "--json" => EditorCommand::Show { json: true },
                    _ => return Err(usage("show [--json]")),
                }
            }
            "preview" => EditorCommand::Preview,
            "export" => {
                let (kind, rest) = split_word(rest);
                let kind = match kind.to_ascii_lowercase().as_str() {
                    "pdf" => ExportKind::Pdf,
                    "doc" | "docx" | "word" => ExportKind::Doc,
                    _ => return Err(usage("export <pdf|doc> [path]")),
                };
                let path = rest.trim_end();
                EditorCommand::Export {
                    kind,
                    path: (!path.is_empty()).then(|| PathBuf::from(path)),
                }
            }
            "help" | "?" => EditorCommand::Help,
            "quit" | "exit" => EditorCommand::Quit,
            other => {
                return Err(EditorError::Command(format!(
                    "unknown command '{other}' (try 'help')"
                )))
            }
        };
        Ok(Some(cmd))
    }
}

fn parse_set(rest: &str) -> Result<EditorCommand, EditorError> {
    let (first, after_first) = split_word(rest);
    if first.is_empty() {
        return Err(usage("set <field> <value> | set <section> <index> <field> <value>"));
    }

    if let Ok(section) = first.parse::<Section>() {
        let (index, after_index) = split_word(after_first);
        let (field, value) = split_word(after_index);
        if field.is_empty() {
            return Err(usage("set <section> <index> <field> <value>"));
        }
        let path = FieldPath::parse(Some(section.as_str()), Some(parse_index(index)?), field)?;
        return Ok(EditorCommand::Set {
            path,
            value: unescape(value),
        });
    }

    let path = FieldPath::parse(None, None, first)?;
    Ok(EditorCommand::Set {
        path,
        value: unescape(after_first),
    })
}
