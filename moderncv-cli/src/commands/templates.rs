//! `moderncv templates`: the template picker as a table.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use moderncv_renderer::TemplateKind;

/// Arguments for `moderncv templates`.
#[derive(Args, Debug)]
pub struct TemplatesArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Tabled)]
struct TemplateRow {
    #[tabled(rename = "id")]
    id: &'static str,
    #[tabled(rename = "name")]
    name: &'static str,
    #[tabled(rename = "header")]
    header: String,
    #[tabled(rename = "picture")]
    picture: String,
    #[tabled(rename = "contact")]
    contact: String,
    #[tabled(rename = "skills")]
    skills: String,
}

/// Serialized name of a unit enum variant (`"centered"`, `"pills"`, ...).
fn variant_name<T: Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}

fn rows() -> Vec<TemplateRow> {
    TemplateKind::all()
        .iter()
        .map(|kind| {
            let layout = kind.layout();
            TemplateRow {
                id: kind.id(),
                name: kind.display_name(),
                header: variant_name(&layout.direction),
                picture: match layout.picture {
                    Some(p) => format!("{}px", p.size_px),
                    None => "none".to_string(),
                },
                contact: variant_name(&layout.contact),
                skills: variant_name(&layout.skills),
            }
        })
        .collect()
}

impl TemplatesArgs {
    pub fn run(self) -> Result<()> {
        let rows = rows();
        if self.json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
            return Ok(());
        }
        println!("{}", Table::new(rows).with(Style::rounded()));
        Ok(())
    }
}
