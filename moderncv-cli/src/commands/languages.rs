//! `moderncv languages`

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use moderncv_core::Language;

#[derive(Args, Debug)]
pub struct LanguagesArgs {}

#[derive(Tabled)]
struct LanguageRow {
    #[tabled(rename = "code")]
    code: &'static str,
    #[tabled(rename = "name")]
    name: &'static str,
    #[tabled(rename = "direction")]
    direction: &'static str,
    #[tabled(rename = "flag")]
    flag: &'static str,
}

impl LanguagesArgs {
    pub fn run(self) -> Result<()> {
        let rows: Vec<LanguageRow> = Language::all()
            .iter()
            .map(|lang| LanguageRow {
                code: lang.code(),
                name: lang.name(),
                direction: lang.direction(),
                flag: lang.flag(),
            })
            .collect();
        println!("{}", Table::new(rows).with(Style::rounded()));
        println!(
            "{}",
            format!("default: {}", Language::default().code()).dimmed()
        );
        Ok(())
    }
}
