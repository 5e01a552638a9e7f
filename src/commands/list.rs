//! raz-ui list コマンド
//!
//! レジストリで公開されているコンポーネントの一覧を表示する。

use crate::cli::GlobalArgs;
use crate::commands::{fetch_index, render_error};
use crate::component::IndexEntry;
use crate::config::HttpConfig;
use crate::registry::HttpRegistry;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};

#[derive(Debug, Parser)]
pub struct Args {
    /// Output in JSON format
    #[arg(long, conflicts_with = "simple")]
    pub json: bool,

    /// Output only component names
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,
}

pub async fn run(args: Args, global: &GlobalArgs) -> Result<(), String> {
    let registry = HttpRegistry::new(&global.registry_url(), &HttpConfig::default());
    let mut entries = fetch_index(&registry)
        .await
        .map_err(|e| render_error(&e, global.verbose))?;
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    if args.json {
        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| format!("Failed to serialize components: {}", e))?;
        println!("{json}");
    } else if args.simple {
        for entry in &entries {
            println!("{}", entry.name);
        }
    } else {
        print_table(&entries);
    }

    Ok(())
}

pub(crate) fn print_table(entries: &[IndexEntry]) {
    if entries.is_empty() {
        println!("No components available");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "Type"]);
    for entry in entries {
        table.add_row(vec![entry.name.as_str(), entry.component_type.as_str()]);
    }

    println!("{table}");
    println!("{} component(s) available", entries.len());
}
