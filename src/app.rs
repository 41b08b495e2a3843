use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use log::{debug, error, warn};

use crate::console::collector::collect_selection;
use crate::console::prompt::Console;
use crate::console::report::print_summary;
use crate::data::classify::ClassifierConfig;
use crate::data::loader::load_table;
use crate::data::model::Table;
use crate::data::writer::{output_path, write_table};

// ---------------------------------------------------------------------------
// Batch pipeline: load → select → filter/sort → report → write
// ---------------------------------------------------------------------------

/// One interactive run. File errors are reported and end the run normally;
/// only a broken console (e.g. stdin closed mid-prompt) is returned as `Err`.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &ClassifierConfig,
) -> Result<()> {
    let input = console.ask("Please enter the name of the CSV file: ")?;
    let table = match load_table(Path::new(input.trim())) {
        Ok(table) => table,
        Err(err) => {
            warn!("{err}");
            console.say(&err)?;
            Table::default()
        }
    };

    if table.is_empty() {
        console.say("No data found or error occurred while reading the CSV file.")?;
        return Ok(());
    }

    let selection = collect_selection(console, &table, config)?;
    if let Ok(json) = serde_json::to_string(&selection) {
        debug!("selection: {json}");
    }
    if !selection.has_known_sort_order() {
        console.say(format_args!(
            "Unknown sorting order '{}'. Defaulting to ascending.",
            selection.sort_order
        ))?;
    }

    let result = selection.apply(&table, config);
    print_summary(console, &table, &result)?;

    let name = console.ask("Enter the name for the output CSV file: ")?;
    let path = output_path(&name);
    match write_table(&result, &path) {
        Ok(()) => console.say(format_args!(
            "Filtered data has been successfully written to '{}'.",
            path.display()
        ))?,
        Err(err) => {
            error!("{err}");
            console.say(&err)?;
        }
    }
    Ok(())
}
