use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use super::prompt::Console;
use crate::data::model::Table;

/// Record counts followed by every surviving row as a JSON object.
pub fn print_summary<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    source: &Table,
    result: &Table,
) -> Result<()> {
    console.say(format_args!("\nTotal records read: {}", source.len()))?;
    console.say(format_args!("Filtered and sorted records: {}", result.len()))?;
    for row in &result.rows {
        let line = serde_json::to_string(row).context("rendering row")?;
        console.say(line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Row;
    use std::io::Cursor;

    #[test]
    fn prints_counts_and_rows() {
        let source = Table::new(
            vec!["a".into()],
            vec![Row::from_pairs([("a", "1")]), Row::from_pairs([("a", "2")])],
        );
        let result = source.with_rows(vec![Row::from_pairs([("a", "2")])]);

        let mut console = Console::new(Cursor::new(""), Vec::new());
        print_summary(&mut console, &source, &result).unwrap();
        let out = String::from_utf8(console.into_output()).unwrap();

        assert!(out.contains("Total records read: 2\n"));
        assert!(out.contains("Filtered and sorted records: 1\n"));
        assert!(out.ends_with("{\"a\":\"2\"}\n"));
    }
}
