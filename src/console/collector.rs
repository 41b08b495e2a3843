use std::collections::BTreeSet;
use std::io::{BufRead, Write};

use anyhow::Result;

use super::prompt::{Console, parse_column_index, parse_column_indices, parse_value_list};
use crate::data::classify::{ClassifierConfig, classify_column, parse_number};
use crate::data::error::TableError;
use crate::data::model::{ColumnKind, FilterCriterion, Table};
use crate::state::Selection;

// ---------------------------------------------------------------------------
// Selection collector
// ---------------------------------------------------------------------------

/// Walk the user through column choice, sort order and per-column criteria.
///
/// Invalid column numbers, bounds and dates are re-prompted until valid;
/// running out of input is the only way this fails.
pub fn collect_selection<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &Table,
    config: &ClassifierConfig,
) -> Result<Selection> {
    let headers = &table.headers;

    console.say("Here are the column names in your dataset:")?;
    for (i, column) in headers.iter().enumerate() {
        console.say(format_args!("{}. {column}", i + 1))?;
    }

    let filter_indices = console.ask_until(
        "Please enter the column numbers you want to filter on, separated by commas: ",
        |answer| parse_column_indices(answer, headers.len()),
    )?;
    let sort_index = console.ask_until(
        "Please enter the column number you want to sort your data on: ",
        |answer| parse_column_index(answer, headers.len()),
    )?;
    let sort_order = console
        .ask("Please enter the sorting order ('asc' for ascending, 'desc' for descending): ")?
        .trim()
        .to_lowercase();

    let mut selection = Selection::sorted_by(headers[sort_index].clone(), sort_order);
    let filter_columns: Vec<&String> = filter_indices.iter().map(|&i| &headers[i]).collect();

    console.say("\nYou have chosen to filter on the following columns:")?;
    for column in &filter_columns {
        console.say(column)?;
    }

    for column in filter_columns {
        let criterion = match classify_column(table, column, config) {
            ColumnKind::Numeric => ask_numeric_range(console, column)?,
            ColumnKind::Date => ask_date_range(console, column, config)?,
            ColumnKind::Categorical => ask_value_set(console, table, column)?,
        };
        selection.add_filter(column.clone(), criterion);
    }

    console.say("\nYou have chosen to sort on the following column:")?;
    console.say(&selection.sort_column)?;
    console.say(format_args!("Sorting order: {}", selection.sort_order))?;

    Ok(selection)
}

fn ask_numeric_range<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    column: &str,
) -> Result<FilterCriterion> {
    console.say(format_args!("Enter the filter range for '{column}':"))?;
    let invalid = || TableError::InvalidUserInput("Please enter valid numeric values.".into());
    loop {
        let Some(min) = parse_number(&console.ask(&format!("Minimum value for '{column}': "))?)
        else {
            console.say(invalid())?;
            continue;
        };
        let Some(max) = parse_number(&console.ask(&format!("Maximum value for '{column}': "))?)
        else {
            console.say(invalid())?;
            continue;
        };
        return Ok(FilterCriterion::RangeNumeric { min, max });
    }
}

fn ask_date_range<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    column: &str,
    config: &ClassifierConfig,
) -> Result<FilterCriterion> {
    console.say(format_args!(
        "Enter the filter range for '{column}' (date format YYYY-MM-DD):"
    ))?;
    let invalid = || {
        TableError::InvalidUserInput("Please enter valid date values in YYYY-MM-DD format.".into())
    };
    loop {
        let Some(start) = config.parse_date(&console.ask(&format!("Start date for '{column}': "))?)
        else {
            console.say(invalid())?;
            continue;
        };
        let Some(end) = config.parse_date(&console.ask(&format!("End date for '{column}': "))?)
        else {
            console.say(invalid())?;
            continue;
        };
        return Ok(FilterCriterion::RangeDate { start, end });
    }
}

fn ask_value_set<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &Table,
    column: &str,
) -> Result<FilterCriterion> {
    let show = console
        .ask(&format!(
            "Do you want to see unique values for '{column}'? (yes/no): "
        ))?
        .trim()
        .eq_ignore_ascii_case("yes");
    if show {
        let unique: Vec<&str> = table.unique_values(column).into_iter().collect();
        console.say(format_args!(
            "Unique values for '{column}': {}",
            unique.join(", ")
        ))?;
    }

    let answer = console.ask(&format!(
        "Enter the categorical values to filter on for '{column}', separated by commas: "
    ))?;
    let allowed: BTreeSet<String> = parse_value_list(&answer).into_iter().collect();
    Ok(FilterCriterion::ValueSet { allowed })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Row;
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn table() -> Table {
        let rows = [
            ("30", "NYC", "2023-01-05"),
            ("25", "LA", "2023-03-10"),
            ("40", "NYC", "2022-12-31"),
        ]
        .into_iter()
        .map(|(age, city, joined)| {
            Row::from_pairs([("age", age), ("city", city), ("joined", joined)])
        })
        .collect();
        Table::new(vec!["age".into(), "city".into(), "joined".into()], rows)
    }

    fn run(input: &str) -> (Selection, String) {
        let mut console = Console::new(Cursor::new(input.to_string()), Vec::new());
        let selection = collect_selection(&mut console, &table(), &ClassifierConfig::default())
            .expect("collect");
        let out = String::from_utf8(console.into_output()).unwrap();
        (selection, out)
    }

    #[test]
    fn numeric_filter_with_reprompt() {
        let (sel, out) = run("1\n1\nASC\nten\n20\n35\n");

        assert_eq!(sel.filter_columns, vec!["age"]);
        assert_eq!(sel.sort_column, "age");
        assert_eq!(sel.sort_order, "asc");
        assert_eq!(
            sel.criteria["age"],
            FilterCriterion::RangeNumeric { min: 20.0, max: 35.0 }
        );
        assert!(out.contains("1. age\n2. city\n3. joined\n"));
        assert!(out.contains("Please enter valid numeric values."));
        assert_eq!(out.matches("Minimum value for 'age'").count(), 2);
        assert_eq!(out.matches("Maximum value for 'age'").count(), 1);
    }

    #[test]
    fn bad_maximum_restarts_from_minimum() {
        let (sel, out) = run("1\n1\nasc\n20\nlots\n21\n30\n");
        assert_eq!(
            sel.criteria["age"],
            FilterCriterion::RangeNumeric { min: 21.0, max: 30.0 }
        );
        assert_eq!(out.matches("Minimum value for 'age'").count(), 2);
        assert_eq!(out.matches("Maximum value for 'age'").count(), 2);
    }

    #[test]
    fn date_and_categorical_in_entered_order() {
        let input = "3, 2\n2\ndesc\nsoon\n2023-01-01\n2023-12-31\nyes\nNYC , LA\n";
        let (sel, out) = run(input);

        assert_eq!(sel.filter_columns, vec!["joined", "city"]);
        assert_eq!(sel.sort_column, "city");
        assert_eq!(
            sel.criteria["joined"],
            FilterCriterion::RangeDate {
                start: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
                end: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
            }
        );
        assert_eq!(
            sel.criteria["city"],
            FilterCriterion::ValueSet {
                allowed: BTreeSet::from(["LA".to_string(), "NYC".to_string()]),
            }
        );
        assert!(out.contains("Unique values for 'city': LA, NYC"));
        assert!(out.contains("YYYY-MM-DD format"));
        assert_eq!(out.matches("Start date for 'joined'").count(), 2);
        assert_eq!(out.matches("End date for 'joined'").count(), 1);
    }

    #[test]
    fn unique_values_hidden_unless_yes() {
        let (_, out) = run("2\n1\nasc\nno\nLA\n");
        assert!(!out.contains("Unique values for"));
    }

    #[test]
    fn bad_indices_are_reprompted() {
        let (sel, out) = run("a,b\n9\n\nzero\n2\nasc\n");
        assert!(sel.filter_columns.is_empty());
        assert!(sel.criteria.is_empty());
        assert_eq!(sel.sort_column, "city");
        assert!(out.contains("'a' is not a column number"));
        assert!(out.contains("'zero' is not a column number"));
    }

    #[test]
    fn runs_out_of_input() {
        let mut console = Console::new(Cursor::new("1\n"), Vec::new());
        assert!(collect_selection(&mut console, &table(), &ClassifierConfig::default()).is_err());
    }
}
