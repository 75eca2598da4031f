//! Compiled-in series content.
//!
//! Episode bodies live under `content/<module>/part-<n>.md` at the crate
//! root. Some series are intentionally incomplete: `total_episodes` is the
//! planned length, not the number authored so far.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{Difficulty, Episode, Series};

/// Module ids of the compiled-in series
pub const MODULE_IDS: &[&str] = &["excel", "python", "sql-database"];

/// All compiled-in series, in no particular order
pub fn series() -> Vec<Series> {
    vec![excel(), python(), sql_database()]
}

/// Authored publication time (09:00 UTC on the given day)
fn published(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn excel() -> Series {
    let id = "excel";
    Series {
        id: id.to_string(),
        title: "Excel Mastery Series".to_string(),
        description: "From your first workbook to confident everyday analysis: \
                      formulas, functions, tables and the habits that keep \
                      spreadsheets correct."
            .to_string(),
        total_episodes: 10,
        estimated_duration: "10 weeks".to_string(),
        difficulty: Difficulty::Beginner,
        category: id.to_string(),
        episodes: vec![
            Episode::new(id, 1, "Getting Around the Workbook")
                .with_summary("Workbooks, worksheets, cells and the parts of the window you use daily.")
                .with_content(include_str!("../../content/excel/part-1.md"))
                .with_read_time(8)
                .with_published_at(published(2024, 1, 8))
                .with_tags(["excel", "basics", "interface"]),
            Episode::new(id, 2, "Formulas and Cell References")
                .with_summary("Writing formulas and knowing when a reference should move.")
                .with_content(include_str!("../../content/excel/part-2.md"))
                .with_read_time(10)
                .with_published_at(published(2024, 1, 15))
                .with_tags(["excel", "formulas"]),
            Episode::new(id, 3, "Essential Functions")
                .with_summary("SUM, IF, SUMIF and XLOOKUP: the functions behind most sheets.")
                .with_content(include_str!("../../content/excel/part-3.md"))
                .with_read_time(12)
                .with_published_at(published(2024, 1, 22))
                .with_tags(["excel", "functions", "formulas"]),
            Episode::new(id, 4, "Sorting, Filtering and Tables")
                .with_summary("Structured tables that grow with your data.")
                .with_content(include_str!("../../content/excel/part-4.md"))
                .with_read_time(11)
                .with_published_at(published(2024, 1, 29))
                .with_tags(["excel", "tables", "data"]),
        ],
        prerequisites: Some(strings(&["Basic computer literacy"])),
        learning_outcomes: strings(&[
            "Navigate workbooks and enter data reliably",
            "Write formulas with relative and absolute references",
            "Summarize data with core functions",
            "Organize data with sortable, filterable tables",
        ]),
    }
}

fn python() -> Series {
    let id = "python";
    Series {
        id: id.to_string(),
        title: "Python Programming Series".to_string(),
        description: "A gentle start in programming with Python: values, \
                      control flow, functions and the built-in collections."
            .to_string(),
        total_episodes: 12,
        estimated_duration: "12 weeks".to_string(),
        difficulty: Difficulty::Beginner,
        category: id.to_string(),
        episodes: vec![
            Episode::new(id, 1, "Your First Python Program")
                .with_summary("Running code, printing output and reading input.")
                .with_content(include_str!("../../content/python/part-1.md"))
                .with_read_time(7)
                .with_published_at(published(2024, 2, 5))
                .with_tags(["python", "basics"]),
            Episode::new(id, 2, "Making Decisions and Repeating Work")
                .with_summary("Conditionals and loops.")
                .with_content(include_str!("../../content/python/part-2.md"))
                .with_read_time(10)
                .with_published_at(published(2024, 2, 12))
                .with_tags(["python", "control-flow"]),
            Episode::new(id, 3, "Functions and Collections")
                .with_summary("Reusable functions, lists and dictionaries.")
                .with_content(include_str!("../../content/python/part-3.md"))
                .with_read_time(12)
                .with_published_at(published(2024, 2, 19))
                .with_tags(["python", "functions", "collections"]),
        ],
        prerequisites: None,
        learning_outcomes: strings(&[
            "Write and run small Python programs",
            "Control program flow with conditions and loops",
            "Structure code into functions",
            "Work with lists and dictionaries",
        ]),
    }
}

fn sql_database() -> Series {
    let id = "sql-database";
    Series {
        id: id.to_string(),
        title: "SQL & Database Fundamentals".to_string(),
        description: "Query relational data with confidence: selecting, \
                      joining and aggregating."
            .to_string(),
        total_episodes: 8,
        estimated_duration: "8 weeks".to_string(),
        difficulty: Difficulty::Intermediate,
        category: id.to_string(),
        episodes: vec![
            Episode::new(id, 1, "Tables, Rows and SELECT")
                .with_summary("How relational data is laid out and how to read it.")
                .with_content(include_str!("../../content/sql-database/part-1.md"))
                .with_read_time(9)
                .with_published_at(published(2024, 3, 4))
                .with_tags(["sql", "select"]),
            Episode::new(id, 2, "Joining Tables")
                .with_summary("Inner and left joins on keys.")
                .with_content(include_str!("../../content/sql-database/part-2.md"))
                .with_read_time(11)
                .with_published_at(published(2024, 3, 11))
                .with_tags(["sql", "joins"]),
            Episode::new(id, 3, "Aggregation with GROUP BY")
                .with_summary("Counting, averaging and filtering groups.")
                .with_content(include_str!("../../content/sql-database/part-3.md"))
                .with_read_time(10)
                .with_published_at(published(2024, 3, 18))
                .with_tags(["sql", "aggregation"]),
        ],
        prerequisites: Some(strings(&[
            "Comfort with spreadsheets or basic programming",
        ])),
        learning_outcomes: strings(&[
            "Read data with SELECT, WHERE and ORDER BY",
            "Combine tables with joins",
            "Summarize data with GROUP BY and HAVING",
        ]),
    }
}
