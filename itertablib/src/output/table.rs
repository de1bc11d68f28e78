//! Text and LaTeX renderings of a record set.
//!
//! Both renderings are pure functions of the [`RecordSet`]: they add markup
//! around the same `(attack_index, iteration_count)` pairs and never reorder
//! or drop rows.

use std::fmt;
use std::str::FromStr;

use crate::data::Record;
use crate::error::IterTableError;
use crate::query::RecordSet;

/// Header line of the text table.
const TEXT_HEADER: &str = "att\titer\n";

/// Everything above the LaTeX data rows. The `tabular` line ends with a space.
const LATEX_PREAMBLE: &str = "\\begin{center}\n\
\\begin{tabular}{ |c|c| } \n    \
\\hline\n    \
Номер атаки & Кількість ітерацій \\\\\n    \
\\hline\n";

/// Everything below the LaTeX data rows.
const LATEX_CLOSING: &str = "\\end{tabular}\n\\end{center}";

/// Output table flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableFormat {
    /// Tab-separated rows under an `att`/`iter` header
    #[default]
    Text,
    /// `center`/`tabular` fragment for direct inclusion in a document
    Latex,
}

impl TableFormat {
    /// Accepted selector values, in help order.
    pub const NAMES: [&'static str; 2] = ["text", "latex"];

    pub fn name(self) -> &'static str {
        match self {
            TableFormat::Text => "text",
            TableFormat::Latex => "latex",
        }
    }

    /// Render `records` in this format.
    pub fn render(self, records: &RecordSet) -> String {
        match self {
            TableFormat::Text => render_text(records),
            TableFormat::Latex => render_latex(records),
        }
    }
}

impl FromStr for TableFormat {
    type Err = IterTableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(TableFormat::Text),
            "latex" => Ok(TableFormat::Latex),
            _ => Err(IterTableError::InvalidTableType(s.to_string())),
        }
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn text_row(record: &Record) -> String {
    format!("{}\t{}\n", record.attack_index, record.iteration_count)
}

fn latex_row(record: &Record) -> String {
    format!(
        "    {} & {} \\\\\n    \\hline\n",
        record.attack_index, record.iteration_count
    )
}

/// Render as `att<TAB>iter` followed by one tab-separated line per record.
pub fn render_text(records: &RecordSet) -> String {
    let mut table = String::from(TEXT_HEADER);
    for record in records {
        table.push_str(&text_row(record));
    }
    table
}

/// Render as a bordered two-column LaTeX `tabular` inside `center`.
pub fn render_latex(records: &RecordSet) -> String {
    let mut table = String::from(LATEX_PREAMBLE);
    for record in records {
        table.push_str(&latex_row(record));
    }
    table.push_str(LATEX_CLOSING);
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> RecordSet {
        RecordSet::from_records(&[
            Record::new(7, 5),
            Record::new(3, 42),
            Record::new(Record::NOT_FOUND, 99),
        ])
    }

    /// Pull `(attack_index, iteration_count)` pairs back out of a text table.
    fn text_pairs(table: &str) -> Vec<(i64, i64)> {
        table
            .lines()
            .skip(1)
            .map(|line| {
                let (att, iter) = line.split_once('\t').unwrap();
                (att.parse().unwrap(), iter.parse().unwrap())
            })
            .collect()
    }

    /// Pull `(attack_index, iteration_count)` pairs back out of a LaTeX table.
    fn latex_pairs(table: &str) -> Vec<(i64, i64)> {
        table
            .lines()
            .filter_map(|line| line.trim().strip_suffix(" \\\\"))
            .filter_map(|row| {
                let (att, iter) = row.split_once(" & ")?;
                Some((att.parse().ok()?, iter.parse().ok()?))
            })
            .collect()
    }

    #[test]
    fn test_text_table() {
        assert_eq!(render_text(&sample_set()), "att\titer\n-1\t99\n3\t42\n7\t5\n");
    }

    #[test]
    fn test_text_table_empty() {
        assert_eq!(render_text(&RecordSet::default()), "att\titer\n");
    }

    const LATEX_HEAD: &str = concat!(
        "\\begin{center}\n",
        "\\begin{tabular}{ |c|c| } \n",
        "    \\hline\n",
        "    Номер атаки & Кількість ітерацій \\\\\n",
        "    \\hline\n",
    );

    #[test]
    fn test_latex_table() {
        let expected = format!(
            "{LATEX_HEAD}{}{}{}\\end{{tabular}}\n\\end{{center}}",
            "    -1 & 99 \\\\\n    \\hline\n",
            "    3 & 42 \\\\\n    \\hline\n",
            "    7 & 5 \\\\\n    \\hline\n",
        );

        assert_eq!(render_latex(&sample_set()), expected);
    }

    #[test]
    fn test_latex_table_keeps_tabular_trailing_space() {
        let table = render_latex(&sample_set());
        assert_eq!(table.lines().nth(1), Some("\\begin{tabular}{ |c|c| } "));
        assert!(!table.ends_with('\n'));
    }

    #[test]
    fn test_latex_table_empty() {
        let expected = format!("{LATEX_HEAD}\\end{{tabular}}\n\\end{{center}}");

        assert_eq!(render_latex(&RecordSet::default()), expected);
    }

    #[test]
    fn test_formats_carry_same_pairs() {
        let set = sample_set();
        let expected: Vec<(i64, i64)> = set
            .iter()
            .map(|r| (r.attack_index, r.iteration_count))
            .collect();

        assert_eq!(text_pairs(&render_text(&set)), expected);
        assert_eq!(latex_pairs(&render_latex(&set)), expected);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let set = sample_set();
        for format in [TableFormat::Text, TableFormat::Latex] {
            assert_eq!(format.render(&set), format.render(&set));
        }
        let resorted = RecordSet::from_records(&set.records);
        assert_eq!(render_text(&resorted), render_text(&set));
    }

    #[test]
    fn test_render_dispatch() {
        let set = sample_set();
        assert_eq!(TableFormat::Text.render(&set), render_text(&set));
        assert_eq!(TableFormat::Latex.render(&set), render_latex(&set));
    }

    #[test]
    fn test_table_format_from_str() {
        assert_eq!(TableFormat::from_str("text").unwrap(), TableFormat::Text);
        assert_eq!(TableFormat::from_str("latex").unwrap(), TableFormat::Latex);
        assert!(TableFormat::from_str("LaTeX").is_err());
        assert!(TableFormat::from_str("").is_err());
    }

    #[test]
    fn test_invalid_table_type() {
        let result = TableFormat::from_str("xml");

        if let Err(IterTableError::InvalidTableType(value)) = result {
            assert_eq!(value, "xml");
        } else {
            panic!("Expected InvalidTableType error");
        }
    }

    #[test]
    fn test_table_format_names_round_trip() {
        for name in TableFormat::NAMES {
            assert_eq!(TableFormat::from_str(name).unwrap().to_string(), name);
        }
    }
}
