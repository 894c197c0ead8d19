use tracing::debug;

use crate::stats::Record;

/// Accepted records plus how many non-blank lines were dropped along the way.
///
/// Malformed lines are never an error; the count exists so the summary can
/// tell the user that some of their input was ignored.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParseOutcome {
    pub records: Vec<Record>,
    pub skipped_lines: u32,
}

/// Parse free-text species data, one record per line.
///
/// Each line is either `name,count` or `name: count`; the comma form wins
/// when a line contains both delimiters. Tokens are trimmed, the count must
/// be a base-10 unsigned integer, and anything after a second delimiter is
/// ignored. Lines that fit neither format are dropped and parsing continues.
pub fn parse_species_data(input: &str) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();

    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let delimiter = if line.contains(',') {
            ','
        } else if line.contains(':') {
            ':'
        } else {
            debug!(line, "Line has no delimiter, skipping");
            outcome.skipped_lines += 1;
            continue;
        };

        match split_record(line, delimiter) {
            Some(record) => outcome.records.push(record),
            None => {
                debug!(line, delimiter = %delimiter, "Malformed line, skipping");
                outcome.skipped_lines += 1;
            }
        }
    }

    outcome
}

fn split_record(line: &str, delimiter: char) -> Option<Record> {
    let (name, rest) = line.split_once(delimiter)?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    // Only the token between the first and second delimiter counts;
    // trailing fields are ignored.
    let count_token = rest.split(delimiter).next().unwrap_or("").trim();
    let count = count_token.parse::<u64>().ok()?;

    Some(Record::new(name, count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_records() {
        let outcome = parse_species_data("");
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.skipped_lines, 0);
    }

    #[test]
    fn parses_comma_separated_lines() {
        let outcome = parse_species_data("A,10\nB,20");
        assert_eq!(
            outcome.records,
            vec![Record::new("A", 10), Record::new("B", 20)]
        );
    }

    #[test]
    fn colon_form_is_equivalent() {
        let outcome = parse_species_data("A: 5\nB: 15");
        assert_eq!(
            outcome.records,
            vec![Record::new("A", 5), Record::new("B", 15)]
        );
    }

    #[test]
    fn non_numeric_count_is_dropped_but_parsing_continues() {
        let outcome = parse_species_data("A,x\nB,5");
        assert_eq!(outcome.records, vec![Record::new("B", 5)]);
        assert_eq!(outcome.skipped_lines, 1);
    }

    #[test]
    fn comma_takes_precedence_over_colon() {
        let outcome = parse_species_data("E. coli: K12,42");
        assert_eq!(outcome.records, vec![Record::new("E. coli: K12", 42)]);
    }

    #[test]
    fn content_after_second_delimiter_is_ignored() {
        let outcome = parse_species_data("A,7,extra\nB:3:junk");
        assert_eq!(
            outcome.records,
            vec![Record::new("A", 7), Record::new("B", 3)]
        );
    }

    #[test]
    fn blank_lines_are_skipped_silently() {
        let outcome = parse_species_data("\n  \nA,1\n\nB,2\n");
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.skipped_lines, 0);
    }

    #[test]
    fn whitespace_around_tokens_is_insignificant() {
        let outcome = parse_species_data("  A  ,  10  ");
        assert_eq!(outcome.records, vec![Record::new("A", 10)]);
    }

    #[test]
    fn empty_name_is_rejected() {
        let outcome = parse_species_data(",10\n: 5");
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.skipped_lines, 2);
    }

    #[test]
    fn missing_count_is_rejected() {
        let outcome = parse_species_data("A,\nB");
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.skipped_lines, 2);
    }

    #[test]
    fn negative_counts_are_malformed() {
        let outcome = parse_species_data("A,-3\nB,3");
        assert_eq!(outcome.records, vec![Record::new("B", 3)]);
        assert_eq!(outcome.skipped_lines, 1);
    }

    #[test]
    fn input_order_is_preserved() {
        let outcome = parse_species_data("C,1\nA,2\nB,3");
        let names: Vec<&str> = outcome.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }
}
