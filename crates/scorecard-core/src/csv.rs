//! Minimal CSV encode/decode for the criteria source and the audit log.
//!
//! Fields containing a comma, quote, or newline are quoted with embedded
//! quotes doubled; the parser accepts quoted fields and CRLF line endings.

/// Encode one row, without a trailing newline.
pub fn encode_row(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|f| encode_field(f))
        .collect::<Vec<_>>()
        .join(",")
}

fn encode_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Parse CSV content into rows of fields. Blank lines are skipped.
pub fn parse(content: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut saw_field = false;

    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
            continue;
        }
        match c {
            '"' => {
                in_quotes = true;
                saw_field = true;
            }
            ',' => {
                row.push(std::mem::take(&mut field));
                saw_field = true;
            }
            '\r' => {}
            '\n' => {
                if saw_field || !field.is_empty() {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                saw_field = false;
            }
            _ => {
                field.push(c);
                saw_field = true;
            }
        }
    }
    if saw_field || !field.is_empty() {
        row.push(field);
        rows.push(row);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_plain_fields() {
        assert_eq!(encode_row(&["a", "b", "c"]), "a,b,c");
    }

    #[test]
    fn encode_quotes_special_fields() {
        assert_eq!(
            encode_row(&["hello, world", "say \"hi\""]),
            "\"hello, world\",\"say \"\"hi\"\"\""
        );
    }

    #[test]
    fn parse_simple_rows() {
        let rows = parse("a,b\nc,d\n");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn parse_quoted_fields() {
        let rows = parse("\"hello, world\",\"say \"\"hi\"\"\"\n");
        assert_eq!(rows, vec![vec!["hello, world", "say \"hi\""]]);
    }

    #[test]
    fn parse_preserves_empty_trailing_field() {
        let rows = parse("1,Question,Yes,No,\n");
        assert_eq!(rows[0].len(), 5);
        assert_eq!(rows[0][4], "");
    }

    #[test]
    fn parse_skips_blank_lines_and_crlf() {
        let rows = parse("a,b\r\n\r\nc,d");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn round_trip() {
        let fields = ["2026-01-05 10:30:00", "Smith, Jane", "Lee", "87.50%"];
        let encoded = encode_row(&fields);
        let rows = parse(&encoded);
        assert_eq!(rows[0], fields);
    }
}
