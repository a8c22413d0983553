#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod driver;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod semantics;

extern crate regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub usize, pub Rc<String>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing a byte offset.
///
/// Returns the 1-based line number, the line text and the offset of the
/// position within that line. Offsets past the end of the source (the
/// end-of-input token) resolve to the end of the last line.
pub fn get_line_at_position(source: &str, pos: usize) -> (usize, String, usize) {

    let mut start = 0;
    let mut line_number = 1;
    let mut last = (1, String::new(), 0);

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return (line_number, line.to_string(), line_pos);
        }

        last = (
            line_number,
            line.to_string(),
            line.trim_end_matches(['\n', '\r']).len(),
        );
        start = end;
        line_number += 1;
    }

    last
}

/// Renders one diagnostic with a caret under the offending column.
pub fn render_diagnostic(error: &Error, source: &str) -> String {
    /*
        Semantic error: TypeConflict (cannot combine `INTEGER` with `REAL`)
        -> prog.txt:3:11
           |
         3 | x = 1 + 2.0
           | ------^
    */

    let position = error.get_position();
    let mut output = String::new();

    if let ErrorTip::None = error.get_tip() {
        output.push_str(&format!(
            "{}: {}\n",
            error.get_category(),
            error.get_error_name()
        ));
    } else {
        output.push_str(&format!(
            "{}: {} ({})\n",
            error.get_category(),
            error.get_error_name(),
            error.get_tip()
        ));
    }
    output.push_str(&render_snippet(position, source));

    if let Some(original) = error.get_related_position() {
        output.push_str("note: first declared here\n");
        output.push_str(&render_snippet(original, source));
    }

    output
}

fn render_snippet(position: &Position, source: &str) -> String {
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    let mut output = format!("-> {}:{}:{}\n", position.1, line, line_pos + 1);
    output.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    output.push_str(&format!("{} | {}\n", line_str, line_text_removed.trim()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    output
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    const SOURCE: &str = "Hello, world!\nfoo\n  Testing { }\n";

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 10);
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 28);
        assert_eq!(line_number, 3);
        assert_eq!(line, "  Testing { }\n");
        assert_eq!(line_pos, 10);
    }

    #[test]
    fn test_get_line_past_end_of_source() {
        let (line_number, line, line_pos) =
            super::get_line_at_position(SOURCE, SOURCE.len());
        assert_eq!(line_number, 3);
        assert_eq!(line, "  Testing { }\n");
        assert_eq!(line_pos, 13);
    }

    #[test]
    fn test_get_line_of_empty_source() {
        assert_eq!(super::get_line_at_position("", 0), (1, String::new(), 0));
    }

    #[test]
    fn test_render_diagnostic_points_at_column() {
        let source = "PROGRAM p WITH x AS INTEGER IN\n    y = 5\nEND";
        let error = Error::new(
            ErrorImpl::VariableNotDeclared {
                variable: "y".to_string(),
            },
            Position(35, Rc::new("test.prog".to_string())),
        );

        let rendered = super::render_diagnostic(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(
            lines[0],
            "Semantic error: VariableNotDeclared (Variable `y` has not been declared)"
        );
        assert_eq!(lines[1], "-> test.prog:2:5");
        assert_eq!(lines[3], "2 | y = 5");
        assert_eq!(lines[4], "  | ^");
    }
}
