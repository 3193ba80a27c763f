use std::path::Path;

use comfy_table::{presets::UTF8_FULL, Table};
use libissuedeck_core::{DeckError, Issue, LineSegment};
use serde::Serialize;

use crate::commands::load_attributes;
use crate::output::OutputMode;

#[derive(Serialize)]
struct LocationsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    segments: Vec<LineSegment>,
}

pub fn run(out: OutputMode, file: Option<&Path>) -> Result<(), DeckError> {
    let issue = Issue::detached(load_attributes(file)?);
    let segments = issue.linear_locations();

    if out.is_json() {
        out.success(&LocationsOutput {
            key: issue.key().map(str::to_string),
            segments,
        });
        return Ok(());
    }

    if segments.is_empty() {
        out.human("no text range");
        return Ok(());
    }
    out.human(&render_table(&segments).to_string());
    Ok(())
}

fn render_table(segments: &[LineSegment]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["line", "from", "to"]);
    for segment in segments {
        let to = if segment.is_open_ended() {
            "end of line".to_string()
        } else {
            segment.to.to_string()
        };
        table.add_row(vec![segment.line.to_string(), segment.from.to_string(), to]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use libissuedeck_core::UNBOUNDED_COLUMN;

    #[test]
    fn test_render_table_marks_open_ended() {
        let table = render_table(&[
            LineSegment::new(2, 5, UNBOUNDED_COLUMN),
            LineSegment::new(3, 0, 10),
        ])
        .to_string();
        assert!(table.contains("end of line"));
        assert!(table.contains("10"));
        assert!(!table.contains("999999"));
    }
}
