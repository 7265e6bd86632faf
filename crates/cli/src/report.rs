// Output formatting for the seeder

use serde::Serialize;

use crate::seed::SeedSummary;
use crate::style;

#[derive(Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Self {
        match s {
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            _ => OutputFormat::Text,
        }
    }

    pub fn print_value<T: Serialize>(&self, value: &T) {
        match self {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(value).unwrap());
            }
            OutputFormat::Yaml => {
                println!("{}", serde_yaml::to_string(value).unwrap());
            }
            OutputFormat::Text => {
                // Text format renders the summary table instead
            }
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, OutputFormat::Text)
    }
}

pub const TABLE_HEADERS: [&str; 3] = ["Resource", "ID", "Details"];

/// One row per created resource; vote options are listed under their
/// template.
pub fn build_rows(summary: &SeedSummary) -> Vec<[String; 3]> {
    let mut rows = Vec::new();

    rows.push([
        "User".to_string(),
        summary.username.clone(),
        "Registered successfully".to_string(),
    ]);
    rows.push([
        "Room".to_string(),
        summary.room.id.clone(),
        summary.room.name.clone(),
    ]);
    rows.push([
        "Slide".to_string(),
        summary.slide.id.clone(),
        summary.slide.name.clone(),
    ]);

    for page in &summary.pages {
        rows.push([
            page.name.clone(),
            page.id.clone(),
            "Created successfully".to_string(),
        ]);
    }

    for (i, vote) in summary.votes.iter().enumerate() {
        rows.push([
            format!("Vote Template {}", i + 1),
            vote.id.clone(),
            format!("Title: {} / Q: {}", vote.title, vote.question),
        ]);
        for (j, option_id) in vote.option_ids.iter().enumerate() {
            rows.push([
                format!("Vote Option {}-{}", i + 1, j + 1),
                option_id.clone(),
                format!("Linked to Template {}", i + 1),
            ]);
        }
    }

    rows.push([
        "Session".to_string(),
        summary.session_id.clone(),
        "Started successfully".to_string(),
    ]);
    rows.push([
        "Agent OTP".to_string(),
        summary.otps.agent.clone(),
        "Issued successfully".to_string(),
    ]);
    rows.push([
        "Audience OTP".to_string(),
        summary.otps.audience.clone(),
        "Issued successfully".to_string(),
    ]);
    rows.push([
        "Presenter OTP".to_string(),
        summary.otps.presenter.clone(),
        "Issued successfully".to_string(),
    ]);

    for verified in &summary.verifications {
        let label = match verified.role.as_str() {
            "agent" => "Agent Join",
            "audience" => "Audience Join",
            "presenter" => "Presenter Join",
            other => other,
        };
        rows.push([
            label.to_string(),
            verified.session_id.clone(),
            format!("Aggregator: {}", verified.aggregator_url),
        ]);
    }

    rows
}

/// Render rows as a bordered table; column widths fit the widest cell.
pub fn render_table(headers: &[&str; 3], rows: &[[String; 3]]) -> String {
    let mut widths = [0usize; 3];
    for (i, header) in headers.iter().enumerate() {
        widths[i] = header.len();
    }
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut border = String::from("+");
    for width in widths {
        border.push('-');
        border.push_str(&"-".repeat(width));
        border.push_str("-+");
    }

    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    out.push_str(&format_row([headers[0], headers[1], headers[2]], widths));
    out.push('\n');
    out.push_str(&border);
    out.push('\n');
    for row in rows {
        out.push_str(&format_row(
            [row[0].as_str(), row[1].as_str(), row[2].as_str()],
            widths,
        ));
        out.push('\n');
    }
    out.push_str(&border);
    out
}

fn format_row(cells: [&str; 3], widths: [usize; 3]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        line.push_str(&format!(" {:<width$} |", cell, width = width));
    }
    line
}

pub fn print_summary(summary: &SeedSummary, output: OutputFormat, quiet: bool) {
    if !output.is_text() {
        output.print_value(summary);
        return;
    }

    let rows = build_rows(summary);
    let table = render_table(&TABLE_HEADERS, &rows);
    for line in table.lines() {
        println!("{}{}{}", style::CYAN, line, style::RESET);
    }

    if !quiet {
        println!(
            "{}All resources created and OTPs issued successfully.{}",
            style::GREEN,
            style::RESET
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{CreatedResource, OtpSet, VerifiedRole, VoteSummary};

    fn sample_summary() -> SeedSummary {
        SeedSummary {
            username: "alice".to_string(),
            room: CreatedResource {
                id: "r1".to_string(),
                name: "demo-room".to_string(),
            },
            slide: CreatedResource {
                id: "s1".to_string(),
                name: "demo-slide".to_string(),
            },
            pages: vec![
                CreatedResource {
                    id: "p1".to_string(),
                    name: "Page 1".to_string(),
                },
                CreatedResource {
                    id: "p2".to_string(),
                    name: "Page 2".to_string(),
                },
            ],
            votes: vec![VoteSummary {
                id: "vt1".to_string(),
                title: "Vote 1".to_string(),
                question: "First?".to_string(),
                option_ids: vec!["o1".to_string(), "o2".to_string()],
            }],
            session_id: "sess-1".to_string(),
            otps: OtpSet {
                agent: "111111".to_string(),
                audience: "222222".to_string(),
                presenter: "333333".to_string(),
            },
            verifications: vec![],
        }
    }

    #[test]
    fn one_row_per_created_resource() {
        let summary = sample_summary();
        let rows = build_rows(&summary);

        // user + room + slide + 2 pages + 1 template + 2 options + session + 3 OTPs
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0], ["User", "alice", "Registered successfully"]);
        assert_eq!(rows[3], ["Page 1", "p1", "Created successfully"]);
        assert_eq!(
            rows[5],
            ["Vote Template 1", "vt1", "Title: Vote 1 / Q: First?"]
        );
        assert_eq!(rows[6], ["Vote Option 1-1", "o1", "Linked to Template 1"]);
        assert_eq!(rows[9], ["Agent OTP", "111111", "Issued successfully"]);
    }

    #[test]
    fn verification_rows_follow_otps() {
        let mut summary = sample_summary();
        summary.verifications.push(VerifiedRole {
            role: "agent".to_string(),
            session_id: "sess-1".to_string(),
            aggregator_url: "ws://aggregator.local".to_string(),
        });

        let rows = build_rows(&summary);
        let last = rows.last().unwrap();
        assert_eq!(last[0], "Agent Join");
        assert_eq!(last[2], "Aggregator: ws://aggregator.local");
    }

    #[test]
    fn table_columns_align_to_widest_cell() {
        let rows = vec![
            ["Room".to_string(), "r1".to_string(), "demo".to_string()],
            [
                "Session".to_string(),
                "a-much-longer-id".to_string(),
                "x".to_string(),
            ],
        ];
        let table = render_table(&TABLE_HEADERS, &rows);
        let lines: Vec<&str> = table.lines().collect();

        // border, header, border, two rows, border
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("+-"));
        assert!(lines[0].ends_with("-+"));
        // every line is the same width
        assert!(lines.iter().all(|line| line.len() == lines[0].len()));
        assert!(lines[1].contains("| Resource "));
        assert!(lines[4].contains("| a-much-longer-id "));
    }
}
