//! Alert message construction.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::ChangeRecord;
use crate::notify::MailCredentials;

/// A plain-text email ready for display or dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertMessage {
    pub subject: String,
    pub from: String,
    pub to: String,
    pub body: String,
}

impl fmt::Display for AlertMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Subject: {}", self.subject)?;
        writeln!(f, "From: {}", self.from)?;
        writeln!(f, "To: {}", self.to)?;
        writeln!(f, "Content-Type: text/plain; charset=utf-8")?;
        writeln!(f)?;
        write!(f, "{}", self.body)
    }
}

/// Subject line with the count of changed companies.
pub fn subject_line(company_count: usize) -> String {
    let noun = if company_count == 1 {
        "company"
    } else {
        "companies"
    };
    format!("Portfolio IR updates ({company_count} {noun})")
}

/// Render the message body for the given changes, stamped with `now`.
pub fn render_body(changes: &[ChangeRecord], now: DateTime<Utc>) -> String {
    let mut lines = vec![
        format!(
            "Portfolio news monitor detected updates at {}.",
            now.format("%Y-%m-%d %H:%M UTC")
        ),
        String::new(),
    ];

    for change in changes {
        lines.push(format!("{} ({})", change.name, change.ticker));
        lines.push(format!("Investor page: {}", change.ir_url));

        if !change.added.is_empty() {
            lines.push("  New links:".to_string());
            for link in &change.added {
                lines.push(format!("    + {}", link.format_line()));
            }
        }

        if !change.removed.is_empty() {
            lines.push("  Removed links:".to_string());
            for link in &change.removed {
                lines.push(format!("    - {}", link.format_line()));
            }
        }

        lines.push(String::new());
    }

    format!("{}\n", lines.join("\n").trim())
}

/// Build the alert for `changes`, addressed per `credentials`.
///
/// Requires the sender identity even when the message is only displayed.
pub fn build_alert(
    changes: &[ChangeRecord],
    credentials: &MailCredentials,
    now: DateTime<Utc>,
) -> Result<AlertMessage> {
    let from = credentials.sender()?.to_string();
    let to = credentials.recipient()?.to_string();

    Ok(AlertMessage {
        subject: subject_line(changes.len()),
        from,
        to,
        body: render_body(changes, now),
    })
}
