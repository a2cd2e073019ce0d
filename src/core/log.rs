use crate::config::Config;
use crate::errors::AppResult;
use crate::store::audit::load_audit;
use ansi_term::Colour;

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// ANSI color per audited operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "clock_in" => Colour::Green,
        "clock_out" => Colour::Red,
        "force_out" | "force_out_all" => Colour::Purple,
        "backup" => Colour::Blue,
        "export" => Colour::Yellow,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(cfg: &Config) -> AppResult<()> {
        let entries = load_audit(&cfg.audit_log)?;

        if entries.is_empty() {
            println!("📜 Audit log is empty.");
            return Ok(());
        }

        // op (target) in a single column, capped at 60 visible chars
        let op_w = entries
            .iter()
            .map(|e| {
                if e.target.is_empty() {
                    e.operation.len()
                } else {
                    e.operation.len() + e.target.len() + 3
                }
            })
            .max()
            .unwrap_or(10)
            .min(60);

        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(0);

        println!("📜 Audit log:\n");

        for entry in entries {
            let color = color_for_operation(&entry.operation);

            let op_target = if entry.target.is_empty() {
                entry.operation.clone()
            } else {
                format!("{} ({})", entry.operation, entry.target)
            };

            let truncated = if op_target.len() > 60 {
                let mut s = op_target.chars().take(57).collect::<String>();
                s.push_str("...");
                s
            } else {
                op_target
            };

            // only the operation word stays colored
            let colored = if let Some((op_word, rest)) = truncated.split_once(' ') {
                format!("{} {}", color.paint(op_word), rest)
            } else {
                color.paint(truncated.as_str()).to_string()
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).len()));

            println!(
                "{:<date_w$} | {}{} => {}",
                entry.date,
                colored,
                padding,
                entry.message,
                date_w = date_w
            );
        }

        Ok(())
    }
}
