use crate::log::row::LogRecord;
use anyhow::{Context, bail};
use regex::Regex;
use std::fs;

/// Parse a checkpoint timing log into a record per line.
///
/// Expected line shape:
/// TAG|key1:value1,key2:value2,...
///
/// Only the tag and the first pair's value are consumed; the value must
/// be a float. Anything after a second `|` is ignored, as are the
/// remaining comma fields.
///
/// Example:
/// WRITE3|duration:12.5,extra:foo
pub fn parse_log_file(path: &str) -> anyhow::Result<Vec<LogRecord>> {
    let text = fs::read_to_string(path).with_context(|| format!("read log file {}", path))?;
    parse_log_text(&text, path)
}

fn parse_log_text(text: &str, path: &str) -> anyhow::Result<Vec<LogRecord>> {
    // Capture:
    // 1) tag: everything before the first '|'
    // 2) first field: up to the first ',' (or a stray second '|')
    let re = Regex::new(r#"^([^|]*)\|([^,|]*)"#)?;

    let mut out = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let lno = lineno + 1;
        let line = line.trim();

        let caps = match re.captures(line) {
            Some(c) => c,
            None => {
                bail!(
                    "log format error at {}:{}: no '|' delimiter in line: {:?}",
                    path,
                    lno,
                    line
                );
            }
        };

        let tag = caps.get(1).unwrap().as_str().to_string();
        let first_field = caps.get(2).unwrap().as_str();

        // Second ':' part of the first field carries the number.
        let raw = match first_field.splitn(3, ':').nth(1) {
            Some(v) => v,
            None => {
                bail!(
                    "log format error at {}:{}: first field {:?} has no ':' pair",
                    path,
                    lno,
                    first_field
                );
            }
        };

        let value: f64 = raw
            .trim()
            .parse()
            .with_context(|| format!("bad numeric value at {}:{}: {:?}", path, lno, raw))?;

        out.push(LogRecord { tag, value });
    }

    Ok(out)
}
