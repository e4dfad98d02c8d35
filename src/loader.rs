use crate::clock::parse_time;
use crate::club::Action;
use crate::config::ClubConfig;
use crate::discrete_system::{Event, Time};
use failure::Error;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// The first line which could not be understood, as it was read
#[derive(Debug, Fail, PartialEq)]
#[fail(display = "corrupted input at line {}: {:?}", line_number, line)]
pub struct LoadError {
    pub line_number: usize,
    pub line: String,
}

#[derive(Debug)]
pub struct Loaded {
    pub config: ClubConfig,
    pub actions: Vec<Event<Action>>,
}

struct Lines<'a> {
    inner: std::str::Lines<'a>,
    number: usize,
    last: &'a str,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Lines<'a> {
        Lines {
            inner: text.lines(),
            number: 0,
            last: "",
        }
    }

    fn advance(&mut self) -> Option<&'a str> {
        let line = self.inner.next()?;

        self.number += 1;
        self.last = line;

        Some(line)
    }

    /// Header lines are mandatory, running out of them blames the last line read
    fn header(&mut self) -> Result<&'a str, LoadError> {
        self.advance().ok_or_else(|| self.error())
    }

    fn error(&self) -> LoadError {
        LoadError {
            line_number: self.number,
            line: self.last.to_string(),
        }
    }
}

fn tokens(line: &str) -> Vec<&str> {
    line.split(' ').collect()
}

fn parse_positive(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    s.parse().ok().filter(|&value| value > 0)
}

fn single_positive(line: &str) -> Option<u32> {
    match tokens(line).as_slice() {
        [value] => parse_positive(value),
        _ => None,
    }
}

fn opening_hours(line: &str) -> Option<(Time, Time)> {
    match tokens(line).as_slice() {
        [open, close] => {
            let open = parse_time(open)?;
            let close = parse_time(close)?;

            if open <= close {
                Some((open, close))
            } else {
                None
            }
        }
        _ => None,
    }
}

pub fn is_client_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'-')
}

fn parse_action(line: &str, config: &ClubConfig, not_before: Time) -> Option<Event<Action>> {
    let tokens = tokens(line);

    if tokens.len() < 3 {
        return None;
    }

    let time = parse_time(tokens[0]).filter(|&time| time >= not_before)?;
    let kind = parse_positive(tokens[1]).filter(|kind| (1..=4).contains(kind))?;

    let expected_tokens = if kind == 2 { 4 } else { 3 };
    if tokens.len() != expected_tokens {
        return None;
    }

    let client = tokens[2];
    if !is_client_name(client) {
        return None;
    }
    let client = client.to_string();

    let action = match kind {
        1 => Action::Arrive { client },
        2 => {
            let table = parse_positive(tokens[3]).filter(|&table| table <= config.table_count)?;

            Action::Sit {
                client,
                table: (table - 1) as usize,
            }
        }
        3 => Action::Wait { client },
        _ => Action::Leave { client },
    };

    Some(Event::new(time, action))
}

/// Reads the whole input: table count, opening hours, hourly rate, then one action per line.
/// Stops at the first line that does not fit.
pub fn load(text: &str) -> Result<Loaded, LoadError> {
    let mut lines = Lines::new(text);

    let table_count = single_positive(lines.header()?).ok_or_else(|| lines.error())?;
    let (open_time, close_time) = opening_hours(lines.header()?).ok_or_else(|| lines.error())?;
    let hourly_rate = single_positive(lines.header()?).ok_or_else(|| lines.error())?;

    let config = ClubConfig {
        table_count,
        open_time,
        close_time,
        hourly_rate,
    };

    debug!(?config, "configuration loaded");

    let mut actions = Vec::new();
    let mut last_time = 0;

    while let Some(line) = lines.advance() {
        let action = parse_action(line, &config, last_time).ok_or_else(|| lines.error())?;

        last_time = action.time;
        actions.push(action);
    }

    info!(actions = actions.len(), "input loaded");

    Ok(Loaded { config, actions })
}

pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Loaded, Error> {
    let text = fs::read_to_string(path)?;

    Ok(load(&text)?)
}
