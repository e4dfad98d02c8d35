use crate::clock::format_time;
use crate::club::{self, Club};
use crate::discrete_system::{self, Time};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSummary {
    pub number: usize,
    pub revenue: u32,
    pub occupied_minutes: u32,
}

impl fmt::Display for TableSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.number,
            self.revenue,
            format_time(self.occupied_minutes)
        )
    }
}

/// The printed outcome of a day:
/// opening time, the log line by line, closing time, one line per table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayReport {
    pub opens_at: Time,
    pub closes_at: Time,
    pub events: Vec<discrete_system::Event<club::Event>>,
    pub tables: Vec<TableSummary>,
}

impl DayReport {
    pub fn new(club: &Club, events: Vec<discrete_system::Event<club::Event>>) -> DayReport {
        DayReport {
            opens_at: club.config.open_time,
            closes_at: club.config.close_time,
            events,
            tables: club.summary(),
        }
    }
}

impl fmt::Display for DayReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", format_time(self.opens_at))?;

        for event in self.events.iter() {
            writeln!(f, "{} {}", format_time(event.time), event.message)?;
        }

        writeln!(f, "{}", format_time(self.closes_at))?;

        for table in self.tables.iter() {
            writeln!(f, "{}", table)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{Event, Reason};

    #[test]
    fn prints_all_sections_in_order() {
        let report = DayReport {
            opens_at: 9 * 60,
            closes_at: 19 * 60,
            events: vec![
                discrete_system::Event::new(
                    9 * 60 + 5,
                    Event::Arrived {
                        client: "client1".to_string(),
                    },
                ),
                discrete_system::Event::new(9 * 60 + 5, Event::Rejected(Reason::NotOpenYet)),
            ],
            tables: vec![
                TableSummary {
                    number: 1,
                    revenue: 70,
                    occupied_minutes: 5 * 60 + 58,
                },
                TableSummary {
                    number: 2,
                    revenue: 0,
                    occupied_minutes: 0,
                },
            ],
        };

        assert_eq!(
            report.to_string(),
            "09:00\n09:05 1 client1\n09:05 13 NotOpenYet\n19:00\n1 70 05:58\n2 0 00:00\n"
        );
    }
}
