use crate::config::ClubConfig;
use crate::discrete_system::Time;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Occupancy {
    client: String,
    since: Time,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    occupancy: Option<Occupancy>,
    pub occupied_minutes: u32,
    pub revenue: u32,
}

impl Table {
    pub fn new() -> Table {
        Table::default()
    }

    pub fn is_free(&self) -> bool {
        self.occupancy.is_none()
    }

    pub fn occupant(&self) -> Option<&str> {
        self.occupancy.as_ref().map(|occupancy| occupancy.client.as_str())
    }

    pub fn occupied_since(&self) -> Option<Time> {
        self.occupancy.as_ref().map(|occupancy| occupancy.since)
    }

    pub fn occupy(&mut self, client: String, time: Time) {
        debug_assert!(self.is_free(), "table is already occupied");

        self.occupancy = Some(Occupancy {
            client,
            since: time,
        });
    }

    /// Ends the current occupancy and bills it. Returns who was sitting here.
    pub fn vacate(&mut self, time: Time, config: &ClubConfig) -> Option<String> {
        let occupancy = self.occupancy.take()?;
        let minutes = time - occupancy.since;

        self.occupied_minutes += minutes;
        self.revenue += config.charge(minutes);

        Some(occupancy.client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ClubConfig {
        ClubConfig {
            table_count: 1,
            open_time: 0,
            close_time: 1439,
            hourly_rate: 10,
        }
    }

    #[test]
    fn each_occupancy_is_billed_separately() {
        let config = config();
        let mut table = Table::new();

        table.occupy("a".to_string(), 60);
        assert_eq!(table.occupied_since(), Some(60));
        assert_eq!(table.vacate(90, &config), Some("a".to_string()));

        table.occupy("b".to_string(), 90);
        assert_eq!(table.vacate(120, &config), Some("b".to_string()));

        assert!(table.is_free());
        assert_eq!(table.occupied_minutes, 60);
        assert_eq!(table.revenue, 20);
    }

    #[test]
    fn vacating_a_free_table_changes_nothing() {
        let mut table = Table::new();

        assert_eq!(table.vacate(100, &config()), None);
        assert_eq!(table, Table::new());
    }
}
