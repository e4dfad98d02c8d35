use crate::discrete_system::Time;
use serde::{Deserialize, Serialize};

/// Zero-based table index, printed one-based
pub type TableIndex = usize;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ClubConfig {
    pub table_count: u32, // Number of tables, always positive
    pub open_time: Time,  // Minutes since midnight
    pub close_time: Time, // Never before `open_time`
    pub hourly_rate: u32, // Price of every started hour
}

impl ClubConfig {
    pub fn is_open_at(&self, time: Time) -> bool {
        self.open_time <= time && time <= self.close_time
    }

    /// Every started hour is billed as a full one
    pub fn charge(&self, minutes: u32) -> u32 {
        (minutes + 59) / 60 * self.hourly_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ClubConfig {
        ClubConfig {
            table_count: 3,
            open_time: 9 * 60,
            close_time: 19 * 60,
            hourly_rate: 10,
        }
    }

    #[test]
    fn partial_hours_are_billed_in_full() {
        let config = config();

        assert_eq!(config.charge(0), 0);
        assert_eq!(config.charge(1), 10);
        assert_eq!(config.charge(60), 10);
        assert_eq!(config.charge(61), 20);
        assert_eq!(config.charge(600), 100);
    }

    #[test]
    fn opening_hours_are_inclusive() {
        let config = config();

        assert!(!config.is_open_at(9 * 60 - 1));
        assert!(config.is_open_at(9 * 60));
        assert!(config.is_open_at(19 * 60));
        assert!(!config.is_open_at(19 * 60 + 1));
    }
}
