use crate::discrete_system::Time;

/// Parses strict `HH:MM` (24h clock) into minutes since midnight
pub fn parse_time(s: &str) -> Option<Time> {
    let bytes = s.as_bytes();

    if bytes.len() != 5 || bytes[2] != b':' {
        return None;
    }

    let hour = parse_two_digits(&bytes[0..2])?;
    let minute = parse_two_digits(&bytes[3..5])?;

    if hour > 23 || minute > 59 {
        return None;
    }

    Some(hour * 60 + minute)
}

fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    bytes.iter().try_fold(0, |acc, &b| {
        if b.is_ascii_digit() {
            Some(acc * 10 + u32::from(b - b'0'))
        } else {
            None
        }
    })
}

/// Formats minutes as `HH:MM`. Hours are never clamped, so durations longer than
/// a day still print (e.g. `100:05`).
pub fn format_time(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
