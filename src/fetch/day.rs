use std::fmt;
use std::path::{Path, PathBuf};

use crate::consts::LAST_DAY;
use crate::error::AppError;

/// Puzzle day in `1..=25`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Day(u8);

impl Day {
    pub(crate) fn new(day: u8) -> Result<Self, AppError> {
        if (1..=LAST_DAY).contains(&day) {
            Ok(Self(day))
        } else {
            Err(AppError::InvalidDay { input: day })
        }
    }

    /// Every day of an event, ascending
    pub(crate) fn all() -> impl Iterator<Item = Day> {
        (1..=LAST_DAY).map(Day)
    }

    pub(crate) fn number(self) -> u8 {
        self.0
    }

    pub(crate) fn file_name(self) -> String {
        format!("day_{:02}.txt", self.0)
    }

    pub(crate) fn input_path(self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_event_range() {
        assert_eq!(Day::new(1).unwrap().number(), 1);
        assert_eq!(Day::new(25).unwrap().number(), 25);
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert!(matches!(Day::new(0), Err(AppError::InvalidDay { input: 0 })));
        assert!(matches!(Day::new(26), Err(AppError::InvalidDay { input: 26 })));
    }

    #[test]
    fn all_stops_at_25() {
        let days: Vec<u8> = Day::all().map(Day::number).collect();
        assert_eq!(days.len(), 25);
        assert_eq!(days.first(), Some(&1));
        assert_eq!(days.last(), Some(&25));
        assert!(days.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn file_name_is_zero_padded() {
        assert_eq!(Day::new(3).unwrap().file_name(), "day_03.txt");
        assert_eq!(Day::new(17).unwrap().file_name(), "day_17.txt");
        assert_eq!(
            Day::new(9).unwrap().input_path(Path::new("input")),
            PathBuf::from("input").join("day_09.txt")
        );
    }
}
