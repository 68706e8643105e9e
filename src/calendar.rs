//! Day-of-week classification.

use chrono::{Datelike, Local};

use crate::domain::{Day, DayType};

/// Saturday and Sunday are weekend days; everything else is a weekday.
pub fn day_type(day: Day) -> DayType {
    match day {
        Day::Saturday | Day::Sunday => DayType::Weekend,
        Day::Monday | Day::Tuesday | Day::Wednesday | Day::Thursday | Day::Friday => DayType::Weekday,
    }
}

/// Today's day in the local timezone.
pub fn today() -> Day {
    Day::from(Local::now().weekday())
}
