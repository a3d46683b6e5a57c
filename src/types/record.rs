//! Meal record types and the fixed calendar/bucket enums.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Wire prefix for tally counter fields (`contador_cafe`, `contador_yogur`, ...).
pub const TALLY_PREFIX: &str = "contador_";

/// Day of the week, in the dataset's fixed label set.
///
/// Iteration order (`Weekday::ALL`) is the canonical tie-break order for
/// favorite-day selection: an earlier day keeps the lead over a later day
/// with an equal count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    /// Lunes.
    #[serde(rename = "Lunes")]
    Monday,
    /// Martes.
    #[serde(rename = "Martes")]
    Tuesday,
    /// Miércoles.
    #[serde(rename = "Miércoles")]
    Wednesday,
    /// Jueves.
    #[serde(rename = "Jueves")]
    Thursday,
    /// Viernes.
    #[serde(rename = "Viernes")]
    Friday,
    /// Sábado.
    #[serde(rename = "Sábado")]
    Saturday,
    /// Domingo.
    #[serde(rename = "Domingo")]
    Sunday,
}

impl Weekday {
    /// All weekdays in canonical (Monday-first) order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Fixed-locale display label.
    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Monday => "Lunes",
            Weekday::Tuesday => "Martes",
            Weekday::Wednesday => "Miércoles",
            Weekday::Thursday => "Jueves",
            Weekday::Friday => "Viernes",
            Weekday::Saturday => "Sábado",
            Weekday::Sunday => "Domingo",
        }
    }

    /// Position in `ALL` (0 = Monday).
    pub fn index(&self) -> usize {
        Weekday::ALL.iter().position(|d| d == self).unwrap_or(0)
    }

    /// Whether this is a weekend day.
    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Calendar month, in the dataset's fixed label set.
///
/// `Month::ALL` is the canonical tie-break order for the most-active-month
/// selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    /// Enero.
    #[serde(rename = "Enero")]
    January,
    /// Febrero.
    #[serde(rename = "Febrero")]
    February,
    /// Marzo.
    #[serde(rename = "Marzo")]
    March,
    /// Abril.
    #[serde(rename = "Abril")]
    April,
    /// Mayo.
    #[serde(rename = "Mayo")]
    May,
    /// Junio.
    #[serde(rename = "Junio")]
    June,
    /// Julio.
    #[serde(rename = "Julio")]
    July,
    /// Agosto.
    #[serde(rename = "Agosto")]
    August,
    /// Septiembre.
    #[serde(rename = "Septiembre")]
    September,
    /// Octubre.
    #[serde(rename = "Octubre")]
    October,
    /// Noviembre.
    #[serde(rename = "Noviembre")]
    November,
    /// Diciembre.
    #[serde(rename = "Diciembre")]
    December,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Fixed-locale display label.
    pub fn label(&self) -> &'static str {
        match self {
            Month::January => "Enero",
            Month::February => "Febrero",
            Month::March => "Marzo",
            Month::April => "Abril",
            Month::May => "Mayo",
            Month::June => "Junio",
            Month::July => "Julio",
            Month::August => "Agosto",
            Month::September => "Septiembre",
            Month::October => "Octubre",
            Month::November => "Noviembre",
            Month::December => "Diciembre",
        }
    }

    /// Position in `ALL` (0 = January).
    pub fn index(&self) -> usize {
        Month::ALL.iter().position(|m| m == self).unwrap_or(0)
    }

    /// Month from a 1-based calendar number, if in range.
    pub fn from_number(n: u32) -> Option<Self> {
        Month::ALL.get(n.checked_sub(1)? as usize).copied()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Six-hour slice of the day a primary meal falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimeBucket {
    /// 00:00–05:59.
    SmallHours,
    /// 06:00–11:59.
    Morning,
    /// 12:00–17:59.
    Afternoon,
    /// 18:00–23:59.
    Evening,
}

impl TimeBucket {
    /// All buckets in day order; canonical tie-break order for the favorite
    /// time-bucket selection.
    pub const ALL: [TimeBucket; 4] = [
        TimeBucket::SmallHours,
        TimeBucket::Morning,
        TimeBucket::Afternoon,
        TimeBucket::Evening,
    ];

    /// Bucket containing the given hour of day (0..24).
    pub fn for_hour(hour: u32) -> Self {
        match hour {
            0..=5 => TimeBucket::SmallHours,
            6..=11 => TimeBucket::Morning,
            12..=17 => TimeBucket::Afternoon,
            _ => TimeBucket::Evening,
        }
    }

    /// Fixed-locale display label.
    pub fn label(&self) -> &'static str {
        match self {
            TimeBucket::SmallHours => "Madrugada (00-06h)",
            TimeBucket::Morning => "Mañana (06-12h)",
            TimeBucket::Afternoon => "Tarde (12-18h)",
            TimeBucket::Evening => "Noche (18-24h)",
        }
    }

    /// Position in `ALL`.
    pub fn index(&self) -> usize {
        TimeBucket::ALL.iter().position(|b| b == self).unwrap_or(0)
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One logged meal event. Immutable after ingestion.
///
/// A real-world meal occasion may span several records: the record with
/// `meal_index == 1` is the canonical one-per-occasion representative used by
/// distributional statistics, while records with `meal_index > 1` are
/// secondary items logged under the same occasion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRecord {
    /// Owning user identity; stable and non-empty.
    #[serde(rename = "usuario")]
    pub user: String,
    /// Free-text label of what was eaten.
    #[serde(rename = "plato")]
    pub dish: String,
    /// Calendar date of the meal.
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    /// Full timestamp; chronological ordering key.
    #[serde(rename = "fecha_hora")]
    pub date_time: NaiveDateTime,
    /// Time of day, provided redundantly; must agree with `date_time`.
    #[serde(rename = "hora")]
    pub time: NaiveTime,
    /// Day-of-week label; must agree with `date`.
    #[serde(rename = "dia_semana")]
    pub weekday: Weekday,
    /// Month label; must agree with `date`.
    #[serde(rename = "mes")]
    pub month: Month,
    /// 1-based position of this item within its meal occasion.
    #[serde(rename = "n_plato_dia")]
    pub meal_index: u32,
    /// Tally counters (`contador_*` wire keys): sub-item counts per tagged
    /// category within this record.
    #[serde(flatten)]
    pub tallies: BTreeMap<String, u32>,
}

impl MealRecord {
    /// Whether this record is the primary/complete representative of its
    /// meal occasion.
    pub fn is_primary(&self) -> bool {
        self.meal_index == 1
    }

    /// Hour of day (0..24) from the full timestamp.
    pub fn hour(&self) -> u32 {
        self.date_time.hour()
    }

    /// Time bucket this record falls into.
    pub fn bucket(&self) -> TimeBucket {
        TimeBucket::for_hour(self.hour())
    }

    /// Check internal consistency. Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), String> {
        if self.user.trim().is_empty() {
            return Err("empty user".to_string());
        }
        if self.dish.trim().is_empty() {
            return Err("empty dish".to_string());
        }
        if self.meal_index == 0 {
            return Err("meal_index must be >= 1".to_string());
        }
        if self.date_time.date() != self.date {
            return Err(format!(
                "date {} disagrees with timestamp {}",
                self.date, self.date_time
            ));
        }
        if self.date_time.time() != self.time {
            return Err(format!(
                "time {} disagrees with timestamp {}",
                self.time, self.date_time
            ));
        }
        if Weekday::from(self.date.weekday()) != self.weekday {
            return Err(format!(
                "weekday {} disagrees with date {}",
                self.weekday, self.date
            ));
        }
        if Month::from_number(self.date.month()) != Some(self.month) {
            return Err(format!(
                "month {} disagrees with date {}",
                self.month, self.date
            ));
        }
        Ok(())
    }

    /// Tally counters with the wire prefix stripped, in sorted name order.
    pub fn tally_entries(&self) -> impl Iterator<Item = (&str, u32)> {
        self.tallies.iter().map(|(key, count)| {
            (key.strip_prefix(TALLY_PREFIX).unwrap_or(key), *count)
        })
    }
}
