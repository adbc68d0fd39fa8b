//! Current date and time label shown in the page header

use chrono::{DateTime, Datelike, TimeZone, Timelike};

use crate::types::Language;

const HINDI_WEEKDAYS: [&str; 7] = [
    "रविवार",
    "सोमवार",
    "मंगलवार",
    "बुधवार",
    "गुरुवार",
    "शुक्रवार",
    "शनिवार",
];

const HINDI_MONTHS: [&str; 12] = [
    "जनवरी",
    "फ़रवरी",
    "मार्च",
    "अप्रैल",
    "मई",
    "जून",
    "जुलाई",
    "अगस्त",
    "सितंबर",
    "अक्तूबर",
    "नवंबर",
    "दिसंबर",
];

/// Long weekday, date and 12-hour clock time in the reader's language.
///
/// English reads `Monday, January 15, 2024 at 10:30 AM`, Hindi reads
/// `सोमवार, 15 जनवरी 2024, 10:30 am`.
pub fn format_current_time<Tz>(now: &DateTime<Tz>, language: Language) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match language {
        Language::English => now.format("%A, %B %-d, %Y at %I:%M %p").to_string(),
        Language::Hindi => {
            let weekday = HINDI_WEEKDAYS[now.weekday().num_days_from_sunday() as usize];
            let month = HINDI_MONTHS[now.month0() as usize];
            let (is_pm, hour) = now.hour12();
            format!(
                "{}, {} {} {}, {:02}:{:02} {}",
                weekday,
                now.day(),
                month,
                now.year(),
                hour,
                now.minute(),
                if is_pm { "pm" } else { "am" }
            )
        }
    }
}
