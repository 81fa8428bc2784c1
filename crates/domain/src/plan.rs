use chrono::Weekday;

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Training recommendation for a day of the standard week.
#[must_use]
pub fn recommendation(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Easy 5K run + dynamic stretching",
        Weekday::Tue => "Rest day - focus on hip flexor stretches",
        Weekday::Wed => "Interval training - 6x400m with 90s rest",
        Weekday::Thu => "Cross-training: cycling or swimming",
        Weekday::Fri => "Recovery run 3K + foam rolling",
        Weekday::Sat => "Long run 10K at comfortable pace",
        Weekday::Sun => "Active recovery - yoga or light walk",
    }
}

#[must_use]
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// The plan from Monday to Sunday.
pub fn week() -> impl Iterator<Item = (Weekday, &'static str)> {
    WEEK.into_iter().map(|day| (day, recommendation(day)))
}
