use chrono::{Duration, NaiveDate};
use riseset::{solve_sunrise_sunset, SolarError, SolarQuery};

fn main() {
    // San Francisco, one week around the 2021 summer solstice (PDT).
    let start = NaiveDate::from_ymd_opt(2021, 6, 18).unwrap();

    for offset in 0..7 {
        let date = start + Duration::days(offset);
        let query = SolarQuery::new(37.7749, 122.4194, 7.0, date);

        match solve_sunrise_sunset(&query) {
            Ok(day) => println!(
                "{date}  sunrise {}  sunset {}",
                day.sunrise.time(),
                day.sunset.time()
            ),
            Err(SolarError::Circumpolar(polar)) => println!("{date}  circumpolar ({polar:?})"),
            Err(err) => println!("{date}  error: {err}"),
        }
    }
}
