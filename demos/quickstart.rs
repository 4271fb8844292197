use chrono::Utc;
use saju_temporal::{
    compute_pillars, BirthInput, CalendarMoment, Direction, JulianDay, LunarSolarConverter,
    SajuConfig, SolarDate,
};

fn main() -> saju_temporal::Result<()> {
    let now = JulianDay::from_utc(Utc::now());
    println!("JD(UT): {now}");
    println!("ΔT: {}", now.delta_t());

    let civil = CalendarMoment::from_ymd_hm(2024, 2, 10, 12, 0)?;
    let input = BirthInput::new(civil, "Asia/Seoul", 37.5665, 126.978);
    let result = compute_pillars(&input, &SajuConfig::default())?;
    println!("pillars: {}", result.pillars);
    println!("solar time: {}", result.solar_time.adjusted);
    println!("LMT correction: {}", result.longitude_correction_minutes);
    println!("month opened by {} ({})", result.month_boundary, result.boundary_mode);

    let daeun = result.daeun_start(Direction::Forward)?;
    println!(
        "daeun: {} years {} months (number {})",
        daeun.start_years, daeun.start_months, daeun.traditional_start_age
    );

    let converter = LunarSolarConverter::new();
    let lunar = converter.solar_to_lunar(&SolarDate::new(2023, 3, 22)?)?;
    println!("2023-03-22 is lunar {lunar}");
    println!("and back: {}", converter.lunar_to_solar(&lunar)?);
    Ok(())
}
