use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// =============================================================
// reference instant + IST card
// =============================================================

#[test]
fn reference_instant_subtracts_ist_offset() {
    let instant = reference_instant(date(2025, 1, 15), 9 * 60 + 30);
    assert_eq!(instant.to_rfc3339(), "2025-01-15T04:00:00+00:00");
}

#[test]
fn reference_instant_crosses_midnight_backwards() {
    let instant = reference_instant(date(2025, 1, 15), 60);
    assert_eq!(instant.to_rfc3339(), "2025-01-14T19:30:00+00:00");
}

#[test]
fn ist_card_displays_slider_time_for_every_minute() {
    let day = date(2025, 3, 1);
    for slider in 0..MINUTES_PER_DAY {
        let card = ist_card(day, slider);
        assert_eq!(card.time, format!("{:02}:{:02}", slider / 60, slider % 60));
        assert_eq!(card.day_shift, 0);
        assert_eq!(card.utc_offset, "+05:30");
    }
}

#[test]
fn slider_is_clamped_to_last_minute() {
    assert_eq!(clamp_slider(5000), 1439);
    assert_eq!(ist_card(date(2025, 3, 1), 5000).time, "23:59");
}

// =============================================================
// other zones
// =============================================================

#[test]
fn new_york_in_winter_is_previous_day() {
    let day = date(2025, 1, 15);
    let ny = parse_zone("America/New_York").unwrap();
    let card = zone_card(reference_instant(day, 9 * 60 + 30), ny, day);
    assert_eq!(card.time, "23:00");
    assert_eq!(card.day_shift, -1);
    assert_eq!(card.day_label(), "-1 day");
    assert_eq!(card.city, "New York");
    assert_eq!(card.utc_offset, "-05:00");
}

#[test]
fn london_follows_daylight_saving() {
    let london = parse_zone("Europe/London").unwrap();
    let winter = zone_card(reference_instant(date(2025, 1, 15), 12 * 60), london, date(2025, 1, 15));
    let summer = zone_card(reference_instant(date(2025, 7, 15), 12 * 60), london, date(2025, 7, 15));
    assert_eq!(winter.time, "06:30");
    assert_eq!(summer.time, "07:30");
}

#[test]
fn sydney_can_be_next_day() {
    let day = date(2025, 1, 15);
    let sydney = parse_zone("Australia/Sydney").unwrap();
    let card = zone_card(reference_instant(day, 22 * 60), sydney, day);
    assert_eq!(card.time, "03:30");
    assert_eq!(card.day_shift, 1);
    assert_eq!(card.day_label(), "+1 day");
}

#[test]
fn parse_zone_rejects_unknown() {
    assert_eq!(parse_zone("Mars/Olympus").unwrap_err(), ToolError::UnknownZone("Mars/Olympus".into()));
}

#[test]
fn popular_zones_all_parse() {
    for zone in POPULAR_ZONES {
        assert!(parse_zone(zone).is_ok(), "{zone}");
    }
}

// =============================================================
// selection
// =============================================================

#[test]
fn default_selection_uses_default_zones() {
    let selection = ZoneSelection::default();
    assert_eq!(selection.zones().len(), DEFAULT_ZONES.len());
}

#[test]
fn selection_rejects_duplicates_and_ist() {
    let mut selection = ZoneSelection::empty();
    let dubai = parse_zone("Asia/Dubai").unwrap();
    assert!(selection.add(dubai));
    assert!(!selection.add(dubai));
    assert!(!selection.add(IST));
    assert!(selection.contains(dubai));
    assert!(selection.remove(dubai));
    assert!(!selection.remove(dubai));
    assert!(selection.zones().is_empty());
}

#[test]
fn zone_cards_follow_selection_order() {
    let mut selection = ZoneSelection::empty();
    selection.add(parse_zone("Asia/Singapore").unwrap());
    selection.add(parse_zone("Asia/Dubai").unwrap());
    let cards = zone_cards(date(2025, 1, 15), 600, &selection);
    let names: Vec<_> = cards.iter().map(|c| c.zone.as_str()).collect();
    assert_eq!(names, vec!["Asia/Singapore", "Asia/Dubai"]);
    assert_eq!(cards[0].time, "12:30");
    assert_eq!(cards[1].time, "08:30");
}

// =============================================================
// captions
// =============================================================

#[test]
fn slider_label_uses_twelve_hour_clock() {
    assert_eq!(format_slider_label(0), "12:00 AM");
    assert_eq!(format_slider_label(570), "9:30 AM");
    assert_eq!(format_slider_label(720), "12:00 PM");
    assert_eq!(format_slider_label(1439), "11:59 PM");
}

#[test]
fn city_name_handles_nested_and_plain_zones() {
    assert_eq!(city_name("America/Argentina/Buenos_Aires"), "Buenos Aires");
    assert_eq!(city_name("UTC"), "UTC");
}

#[test]
fn ist_minute_of_day_round_trips_through_reference_instant() {
    let instant = reference_instant(date(2025, 3, 9), 1_015);
    assert_eq!(ist_minute_of_day(instant), 1_015);
    assert_eq!(ist_today(instant), date(2025, 3, 9));
}

#[test]
fn slider_seed_lands_on_a_step() {
    let instant = reference_instant(date(2025, 3, 9), 1_015);
    assert_eq!(slider_seed(instant), 1_005);
    assert_eq!(slider_seed(instant) % SLIDER_STEP, 0);
}

#[test]
fn slider_seed_is_stable_within_a_step() {
    let day = date(2025, 3, 9);
    let seeds: Vec<u16> = (540..555).map(|m| slider_seed(reference_instant(day, m))).collect();
    assert!(seeds.iter().all(|&s| s == 540));
    assert_eq!(slider_seed(reference_instant(day, 555)), 555);
    assert_eq!(slider_seed(reference_instant(day, MINUTES_PER_DAY - 1)), MINUTES_PER_DAY - SLIDER_STEP);
}
