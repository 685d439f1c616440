//! Plain-text rendering of the reservation card

use sava_core::{CountdownState, DisplaySection, TargetInstant};

const COLUMN: usize = 10;

/// Counter value zero-padded to two digits
pub fn counter(value: u32) -> String {
    format!("{value:02}")
}

/// The three counters shown under the ship date, in display order
pub fn counters(state: &CountdownState) -> [(String, &'static str); 3] {
    let remaining = state.remaining();
    [
        (counter(remaining.months), "MONTHS"),
        (counter(remaining.days), "DAYS"),
        (counter(remaining.hours), "HOURS"),
    ]
}

pub fn timeline_caption(state: &CountdownState) -> &'static str {
    match state {
        CountdownState::Pending(_) => "PRODUCTION TIMELINE",
        CountdownState::Reached => "DELIVERY DATE REACHED",
    }
}

pub fn card_lines(
    display: &DisplaySection,
    target: &TargetInstant,
    state: &CountdownState,
) -> Vec<String> {
    let counters = counters(state);
    let values: String = counters
        .iter()
        .map(|(value, _)| format!("{:^width$}", value, width = COLUMN))
        .collect();
    let units: String = counters
        .iter()
        .map(|(_, unit)| format!("{:^width$}", unit, width = COLUMN))
        .collect();

    vec![
        display.headline.clone(),
        display.tagline.clone(),
        String::new(),
        timeline_caption(state).to_string(),
        display.ship_note.clone(),
        target.label(),
        String::new(),
        values.trim_end().to_string(),
        units.trim_end().to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use sava_core::{RemainingDuration, TargetZone};

    fn target() -> TargetInstant {
        TargetInstant::parse("2026-07-04T00:00:00", TargetZone::Utc).unwrap()
    }

    #[test]
    fn counters_are_padded() {
        let state = CountdownState::Pending(RemainingDuration {
            months: 8,
            days: 15,
            hours: 3,
        });
        let values: Vec<_> = counters(&state).into_iter().map(|(v, _)| v).collect();
        assert_eq!(values, ["08", "15", "03"]);
        assert_eq!(counter(123), "123");
    }

    #[test]
    fn card_shows_ship_date_and_units() {
        let state = CountdownState::Pending(RemainingDuration {
            months: 0,
            days: 0,
            hours: 12,
        });
        let lines = card_lines(&DisplaySection::default(), &target(), &state);

        assert_eq!(lines[0], "RESERVE YOUR ROBOT");
        assert!(lines.contains(&"JULY 4, 2026".to_string()));
        assert!(lines.contains(&"PRODUCTION TIMELINE".to_string()));
        let values = &lines[lines.len() - 2];
        assert_eq!(values.split_whitespace().collect::<Vec<_>>(), ["00", "00", "12"]);
        let units = &lines[lines.len() - 1];
        assert_eq!(units.split_whitespace().collect::<Vec<_>>(), ["MONTHS", "DAYS", "HOURS"]);
    }

    #[test]
    fn reached_card_swaps_caption() {
        let lines = card_lines(&DisplaySection::default(), &target(), &CountdownState::Reached);
        assert!(lines.contains(&"DELIVERY DATE REACHED".to_string()));
    }
}
