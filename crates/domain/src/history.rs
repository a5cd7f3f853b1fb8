//! History feed — flattens per-unit lease histories into one sorted list.

use chrono::NaiveDate;
use serde::Serialize;

use crate::date;
use crate::unit::Unit;

/// One past lease joined with its unit's identity, display-formatted.
///
/// Serde names match the legacy feed output keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryItem {
    /// Unit identifier.
    #[serde(rename = "unidade")]
    pub unit_id: String,
    /// Unit display label.
    #[serde(rename = "apartamento")]
    pub label: String,
    /// Owner name.
    #[serde(rename = "proprietario")]
    pub owner: String,
    /// Tenant of the past lease.
    #[serde(rename = "locatario")]
    pub tenant: String,
    /// Lease start, `DD/MM/YYYY`.
    #[serde(rename = "inicio")]
    pub start: String,
    /// Lease end, `DD/MM/YYYY`, empty for open-ended leases.
    #[serde(rename = "fim")]
    pub end: String,
    /// Expiration or manual-removal date, `DD/MM/YYYY`.
    #[serde(rename = "data_evento")]
    pub event_date: String,
}

/// Flatten every history entry of every unit into one feed, newest first.
///
/// Entries sharing an event date keep their input order: units in stored
/// order, each unit's entries in append order.
#[must_use]
pub fn collect(units: &[Unit]) -> Vec<HistoryItem> {
    let mut feed: Vec<(NaiveDate, HistoryItem)> = Vec::new();
    for unit in units {
        for entry in &unit.history {
            let event = entry.ended.date();
            feed.push((
                event,
                HistoryItem {
                    unit_id: unit.id.to_string(),
                    label: unit.label.clone(),
                    owner: unit.owner.clone(),
                    tenant: entry.tenant.clone(),
                    start: date::display(entry.start),
                    end: date::display_opt(entry.end),
                    event_date: date::display(event),
                },
            ));
        }
    }
    // Stable sort keeps input order between entries with equal dates.
    feed.sort_by_key(|(event, _)| std::cmp::Reverse(*event));
    feed.into_iter().map(|(_, item)| item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lease::{HistoricalLease, LeaseEnd};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn unit_with_history(number: &str, entries: Vec<HistoricalLease>) -> Unit {
        let mut unit = Unit::builder()
            .block("A")
            .number(number)
            .owner("Alice")
            .build()
            .unwrap();
        unit.history = entries;
        unit
    }

    fn entry(tenant: &str, ended: LeaseEnd) -> HistoricalLease {
        HistoricalLease {
            tenant: tenant.to_string(),
            start: date(2024, 1, 1),
            end: Some(date(2024, 1, 31)),
            ended,
        }
    }

    #[test]
    fn should_join_unit_identity_onto_each_entry() {
        let units = vec![unit_with_history(
            "1",
            vec![entry("Bob", LeaseEnd::Expired(date(2024, 2, 1)))],
        )];

        let feed = collect(&units);

        assert_eq!(feed.len(), 1);
        let item = &feed[0];
        assert_eq!(item.unit_id, "A | 1");
        assert_eq!(item.label, "Casa 1");
        assert_eq!(item.owner, "Alice");
        assert_eq!(item.tenant, "Bob");
        assert_eq!(item.start, "01/01/2024");
        assert_eq!(item.end, "31/01/2024");
        assert_eq!(item.event_date, "01/02/2024");
    }

    #[test]
    fn should_sort_newest_event_first() {
        let units = vec![
            unit_with_history("1", vec![entry("Bob", LeaseEnd::Expired(date(2024, 3, 1)))]),
            unit_with_history(
                "2",
                vec![
                    entry("Ana", LeaseEnd::Removed(date(2024, 5, 1))),
                    entry("Carla", LeaseEnd::Expired(date(2024, 4, 1))),
                ],
            ),
        ];

        let feed = collect(&units);

        let tenants: Vec<&str> = feed.iter().map(|item| item.tenant.as_str()).collect();
        assert_eq!(tenants, vec!["Ana", "Carla", "Bob"]);
    }

    #[test]
    fn should_keep_input_order_on_equal_event_dates() {
        let same_day = LeaseEnd::Removed(date(2024, 5, 1));
        let units = vec![
            unit_with_history("1", vec![entry("Bob", same_day)]),
            unit_with_history("2", vec![entry("Ana", same_day), entry("Carla", same_day)]),
        ];

        let feed = collect(&units);

        let tenants: Vec<&str> = feed.iter().map(|item| item.tenant.as_str()).collect();
        assert_eq!(tenants, vec!["Bob", "Ana", "Carla"]);
    }

    #[test]
    fn should_render_open_ended_leases_with_empty_end() {
        let mut past = entry("Bob", LeaseEnd::Removed(date(2024, 5, 1)));
        past.end = None;
        let units = vec![unit_with_history("1", vec![past])];

        let feed = collect(&units);

        assert_eq!(feed[0].end, "");
    }

    #[test]
    fn should_return_empty_feed_when_no_unit_has_history() {
        let units = vec![unit_with_history("1", Vec::new())];
        assert!(collect(&units).is_empty());
    }

    #[test]
    fn should_serialize_with_legacy_output_keys() {
        let units = vec![unit_with_history(
            "1",
            vec![entry("Bob", LeaseEnd::Expired(date(2024, 2, 1)))],
        )];

        let json = serde_json::to_value(collect(&units)).unwrap();

        assert_eq!(json[0]["unidade"], "A | 1");
        assert_eq!(json[0]["apartamento"], "Casa 1");
        assert_eq!(json[0]["proprietario"], "Alice");
        assert_eq!(json[0]["data_evento"], "01/02/2024");
    }
}
