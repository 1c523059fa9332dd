//! Pizza-of-the-day selection

use crate::core::entity::PizzaType;
use crate::core::error::CatalogError;
use chrono::{DateTime, Utc};

pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Whole UTC days elapsed since the Unix epoch (floored, also before 1970)
pub fn days_since_epoch(now: DateTime<Utc>) -> i64 {
    now.timestamp_millis().div_euclid(MILLIS_PER_DAY)
}

/// Pick today's pizza type
///
/// The index is `days_since_epoch(now) mod len`, taken over `pizza_types`
/// in the order the store returned them. The result changes exactly at
/// each UTC midnight and repeats with a period of `len` days.
pub fn select_pizza_of_the_day(
    pizza_types: &[PizzaType],
    now: DateTime<Utc>,
) -> Result<&PizzaType, CatalogError> {
    if pizza_types.is_empty() {
        return Err(CatalogError::EmptyCatalog);
    }

    let index = days_since_epoch(now).rem_euclid(pizza_types.len() as i64) as usize;
    Ok(&pizza_types[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn types(ids: &[&str]) -> Vec<PizzaType> {
        ids.iter()
            .map(|id| PizzaType::new(*id, *id, "Classic", ""))
            .collect()
    }

    fn at_day(day: i64, offset_ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(day * MILLIS_PER_DAY + offset_ms)
            .unwrap()
    }

    #[test]
    fn test_day_seven_of_three_picks_second() {
        let pizza_types = types(&["A", "B", "C"]);
        let picked = select_pizza_of_the_day(&pizza_types, at_day(7, 12_345)).unwrap();
        assert_eq!(picked.pizza_type_id, "B");
    }

    #[test]
    fn test_same_day_is_deterministic() {
        let pizza_types = types(&["A", "B", "C", "D"]);
        let morning = at_day(20_000, 1);
        let evening = at_day(20_000, MILLIS_PER_DAY - 1);

        let first = select_pizza_of_the_day(&pizza_types, morning).unwrap();
        let again = select_pizza_of_the_day(&pizza_types, morning).unwrap();
        let later = select_pizza_of_the_day(&pizza_types, evening).unwrap();

        assert_eq!(first, again);
        assert_eq!(first, later);
    }

    #[test]
    fn test_cycles_with_period_of_catalog_length() {
        let pizza_types = types(&["A", "B", "C", "D", "E"]);
        let start = at_day(19_000, 0);

        let mut seen = Vec::new();
        for day in 0..5 {
            let now = start + Duration::days(day);
            seen.push(select_pizza_of_the_day(&pizza_types, now).unwrap().pizza_type_id.clone());
        }
        let mut sorted = seen.clone();
        sorted.sort();
        assert_eq!(sorted, vec!["A", "B", "C", "D", "E"]);

        let wrapped = select_pizza_of_the_day(&pizza_types, start + Duration::days(5)).unwrap();
        assert_eq!(wrapped.pizza_type_id, seen[0]);
    }

    #[test]
    fn test_before_epoch_floors_to_previous_day() {
        assert_eq!(days_since_epoch(at_day(0, -1)), -1);

        let pizza_types = types(&["A", "B", "C"]);
        let picked = select_pizza_of_the_day(&pizza_types, at_day(0, -1)).unwrap();
        assert_eq!(picked.pizza_type_id, "C");
    }

    #[test]
    fn test_empty_catalog_is_reported() {
        let err = select_pizza_of_the_day(&[], Utc::now()).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyCatalog));
    }
}
