use std::collections::BTreeSet;

/// Dataset-wide maximum monthly rate; the price ceiling at which the
/// price predicate admits everything.
pub const DEFAULT_PRICE_CEILING: f64 = 2000.0;

/// Current filter selections.
///
/// A value type: every edit produces a new criteria object via
/// [`FilterCriteria::with`] or one of the toggle helpers, never an
/// in-place mutation. Invariant: `price_ceiling` and
/// `min_duration_ceiling` are finite and non-negative (the input-recovery
/// parsers below guarantee this for user-typed values).
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Exact city to match; empty = unconstrained.
    pub city: String,
    /// Inclusive upper bound on the monthly rate. Always applied.
    pub price_ceiling: f64,
    /// Exact property type; empty = unconstrained.
    pub property_type: String,
    /// Longest minimum stay (months) the user will accept. A higher
    /// value admits more listings; inactive at <= 1.
    pub min_duration_ceiling: u32,
    /// Required amenities. Every entry must substring-match one of the
    /// property's amenities, case-insensitively.
    pub amenities: BTreeSet<String>,
    /// Acceptable exact bedroom counts; empty = unconstrained.
    pub bedroom_counts: BTreeSet<u32>,
    /// Selected furnishing labels. Tracked for the sidebar but not
    /// consumed by the evaluator.
    pub furnishing: BTreeSet<String>,
    /// Selected availability labels. Tracked but not consumed.
    pub availability: BTreeSet<String>,
    /// Tracked but not consumed; there is no seen-listing store.
    pub hide_already_seen: bool,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            city: String::new(),
            price_ceiling: DEFAULT_PRICE_CEILING,
            property_type: String::new(),
            min_duration_ceiling: 1,
            amenities: BTreeSet::new(),
            bedroom_counts: BTreeSet::new(),
            furnishing: BTreeSet::new(),
            availability: BTreeSet::new(),
            hide_already_seen: false,
        }
    }
}

/// Partial criteria update. `Some` fields replace their counterpart,
/// `None` fields keep the prior value (shallow merge).
#[derive(Debug, Clone, Default)]
pub struct FilterPatch {
    pub city: Option<String>,
    pub price_ceiling: Option<f64>,
    pub property_type: Option<String>,
    pub min_duration_ceiling: Option<u32>,
    pub amenities: Option<BTreeSet<String>>,
    pub bedroom_counts: Option<BTreeSet<u32>>,
    pub furnishing: Option<BTreeSet<String>>,
    pub availability: Option<BTreeSet<String>>,
    pub hide_already_seen: Option<bool>,
}

impl FilterCriteria {
    /// Merge a partial update into these criteria, field by field.
    pub fn with(&self, patch: FilterPatch) -> Self {
        Self {
            city: patch.city.unwrap_or_else(|| self.city.clone()),
            price_ceiling: patch.price_ceiling.unwrap_or(self.price_ceiling),
            property_type: patch
                .property_type
                .unwrap_or_else(|| self.property_type.clone()),
            min_duration_ceiling: patch
                .min_duration_ceiling
                .unwrap_or(self.min_duration_ceiling),
            amenities: patch.amenities.unwrap_or_else(|| self.amenities.clone()),
            bedroom_counts: patch
                .bedroom_counts
                .unwrap_or_else(|| self.bedroom_counts.clone()),
            furnishing: patch.furnishing.unwrap_or_else(|| self.furnishing.clone()),
            availability: patch
                .availability
                .unwrap_or_else(|| self.availability.clone()),
            hide_already_seen: patch.hide_already_seen.unwrap_or(self.hide_already_seen),
        }
    }

    /// Add the amenity if absent, remove it if present.
    pub fn toggle_amenity(&self, name: &str) -> Self {
        let mut next = self.clone();
        if !next.amenities.remove(name) {
            next.amenities.insert(name.to_string());
        }
        next
    }

    pub fn toggle_bedrooms(&self, count: u32) -> Self {
        let mut next = self.clone();
        if !next.bedroom_counts.remove(&count) {
            next.bedroom_counts.insert(count);
        }
        next
    }

    pub fn toggle_furnishing(&self, label: &str) -> Self {
        let mut next = self.clone();
        if !next.furnishing.remove(label) {
            next.furnishing.insert(label.to_string());
        }
        next
    }

    pub fn toggle_availability(&self, label: &str) -> Self {
        let mut next = self.clone();
        if !next.availability.remove(label) {
            next.availability.insert(label.to_string());
        }
        next
    }

    /// Number of criteria that differ from their defaults, for the
    /// "N active filters" badge.
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if !self.city.is_empty() {
            count += 1;
        }
        if self.price_ceiling < DEFAULT_PRICE_CEILING {
            count += 1;
        }
        if !self.property_type.is_empty() {
            count += 1;
        }
        if self.min_duration_ceiling > 1 {
            count += 1;
        }
        if !self.amenities.is_empty() {
            count += 1;
        }
        if !self.bedroom_counts.is_empty() {
            count += 1;
        }
        if !self.furnishing.is_empty() {
            count += 1;
        }
        if !self.availability.is_empty() {
            count += 1;
        }
        if self.hide_already_seen {
            count += 1;
        }
        count
    }
}

/// Recover a numeric amount from a free-form input field. Empty,
/// unparsable, negative, or non-finite input yields the fallback
/// (0 for a lower bound, the current ceiling for an upper bound), so
/// the evaluator never sees an invalid comparison value.
pub fn parse_amount(input: &str, fallback: f64) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => fallback,
    }
}

/// Recover a duration (months) from an input field; falls back to 1,
/// the unconstrained minimum-stay ceiling.
pub fn parse_duration(input: &str) -> u32 {
    input.trim().parse().unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_state_is_idempotent() {
        let once = FilterCriteria::default();
        let twice = FilterCriteria::default();
        assert_eq!(once, twice);
        assert_eq!(once.price_ceiling, 2000.0);
        assert_eq!(once.min_duration_ceiling, 1);
        assert_eq!(once.active_count(), 0);
    }

    #[test]
    fn with_replaces_only_patched_fields() {
        let base = FilterCriteria::default()
            .with(FilterPatch {
                city: Some("Bangkok".to_string()),
                ..FilterPatch::default()
            })
            .with(FilterPatch {
                price_ceiling: Some(1200.0),
                ..FilterPatch::default()
            });

        assert_eq!(base.city, "Bangkok");
        assert_eq!(base.price_ceiling, 1200.0);
        assert_eq!(base.property_type, "");
        assert_eq!(base.min_duration_ceiling, 1);
    }

    #[test]
    fn toggles_flip_set_membership() {
        let criteria = FilterCriteria::default().toggle_amenity("WiFi");
        assert!(criteria.amenities.contains("WiFi"));

        let criteria = criteria.toggle_amenity("WiFi");
        assert!(criteria.amenities.is_empty());

        let criteria = criteria.toggle_bedrooms(2).toggle_bedrooms(3);
        assert!(criteria.bedroom_counts.contains(&2));
        assert!(criteria.bedroom_counts.contains(&3));
        assert!(!criteria.toggle_bedrooms(2).bedroom_counts.contains(&2));
    }

    #[test]
    fn active_count_tracks_non_default_criteria() {
        let criteria = FilterCriteria::default()
            .with(FilterPatch {
                city: Some("Da Nang".to_string()),
                price_ceiling: Some(900.0),
                min_duration_ceiling: Some(3),
                ..FilterPatch::default()
            })
            .toggle_amenity("Pool")
            .toggle_furnishing("Furnished");
        assert_eq!(criteria.active_count(), 5);
    }

    #[test]
    fn parse_amount_recovers_bad_input() {
        assert_eq!(parse_amount("1500", 2000.0), 1500.0);
        assert_eq!(parse_amount(" 750.5 ", 2000.0), 750.5);
        assert_eq!(parse_amount("", 0.0), 0.0);
        assert_eq!(parse_amount("abc", 2000.0), 2000.0);
        assert_eq!(parse_amount("-50", 2000.0), 2000.0);
        assert_eq!(parse_amount("inf", 2000.0), 2000.0);
    }

    #[test]
    fn parse_duration_falls_back_to_one() {
        assert_eq!(parse_duration("6"), 6);
        assert_eq!(parse_duration(""), 1);
        assert_eq!(parse_duration("soon"), 1);
    }
}
