//! Location Search State
//!
//! Every keystroke bumps a sequence number. A search result is only shown
//! if no newer input arrived while it was debounced or in flight.

use crate::config::GeocoderConfig;
use crate::models::LocationSuggestion;

/// Query issued for one input event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub seq: u64,
    pub query: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationSearch {
    min_query_len: usize,
    seq: u64,
    query: String,
    suggestions: Vec<LocationSuggestion>,
}

impl LocationSearch {
    pub fn new(geocoder: &GeocoderConfig) -> Self {
        Self {
            min_query_len: geocoder.min_query_len,
            ..Default::default()
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[LocationSuggestion] {
        &self.suggestions
    }

    /// Record new input. Short queries clear the list and need no search.
    pub fn input(&mut self, raw: &str) -> Option<SearchTicket> {
        self.query = raw.to_string();
        self.seq += 1;
        let query = raw.trim();
        if query.chars().count() < self.min_query_len {
            self.suggestions.clear();
            return None;
        }
        Some(SearchTicket {
            seq: self.seq,
            query: query.to_string(),
        })
    }

    /// Whether `ticket` belongs to the newest input
    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        ticket.seq == self.seq
    }

    /// Show results for `ticket`; stale results are dropped
    pub fn accept(&mut self, ticket: &SearchTicket, results: Vec<LocationSuggestion>) -> bool {
        if !self.is_current(ticket) {
            log::debug!("Dropping stale location results for {:?}", ticket.query);
            return false;
        }
        self.suggestions = results;
        true
    }

    /// Fill the input with a suggestion and close the list
    pub fn select(&mut self, place_id: u64) -> Option<String> {
        let chosen = self
            .suggestions
            .iter()
            .find(|s| s.place_id == place_id)?
            .display_name
            .clone();
        self.seq += 1;
        self.query = chosen.clone();
        self.suggestions.clear();
        Some(chosen)
    }

    pub fn clear_suggestions(&mut self) {
        self.suggestions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(id: u64, name: &str) -> LocationSuggestion {
        LocationSuggestion {
            place_id: id,
            display_name: name.to_string(),
            lat: String::new(),
            lon: String::new(),
        }
    }

    fn search() -> LocationSearch {
        LocationSearch::new(&GeocoderConfig::default())
    }

    #[test]
    fn test_short_query_clears_without_search() {
        let mut search = search();
        let ticket = search.input("Cluj").unwrap();
        search.accept(&ticket, vec![place(1, "Cluj-Napoca")]);
        assert_eq!(search.input(" Cl "), None);
        assert!(search.suggestions().is_empty());
    }

    #[test]
    fn test_stale_results_dropped() {
        let mut search = search();
        let first = search.input("Buc").unwrap();
        let second = search.input("Bucharest").unwrap();
        assert!(!search.is_current(&first));

        assert!(search.accept(&second, vec![place(2, "Bucharest, Romania")]));
        assert!(!search.accept(&first, vec![place(3, "Bucovina")]));
        assert_eq!(search.suggestions(), &[place(2, "Bucharest, Romania")]);
    }

    #[test]
    fn test_select_fills_query_and_closes() {
        let mut search = search();
        let ticket = search.input("Iasi").unwrap();
        search.accept(&ticket, vec![place(7, "Iași, Romania")]);

        assert_eq!(search.select(7).as_deref(), Some("Iași, Romania"));
        assert_eq!(search.query(), "Iași, Romania");
        assert!(search.suggestions().is_empty());
        assert!(!search.is_current(&ticket));
        assert_eq!(search.select(99), None);
    }
}
