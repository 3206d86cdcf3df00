//! Filtering seam between the search box and the channel views

use super::types::{Channel, SearchTerm};

/// Capability used to narrow a channel view with the live search term.
///
/// Implementations own the exact match rule but must honor three properties
/// the rest of the app relies on: filtering is idempotent, survivors keep
/// their relative order, and an empty term removes nothing.
pub trait ChannelFilter {
    fn filter<'a>(&self, term: &SearchTerm, channels: &[&'a Channel]) -> Vec<&'a Channel>;
}

/// Default filter: case-insensitive substring match on the channel name
#[derive(Clone, Copy, Debug, Default)]
pub struct NameFilter;

impl ChannelFilter for NameFilter {
    fn filter<'a>(&self, term: &SearchTerm, channels: &[&'a Channel]) -> Vec<&'a Channel> {
        if term.name.is_empty() {
            return channels.to_vec();
        }
        let needle = term.name.to_lowercase();
        channels
            .iter()
            .copied()
            .filter(|channel| channel.name.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(id: &str, name: &str) -> Channel {
        Channel {
            id: id.to_owned(),
            name: name.to_owned(),
            ..Channel::default()
        }
    }

    fn term(name: &str) -> SearchTerm {
        SearchTerm {
            name: name.to_owned(),
        }
    }

    #[test]
    fn empty_term_is_identity() {
        let channels = [channel("a", "First"), channel("b", "Second")];
        let view: Vec<&Channel> = channels.iter().collect();

        let filtered = NameFilter.filter(&term(""), &view);

        assert_eq!(filtered, view);
    }

    #[test]
    fn filtering_twice_matches_filtering_once() {
        let channels = [
            channel("a", "News 24"),
            channel("b", "Sports One"),
            channel("c", "Local News"),
        ];
        let view: Vec<&Channel> = channels.iter().collect();
        let search = term("news");

        let once = NameFilter.filter(&search, &view);
        let twice = NameFilter.filter(&search, &once);

        assert_eq!(once, twice);
    }

    #[test]
    fn survivors_keep_relative_order() {
        let channels = [
            channel("a", "News 24"),
            channel("b", "Movies"),
            channel("c", "News Plus"),
        ];
        let view: Vec<&Channel> = channels.iter().collect();

        let filtered = NameFilter.filter(&term("news"), &view);

        let ids: Vec<&str> = filtered.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn match_is_case_insensitive() {
        let channels = [channel("a", "EuroNews")];
        let view: Vec<&Channel> = channels.iter().collect();

        assert_eq!(NameFilter.filter(&term("EURO"), &view).len(), 1);
        assert_eq!(NameFilter.filter(&term("euro"), &view).len(), 1);
    }
}
