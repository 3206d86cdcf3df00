//! Stable partition of the channel list into named group buckets

use std::collections::HashMap;

use super::types::Channel;

/// Bucket title used for channels that carry no group
pub const UNGROUPED_TITLE: &str = "Ungrouped";

/// A named partition of channels sharing a group title
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupBucket {
    pub title: String,
    pub channels: Vec<Channel>,
}

/// Partitions channels into buckets keyed by their group title.
///
/// Single pass over the input. Bucket order follows the first appearance of
/// each title and channels keep their source order within a bucket; nothing
/// is sorted. Channels without a group land in the [`UNGROUPED_TITLE`]
/// bucket.
pub fn group_channels(channels: &[Channel]) -> Vec<GroupBucket> {
    let mut buckets: Vec<GroupBucket> = Vec::new();
    let mut bucket_index: HashMap<String, usize> = HashMap::new();

    for channel in channels {
        let title = channel
            .group
            .as_ref()
            .map_or(UNGROUPED_TITLE, |group| group.title.as_str());

        if let Some(&index) = bucket_index.get(title) {
            buckets[index].channels.push(channel.clone());
        } else {
            bucket_index.insert(title.to_owned(), buckets.len());
            buckets.push(GroupBucket {
                title: title.to_owned(),
                channels: vec![channel.clone()],
            });
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::ChannelGroup;

    fn channel(id: &str, group: Option<&str>) -> Channel {
        Channel {
            id: id.to_owned(),
            name: id.to_uppercase(),
            group: group.map(|title| ChannelGroup {
                title: title.to_owned(),
            }),
            ..Channel::default()
        }
    }

    #[test]
    fn partitions_by_group_title() {
        let channels = vec![
            channel("a", Some("News")),
            channel("b", Some("News")),
            channel("c", Some("Sports")),
        ];

        let grouped = group_channels(&channels);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].title, "News");
        assert_eq!(grouped[0].channels[0].id, "a");
        assert_eq!(grouped[0].channels[1].id, "b");
        assert_eq!(grouped[1].title, "Sports");
        assert_eq!(grouped[1].channels[0].id, "c");
    }

    #[test]
    fn every_channel_lands_in_exactly_one_bucket() {
        let channels = vec![
            channel("a", Some("News")),
            channel("b", None),
            channel("c", Some("Sports")),
            channel("d", Some("News")),
        ];

        let grouped = group_channels(&channels);

        let total: usize = grouped.iter().map(|bucket| bucket.channels.len()).sum();
        assert_eq!(total, channels.len());
        for original in &channels {
            let holders = grouped
                .iter()
                .filter(|bucket| bucket.channels.iter().any(|c| c.id == original.id))
                .count();
            assert_eq!(holders, 1, "channel {} in {} buckets", original.id, holders);
        }
    }

    #[test]
    fn missing_group_uses_the_sentinel_bucket() {
        let grouped = group_channels(&[channel("x", None)]);

        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[0].title, UNGROUPED_TITLE);
    }

    #[test]
    fn bucket_order_follows_first_appearance() {
        let channels = vec![
            channel("1", Some("Zeta")),
            channel("2", Some("Alpha")),
            channel("3", Some("Zeta")),
        ];

        let grouped = group_channels(&channels);

        let titles: Vec<&str> = grouped.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["Zeta", "Alpha"]);
        let zeta_ids: Vec<&str> = grouped[0].channels.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(zeta_ids, ["1", "3"]);
    }

    #[test]
    fn empty_input_yields_no_buckets() {
        assert!(group_channels(&[]).is_empty());
    }
}
