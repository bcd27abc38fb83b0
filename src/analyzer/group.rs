use std::collections::HashMap;

use crate::models::TimeBucket;

/// Identity of one detection group. Using an enum with `Option` dimensions
/// (instead of a delimited string with a wildcard sentinel) means a field
/// literally containing "*" can never collide with an absent field, and the
/// global rollup can never collide with a context group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKey {
    Context {
        page: Option<String>,
        device_type: Option<String>,
        referrer: Option<String>,
        category: Option<String>,
    },
    /// All buckets for the metric, context stripped.
    Global,
}

impl GroupKey {
    fn of(bucket: &TimeBucket) -> Self {
        GroupKey::Context {
            page: bucket.page.clone(),
            device_type: bucket.device_type.clone(),
            referrer: bucket.referrer.clone(),
            category: bucket.category.clone(),
        }
    }
}

/// Partition one metric's buckets into per-context groups plus the global
/// group. Every bucket lands in exactly one context group and additionally
/// contributes a context-stripped copy to the global group.
pub fn group_buckets(buckets: Vec<TimeBucket>) -> HashMap<GroupKey, Vec<TimeBucket>> {
    let mut groups: HashMap<GroupKey, Vec<TimeBucket>> = HashMap::new();

    for bucket in buckets {
        groups
            .entry(GroupKey::Global)
            .or_default()
            .push(bucket.stripped());
        groups.entry(GroupKey::of(&bucket)).or_default().push(bucket);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn bucket(hour: u32, value: f64, page: Option<&str>, device: Option<&str>) -> TimeBucket {
        TimeBucket {
            bucket_start: Utc.with_ymd_and_hms(2026, 8, 25, hour, 0, 0).unwrap(),
            value,
            referrer: None,
            device_type: device.map(String::from),
            category: None,
            page: page.map(String::from),
        }
    }

    #[test]
    fn test_empty_input_yields_no_groups() {
        assert!(group_buckets(Vec::new()).is_empty());
    }

    #[test]
    fn test_same_context_shares_a_group() {
        let groups = group_buckets(vec![
            bucket(0, 10.0, Some("/home"), Some("mobile")),
            bucket(1, 12.0, Some("/home"), Some("mobile")),
            bucket(1, 99.0, Some("/checkout"), Some("mobile")),
        ]);

        // two context groups plus the global group
        assert_eq!(groups.len(), 3);

        let home_key = GroupKey::Context {
            page: Some("/home".into()),
            device_type: Some("mobile".into()),
            referrer: None,
            category: None,
        };
        assert_eq!(groups[&home_key].len(), 2);
        assert_eq!(groups[&GroupKey::Global].len(), 3);
    }

    #[test]
    fn test_global_group_is_context_stripped() {
        let groups = group_buckets(vec![bucket(5, 7.0, Some("/home"), Some("desktop"))]);
        let global = &groups[&GroupKey::Global];
        assert_eq!(global.len(), 1);
        assert_eq!(global[0].value, 7.0);
        assert!(global[0].page.is_none());
        assert!(global[0].device_type.is_none());
    }

    #[test]
    fn test_contextless_buckets_collapse_but_stay_distinct_from_global() {
        // Buckets with no context at all share one context group, which is a
        // different key than the global rollup.
        let groups = group_buckets(vec![bucket(0, 1.0, None, None), bucket(1, 2.0, None, None)]);

        assert_eq!(groups.len(), 2);
        let bare_key = GroupKey::Context {
            page: None,
            device_type: None,
            referrer: None,
            category: None,
        };
        assert_eq!(groups[&bare_key].len(), 2);
        assert_eq!(groups[&GroupKey::Global].len(), 2);
    }

    #[test]
    fn test_literal_star_page_is_its_own_group() {
        let groups = group_buckets(vec![
            bucket(0, 1.0, Some("*"), None),
            bucket(1, 2.0, None, None),
        ]);

        // "*" as a real page value must not merge with the no-page group.
        assert_eq!(groups.len(), 3);
    }
}
