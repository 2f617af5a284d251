//! Property-based tests for the pure domain parsers.

use dockup_cli::domain::provision::{DOCKER_GROUP, KEYRING_PATH};
use dockup_cli::domain::{groups_contain, render_source_entry};
use proptest::prelude::*;

proptest! {
    /// Membership is found wherever the token sits in the listing.
    #[test]
    fn prop_groups_contain_finds_token_anywhere(
        before in proptest::collection::vec("[a-z]{1,8}", 0..5),
        after in proptest::collection::vec("[a-z]{1,8}", 0..5),
    ) {
        let mut groups = before;
        groups.push(DOCKER_GROUP.to_string());
        groups.extend(after);
        let listing = format!("ci : {}", groups.join(" "));
        prop_assert!(groups_contain(&listing, DOCKER_GROUP));
    }

    /// A group whose name merely starts with `docker` never counts.
    #[test]
    fn prop_groups_contain_never_matches_substrings(suffix in "[a-z]{1,6}") {
        let listing = format!("ci : adm {DOCKER_GROUP}{suffix}");
        prop_assert!(!groups_contain(&listing, DOCKER_GROUP));
    }

    /// The rendered source entry always carries the captured architecture,
    /// codename, and the keyring path, and ends with the newline dd writes.
    #[test]
    fn prop_source_entry_embeds_arch_and_codename(
        arch in "[a-z0-9]{2,8}",
        codename in "[a-z]{3,10}",
    ) {
        let entry = render_source_entry(&arch, &codename);
        let arch_prefix = format!("deb [arch={arch} ");
        let codename_part = format!(" {codename} stable");
        prop_assert!(entry.starts_with(&arch_prefix));
        prop_assert!(entry.contains(&codename_part));
        prop_assert!(entry.contains(KEYRING_PATH));
        prop_assert!(entry.ends_with('\n'));
    }
}
