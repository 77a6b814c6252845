//! Property tests for remote target paths and the compare command.

use proptest::prelude::*;

use droid::{ContentDigest, RemoteTarget};

fn path_segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._' -]{1,20}")
        .unwrap()
        .prop_filter("not a dot segment", |s| s != "." && s != "..")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The manifest always sits next to the artifact with a `.sha1` suffix.
    #[test]
    fn property_manifest_follows_artifact(
        dir in proptest::collection::vec(path_segment(), 0..4),
        name in path_segment(),
    ) {
        let directory = format!("/{}", dir.join("/"));
        let target = RemoteTarget::in_directory(&directory, &name);

        let expected_suffix = format!("/{}", name);
        prop_assert!(target.artifact_path().ends_with(&expected_suffix));
        prop_assert_eq!(target.manifest_path(), format!("{}.sha1", target.artifact_path()));
        prop_assert_eq!(target.file_name(), name.as_str());
    }

    /// PROPERTY: The compare command starts with an echo of the manifest line
    /// and ends with the verify step; quoting never splits the manifest path.
    #[test]
    fn property_compare_command_shape(
        dir in proptest::collection::vec(path_segment(), 1..4),
        name in path_segment(),
        bytes in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let target = RemoteTarget::in_directory(&format!("/{}/", dir.join("/")), &name);
        let digest = ContentDigest::from_bytes(&bytes);
        let command = target.compare_command(&digest);

        let echo_prefix = format!("echo '{}  ", digest.as_str());
        prop_assert!(command.starts_with(&echo_prefix));
        prop_assert!(command.contains(" && sha1sum --status -c '"));
        prop_assert!(command.ends_with('\''));
        prop_assert_eq!(command.matches(" && ").count(), 1);
    }
}
