//! Property-based tests for argument ordering
//!
//! Uses proptest to verify the synthesizer never reorders source files.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use lintstep::{SourceFileSet, synthesize};
use proptest::prelude::*;
use tempfile::TempDir;

proptest! {
    /// Trailing arguments are exactly the input files, in input order
    #[test]
    fn trailing_arguments_preserve_order(
        names in prop::collection::vec("[A-Za-z]{1,12}", 1..20)
    ) {
        let temp = TempDir::new().unwrap();
        let files: Vec<PathBuf> =
            names.iter().map(|n| PathBuf::from(format!("/p/{n}.swift"))).collect();

        let result = synthesize(
            Path::new("swiftlint"),
            &SourceFileSet::new(files.clone()),
            &BTreeMap::new(),
            temp.path(),
        )
        .unwrap();

        let args = result[0].arguments();
        prop_assert_eq!(args.len(), 5 + files.len());
        let trailing: Vec<PathBuf> = args[5..].iter().map(PathBuf::from).collect();
        prop_assert_eq!(trailing, files);
    }

    /// Reversing the input reverses the trailing arguments
    #[test]
    fn reversed_input_reverses_trailing_arguments(
        names in prop::collection::vec("[a-z]{1,8}", 2..10)
    ) {
        let temp = TempDir::new().unwrap();
        let forward: Vec<PathBuf> =
            names.iter().map(|n| PathBuf::from(format!("/p/{n}.swift"))).collect();
        let mut backward = forward.clone();
        backward.reverse();

        let a = synthesize(
            Path::new("swiftlint"),
            &SourceFileSet::new(forward),
            &BTreeMap::new(),
            temp.path(),
        )
        .unwrap();
        let b = synthesize(
            Path::new("swiftlint"),
            &SourceFileSet::new(backward),
            &BTreeMap::new(),
            temp.path(),
        )
        .unwrap();

        let mut a_tail = a[0].arguments()[5..].to_vec();
        a_tail.reverse();
        prop_assert_eq!(a_tail, b[0].arguments()[5..].to_vec());
    }
}
