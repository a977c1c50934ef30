//! Property tests for scope wiring.

use std::collections::BTreeMap;

use proptest::prelude::*;

use capstan::model::conventions::{declare_binary, declare_executable, declare_library};
use capstan::scopes;
use capstan::{Binary, BinaryKind, BucketKind, Name, Project};

fn binary_kind() -> impl Strategy<Value = BinaryKind> {
    prop_oneof![
        Just(BinaryKind::Executable),
        Just(BinaryKind::StaticLibrary),
        Just(BinaryKind::SharedLibrary),
        Just(BinaryKind::TestExecutable),
    ]
}

/// Conventional binary name for the nth variant of the main component.
fn binary_named(kind: BinaryKind, index: usize) -> Binary {
    let name = match kind {
        BinaryKind::TestExecutable => format!("mainVariant{index}Executable"),
        _ => format!("mainVariant{index}"),
    };
    Binary::new(name, kind)
}

fn declare(project: &mut Project, library: bool, kinds: &[BinaryKind]) {
    let id = if library {
        declare_library(project, "main").unwrap()
    } else {
        declare_executable(project, "main").unwrap()
    };
    for (index, &kind) in kinds.iter().enumerate() {
        declare_binary(project, id, binary_named(kind, index)).unwrap();
    }
}

/// Flags and sorted extends edges per configuration, for order-insensitive
/// graph comparison.
fn shape(project: &Project) -> BTreeMap<String, (bool, bool, Vec<String>)> {
    project
        .configurations()
        .iter()
        .map(|node| {
            let mut extends: Vec<String> =
                node.extends().iter().map(|name| name.to_string()).collect();
            extends.sort();
            (
                node.name.to_string(),
                (node.resolvable, node.consumable, extends),
            )
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Installing the scopes before or after the declarations
    /// produces the same wired graph.
    #[test]
    fn property_install_order_is_irrelevant(
        library in any::<bool>(),
        kinds in proptest::collection::vec(binary_kind(), 0..=4),
    ) {
        let mut early = Project::new("early");
        scopes::install(&mut early).unwrap();
        declare(&mut early, library, &kinds);

        let mut late = Project::new("late");
        declare(&mut late, library, &kinds);
        scopes::install(&mut late).unwrap();

        prop_assert_eq!(shape(&early), shape(&late));
    }

    /// PROPERTY: The wired graph always validates, and every bucket stays
    /// declaration-only with no inherited dependencies.
    #[test]
    fn property_wired_graphs_validate(
        library in any::<bool>(),
        kinds in proptest::collection::vec(binary_kind(), 0..=4),
    ) {
        let mut project = Project::new("demo");
        scopes::install(&mut project).unwrap();
        declare(&mut project, library, &kinds);

        project.configurations().validate().unwrap();

        for kind in BucketKind::ALL {
            if kind.is_api() && !library {
                prop_assert!(!project.configurations().contains(kind.token()));
                continue;
            }
            let bucket = project.configurations().named(kind.token()).unwrap();
            prop_assert!(!bucket.resolvable);
            prop_assert!(!bucket.consumable);
            prop_assert!(bucket.extends().is_empty());
        }
    }

    /// PROPERTY: Every compile path reaches the compile scope and every
    /// link path reaches the link scope, never the other way around.
    #[test]
    fn property_build_paths_reach_their_scopes(
        library in any::<bool>(),
        kinds in proptest::collection::vec(binary_kind(), 1..=4),
    ) {
        let mut project = Project::new("demo");
        scopes::install(&mut project).unwrap();
        declare(&mut project, library, &kinds);

        for index in 0..kinds.len() {
            let compile = project
                .configurations()
                .effective_dependencies(format!("cppCompileVariant{index}"))
                .unwrap();
            prop_assert!(compile.contains(&Name::new("compileOnly")));
            prop_assert!(!compile.contains(&Name::new("linkOnly")));

            let link = project
                .configurations()
                .effective_dependencies(format!("nativeLinkVariant{index}"))
                .unwrap();
            prop_assert!(link.contains(&Name::new("linkOnly")));
            prop_assert!(!link.contains(&Name::new("compileOnly")));
        }
    }

    /// PROPERTY: Shared library link elements expose exactly the api scope
    /// plus the exported link scope; static archives keep the declared edge.
    #[test]
    fn property_link_elements_never_leak(
        kinds in proptest::collection::vec(binary_kind(), 1..=4),
    ) {
        let mut project = Project::new("demo");
        scopes::install(&mut project).unwrap();
        declare(&mut project, true, &kinds);

        for (index, kind) in kinds.iter().enumerate() {
            let extends = match kind {
                BinaryKind::SharedLibrary => vec!["api", "linkOnlyApi"],
                BinaryKind::StaticLibrary => vec!["implementation"],
                _ => continue,
            };

            let elements = project
                .configurations()
                .named(format!("variant{index}LinkElements"))
                .unwrap();
            let actual: Vec<&str> = elements.extends().iter().map(|n| n.as_str()).collect();
            prop_assert_eq!(actual, extends);
        }
    }
}
