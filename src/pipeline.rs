//! Generation Pipeline
//!
//! Scanner → aggregate headers → public include tree → forward headers.
//!
//! The scan (with its collision check) finishes before the first file is
//! written, so a collision leaves both trees untouched. Later stages only
//! borrow the immutable [`ScanResult`](crate::types::ScanResult).

use tracing::info;

use crate::config::Config;
use crate::generator::{
    AggregateGenerator, ForwardGenerator, HeaderTemplate, PublicIncludeRebuilder, collect_entries,
};
use crate::project::Project;
use crate::scanner::HeaderScanner;
use crate::types::Result;

/// Counts of the files a run produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub headers_scanned: usize,
    pub aggregate_headers: usize,
    pub redirect_headers: usize,
    pub forward_headers: usize,
}

/// Run every stage against `project`; `year` fills the license template
pub fn run(project: &Project, config: &Config, year: i32) -> Result<RunSummary> {
    let naming = config.naming();
    let scope = config.aggregate_scope();
    let license = HeaderTemplate::new(config.header.as_str()).render(year);

    let scan = HeaderScanner::from_config(&project.source_root, config).scan()?;

    let aggregates = AggregateGenerator::new(&project.source_root, &naming, &license)
        .generate(&scan, &scope)?;

    let redirects = PublicIncludeRebuilder::new(project, &naming, &scope)
        .with_global_includes(config.create_global_includes)
        .rebuild(&scan)?;

    let groups = collect_entries(&scan, &naming)?;
    let forwards = ForwardGenerator::new(
        &project.source_root,
        &naming,
        &project.namespace_root,
        &license,
    )
    .generate(&groups)?;

    let summary = RunSummary {
        headers_scanned: scan.header_count(),
        aggregate_headers: aggregates.len(),
        redirect_headers: redirects,
        forward_headers: forwards.len(),
    };
    info!(
        "Generated {} aggregate, {} redirect and {} forward headers",
        summary.aggregate_headers, summary.redirect_headers, summary.forward_headers
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HeaderGenError;
    use std::collections::BTreeMap;
    use std::path::Path;
    use tempfile::TempDir;

    const YEAR: i32 = 2024;

    fn config() -> Config {
        Config {
            header: "// (c) {year}\n#pragma once\n\n\n".to_string(),
            excluded_directories: vec!["detail".to_string()],
            ..Default::default()
        }
    }

    fn setup(files: &[(&str, &str)]) -> (TempDir, Project) {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("src/erbsland");
        std::fs::create_dir_all(&source).unwrap();
        std::fs::create_dir_all(temp.path().join("include")).unwrap();
        for (relative, content) in files {
            let path = source.join(relative);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, content).unwrap();
        }
        let project = Project::locate(temp.path(), &config()).unwrap();
        (temp, project)
    }

    /// Every file below `root` with its content
    fn snapshot(root: &Path) -> BTreeMap<String, String> {
        let mut files = BTreeMap::new();
        for entry in ignore::WalkBuilder::new(root)
            .standard_filters(false)
            .build()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_some_and(|t| t.is_file()))
        {
            let rel = entry.path().strip_prefix(root).unwrap();
            files.insert(
                rel.to_string_lossy().replace('\\', "/"),
                std::fs::read_to_string(entry.path()).unwrap(),
            );
        }
        files
    }

    #[test]
    fn test_core_with_excluded_detail() {
        let (_temp, project) = setup(&[
            ("core/y.hpp", ""),
            ("core/x.hpp", ""),
            ("core/detail/z.hpp", ""),
        ]);

        run(&project, &config(), YEAR).unwrap();

        let source = snapshot(&project.source_root);
        assert_eq!(
            source["core/all.hpp"],
            "// (c) 2024\n#pragma once\n\n\n#include \"x.hpp\"\n#include \"y.hpp\"\n\n\n"
        );
        assert!(!source.contains_key("core/detail/all.hpp"));

        let public = snapshot(&project.public_root);
        assert_eq!(
            public["core/detail/z.hpp"],
            "#include \"../../../../src/erbsland/core/detail/z.hpp\"\n"
        );
        assert!(public.contains_key("core/all.hpp"));
        assert!(public.contains_key("all_core.hpp"));
        assert!(!public.contains_key("core/detail/all.hpp"));
        assert!(!public.contains_key("all_core_detail.hpp"));
    }

    #[test]
    fn test_forward_header_scenario() {
        let (_temp, project) = setup(&[(
            "net/http/Request.hpp",
            "#pragma once\n// fwd-entry: class Foo\n// fwd-entry: enum class Bar\n",
        )]);

        let summary = run(&project, &config(), YEAR).unwrap();
        assert_eq!(summary.forward_headers, 1);

        let text =
            std::fs::read_to_string(project.source_root.join("net/http/fwd.hpp")).unwrap();
        assert_eq!(
            text,
            "// (c) 2024\n#pragma once\n\n\n\
             #include <cstdint>\n#include <type_traits>\n\n\n\
             namespace erbsland::net::http {\n\n\n\
             class Foo;\nenum class Bar;\n\n\n\
             }\n\n\n"
        );
        assert!(!project.source_root.join("net/fwd.hpp").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_header_is_aggregated_and_redirected() {
        let (temp, project) = setup(&[("core/x.hpp", "")]);
        let real = temp.path().join("Linked.hpp");
        std::fs::write(&real, "// fwd-entry: class Linked\n").unwrap();
        std::os::unix::fs::symlink(&real, project.source_root.join("core/Linked.hpp")).unwrap();

        run(&project, &config(), YEAR).unwrap();

        let aggregate = std::fs::read_to_string(project.source_root.join("core/all.hpp")).unwrap();
        assert!(aggregate.contains("#include \"Linked.hpp\"\n#include \"x.hpp\"\n"));
        assert_eq!(
            std::fs::read_to_string(project.public_root.join("core/Linked.hpp")).unwrap(),
            "#include \"../../../src/erbsland/core/Linked.hpp\"\n"
        );
        let forward = std::fs::read_to_string(project.source_root.join("core/fwd.hpp")).unwrap();
        assert!(forward.contains("class Linked;\n"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_header_name_fails_before_writing() {
        use std::os::unix::ffi::OsStrExt;

        let (_temp, project) = setup(&[("core/x.hpp", "")]);
        let name = std::ffi::OsStr::from_bytes(b"Bad\xff.hpp");
        std::fs::write(project.source_root.join("core").join(name), "").unwrap();

        let err = run(&project, &config(), YEAR).unwrap_err();
        assert!(matches!(err, HeaderGenError::FileAccess { .. }));
        assert!(!project.source_root.join("core/all.hpp").exists());
        assert!(!project.public_root.exists());
    }

    #[test]
    fn test_forward_header_not_aggregated_but_redirected_on_rerun() {
        let (_temp, project) = setup(&[("net/Socket.hpp", "// fwd-entry: class Socket\n")]);

        run(&project, &config(), YEAR).unwrap();
        run(&project, &config(), YEAR).unwrap();

        let aggregate = std::fs::read_to_string(project.source_root.join("net/all.hpp")).unwrap();
        assert!(!aggregate.contains("fwd.hpp"));
        assert!(project.public_root.join("net/fwd.hpp").is_file());
    }

    #[test]
    fn test_collision_writes_nothing() {
        let (_temp, project) = setup(&[("a/Value.hpp", ""), ("b/Value.hpp", "")]);
        std::fs::create_dir_all(project.public_root.join("keep")).unwrap();
        std::fs::write(project.public_root.join("keep/Old.hpp"), "old").unwrap();

        let err = run(&project, &config(), YEAR).unwrap_err();
        assert!(matches!(err, HeaderGenError::Collision { .. }));

        assert!(!project.source_root.join("a/all.hpp").exists());
        assert!(!project.source_root.join("b/all.hpp").exists());
        assert!(project.public_root.join("keep/Old.hpp").is_file());
    }

    #[test]
    fn test_idempotent_runs() {
        let (_temp, project) = setup(&[
            ("qt/toml/Value.hpp", "// fwd-entry: class Value\n"),
            ("qt/toml/Parser.hpp", "// fwd-entry: class Parser\n"),
            ("qt/toml/impl/Token.hpp", ""),
            ("qt/TomlParser.hpp", ""),
        ]);
        let config = Config {
            excluded_directories: vec!["impl".to_string()],
            create_global_includes: true,
            ..config()
        };

        // The first run creates the forward headers the second run redirects
        run(&project, &config, YEAR).unwrap();
        run(&project, &config, YEAR).unwrap();
        let source = snapshot(&project.source_root);
        let public = snapshot(&project.public_root);

        run(&project, &config, YEAR).unwrap();
        assert_eq!(snapshot(&project.source_root), source);
        assert_eq!(snapshot(&project.public_root), public);
    }

    #[test]
    fn test_every_header_is_redirected() {
        let (_temp, project) = setup(&[
            ("Top.hpp", ""),
            ("qt/toml/Value.hpp", ""),
            ("qt/toml/detail/Impl.hpp", ""),
            ("net/http/Request.hpp", ""),
        ]);

        run(&project, &config(), YEAR).unwrap();

        let public = snapshot(&project.public_root);
        for header in [
            "Top.hpp",
            "qt/toml/Value.hpp",
            "qt/toml/detail/Impl.hpp",
            "net/http/Request.hpp",
        ] {
            let text = &public[header];
            assert!(text.ends_with(&format!("src/erbsland/{}\"\n", header)));
        }
    }

    #[test]
    fn test_stale_redirects_are_removed() {
        let (_temp, project) = setup(&[("core/Old.hpp", ""), ("core/New.hpp", "")]);
        run(&project, &config(), YEAR).unwrap();
        assert!(project.public_root.join("core/Old.hpp").is_file());

        std::fs::remove_file(project.source_root.join("core/Old.hpp")).unwrap();
        run(&project, &config(), YEAR).unwrap();

        assert!(!project.public_root.join("core/Old.hpp").exists());
        assert!(project.public_root.join("core/New.hpp").is_file());
        let aggregate = std::fs::read_to_string(project.source_root.join("core/all.hpp")).unwrap();
        assert!(!aggregate.contains("Old.hpp"));
    }

    #[test]
    fn test_scoped_aggregates() {
        let (_temp, project) = setup(&[
            ("qt/Base.hpp", ""),
            ("qt/toml/Value.hpp", ""),
            ("net/Socket.hpp", ""),
        ]);
        let config = Config {
            create_all_base_dir: "qt".to_string(),
            ..config()
        };

        run(&project, &config, YEAR).unwrap();

        assert!(project.source_root.join("qt/all.hpp").is_file());
        assert!(project.source_root.join("qt/toml/all.hpp").is_file());
        assert!(!project.source_root.join("net/all.hpp").exists());

        let public = snapshot(&project.public_root);
        assert_eq!(
            public["qt/all_toml.hpp"],
            "#include \"../../../src/erbsland/qt/toml/all.hpp\"\n"
        );
        assert!(public.contains_key("qt/toml/all.hpp"));
        assert!(public.contains_key("qt/all.hpp"));
        assert!(!public.contains_key("net/all.hpp"));
        // Ordinary headers are redirected regardless of scope
        assert!(public.contains_key("net/Socket.hpp"));
    }

    #[test]
    fn test_summary_counts() {
        let (_temp, project) = setup(&[
            ("core/x.hpp", "// fwd-entry: class X\n"),
            ("core/y.hpp", ""),
        ]);

        let summary = run(&project, &config(), YEAR).unwrap();
        assert_eq!(
            summary,
            RunSummary {
                headers_scanned: 2,
                aggregate_headers: 1,
                redirect_headers: 4,
                forward_headers: 1,
            }
        );
    }
}
