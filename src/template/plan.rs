//! Decides which files a generation run produces.

use crate::config::AppConfig;
use crate::template::registry::names;
use std::collections::BTreeMap;

/// Files every application gets, keyed by output path.
const BASE_FILES: &[(&str, &str)] = &[
    ("application.yaml", names::APPLICATION),
    ("cmd/main.go", names::MAIN),
    ("docker-compose.yml", names::DOCKER_COMPOSE),
    ("go.mod", names::GO_MOD),
    ("README.md", names::README),
    ("Dockerfile", names::DOCKERFILE),
];

/// Files added when observability is enabled.
const OBSERVABILITY_FILES: &[(&str, &str)] = &[
    ("observability/prometheus/prometheus.yml", names::PROMETHEUS),
    ("observability/grafana/datasource.yml", names::GRAFANA_DATASOURCE),
];

/// Mapping from output path (forward-slash separated, relative to the output
/// root) to the name of the template that produces it.
///
/// Iteration is in lexicographic path order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePlan {
    entries: BTreeMap<String, &'static str>,
}

impl FilePlan {
    /// Builds the plan for `config`.
    ///
    /// Only `observability` changes which files are produced. The `database`,
    /// `cache` and `messaging` flags are read by the templates themselves.
    pub fn build(config: &AppConfig) -> Self {
        let mut entries = BTreeMap::new();
        for (path, template) in BASE_FILES {
            entries.insert(path.to_string(), *template);
        }
        if config.observability {
            for (path, template) in OBSERVABILITY_FILES {
                entries.insert(path.to_string(), *template);
            }
        }
        Self { entries }
    }

    /// Iterates `(output path, template name)` pairs in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &'static str)> {
        self.entries.iter().map(|(path, template)| (path.as_str(), *template))
    }

    /// Output paths relative to the root, in order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Template used to produce `path`, if it is planned.
    pub fn template_for(&self, path: &str) -> Option<&'static str> {
        self.entries.get(path).copied()
    }

    /// Number of files to generate.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is planned.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
