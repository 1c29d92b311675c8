//! Built-in templates, embedded at compile time from the `templates/` directory.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use std::sync::LazyLock;

/// Logical names of the built-in templates.
pub mod names {
    pub const APPLICATION: &str = "application.yaml";
    pub const MAIN: &str = "main.go";
    pub const DOCKER_COMPOSE: &str = "docker-compose.yml";
    pub const GO_MOD: &str = "go.mod";
    pub const README: &str = "README.md";
    pub const DOCKERFILE: &str = "Dockerfile";
    pub const PROMETHEUS: &str = "prometheus.yml";
    pub const GRAFANA_DATASOURCE: &str = "datasource.yml";
}

const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (names::APPLICATION, include_str!("../../templates/application.yaml.tmpl")),
    (names::MAIN, include_str!("../../templates/main.go.tmpl")),
    (names::DOCKER_COMPOSE, include_str!("../../templates/docker-compose.yml.tmpl")),
    (names::GO_MOD, include_str!("../../templates/go.mod.tmpl")),
    (names::README, include_str!("../../templates/README.md.tmpl")),
    (names::DOCKERFILE, include_str!("../../templates/Dockerfile.tmpl")),
    (
        names::PROMETHEUS,
        include_str!("../../templates/observability/prometheus/prometheus.yml.tmpl"),
    ),
    (
        names::GRAFANA_DATASOURCE,
        include_str!("../../templates/observability/grafana/datasource.yml.tmpl"),
    ),
];

static BUILTIN: LazyLock<TemplateRegistry> = LazyLock::new(|| {
    let mut registry = TemplateRegistry::new();
    for &(name, text) in BUILTIN_TEMPLATES {
        registry.register(name, text);
    }
    registry
});

/// Mapping from logical template name to raw template text.
#[derive(Debug, Default, Clone)]
pub struct TemplateRegistry {
    templates: IndexMap<&'static str, &'static str>,
}

impl TemplateRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide set of built-in templates.
    pub fn builtin() -> &'static TemplateRegistry {
        &BUILTIN
    }

    /// Registers `text` under `name`, replacing a previous entry with that name.
    pub fn register(&mut self, name: &'static str, text: &'static str) {
        self.templates.insert(name, text);
    }

    /// Looks up the raw text of a template.
    pub fn get(&self, name: &str) -> Result<&'static str> {
        self.templates
            .get(name)
            .copied()
            .ok_or_else(|| Error::TemplateNotFound(name.to_string()))
    }

    /// Whether a template is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.templates.keys().copied()
    }

    /// Number of registered templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether no template is registered.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
