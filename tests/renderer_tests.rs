#[cfg(test)]
mod tests {
    use ebrick::config::AppConfig;
    use ebrick::error::Error;
    use ebrick::renderer::{new_renderer, TemplateRenderer};
    use ebrick::template::registry::names;
    use ebrick::template::TemplateRegistry;
    use test_log::test;

    fn render_builtin(name: &str, config: &AppConfig) -> String {
        let text = TemplateRegistry::builtin().get(name).unwrap();
        new_renderer().render(name, text, &config.to_context().unwrap()).unwrap()
    }

    fn config() -> AppConfig {
        AppConfig::new("Order Service", "example.com/orders")
    }

    #[test]
    fn test_readme_lists_modules() {
        let config = AppConfig { modules: vec!["auth".into(), "billing".into()], ..config() };
        let readme = render_builtin(names::README, &config);
        assert!(readme.starts_with("# Order Service\n"));
        assert!(readme.contains("- `auth`\n- `billing`\n"));
        assert!(!readme.contains("No modules yet."));
    }

    #[test]
    fn test_readme_without_modules() {
        let readme = render_builtin(names::README, &config());
        assert!(readme.contains("No modules yet."));
        assert!(readme.contains("- Database: disabled"));
        assert!(!readme.contains("Grafana"));
    }

    #[test]
    fn test_readme_reports_enabled_capabilities() {
        let config = AppConfig { cache: true, observability: true, ..config() };
        let readme = render_builtin(names::README, &config);
        assert!(readme.contains("- Cache: enabled"));
        assert!(readme.contains("- Messaging: disabled"));
        assert!(readme.contains("Grafana at http://localhost:3000"));
    }

    #[test]
    fn test_names_are_case_converted() {
        let dockerfile = render_builtin(names::DOCKERFILE, &config());
        assert!(dockerfile.contains("ENTRYPOINT [\"/app/order-service\"]"));

        let config = AppConfig { database: true, ..config() };
        let application = render_builtin(names::APPLICATION, &config);
        assert!(application.contains("dbname: order_service"));
    }

    #[test]
    fn test_compose_depends_on_enabled_services() {
        let config = AppConfig { database: true, messaging: true, ..config() };
        let compose = render_builtin(names::DOCKER_COMPOSE, &config);
        assert!(compose.contains("    depends_on:\n      - postgres\n      - nats\n"));
        assert!(!compose.contains("redis"));
    }

    #[test]
    fn test_compose_without_services_has_no_depends_on() {
        let compose = render_builtin(names::DOCKER_COMPOSE, &config());
        assert!(!compose.contains("depends_on"));
        assert!(compose.starts_with("services:\n  order-service:\n"));
    }

    #[test]
    fn test_module_imports_use_go_package_names() {
        let config = AppConfig { modules: vec!["user-profile".into()], ..config() };
        let main = render_builtin(names::MAIN, &config);
        assert!(main.contains("example.com/orders/modules/userprofile"));
        assert!(main.contains("app.EnableModule(\"user-profile\")"));
    }

    #[test]
    fn test_entry_point_quotes_go_strings() {
        let config = AppConfig {
            modules: vec!["auth.v2".into()],
            ..AppConfig::new(r#"Bob's "Shop" \ Co"#, "example.com/shop")
        };
        let main = render_builtin(names::MAIN, &config);
        assert!(main.contains(r#"appName    = "Bob's \"Shop\" \\ Co""#), "{main}");
        assert!(main.contains(r#"appPackage = "example.com/shop""#));
        assert!(main.contains(r#"app.EnableModule("auth.v2")"#));
    }

    #[test]
    fn test_custom_template_with_unknown_field_fails() {
        let result = new_renderer().render(
            "custom",
            "{{ name }} uses {{ framework }}",
            &config().to_context().unwrap(),
        );
        assert!(matches!(result, Err(Error::Template { .. })));
    }
}
