mod common;

use common::TestEnv;

const EXTRA_PRODUCTS: &str = r#"
[catalog]
seed = false

[[catalog.products]]
kind = "electronics"
name = "Tablet"
category = "Electronics"
price = 329.5
quantity = 8
id = 6
brand = "Acme"

[output]
currency = "€"
"#;

#[test]
fn test_project_config_replaces_catalog_and_currency() {
    let env = TestEnv::new();
    env.write_project_file("stockroom.toml", EXTRA_PRODUCTS);

    let result = env.run(&["list"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("Price: €329.5\n"));
    assert!(result.stdout.contains("Brand: Acme\n"));
    assert!(!result.stdout.contains("Apple"));
}

#[test]
fn test_env_overrides_config_file() {
    let env = TestEnv::new();
    env.write_project_file("stockroom.toml", EXTRA_PRODUCTS);

    let result = env.run_with_env(&["list"], "", &[("STOCKROOM_SEED", "true")]);

    assert!(result.success);
    assert!(result.stdout.contains("Product Name: Apple"));
    assert!(result.stdout.contains("Product Name: Tablet"));
}

#[test]
fn test_unknown_key_warns_on_stderr() {
    let env = TestEnv::new();
    env.write_project_file("stockroom.toml", "[output]\ncurency = \"£\"\n");

    let result = env.run(&["list"]);

    assert!(result.success);
    assert!(result.stderr.contains("Unknown config key 'curency'"));
    assert!(result.stderr.contains("Did you mean 'currency'?"));
    assert!(result.stdout.contains("Price: $1.99"));
}

#[test]
fn test_explicit_missing_config_fails() {
    let env = TestEnv::new();

    let result = env.run(&["--config", "missing.toml", "list"]);

    assert!(!result.success);
    assert!(result.stderr.contains("config file not found"));
}

#[test]
fn test_malformed_config_fails() {
    let env = TestEnv::new();
    let path = env.write_project_file("custom.toml", "[catalog\nseed = ");

    let result = env.run(&["--config", path.to_str().unwrap(), "list"]);

    assert!(!result.success);
    assert!(result.stderr.contains("invalid config"));
}
