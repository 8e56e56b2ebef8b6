//! Environment layer tests, each run inside `figment::Jail`.

use std::path::Path;

use figment::Jail;

use contrast_audit::config::{AuditConfig, AuditOverrides, ConfigError, ConfigOverrides};

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("audit.toml", "[audit]\ntarget_ratio = 5.0\n")?;
        jail.set_env("CONTRAST_AUDIT_AUDIT__TARGET_RATIO", "7.0");

        let config =
            AuditConfig::load(Some(Path::new("audit.toml")), &ConfigOverrides::default()).unwrap();
        assert_eq!(config.audit.target_ratio, 7.0);
        assert!(config.audit.include_builtin);
        assert_eq!(config.audit.recommend.len(), 4);
        Ok(())
    });
}

#[test]
fn test_cli_overrides_env() {
    Jail::expect_with(|jail| {
        jail.set_env("CONTRAST_AUDIT_AUDIT__TARGET_RATIO", "7.0");
        jail.set_env("CONTRAST_AUDIT_AUDIT__INCLUDE_BUILTIN", "false");

        let overrides = ConfigOverrides {
            audit: AuditOverrides {
                target_ratio: Some(3.0),
                include_builtin: None,
            },
        };
        let config = AuditConfig::load(None, &overrides).unwrap();
        assert_eq!(config.audit.target_ratio, 3.0);
        assert!(!config.audit.include_builtin);
        Ok(())
    });
}

#[test]
fn test_env_without_nesting_is_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("CONTRAST_AUDIT_TARGET_RATIO", "7.0");

        let config = AuditConfig::load(None, &ConfigOverrides::default()).unwrap();
        assert_eq!(config.audit.target_ratio, 4.5);
        Ok(())
    });
}

#[test]
fn test_env_target_out_of_range_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("CONTRAST_AUDIT_AUDIT__TARGET_RATIO", "-1.5");

        let err = AuditConfig::load(None, &ConfigOverrides::default()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTargetRatio(r) if r == -1.5));
        Ok(())
    });
}
