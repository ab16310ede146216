use std::sync::Mutex;

use super::*;

/// Serializes tests in this file; they share process environment.
static ENV: Mutex<()> = Mutex::new(());

/// # Safety
/// Callers hold `ENV`.
unsafe fn clear_server_env() {
    unsafe {
        for key in ["HOST", "PORT", "SITE_DIR", "PKG_DIR", "KNOWLEDGE_BASE_FILE"] {
            std::env::remove_var(key);
        }
    }
}

#[test]
fn from_env_defaults() {
    let _guard = ENV.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_dir, PathBuf::from(DEFAULT_SITE_DIR));
    assert_eq!(cfg.pkg_dir, PathBuf::from(DEFAULT_PKG_DIR));
    assert_eq!(cfg.knowledge_base_file, PathBuf::from(DEFAULT_KNOWLEDGE_BASE_FILE));
    assert_eq!(cfg.bind_addr().to_string(), "127.0.0.1:5000");
}

#[test]
fn from_env_overrides() {
    let _guard = ENV.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_server_env();
        std::env::set_var("HOST", "0.0.0.0");
        std::env::set_var("PORT", "8080");
        std::env::set_var("SITE_DIR", "/srv/site");
        std::env::set_var("KNOWLEDGE_BASE_FILE", "/srv/kb.txt");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:8080");
    assert_eq!(cfg.site_dir, PathBuf::from("/srv/site"));
    assert_eq!(cfg.pkg_dir, PathBuf::from(DEFAULT_PKG_DIR));
    assert_eq!(cfg.knowledge_base_file, PathBuf::from("/srv/kb.txt"));

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_bad_port() {
    let _guard = ENV.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "cinco mil");
    }

    let err = ServerConfig::from_env().unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "cinco mil".into() });
    assert_eq!(err.to_string(), "invalid PORT: cinco mil");

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_bad_host() {
    let _guard = ENV.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_server_env();
        std::env::set_var("HOST", "localhost:80");
    }

    assert!(matches!(ServerConfig::from_env(), Err(ConfigError::Invalid { var: "HOST", .. })));

    unsafe { clear_server_env() };
}
