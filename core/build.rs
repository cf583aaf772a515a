use std::collections::HashSet;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Deserialize)]
struct SiteFile {
    theme: ThemeSection,
    scroll_spy: ScrollSpySection,
    typing: TypingSection,
    reveal: RevealSection,
    scroll_top: ScrollTopSection,
    contact: ContactSection,
}

#[derive(Deserialize)]
struct ThemeSection {
    storage_key: String,
}

#[derive(Deserialize)]
struct ScrollSpySection {
    sections: Vec<String>,
}

#[derive(Deserialize)]
struct TypingSection {
    phrases: Vec<String>,
    type_ms: u32,
    delete_ms: u32,
    pause_full_ms: u32,
    pause_empty_ms: u32,
}

#[derive(Deserialize)]
struct RevealSection {
    progress_threshold: f64,
    content_threshold: f64,
}

#[derive(Deserialize)]
struct ScrollTopSection {
    show_at: f64,
}

#[derive(Deserialize)]
struct ContactSection {
    success: String,
    failure: String,
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir);
    let env_path = workspace_root.join(".env");
    let env_local_path = workspace_root.join(".env.local");

    let _ = dotenvy::from_filename(&env_local_path);
    let _ = dotenvy::from_filename(&env_path);

    println!("cargo:rerun-if-env-changed=SITE_CONFIG_PATH");
    println!("cargo:rerun-if-changed={}", env_path.display());
    println!("cargo:rerun-if-changed={}", env_local_path.display());

    let config_path = resolve_config_path(workspace_root);
    println!("cargo:rerun-if-changed={}", config_path.display());

    let contents = fs::read_to_string(&config_path).unwrap_or_else(|err| {
        panic!(
            "failed to read site config at {}: {err}",
            config_path.display()
        )
    });

    let site: SiteFile = toml::from_str(&contents).unwrap_or_else(|err| {
        panic!(
            "failed to parse site config at {}: {err}",
            config_path.display()
        )
    });

    validate(&site, &config_path);

    let mut output = String::new();
    writeln!(
        &mut output,
        "pub const THEME_STORAGE_KEY: &str = {};",
        rust_string(&site.theme.storage_key)
    )
    .unwrap();
    writeln!(&mut output).unwrap();
    write_str_slice(&mut output, "SECTION_IDS", &site.scroll_spy.sections);
    write_str_slice(&mut output, "PHRASES", &site.typing.phrases);
    writeln!(&mut output).unwrap();
    writeln!(&mut output, "pub const TYPE_DELAY_MS: u32 = {};", site.typing.type_ms).unwrap();
    writeln!(&mut output, "pub const DELETE_DELAY_MS: u32 = {};", site.typing.delete_ms).unwrap();
    writeln!(
        &mut output,
        "pub const PAUSE_FULL_MS: u32 = {};",
        site.typing.pause_full_ms
    )
    .unwrap();
    writeln!(
        &mut output,
        "pub const PAUSE_EMPTY_MS: u32 = {};",
        site.typing.pause_empty_ms
    )
    .unwrap();
    writeln!(&mut output).unwrap();
    writeln!(
        &mut output,
        "pub const PROGRESS_THRESHOLD: f64 = {:?};",
        site.reveal.progress_threshold
    )
    .unwrap();
    writeln!(
        &mut output,
        "pub const CONTENT_THRESHOLD: f64 = {:?};",
        site.reveal.content_threshold
    )
    .unwrap();
    writeln!(
        &mut output,
        "pub const SCROLL_TOP_SHOW_AT: f64 = {:?};",
        site.scroll_top.show_at
    )
    .unwrap();
    writeln!(&mut output).unwrap();
    writeln!(
        &mut output,
        "pub const CONTACT_SUCCESS_NOTICE: &str = {};",
        rust_string(&site.contact.success)
    )
    .unwrap();
    writeln!(
        &mut output,
        "pub const CONTACT_FAILURE_NOTICE: &str = {};",
        rust_string(&site.contact.failure)
    )
    .unwrap();

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("missing OUT_DIR"));
    let out_path = out_dir.join("site_config.rs");
    fs::write(&out_path, output).unwrap_or_else(|err| {
        panic!("failed to write {}: {err}", out_path.display())
    });
}

fn resolve_config_path(workspace_root: &Path) -> PathBuf {
    let env_value = env::var("SITE_CONFIG_PATH").ok();
    let raw_path = match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => workspace_root.join("site.toml"),
    };
    if raw_path.is_relative() {
        workspace_root.join(raw_path)
    } else {
        raw_path
    }
}

fn rust_string(value: &str) -> String {
    format!("{:?}", value)
}

fn write_str_slice(output: &mut String, name: &str, values: &[String]) {
    writeln!(output, "pub const {name}: &[&str] = &[").unwrap();
    for value in values {
        writeln!(output, "    {},", rust_string(value)).unwrap();
    }
    writeln!(output, "];").unwrap();
}

fn validate(site: &SiteFile, config_path: &Path) {
    if site.theme.storage_key.trim().is_empty() {
        panic!("theme.storage_key cannot be empty in {}", config_path.display());
    }
    if site.typing.phrases.is_empty() {
        panic!("typing.phrases has no entries in {}", config_path.display());
    }
    if site.typing.phrases.iter().all(|phrase| phrase.is_empty()) {
        panic!("typing.phrases are all empty in {}", config_path.display());
    }
    let mut ids = HashSet::new();
    for id in &site.scroll_spy.sections {
        if id.trim().is_empty() {
            panic!("scroll_spy section id cannot be empty in {}", config_path.display());
        }
        if id.contains(|ch: char| ch.is_whitespace() || ch == '"' || ch == '#') {
            panic!(
                "scroll_spy section id '{}' is not a plain element id in {}",
                id,
                config_path.display()
            );
        }
        if !ids.insert(id.clone()) {
            panic!(
                "duplicate scroll_spy section '{}' in {}",
                id,
                config_path.display()
            );
        }
    }
    for (label, value) in [
        ("reveal.progress_threshold", site.reveal.progress_threshold),
        ("reveal.content_threshold", site.reveal.content_threshold),
    ] {
        if !(0.0..=1.0).contains(&value) {
            panic!(
                "{label} must be within 0.0..=1.0, got {value} in {}",
                config_path.display()
            );
        }
    }
    if !site.scroll_top.show_at.is_finite() || site.scroll_top.show_at < 0.0 {
        panic!(
            "scroll_top.show_at must be a non-negative number in {}",
            config_path.display()
        );
    }
    if site.typing.type_ms == 0 || site.typing.delete_ms == 0 {
        panic!(
            "typing per-character delays must be positive in {}",
            config_path.display()
        );
    }
}
