//! Build script for samrh-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates sequencer.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate sequencer.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=sequencer.toml");

    let config_path = Path::new("sequencer.toml");
    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read sequencer.toml", &[e.to_string()]),
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => fail(
            "Invalid TOML syntax in sequencer.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    };

    let mut errors = Vec::new();
    let Some(root) = config.as_table() else {
        fail("sequencer.toml must be a table", &[]);
    };

    for (name, section) in root {
        let Some(section) = section.as_table() else {
            errors.push(format!("[{}] must be a table", name));
            continue;
        };
        match name.as_str() {
            "readiness" => validate_readiness(section, &mut errors),
            "motion" => validate_motion(section, &mut errors),
            "actuator" => validate_actuator(section, &mut errors),
            "serial" => validate_serial(section, &mut errors),
            _ => errors.push(format!("unknown section [{}]", name)),
        }
    }

    if !errors.is_empty() {
        fail("Invalid sequencer configuration", &errors);
    }

    println!("cargo:warning=sequencer.toml validated successfully");
}

fn validate_readiness(section: &toml::Table, errors: &mut Vec<String>) {
    for (key, value) in section {
        match key.as_str() {
            "configured" | "self_test_performed" | "homed" | "reference_position_set" => {
                if !value.is_bool() {
                    errors.push(format!("[readiness] {} must be true or false", key));
                }
            }
            _ => errors.push(format!("[readiness] unknown key '{}'", key)),
        }
    }
}

fn validate_motion(section: &toml::Table, errors: &mut Vec<String>) {
    for (key, value) in section {
        match key.as_str() {
            "position_limit_deg" => check_range(errors, "motion", key, value, 0, i32::MAX as i64),
            "units" => check_range(errors, "motion", key, value, 1, u8::MAX as i64),
            "unit_budget" => check_range(errors, "motion", key, value, 1, u32::MAX as i64),
            _ => errors.push(format!("[motion] unknown key '{}'", key)),
        }
    }
}

fn validate_actuator(section: &toml::Table, errors: &mut Vec<String>) {
    for (key, value) in section {
        match key.as_str() {
            "default_duty" => check_range(errors, "actuator", key, value, 0, u8::MAX as i64),
            "spi_frequency" => check_range(errors, "actuator", key, value, 1, 62_500_000),
            "spi_mode" => check_range(errors, "actuator", key, value, 0, 3),
            _ => errors.push(format!("[actuator] unknown key '{}'", key)),
        }
    }
}

fn validate_serial(section: &toml::Table, errors: &mut Vec<String>) {
    for (key, value) in section {
        match key.as_str() {
            "baudrate" => check_range(errors, "serial", key, value, 1, 921_600),
            _ => errors.push(format!("[serial] unknown key '{}'", key)),
        }
    }
}

fn check_range(
    errors: &mut Vec<String>,
    section: &str,
    key: &str,
    value: &toml::Value,
    min: i64,
    max: i64,
) {
    match value.as_integer() {
        Some(v) if (min..=max).contains(&v) => {}
        _ => errors.push(format!("[{}] {} must be {}-{}", section, key, min, max)),
    }
}

/// Abort the build with a boxed error report
fn fail(title: &str, lines: &[String]) -> ! {
    let body = lines
        .iter()
        .map(|line| {
            let truncated = if line.len() > 62 {
                format!("{}...", &line[..59])
            } else {
                line.clone()
            };
            format!("║  • {:<62} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n");
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}
