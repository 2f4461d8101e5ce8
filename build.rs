use std::{env, path::PathBuf};

fn main() {
    // 1) Load optional env files
    let _ = dotenvy::from_filename(".env");
    load_home_env(".shift-clock.env");

    // 2) Provide fallbacks so the demo shows the reference time without any .env
    let demo_hours = env_or_default("DEMO_HOURS", "12");
    let demo_minutes = env_or_default("DEMO_MINUTES", "34");

    for (key, value) in [("DEMO_HOURS", &demo_hours), ("DEMO_MINUTES", &demo_minutes)] {
        if !value.parse::<u8>().is_ok_and(|number| number <= 99) {
            println!("cargo:warning={key}={value} is not a two-digit number; the demo will reject it");
        }
    }

    // 3) Expose as compile-time constants
    println!("cargo:rustc-env=DEMO_HOURS={demo_hours}");
    println!("cargo:rustc-env=DEMO_MINUTES={demo_minutes}");

    // Optional: don't rebuild unless these change
    println!("cargo:rerun-if-env-changed=DEMO_HOURS");
    println!("cargo:rerun-if-env-changed=DEMO_MINUTES");
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-changed=build.rs");
}

fn load_home_env(file: &str) {
    let home = match env::var_os("USERPROFILE").or_else(|| env::var_os("HOME")) {
        Some(path) => PathBuf::from(path),
        None => return,
    };
    let path = home.join(file);
    let _ = dotenvy::from_path(&path);
}

fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
