use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR not set"));

    // Monotonic build counter, kept under OUT_DIR so compiling never
    // dirties the source tree.
    let counter_file = out_dir.join("build-number");
    let build_number = fs::read_to_string(&counter_file)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(0)
        + 1;
    fs::write(&counter_file, build_number.to_string()).expect("cannot write build counter");

    // A VERSION file overrides the package version when present.
    let version = fs::read_to_string("VERSION")
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|_| std::env::var("CARGO_PKG_VERSION").expect("CARGO_PKG_VERSION not set"));

    let profile = match std::env::var("PROFILE").as_deref() {
        Ok("release") => "release",
        _ => "development",
    };

    let git_hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=INTITOOL_VERSION={version}");
    println!("cargo:rustc-env=INTITOOL_BUILD={build_number}");
    println!("cargo:rustc-env=INTITOOL_PROFILE={profile}");
    println!("cargo:rustc-env=INTITOOL_GIT_HASH={git_hash}");

    println!("cargo:rerun-if-changed=VERSION");
    println!("cargo:rerun-if-env-changed=PROFILE");
}
