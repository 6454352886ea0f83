use chrono::{SecondsFormat, Utc};

/// Stamps `BUILD_TIME` (RFC 3339, UTC) for the footer's copyright year.
fn main() {
    let stamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    println!("cargo:rustc-env=BUILD_TIME={stamp}");
    println!("cargo:rerun-if-changed=build.rs");
}
