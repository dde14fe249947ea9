// File: crates/chart-core/build.rs
// Summary: Links the Windows system library Skia's font manager needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW / RegQueryInfoKeyW used by the system font lookup
        println!("cargo:rustc-link-lib=advapi32");
    }
}
