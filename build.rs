//! Stamps the crate with its build time, exposed as `designcanvas::BUILD_DATE`.

fn main() {
    let stamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    println!("cargo:rustc-env=BUILD_DATE={stamp}");
    println!("cargo:rerun-if-changed=build.rs");
}
