// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Generates `simd_lanes.rs`: lane counts used by the `simd` comparison loops.

use std::env;
use std::fs;
use std::path::Path;

/// True if `feature` is listed in comma-separated `CARGO_CFG_TARGET_FEATURE`
fn has_feature(list: &str, feature: &str) -> bool {
    list.split(',').any(|f| f == feature)
}

/// Lane counts for 8, 16, 32 and 64-bit elements, from the widest vector
/// register the target enables.
fn lanes_for_target(arch: &str, feats: &str) -> [usize; 4] {
    let register_bits = match arch {
        "x86_64" | "x86" if has_feature(feats, "avx512f") => 512,
        "x86_64" | "x86" if has_feature(feats, "avx2") => 256,
        "x86_64" | "x86" if has_feature(feats, "sse2") => 128,
        // All aarch64 CPUs have NEON unless explicitly disabled.
        "aarch64" if has_feature(feats, "neon") => 128,
        "wasm32" if has_feature(feats, "simd128") => 128,
        _ => 64,
    };
    [register_bits / 8, register_bits / 16, register_bits / 32, register_bits / 64]
}

/// Parses `SIMD_LANES_OVERRIDE`, e.g. `"64,32,16,8"`.
///
/// Each count becomes a bit shift into a 64-bit output word, so it must be a
/// power of two no larger than 64.
fn parse_override(val: &str) -> [usize; 4] {
    let parsed: Vec<usize> = val
        .split(',')
        .map(|s| {
            s.trim()
                .parse::<usize>()
                .unwrap_or_else(|_| panic!("SIMD_LANES_OVERRIDE: {:?} is not an integer", s))
        })
        .collect();
    match parsed.as_slice() {
        &[w8, w16, w32, w64] => {
            let lanes = [w8, w16, w32, w64];
            for l in lanes {
                assert!(
                    l.is_power_of_two() && l <= 64,
                    "SIMD_LANES_OVERRIDE: lane count {l} must be a power of two no larger than 64"
                );
            }
            lanes
        }
        _ => panic!("Invalid SIMD_LANES_OVERRIDE. Expected 4 comma-separated integers, e.g., \"64,32,16,8\""),
    }
}

fn main() {
    // Target features supplied by `cargo` (`--print cfg`)
    let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let feats = env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default();

    let [w8, w16, w32, w64] = match env::var("SIMD_LANES_OVERRIDE") {
        Ok(val) => {
            let lanes = parse_override(&val);
            println!("cargo:warning=SIMD_LANES_OVERRIDE applied: {:?}", lanes);
            lanes
        }
        Err(_) => lanes_for_target(&arch, &feats),
    };

    let out_dir = env::var("OUT_DIR").expect("cargo always sets OUT_DIR for build scripts");
    let out_path = Path::new(&out_dir).join("simd_lanes.rs");

    // W8 serves u8/i8, W64 serves u64/i64/f64: the wider the element, the fewer lanes.
    fs::write(
        &out_path,
        format!(
            "
/// Auto-generated SIMD lane widths from build.rs

/// SIMD lane count for 8-bit elements (u8, i8).
#[allow(dead_code)]
pub const W8: usize = {w8};

/// SIMD lane count for 16-bit elements (u16, i16).
#[allow(dead_code)]
pub const W16: usize = {w16};

/// SIMD lane count for 32-bit elements (u32, i32, f32).
#[allow(dead_code)]
pub const W32: usize = {w32};

/// SIMD lane count for 64-bit elements (u64, i64, f64).
#[allow(dead_code)]
pub const W64: usize = {w64};
"
        ),
    )
    .unwrap_or_else(|e| panic!("failed to write {}: {}", out_path.display(), e));

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=CARGO_CFG_TARGET_ARCH");
    println!("cargo:rerun-if-env-changed=CARGO_CFG_TARGET_FEATURE");
    println!("cargo:rerun-if-env-changed=SIMD_LANES_OVERRIDE");
}
