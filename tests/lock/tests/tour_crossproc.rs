//! Cross-process determinism test.
//!
//! Spawns the `tour_fixture` binary under several environment variants and
//! asserts that all produce identical output, then checks the output against
//! pinned values for the triangle instance.

use std::path::Path;
use std::process::Command;

/// Resolve the workspace root.
fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

/// Run the fixture with the given cwd and environment overrides.
/// Returns stdout as a string.
fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = env!("CARGO_BIN_EXE_tour_fixture");
    let mut command = Command::new(bin);
    command
        .current_dir(work_dir)
        .env_remove("LC_ALL")
        .env_remove("LANG")
        .env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });
    assert!(
        output.status.success(),
        "tour_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

fn field<'a>(output: &'a str, key: &str) -> &'a str {
    output
        .lines()
        .find_map(|line| line.strip_prefix(key)?.strip_prefix('='))
        .unwrap_or_else(|| panic!("missing {key} in output:\n{output}"))
}

#[test]
fn crossproc_determinism_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);

    let variant_cwd = run_variant(&std::env::temp_dir().to_string_lossy(), &[]);
    assert_eq!(baseline, variant_cwd, "output differs when cwd changes");

    let variant_locale = run_variant(&root, &[("LC_ALL", "C"), ("LANG", "C")]);
    assert_eq!(baseline, variant_locale, "output differs when LC_ALL=C LANG=C");

    let variant_noise = run_variant(
        &root,
        &[
            ("TSP_NOISE", "should_not_matter"),
            ("TZ", "America/New_York"),
            ("RUST_LOG", "trace"),
        ],
    );
    assert_eq!(
        baseline, variant_noise,
        "output differs with spurious env vars (TSP_NOISE, TZ, RUST_LOG)"
    );
}

#[test]
fn crossproc_triangle_matches_pinned_values() {
    let output = run_variant(&workspace_root(), &[]);
    assert_eq!(
        field(&output, "triangle.matrix_digest"),
        "sha256:e20220482b96452ef9c0c3709958cd3e22ba6666329a2402c6d64785ec02fcf9"
    );
    assert_eq!(field(&output, "triangle.cost"), "6");
    assert_eq!(field(&output, "triangle.tour"), "2,1,0");
    assert_eq!(
        field(&output, "triangle.tour_digest"),
        "sha256:34c4c146f779a882a3f116c73b8446d44f5c60e8fb5e00faf44929cb38c632bb"
    );
    assert_eq!(field(&output, "triangle.expanded"), "4");
    assert_eq!(field(&output, "square.cost"), "14");
    assert_eq!(field(&output, "trap.cost"), "14");
}
