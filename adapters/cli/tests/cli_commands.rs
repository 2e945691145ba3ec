use std::process::{Command, Output};

fn tilewalk(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tilewalk"))
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .args(args)
        .output()
        .expect("failed to run tilewalk binary")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "tilewalk failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).expect("utf-8 output")
}

#[test]
fn dump_prints_passability_map() {
    let output = tilewalk(&["dump", "--map", "maps/cottage.json"]);
    assert_eq!(
        stdout(&output),
        "########\n........\n...##...\n........\n......#.\n........\n"
    );
}

#[test]
fn inspect_reports_stacked_layers() {
    let output = tilewalk(&[
        "inspect",
        "--map",
        "maps/cottage.json",
        "--viewport",
        "384x288",
        "--pixel",
        "300,210",
    ]);
    assert_eq!(
        stdout(&output),
        "tile (6, 4) top=4 flags=0x0011 blocked layers=[1, 4]\n"
    );
}

#[test]
fn path_slides_along_the_counter() {
    let output = tilewalk(&[
        "path",
        "--map",
        "maps/cottage.json",
        "--viewport",
        "384x288",
        "--from",
        "24,72",
        "--to",
        "264,168",
    ]);
    assert_eq!(
        stdout(&output),
        concat!(
            "  1: tile (1, 1) at (72.0, 72.0)\n",
            "  2: tile (2, 1) at (120.0, 72.0)\n",
            "  3: tile (3, 1) at (168.0, 72.0)\n",
            "  4: tile (4, 1) at (216.0, 72.0)\n",
            "  5: tile (5, 1) at (264.0, 72.0)\n",
            "  6: tile (5, 2) at (264.0, 120.0)\n",
            "  7: tile (5, 3) at (264.0, 168.0)\n",
        )
    );
}

#[test]
fn route_redirects_tap_on_the_table() {
    let output = tilewalk(&[
        "route",
        "--map",
        "maps/cottage.json",
        "--viewport",
        "384x288",
        "--from",
        "24,216",
        "--tap",
        "312,216",
    ]);
    let out = stdout(&output);
    assert!(
        out.starts_with("tapped (6, 4) -> target (5, 3)\n"),
        "unexpected route output: {out}"
    );
}

#[test]
fn missing_map_file_fails_with_context() {
    let output = tilewalk(&["dump", "--map", "maps/does-not-exist.json"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read map file"), "stderr: {stderr}");
}
