mod common;

use common::reference::is_prime;
use primewp::config::{Cli, RenderConfig};
use primewp::io::{save_png, write_json_file};
use primewp::prelude::*;
use std::fs;

#[test]
fn three_by_three_grid_layout() {
    let grid = PrimeGrid::generate(3, 3, SieveBound::Inclusive).unwrap();
    assert_eq!(
        grid.matrix.clone().into_rows(),
        vec![
            vec![false, true, true],
            vec![false, true, false],
            vec![true, false, false],
        ]
    );
}

#[test]
fn rendered_png_round_trips_through_disk() {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("primes.png");

    let (width, height) = (37usize, 23usize);
    let grid = PrimeGrid::generate(width, height, SieveBound::Inclusive).unwrap();
    let palette = Palette {
        foreground: parse_color("Gold").unwrap(),
        background: parse_color("#202020").unwrap(),
    };
    save_png(&render(&grid.matrix, &palette), &path).unwrap();

    let loaded = image::open(&path).unwrap().into_rgb8();
    assert_eq!(loaded.dimensions(), (width as u32, height as u32));
    for y in 0..height {
        for x in 0..width {
            let k = y * width + x + 1;
            let expected = if is_prime(k) {
                palette.foreground
            } else {
                palette.background
            };
            assert_eq!(
                *loaded.get_pixel(x as u32, y as u32),
                expected.rgb(),
                "pixel ({x}, {y}) for {k}"
            );
        }
    }
}

#[test]
fn config_file_drives_a_full_render() {
    let dir = tempfile::tempdir().unwrap();
    let image_path = dir.path().join("out.png");
    let summary_path = dir.path().join("summary.json");
    let config_path = dir.path().join("config.json");
    let config = serde_json::json!({
        "width": 10,
        "height": 10,
        "palette": { "foreground": "White", "background": "Black" },
        "output": { "image": image_path, "summary": summary_path }
    });
    write_json_file(&config_path, &config).unwrap();

    let cli = <Cli as clap::Parser>::try_parse_from([
        "primewp",
        "--config",
        config_path.to_str().unwrap(),
    ])
    .unwrap();
    let cfg = RenderConfig::from_cli(&cli).unwrap();
    let grid = PrimeGrid::generate(cfg.width, cfg.height, cfg.bound).unwrap();
    save_png(&render(&grid.matrix, &cfg.palette), &cfg.image_out).unwrap();
    write_json_file(cfg.summary_out.as_ref().unwrap(), &grid.summary()).unwrap();

    let loaded = image::open(&image_path).unwrap().into_rgb8();
    let lit = loaded.pixels().filter(|p| p.0 == [255, 255, 255]).count();
    assert_eq!(lit, 25);

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&summary_path).unwrap()).unwrap();
    assert_eq!(summary["primeCount"], 25);
    assert_eq!(summary["sieveBound"], 100);
    assert_eq!(summary["boundRule"], "inclusive");
}

#[test]
fn missing_config_file_is_reported() {
    let cli = <Cli as clap::Parser>::try_parse_from([
        "primewp",
        "--config",
        "/nonexistent/primewp.json",
    ])
    .unwrap();
    let err = RenderConfig::from_cli(&cli).unwrap_err();
    assert!(err.starts_with("Failed to read config"), "{err}");
}
