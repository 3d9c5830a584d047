//! PNM I/O regression test
//!
//! Exercises the public PNM surface end to end: read/write roundtrips
//! for PGM and PPM over real files, sample clamping on disk, sub-region
//! reads against the full-image reference, format probing, header
//! metadata and comment preservation, and the intensity scaler laws.

use pixmat_core::{DMat, IMat};
use pixmat_io::{
    DEFAULT_COMMENT, IoError, PnmFormat, Region, RgbPlanes, detect_pnm_format, read_pgm,
    read_pgm_region, read_pgm_with_comments, read_pnm_header, read_ppm, read_ppm_region,
    scale_to_int, scale_to_real, write_pgm, write_pgm_with_comments, write_ppm_with_comments,
};
use pixmat_test::{RegParams, regout_dir};
use rand::Rng;
use std::fs;

fn gradient(rows: usize, cols: usize, offset: i32) -> IMat {
    let mut m = IMat::new(rows, cols).unwrap();
    for r in 0..rows {
        for c in 0..cols {
            m.set(r, c, ((r * cols + c) as i32 + offset) % 256).unwrap();
        }
    }
    m
}

#[test]
fn pnmio_reg() {
    let mut rp = RegParams::new("pnmio");

    let outdir = regout_dir();
    fs::create_dir_all(&outdir).expect("Failed to create output directory");

    // Test 0: 8bpp PGM file roundtrip
    eprintln!("=== Test 0: PGM file roundtrip ===");
    {
        let m = gradient(37, 53, 0);
        let path = format!("{}/pnmio_gray.pgm", outdir);
        write_pgm_with_comments(&path, &m, "# roundtrip").expect("write PGM");

        let (m2, comments) = read_pgm_with_comments(&path).expect("read PGM");
        rp.compare_imat(&m, &m2);
        rp.compare_values(1.0, (comments == "# roundtrip") as i32 as f64, 0.0);
    }

    // Test 1: 24bpp PPM file roundtrip
    eprintln!("=== Test 1: PPM file roundtrip ===");
    {
        let planes = RgbPlanes::new(
            gradient(21, 33, 0),
            gradient(21, 33, 85),
            gradient(21, 33, 170),
        )
        .unwrap();
        let path = format!("{}/pnmio_color.ppm", outdir);
        write_ppm_with_comments(&path, &planes, "", 255).expect("write PPM");

        let planes2 = read_ppm(&path).expect("read PPM");
        rp.compare_imat(&planes.r, &planes2.r);
        rp.compare_imat(&planes.g, &planes2.g);
        rp.compare_imat(&planes.b, &planes2.b);
    }

    // Test 2: out-of-range samples are clamped to one byte on disk
    eprintln!("=== Test 2: sample clamping ===");
    {
        let m = IMat::from_data(1, 4, vec![-5, 0, 255, 300]).unwrap();
        let path = format!("{}/pnmio_clamp.pgm", outdir);
        write_pgm_with_comments(&path, &m, "").expect("write clamp PGM");

        let bytes = fs::read(&path).expect("read raw bytes");
        let pixels = &bytes[bytes.len() - 4..];
        rp.compare_values(0.0, pixels[0] as f64, 0.0);
        rp.compare_values(0.0, pixels[1] as f64, 0.0);
        rp.compare_values(255.0, pixels[2] as f64, 0.0);
        rp.compare_values(255.0, pixels[3] as f64, 0.0);

        let back = read_pgm(&path).expect("read clamp PGM");
        rp.compare_imat(&IMat::from_data(1, 4, vec![0, 0, 255, 255]).unwrap(), &back);
    }

    // Test 3: every valid region read equals the submatrix of the full read
    eprintln!("=== Test 3: region reads vs full read ===");
    {
        let m = gradient(6, 5, 11);
        let path = format!("{}/pnmio_region.pgm", outdir);
        write_pgm_with_comments(&path, &m, "").expect("write region PGM");

        let full = read_pgm(&path).expect("full read");
        let mut all_match = true;
        for r1 in 0..6 {
            for r2 in r1..6 {
                for c1 in 0..5 {
                    for c2 in c1..5 {
                        let sub =
                            read_pgm_region(&path, Region::new(r1, r2, c1, c2)).expect("region");
                        for r in 0..sub.rows() {
                            for c in 0..sub.cols() {
                                if sub.get(r, c).unwrap() != full.get(r1 + r, c1 + c).unwrap() {
                                    all_match = false;
                                }
                            }
                        }
                    }
                }
            }
        }
        rp.compare_values(1.0, all_match as i32 as f64, 0.0);

        // Same property for a color region
        let planes = RgbPlanes::new(
            gradient(6, 5, 0),
            gradient(6, 5, 50),
            gradient(6, 5, 100),
        )
        .unwrap();
        let cpath = format!("{}/pnmio_region.ppm", outdir);
        write_ppm_with_comments(&cpath, &planes, "", 255).expect("write region PPM");
        let sub = read_ppm_region(&cpath, Region::new(1, 4, 2, 3)).expect("color region");
        let mut color_ok = sub.dimensions() == (4, 2);
        for r in 0..4 {
            for c in 0..2 {
                color_ok &= sub.r.get(r, c).unwrap() == planes.r.get(r + 1, c + 2).unwrap();
                color_ok &= sub.g.get(r, c).unwrap() == planes.g.get(r + 1, c + 2).unwrap();
                color_ok &= sub.b.get(r, c).unwrap() == planes.b.get(r + 1, c + 2).unwrap();
            }
        }
        rp.compare_values(1.0, color_ok as i32 as f64, 0.0);
    }

    // Test 4: out-of-bounds regions are rejected with no matrix
    eprintln!("=== Test 4: region bounds rejection ===");
    {
        let path = format!("{}/pnmio_region.pgm", outdir);
        for region in [
            Region::new(4, 2, 0, 4), // r1 > r2
            Region::new(0, 5, 3, 1), // c1 > c2
            Region::new(0, 6, 0, 4), // r2 == height
            Region::new(0, 5, 0, 5), // c2 == width
        ] {
            let rejected = matches!(
                read_pgm_region(&path, region),
                Err(IoError::InvalidRegion(_))
            );
            rp.compare_values(1.0, rejected as i32 as f64, 0.0);
        }
    }

    // Test 5: format probing
    eprintln!("=== Test 5: format probing ===");
    {
        let gray_path = format!("{}/pnmio_gray.pgm", outdir);
        let color_path = format!("{}/pnmio_color.ppm", outdir);
        let format = detect_pnm_format(&gray_path).expect("probe PGM");
        rp.compare_values(1.0, (format == PnmFormat::PgmBinary) as i32 as f64, 0.0);
        rp.compare_values('5' as i64 as f64, format.code() as i64 as f64, 0.0);

        let format = detect_pnm_format(&color_path).expect("probe PPM");
        rp.compare_values('6' as i64 as f64, format.code() as i64 as f64, 0.0);

        let junk_path = format!("{}/pnmio_junk.bin", outdir);
        fs::write(&junk_path, b"XY no magic here").expect("write junk");
        rp.compare_values(1.0, detect_pnm_format(&junk_path).is_err() as i32 as f64, 0.0);
        let missing = format!("{}/pnmio_missing.pgm", outdir);
        let _ = fs::remove_file(&missing);
        rp.compare_values(1.0, detect_pnm_format(&missing).is_err() as i32 as f64, 0.0);
    }

    // Test 6: header metadata and comment preservation
    eprintln!("=== Test 6: header metadata ===");
    {
        let m = gradient(12, 34, 0);
        let path = format!("{}/pnmio_comments.pgm", outdir);
        write_pgm_with_comments(&path, &m, "# hello").expect("write commented PGM");

        let header = read_pnm_header(&path).expect("read header");
        rp.compare_values(34.0, header.width as f64, 0.0);
        rp.compare_values(12.0, header.height as f64, 0.0);
        rp.compare_values(255.0, header.max_val as f64, 0.0);
        rp.compare_values(1.0, (header.format == PnmFormat::PgmBinary) as i32 as f64, 0.0);
        rp.compare_values(1.0, (header.comments == "# hello") as i32 as f64, 0.0);

        // Omitting the comment writes the attribution string
        let path = format!("{}/pnmio_default_comment.pgm", outdir);
        write_pgm(&path, &m).expect("write default-comment PGM");
        let header = read_pnm_header(&path).expect("read default-comment header");
        let expected = format!("#{DEFAULT_COMMENT}");
        rp.compare_values(1.0, (header.comments == expected) as i32 as f64, 0.0);
    }

    // Test 7: malformed headers fail
    eprintln!("=== Test 7: malformed headers ===");
    {
        let path = format!("{}/pnmio_bad_header.pgm", outdir);
        fs::write(&path, b"P5\n10 10\n").expect("write truncated header");
        rp.compare_values(1.0, read_pnm_header(&path).is_err() as i32 as f64, 0.0);
        rp.compare_values(1.0, read_pgm(&path).is_err() as i32 as f64, 0.0);

        // Header fine, pixel section short
        let path = format!("{}/pnmio_short_pixels.pgm", outdir);
        fs::write(&path, b"P5\n4 4\n255\n\x01\x02\x03").expect("write short pixels");
        rp.compare_values(1.0, read_pnm_header(&path).is_ok() as i32 as f64, 0.0);
        rp.compare_values(1.0, read_pgm(&path).is_err() as i32 as f64, 0.0);
    }

    // Test 8: intensity scaler laws
    eprintln!("=== Test 8: intensity scaler ===");
    {
        let levels = IMat::from_data(16, 16, (0..=255).collect()).unwrap();
        let back = scale_to_int(&scale_to_real(&levels, 255, 0.0, 1.0), 255, 0.0, 1.0);
        rp.compare_imat(&levels, &back);

        let samples: Vec<f64> = (0..64).map(|i| i as f64 / 63.0).collect();
        let m = DMat::from_data(8, 8, samples).unwrap();
        let quantized = scale_to_real(&scale_to_int(&m, 255, 0.0, 1.0), 255, 0.0, 1.0);
        let worst = m
            .data()
            .iter()
            .zip(quantized.data())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0f64, f64::max);
        rp.compare_values(0.0, worst, 0.5 / 255.0 + 1e-12);
    }

    // Test 9: randomized roundtrips
    eprintln!("=== Test 9: randomized roundtrips ===");
    {
        let mut rng = rand::rng();
        let mut random_mat = |rows: usize, cols: usize| {
            let data: Vec<i32> = (0..rows * cols).map(|_| rng.random_range(0..=255)).collect();
            IMat::from_data(rows, cols, data).unwrap()
        };

        let m = random_mat(19, 27);
        let path = format!("{}/pnmio_random.pgm", outdir);
        write_pgm_with_comments(&path, &m, "").expect("write random PGM");
        rp.compare_imat(&m, &read_pgm(&path).expect("read random PGM"));

        let planes =
            RgbPlanes::new(random_mat(13, 17), random_mat(13, 17), random_mat(13, 17)).unwrap();
        let path = format!("{}/pnmio_random.ppm", outdir);
        write_ppm_with_comments(&path, &planes, "", 255).expect("write random PPM");
        let planes2 = read_ppm(&path).expect("read random PPM");
        rp.compare_imat(&planes.r, &planes2.r);
        rp.compare_imat(&planes.g, &planes2.g);
        rp.compare_imat(&planes.b, &planes2.b);
    }

    assert!(rp.cleanup(), "pnmio regression test failed");
}
