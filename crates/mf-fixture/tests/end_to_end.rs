use mf_fixture::{build_fixture, render_fixture, Fixture, FixtureConfig};
use mf_matrix::{Matrix, MatrixError};

#[test]
fn test_two_by_two_fixture_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = FixtureConfig {
        output: dir.path().join("matrix_mul_io_example.txt"),
        ..FixtureConfig::square(2)
    };

    let a = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
    let b = Matrix::from_rows(&[vec![5, 6], vec![7, 8]]).unwrap();
    let fixture = Fixture::from_parts(&config, a, b).unwrap();
    assert_eq!(fixture.c.to_rows(), vec![vec![19, 22], vec![43, 50]]);

    fixture.write_to_path(&config.output).unwrap();
    let written = std::fs::read_to_string(&config.output).unwrap();
    assert_eq!(written.lines().next(), Some("2 4 2"));
    assert_eq!(written.lines().last(), Some("C[1][] 1 43 50"));
}

#[test]
fn test_default_sized_fixture() {
    let config = FixtureConfig {
        seed: Some(2024),
        ..FixtureConfig::default()
    };
    let fixture = build_fixture(&config).unwrap();
    let out = render_fixture(&fixture);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[0], "128 256 128");
    assert_eq!(lines.len(), 1 + 128 * 3);
    assert!(lines[1].starts_with("A[0][] 1 1 "));
    assert!(lines[129].starts_with("B[][0] 1 1 "));
    assert!(lines[257].starts_with("C[0][] 1 "));

    // Each A/B line holds 128 values after the name and two flags;
    // each C line holds 128 values after the name and one flag.
    assert!(lines[1..257].iter().all(|l| l.split(' ').count() == 3 + 128));
    assert!(lines[257..].iter().all(|l| l.split(' ').count() == 2 + 128));

    // Values on A lines stay inside the generator range.
    for line in &lines[1..129] {
        for v in line.split(' ').skip(3) {
            let v: i64 = v.parse().unwrap();
            assert!((-5..5).contains(&v));
        }
    }
}

#[test]
fn test_mismatched_parts_write_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let a = Matrix::from_rows(&[vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    let b = Matrix::from_rows(&[vec![1, 2], vec![3, 4], vec![5, 6], vec![7, 8]]).unwrap();

    let result = Fixture::from_parts(&FixtureConfig::square(2), a, b)
        .and_then(|f| f.write_to_path(&path));

    match result {
        Err(mf_fixture::FixtureError::Matrix(MatrixError::DimensionMismatch { m, k, k2, n })) => {
            assert_eq!((m, k, k2, n), (2, 3, 4, 2));
        }
        other => panic!("expected DimensionMismatch, got {:?}", other),
    }
    assert!(!path.exists());
}
