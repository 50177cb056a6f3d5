use std::io::Cursor;

use fiff_stc::error::{Error, Result};
use fiff_stc::SourceEstimate;
use pretty_assertions::assert_eq;
use tracing_test::traced_test;

fn estimate() -> SourceEstimate {
    SourceEstimate::new(
        -0.1,
        0.001,
        vec![12, 507, 8943],
        vec![
            vec![1.5e-10, 2.0e-10, -3.25e-11, 0.0],
            vec![0.5, 0.25, 0.125, 0.0625],
            vec![-1.0, 1.0, -1.0, 1.0],
        ],
    )
}

fn assert_close(actual: f32, expected: f32) {
    let tolerance = 1e-6 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "{} is not close to {}",
        actual,
        expected
    );
}

#[traced_test]
#[test]
fn write_then_read() -> Result<()> {
    let expected = estimate();

    let mut buffer = Cursor::new(Vec::new());
    expected.write(&mut buffer)?;
    buffer.set_position(0);

    let actual = SourceEstimate::read(&mut buffer)?;

    assert_close(actual.tmin, expected.tmin);
    assert_close(actual.tstep, expected.tstep);
    assert_eq!(actual.vertices, expected.vertices);
    assert_eq!(actual.n_times(), 4);
    for (actual_row, expected_row) in actual.data.iter().zip(&expected.data) {
        assert_eq!(actual_row.len(), expected_row.len());
        for (a, e) in actual_row.iter().zip(expected_row) {
            assert_close(*a, *e);
        }
    }

    Ok(())
}

#[test]
fn write_time_major() -> Result<()> {
    let stc = SourceEstimate::new(0.0, 0.5, vec![1, 2], vec![vec![1.0, 2.0], vec![3.0, 4.0]]);

    let mut buffer = Vec::new();
    stc.write(&mut buffer)?;

    #[rustfmt::skip]
    let expected = vec![
        0x00, 0x00, 0x00, 0x00, // tmin
        0x43, 0xFA, 0x00, 0x00, // tstep, 500 ms
        0x00, 0x00, 0x00, 0x02, // vertices
        0x00, 0x00, 0x00, 0x01,
        0x00, 0x00, 0x00, 0x02,
        0x00, 0x00, 0x00, 0x02, // times
        0x3F, 0x80, 0x00, 0x00, // t0
        0x40, 0x40, 0x00, 0x00,
        0x40, 0x00, 0x00, 0x00, // t1
        0x40, 0x80, 0x00, 0x00,
    ];
    assert_eq!(buffer, expected);

    let times = stc.times().collect::<Vec<_>>();
    assert_eq!(times, vec![0.0, 0.5]);

    Ok(())
}

#[test]
fn read_rejects_short_data() -> Result<()> {
    let mut buffer = Vec::new();
    estimate().write(&mut buffer)?;
    buffer.truncate(buffer.len() - 4);

    assert!(matches!(
        SourceEstimate::read(Cursor::new(buffer)),
        Err(Error::SampleCountMismatch {
            expected: 12,
            found: 11
        })
    ));

    Ok(())
}

#[test]
fn write_rejects_ragged_rows() {
    let mut stc = estimate();
    stc.data[1].pop();

    assert!(matches!(
        stc.write(Vec::new()),
        Err(Error::InconsistentData(_))
    ));
}

#[test]
fn write_rejects_missing_rows() {
    let mut stc = estimate();
    stc.vertices.push(9000);

    assert!(matches!(
        stc.write(Vec::new()),
        Err(Error::InconsistentData(_))
    ));
}

#[test]
fn read_rejects_trailing_bytes() -> Result<()> {
    let stc = SourceEstimate::new(0.0, 0.001, vec![7], vec![vec![1.0]]);

    let mut buffer = Vec::new();
    stc.write(&mut buffer)?;
    buffer.push(0xAA);

    assert!(matches!(
        SourceEstimate::read(Cursor::new(buffer)),
        Err(Error::InvalidFile)
    ));

    Ok(())
}

#[test]
fn read_without_vertices() -> Result<()> {
    #[rustfmt::skip]
    let input = vec![
        0x00, 0x00, 0x00, 0x00, // tmin
        0x3F, 0x80, 0x00, 0x00, // tstep
        0x00, 0x00, 0x00, 0x00, // vertices
        0xFF, 0xFF, 0xFF, 0xFF, // times
    ];

    let stc = SourceEstimate::read(Cursor::new(input))?;

    assert!(stc.vertices.is_empty());
    assert!(stc.data.is_empty());
    assert_eq!(stc.n_times(), 0);

    Ok(())
}
