use scanline_dp::lowlevel::{argmin_first, validate, TrellisShape};
use scanline_dp::{CostTable, CostView, ScalarTrellisSolver, TrellisError, TrellisSolver};

#[test]
fn cost_view_rejects_empty_dimensions() {
    let data = [0.0f64; 4];

    let err = CostView::from_slice(&data, 0, 2).err().unwrap();
    assert_eq!(
        err,
        TrellisError::EmptyInput {
            labels: 0,
            positions: 2,
        }
    );

    let err = CostView::from_slice(&data, 2, 0).err().unwrap();
    assert_eq!(
        err,
        TrellisError::EmptyInput {
            labels: 2,
            positions: 0,
        }
    );
}

#[test]
fn cost_view_rejects_invalid_stride() {
    let data = [0.0f64; 8];
    let err = CostView::new(&data, 1, 4, 3).err().unwrap();
    assert_eq!(err, TrellisError::InvalidStride { cols: 4, stride: 3 });
}

#[test]
fn cost_view_rejects_small_buffer() {
    let data = [0.0f64; 3];
    let err = CostView::new(&data, 2, 2, 2).err().unwrap();
    assert_eq!(err, TrellisError::BufferTooSmall { needed: 4, got: 3 });
}

#[test]
fn cost_view_roi_matches_expected_values() {
    let data: Vec<f64> = (0..16).map(f64::from).collect();
    let view = CostView::from_slice(&data, 4, 4).unwrap();
    assert_eq!(view.stride(), 4);
    assert_eq!(view.as_slice(), data.as_slice());

    let roi = view.roi(1, 1, 2, 2).unwrap();
    assert_eq!(roi.rows(), 2);
    assert_eq!(roi.cols(), 2);
    assert_eq!(roi.stride(), 4);
    assert_eq!(roi.row(0).unwrap(), &[5.0, 6.0]);
    assert_eq!(roi.row(1).unwrap(), &[9.0, 10.0]);
    assert_eq!(roi.get(0, 0), Some(5.0));
    assert!(roi.get(2, 0).is_none());
}

#[test]
fn from_rows_rejects_empty_input() {
    let rows: Vec<Vec<f64>> = Vec::new();
    let err = CostTable::from_rows(&rows).unwrap_err();
    assert_eq!(
        err,
        TrellisError::EmptyInput {
            labels: 0,
            positions: 0,
        }
    );

    let err = CostTable::from_rows(&[Vec::<f64>::new()]).unwrap_err();
    assert_eq!(
        err,
        TrellisError::EmptyInput {
            labels: 1,
            positions: 0,
        }
    );
}

#[test]
fn solve_rejects_non_square_pairwise() {
    let unary = CostTable::filled(3, 5, 1.0).unwrap();
    let pairwise = CostTable::filled(2, 3, 0.0).unwrap();
    let err = ScalarTrellisSolver::new()
        .solve(unary.view(), pairwise.view())
        .unwrap_err();
    assert_eq!(
        err,
        TrellisError::DimensionMismatch {
            expected_rows: 3,
            expected_cols: 3,
            rows: 2,
            cols: 3,
            context: "pairwise",
        }
    );
}

#[test]
fn solve_rejects_pairwise_of_wrong_side() {
    let unary = CostTable::filled(3, 5, 1.0).unwrap();
    let pairwise = CostTable::filled(4, 4, 0.0).unwrap();
    let err = ScalarTrellisSolver::new()
        .solve(unary.view(), pairwise.view())
        .unwrap_err();
    assert!(matches!(
        err,
        TrellisError::DimensionMismatch {
            expected_rows: 3,
            rows: 4,
            ..
        }
    ));
}

#[test]
fn solve_reports_first_non_finite_unary_entry() {
    let unary = CostTable::from_rows(&[[0.0, 1.0, 2.0], [3.0, f64::NEG_INFINITY, f64::NAN]]).unwrap();
    let pairwise = CostTable::filled(2, 2, 0.0).unwrap();
    let err = ScalarTrellisSolver::new()
        .solve(unary.view(), pairwise.view())
        .unwrap_err();
    assert_eq!(
        err,
        TrellisError::InvalidCostValue {
            table: "unary",
            row: 1,
            col: 1,
            value: f64::NEG_INFINITY,
        }
    );
}

#[test]
fn solve_reports_non_finite_pairwise_entry() {
    let unary = CostTable::filled(2, 3, 1.0).unwrap();
    let pairwise = CostTable::from_rows(&[[0.0, 1.0], [f64::NAN, 0.0]]).unwrap();
    let err = ScalarTrellisSolver::new()
        .solve(unary.view(), pairwise.view())
        .unwrap_err();
    match err {
        TrellisError::InvalidCostValue {
            table, row, col, value,
        } => {
            assert_eq!((table, row, col), ("pairwise", 1, 0));
            assert!(value.is_nan());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn error_messages_include_offending_values() {
    let err = TrellisError::DimensionMismatch {
        expected_rows: 3,
        expected_cols: 3,
        rows: 2,
        cols: 3,
        context: "pairwise",
    };
    assert_eq!(
        err.to_string(),
        "dimension mismatch for pairwise: expected 3x3, got 2x3"
    );

    let err = TrellisError::InvalidCostValue {
        table: "unary",
        row: 4,
        col: 7,
        value: f64::INFINITY,
    };
    assert_eq!(err.to_string(), "invalid unary cost inf at row 4, col 7");
}

#[test]
fn validate_accepts_strided_views() {
    let unary_data = [1.0, 2.0, 3.0, -1.0, 4.0, 5.0, 6.0, -1.0];
    let unary = CostView::new(&unary_data, 2, 3, 4).unwrap();
    let pairwise = CostTable::filled(2, 2, 0.5).unwrap();
    assert_eq!(
        validate(unary, pairwise.view()).unwrap(),
        TrellisShape {
            labels: 2,
            positions: 3
        }
    );
    assert_eq!(argmin_first(&[2.0, 1.0, 1.0]), Some(1));
}
