//! End-to-end decision scenarios over engineered price series

use equitrix::models::{MacdState, PriceRow, Signal, SignalRule};
use equitrix::signals::compute_signal;

fn row(close: i64, volume: i64) -> PriceRow {
    PriceRow {
        bas_dt: "20250801".to_string(),
        srtn_cd: "005930".to_string(),
        itms_nm: "TestCorp".to_string(),
        clpr: Some(close),
        mkp: None,
        hipr: None,
        lopr: None,
        trqu: Some(volume),
        vs: None,
        flt_rt: None,
    }
}

/// 49 flat days at 100, then a rally to 120 today. The window-recomputed
/// MACD jumps from 0 to positive while the signal line lags, the 25-day
/// EMA slope lands around 1.54%, and volume stays at its average.
fn rally_rows() -> Vec<PriceRow> {
    let mut rows = vec![row(120, 1000)];
    rows.extend((0..49).map(|_| row(100, 1000)));
    rows
}

#[test]
fn scenario_a_flat_market_holds() {
    let rows: Vec<PriceRow> = (0..35).map(|_| row(100, 1000)).collect();
    let result = compute_signal(&rows, &SignalRule::default(), None);

    assert_eq!(result.signal, Signal::Hold);
    assert_eq!(result.macd_state, Some(MacdState::Neutral));
    assert!(result
        .reasons
        .iter()
        .any(|r| r.contains("no MACD golden cross")));
}

#[test]
fn scenario_b_rally_buys_without_volume_gate() {
    let rule = SignalRule {
        ema_slope_threshold: 1.0,
        volume_ratio_on: false,
        ..SignalRule::default()
    };
    let result = compute_signal(&rally_rows(), &rule, None);

    assert_eq!(result.signal, Signal::Buy);
    assert_eq!(result.macd_state, Some(MacdState::GoldenCross));
    assert!(result.reasons[0].contains("golden cross"));
    assert!(result.reasons.iter().any(|r| r.contains("EMA slope")));
    // The gate was off, so no volume reason is cited.
    assert!(!result.reasons.iter().any(|r| r.contains("volume")));
}

#[test]
fn scenario_c_average_volume_fails_the_gate() {
    // Same rally, but the gate is on and today's volume merely matches the
    // 20-day average: ratio 1.0 against a 1.5 multiplier.
    let rule = SignalRule {
        ema_slope_threshold: 1.0,
        volume_ratio_on: true,
        volume_ratio_multiplier: 1.5,
        ..SignalRule::default()
    };
    let result = compute_signal(&rally_rows(), &rule, None);

    assert_eq!(result.signal, Signal::Hold);
    assert_eq!(result.macd_state, Some(MacdState::GoldenCross));
    assert!(result
        .reasons
        .iter()
        .any(|r| r.contains("volume ratio 1.0x below 1.5x")));
    // MACD and slope were fine; the only complaint is volume.
    assert!(!result.reasons.iter().any(|r| r.contains("golden cross not")));
}

#[test]
fn scenario_c_passes_once_volume_surges() {
    // Triple the usual volume on the rally day and the gate opens.
    let mut rows = rally_rows();
    rows[0].trqu = Some(3000);
    let rule = SignalRule {
        ema_slope_threshold: 1.0,
        volume_ratio_on: true,
        volume_ratio_multiplier: 1.5,
        ..SignalRule::default()
    };
    let result = compute_signal(&rows, &rule, None);

    assert_eq!(result.signal, Signal::Buy);
    assert!(result.reasons.iter().any(|r| r.contains("volume surge (3.0x)")));
}
