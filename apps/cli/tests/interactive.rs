//! Drives the interactive loop end to end through the public library API.

use std::io::Cursor;

use tipcalc_cli::repl;
use tipcalc_cli::state::{ConfigState, OutputFormat};
use tipcalc_core::TipSession;

fn drive(script: &str, format: OutputFormat) -> (Vec<String>, TipSession) {
    let mut session = TipSession::new();
    let mut out = Vec::new();
    let config = ConfigState {
        prompt: String::new(),
        ..ConfigState::default()
    };
    repl::run(Cursor::new(script.to_string()), &mut out, &mut session, &config, format).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines = text.lines().map(str::to_string).collect();
    (lines, session)
}

#[test]
fn json_mode_prints_one_object_per_action() {
    let (lines, _) = drive("bill 60\npeople 3\ntip 15\nquit\n", OutputFormat::Json);

    // banner, then one line per action
    assert_eq!(lines.len(), 4);
    let last: serde_json::Value = serde_json::from_str(&lines[3]).unwrap();
    assert_eq!(last["error"], serde_json::Value::Null);
    assert_eq!(last["form"]["selectedPreset"], "15");
    assert_eq!(last["result"]["tipAmountPerPerson"], 3.0);
    assert_eq!(last["result"]["totalAmountPerPerson"], 23.0);
}

#[test]
fn json_mode_reports_rejections_with_codes() {
    let (lines, session) = drive("bill 12.5.0\n", OutputFormat::Json);

    let err: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
    assert_eq!(err["code"], "INPUT_REJECTED");
    assert_eq!(session.form().bill_amount, "");
}

#[test]
fn custom_tip_replaces_preset() {
    let (lines, session) = drive("bill 80\ntip 18\ncustom 12.5\nshow\n", OutputFormat::Text);

    assert!(lines.iter().any(|l| l == "Per Person (18% tip):"));
    assert!(lines.iter().any(|l| l == "Per Person (12.5% tip):"));
    assert_eq!(session.form().selected_preset, None);
    assert_eq!(session.form().custom_tip, "12.5");
}

#[test]
fn clearing_custom_tip_asks_for_a_tip_again() {
    let (lines, _) = drive("bill 10\ncustom 10\ncustom\nquit\n", OutputFormat::Text);
    assert_eq!(
        lines.last().map(String::as_str),
        Some("Error: Please select a tip percentage or enter a custom tip")
    );
}
