//! End-to-end dispatch through the standard chain.

mod test_utils;

use std::fs;
use std::path::PathBuf;

use rstest::*;
use severity_chain::{
    Chain, ChainBuilder, ChainConfig, DispatchError, Escalation, HandlerKind, LogMessage,
    Severity, WarningHandler,
};
use tempfile::TempDir;
use test_utils::SharedBuf;

struct Harness {
    _dir: TempDir,
    error_log: PathBuf,
    out: SharedBuf,
    chain: Chain,
}

impl Harness {
    fn error_lines(&self) -> String {
        fs::read_to_string(&self.error_log).unwrap_or_default()
    }
}

#[fixture]
fn harness() -> Harness {
    let dir = TempDir::new().unwrap();
    let error_log = dir.path().join("errors.log");
    let out = SharedBuf::new();
    let chain = ChainConfig::new(&error_log)
        .with_warning_writer(out.clone())
        .build()
        .unwrap();
    Harness {
        _dir: dir,
        error_log,
        out,
        chain,
    }
}

#[rstest]
fn warning_is_printed(harness: Harness) {
    let claim = harness
        .chain
        .handle(&LogMessage::warning("This is a warning"))
        .unwrap();
    assert_eq!(claim.kind, HandlerKind::Warning);
    assert_eq!(claim.position, 2);
    assert_eq!(harness.out.contents(), "Warning: This is a warning\n");
    assert_eq!(harness.error_lines(), "");
}

#[rstest]
fn error_is_appended_to_file(harness: Harness) {
    let claim = harness
        .chain
        .handle(&LogMessage::error("This is an error"))
        .unwrap();
    assert_eq!(claim.kind, HandlerKind::Error);
    assert_eq!(claim.position, 1);
    assert_eq!(harness.error_lines(), "Error: This is an error\n");
    assert_eq!(harness.out.contents(), "");
}

#[rstest]
fn fatal_is_escalated(harness: Harness) {
    let err = harness
        .chain
        .handle(&LogMessage::fatal("This is a fatal error"))
        .unwrap_err();
    assert!(matches!(err, DispatchError::Escalated(Escalation::Fatal(_))));
    assert!(err.to_string().contains("This is a fatal error"));
    assert_eq!(harness.out.contents(), "");
    assert_eq!(harness.error_lines(), "");
}

#[rstest]
fn unknown_is_escalated(harness: Harness) {
    let err = harness
        .chain
        .handle(&LogMessage::unknown("This is an unknown message"))
        .unwrap_err();
    assert!(matches!(err, DispatchError::Escalated(Escalation::Unknown(_))));
    assert!(err.to_string().contains("This is an unknown message"));
}

#[rstest]
fn chain_without_error_handler_reports_unhandled() {
    let chain = ChainBuilder::new()
        .with_next(WarningHandler::new(SharedBuf::new()))
        .build()
        .unwrap();
    let err = chain.handle(&LogMessage::error("x")).unwrap_err();
    assert!(!err.is_escalation());
    assert!(matches!(err, DispatchError::Unhandled(ref t) if t == "x"));
}

#[rstest]
#[case(3)]
#[case(10)]
fn repeated_dispatch_is_not_deduplicated(harness: Harness, #[case] n: usize) {
    for _ in 0..n {
        harness.chain.handle(&LogMessage::warning("again")).unwrap();
        harness.chain.handle(&LogMessage::error("again")).unwrap();
    }
    assert_eq!(harness.out.contents(), "Warning: again\n".repeat(n));
    assert_eq!(harness.error_lines(), "Error: again\n".repeat(n));
}

#[rstest]
fn failure_does_not_stop_later_messages(harness: Harness) {
    let messages = [
        LogMessage::fatal("first"),
        LogMessage::unknown("second"),
        LogMessage::warning("third"),
    ];
    let failures: Vec<_> = messages
        .iter()
        .filter_map(|m| harness.chain.handle(m).err())
        .map(|e| e.to_string())
        .collect();
    assert_eq!(
        failures,
        vec!["Fatal Error: first", "Unknown log message: second"]
    );
    assert_eq!(harness.out.contents(), "Warning: third\n");
}

#[rstest]
fn claim_position_matches_chain_order(harness: Harness) {
    let expected = [
        (Severity::FatalError, HandlerKind::Fatal),
        (Severity::Error, HandlerKind::Error),
        (Severity::Warning, HandlerKind::Warning),
        (Severity::Unknown, HandlerKind::Unknown),
    ];
    let kinds = harness.chain.kinds();
    for (severity, kind) in expected {
        assert_eq!(harness.chain.claimant(severity), Some(kind));
        let position = kinds.iter().position(|k| *k == kind).unwrap();
        if let Ok(claim) = harness.chain.handle(&LogMessage::new(severity, "p")) {
            assert_eq!(claim.position, position);
        }
    }
}
