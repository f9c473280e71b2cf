use crate::*;
use serde_json::json;

fn sample() -> Summary {
    Summary {
        tests: PassSummary {
            total: 10,
            blocked: 3,
            rejected: 2,
            failed: 1,
            parsed: 4,
        },
        references: PassSummary {
            total: 4,
            blocked: 0,
            rejected: 1,
            failed: 0,
            parsed: 3,
        },
        ignored_alternates: 2,
        cleaned: 0,
    }
}

#[test]
fn summary_text() {
    assert_eq!(
        sample().to_string(),
        "Done!\n\n\
         Total test files: 10\n\
         Skipped test files: 6\n\
         Parsed test files: 4\n\n\
         Total reference files: 4\n\
         Skipped reference files: 1\n\
         Ignored alternate references: 2\n\
         Parsed reference files: 3"
    );
}

#[test]
fn summary_counts_add_up() {
    let summary = sample();
    assert_eq!(
        summary.tests.parsed + summary.tests.skipped(),
        summary.tests.total
    );
    assert_eq!(summary.tests.attempted(), 7);
}

#[test]
fn summary_json() {
    let value = serde_json::to_value(sample()).unwrap();
    assert_eq!(
        value["tests"],
        json!({
            "total": 10,
            "blocked": 3,
            "rejected": 2,
            "failed": 1,
            "parsed": 4
        })
    );
    assert_eq!(value["ignored_alternates"], json!(2));
    assert_eq!(value["cleaned"], json!(0));
}

#[test]
fn record_outcomes() {
    let mut pass = PassSummary::default();
    pass.record(&DocumentOutcome::Accepted {
        output: "out/a.rml".into(),
        reference: None,
    });
    pass.record(&DocumentOutcome::Rejected(Rejection {
        gate: "script",
        reason: "uses scripts",
        line: 1,
        fragment: "<script".to_string(),
    }));
    pass.record(&DocumentOutcome::Failed(Error::ReadFile {
        path: "in/b.xht".to_string(),
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
    }));
    assert_eq!((pass.parsed, pass.rejected, pass.failed), (1, 1, 1));
}
