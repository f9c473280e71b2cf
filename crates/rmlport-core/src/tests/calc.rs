use crate::rules::reduce_calc;
use crate::*;

fn calc(line: &str) -> String {
    RuleTable::declarations()
        .get("calc")
        .expect("calc rule")
        .apply(line, StyleState::Outside)
        .into_owned()
}

#[test]
fn reduce_calc_folds_matching_units() {
    assert_eq!(reduce_calc("calc(10px + 20px / 2)").as_deref(), Some("20px"));
    assert_eq!(reduce_calc("calc(1em - 1em / 4)").as_deref(), Some("0.75em"));
    assert_eq!(reduce_calc("calc(10px + 5px / 3)").as_deref(), Some("11.6667px"));
    assert_eq!(reduce_calc("calc(-1px - 2px / 1)").as_deref(), Some("-3px"));
    assert_eq!(reduce_calc("CALC(2px - 4px / 2)").as_deref(), Some("0px"));
}

#[test]
fn reduce_calc_rejects_unsupported_expressions() {
    assert_eq!(reduce_calc("calc(100% + 10px / 2)"), None);
    assert_eq!(reduce_calc("calc(10px + 5px / 0)"), None);
    assert_eq!(reduce_calc("calc(10px * 2)"), None);
    assert_eq!(reduce_calc("10px"), None);
}

#[test]
fn calc_rule_rewrites_in_place() {
    assert_eq!(calc("width: calc(50px + 100px / 2);"), "width: 100px;");
    assert_eq!(
        calc("margin: calc(1em + 1em / 2) calc(2px - 2px / 2);"),
        "margin: 1.5em 1px;"
    );
}

#[test]
fn calc_rule_keeps_mixed_units() {
    let line = "width: calc(50% + 100px / 2);";
    assert_eq!(calc(line), line);
}
