use crate::*;

fn structural(line: &str) -> String {
    RuleTable::structural(dialect::DEFAULT_STYLESHEET_HREF).apply(line, StyleState::Outside)
}

fn declarations(line: &str) -> String {
    RuleTable::declarations().apply(line, StyleState::Inside)
}

#[test]
fn doctype_line_is_removed_with_its_newline() {
    assert_eq!(
        structural(
            "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.1//EN\" \"http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd\">\n"
        ),
        ""
    );
}

#[test]
fn root_element_becomes_rml() {
    assert_eq!(
        structural("<html xmlns=\"http://www.w3.org/1999/xhtml\">\n"),
        "<rml>\n"
    );
    assert_eq!(structural("</html>\n"), "</rml>\n");
}

#[test]
fn stylesheet_link_follows_head() {
    assert_eq!(
        structural(" <head>\n"),
        " <head>\n  <link type=\"text/rcss\" href=\"/../Tests/Data/style.rcss\" />\n"
    );
    assert_eq!(structural("<header>\n"), "<header>\n");
}

#[test]
fn stylesheet_href_is_inserted_literally() {
    let table = RuleTable::structural("/data/$1.rcss");
    assert_eq!(
        table.apply("<head>", StyleState::Outside),
        "<head>\n<link type=\"text/rcss\" href=\"/data/$1.rcss\" />"
    );
}

#[test]
fn style_block_rules_only_apply_inside_style() {
    let table = RuleTable::style_block();
    assert_eq!(
        table.apply("   html { color: red }", StyleState::Inside),
        "   body { color: red }"
    );
    assert_eq!(
        table.apply("div &gt; p { }", StyleState::Inside),
        "div > p { }"
    );
    assert_eq!(
        table.apply("   html { color: red }", StyleState::Outside),
        "   html { color: red }"
    );
    assert_eq!(
        table.apply("<p>a &gt; b</p>", StyleState::Inside),
        "<p>a &gt; b</p>"
    );
}

#[test]
fn unsupported_declarations_are_dropped() {
    assert_eq!(declarations("direction: ltr;"), "");
    assert_eq!(declarations("list-style: none;"), "");
    assert_eq!(declarations("list-style-type: none;"), "");
    assert_eq!(declarations("font-family: Ahem, serif;"), "");
    assert_eq!(declarations("p { font-family: serif }"), "p { }");
}

#[test]
fn keyword_values_are_translated() {
    assert_eq!(declarations("max-width: none;"), "max-width: -1px;");
    assert_eq!(declarations("line-height: normal;"), "line-height: 1.2em;");
    assert_eq!(declarations("font-size: x-small;"), "font-size: 0.7em;");
    assert_eq!(declarations("font-size: xx-large"), "font-size: 1.7em");
    assert_eq!(declarations("font-size: medium;"), "font-size: 1.0em;");
    assert_eq!(declarations("font-size: larger;"), "font-size: larger;");
}

#[test]
fn font_shorthand_keeps_the_size() {
    assert_eq!(declarations("font: bold 12px/1.5 serif;"), "font-size: 12px;");
    assert_eq!(declarations("p { font: 2em sans-serif }"), "p { font-size: 2em}");
}

#[test]
fn background_color_shorthand() {
    assert_eq!(declarations("background: lime;"), "background-color: lime;");
    assert_eq!(declarations("background: #f00;"), "background-color: #f00;");
    assert_eq!(declarations("background: fixed;"), "background: fixed;");
    assert_eq!(
        declarations("background: cyan;"),
        "background-color: #00ffff;"
    );
}

#[test]
fn named_colors_outside_the_palette() {
    assert_eq!(declarations("color: pink;"), "color: #ffc0cb;");
    assert_eq!(declarations("color: navy;"), "color: navy;");
    assert_eq!(
        declarations("border-top-color: lightblue;"),
        "border-top-color: #add8e6;"
    );
    assert_eq!(
        declarations("<p style=\"color: Magenta\">pink</p>"),
        "<p style=\"color: #ff00ff\">pink</p>"
    );
}

#[test]
fn declaration_rules_are_idempotent() {
    let samples = [
        "margin:10px; border:20px solid black; padding:30px;",
        " border-style: solid none solid solid; ",
        " border-width: 0; ",
        " margin-inline-start: 10px; ",
        "border-inline-start: 2px solid pink;",
        "padding-block: 1px 2px;",
        "font: bold 12px/1.5 serif;",
        "font-size: x-small;",
        "width: calc(50px + 100px / 2);",
        "background: cyan;",
        "border: 1px solid pink;",
        "line-height: normal;",
        "max-height: none;",
        "color: lightgrey;",
    ];
    for sample in samples {
        let once = declarations(sample);
        let twice = declarations(&once);
        assert_eq!(once, twice, "{sample}");
    }
}

#[test]
fn rule_table_lookup_by_id() {
    let table = RuleTable::declarations();
    let ids: Vec<_> = table.rules().iter().map(|r| r.id).collect();
    let position = |id: &str| ids.iter().position(|i| *i == id).expect(id);
    assert!(position("logical-property") < position("border"));
    assert!(position("background-color") < position("named-color"));
    assert!(position("calc") < position("logical-property"));
    assert!(table.get("no-such-rule").is_none());
}
