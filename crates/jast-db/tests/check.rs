use jast_db::{Diagnostic, File, FileParse as _, RootDatabase, check_file};
use salsa::Setter as _;

/// `(line, message)` pairs from `//~ ERROR <message>` markers, 1-based lines.
fn expectations(fixture: &str) -> Vec<(u32, String)> {
    fixture
        .lines()
        .zip(1..)
        .filter_map(|(line, number)| {
            let (_, message) = line.split_once("//~ ERROR")?;
            Some((number, message.trim().to_owned()))
        })
        .collect()
}

fn reported(db: &RootDatabase, file: File) -> Vec<(u32, String)> {
    let line_index = file.line_index(db);
    check_file::accumulated::<Diagnostic>(db, file)
        .into_iter()
        .map(|diag| {
            let line = line_index.line_col(diag.range().start()).line + 1;
            (line, diag.message().to_owned())
        })
        .collect()
}

#[track_caller]
fn check(fixture: &str) {
    let db = RootDatabase::default();
    let file = File::new(&db, "Check.java".into(), fixture.to_owned());

    let mut expected = expectations(fixture);
    let mut actual = reported(&db, file);
    expected.sort();
    actual.sort();

    assert_eq!(actual, expected, "diagnostics differ for:\n{fixture}");
}

#[test]
fn clean_file() {
    check(
        r#"
class Clean {
    int x = 1;
    void m() { Runnable r = Clean::new; }
}
"#,
    );
}

#[test]
fn missing_semicolon() {
    check(
        r#"
class A {
    int x
} //~ ERROR expected ';'
"#,
    );
}

#[test]
fn missing_catch() {
    check(
        r#"
class A {
    void m() {
        try { }
    } //~ ERROR expected 'catch'
}
"#,
    );
}

#[test]
fn stray_tokens() {
    check(
        r#"
class A {
    + //~ ERROR expected a field or method declaration
    void m() { x = int; } //~ ERROR expected '::' or '.class' after a primitive type
}
"#,
    );
}

#[test]
fn unterminated_class() {
    check(
        r#"
class A {
    void m() { return; } //~ ERROR expected '}'"#,
    );
}

#[test]
fn parse_is_cached_until_the_text_changes() {
    let mut db = RootDatabase::default();
    let file = File::new(&db, "A.java".into(), "class A { }".to_owned());

    let first: *const _ = file.parse(&db);
    let second: *const _ = file.parse(&db);
    assert!(std::ptr::eq(first, second));
    assert!(check_file::accumulated::<Diagnostic>(&db, file).is_empty());

    file.set_text(&mut db).to("class A { int x }".to_owned());
    assert!(file.parse(&db).has_errors());
    assert_eq!(check_file::accumulated::<Diagnostic>(&db, file).len(), 1);
}
