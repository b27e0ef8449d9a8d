//! Tests for the table rows printed by the CLI.

use colmap_cli::summary::{definition_rows, field_rows, page_rows};
use colmap_map::{Callbacks, MappingSession};
use colmap_model::{Field, FieldName, MappingOptions, Preview};

fn name(value: &str) -> FieldName {
    FieldName::new(value).unwrap()
}

fn fields() -> Vec<Field> {
    vec![
        Field::required(name("name"), "Full name"),
        Field::required(name("email"), ""),
        Field::optional(name("phone"), "Phone"),
    ]
}

fn session() -> MappingSession {
    let preview = Preview::new(
        "people.csv",
        true,
        vec![
            vec!["name".into(), "email".into(), "age".into()],
            vec!["Ann".into(), "ann@x.io".into(), "31".into()],
            vec!["Bob".into(), "bob@x.io".into(), "42".into()],
        ],
    );
    let options = MappingOptions::default().with_auto_match_headers(false);
    let mut session = MappingSession::new(&preview, fields(), options).unwrap();
    session.drag_onto(1, Some("email")).unwrap();
    session
}

#[test]
fn page_rows_pad_the_last_page() {
    let session = session();
    insta::assert_debug_snapshot!(page_rows(&session), @r#"
    [
        [
            "A",
            "name",
            "Ann\nBob",
            "",
        ],
        [
            "B",
            "email",
            "ann@x.io\nbob@x.io",
            "email",
        ],
        [
            "C",
            "age",
            "31\n42",
            "",
        ],
        [
            "",
            "",
            "",
            "",
        ],
        [
            "",
            "",
            "",
            "",
        ],
    ]
    "#);
}

#[test]
fn field_rows_show_errors_after_submit() {
    let mut session = session();
    let rows = field_rows(&session);
    assert_eq!(rows[0][4], "-");

    let mut handler = Callbacks::new(|_| {}, || {});
    assert!(session.submit(&mut handler).is_err());

    insta::assert_debug_snapshot!(field_rows(&session), @r#"
    [
        [
            "name",
            "Full name",
            "yes",
            "",
            "missing",
        ],
        [
            "email",
            "email",
            "yes",
            "B (email)",
            "assigned",
        ],
        [
            "phone",
            "Phone",
            "no",
            "",
            "-",
        ],
    ]
    "#);
}

#[test]
fn definition_rows_follow_schema_order() {
    let rows = definition_rows(&fields());
    let names: Vec<&str> = rows.iter().map(|row| row[0].as_str()).collect();
    assert_eq!(names, vec!["name", "email", "phone"]);
    assert_eq!(rows[2][2], "no");
}

#[test]
fn placeholder_rows_carry_the_empty_slot_code() {
    let session = session();
    let rows = page_rows(&session);
    assert_eq!(rows[2][0], colmap_map::slot_code(Some(2)));
    assert!(rows[3..].iter().all(|row| row[0] == colmap_map::slot_code(None)));
}
