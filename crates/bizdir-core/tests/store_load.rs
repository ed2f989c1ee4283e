// Loading a record file from disk the way the CLI does.

use std::io::Write;

use bizdir_core::store::RecordStore;
use tempfile::NamedTempFile;

#[test]
fn record_file_round_trips_through_json() {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"[
            {{"name":"TechNova","category":"Tech","location":"SP","size":"M","rating":"4.8","premium":"true"}},
            {{"name":"Sabor Mineiro","category":"Food","location":"MG","size":"S","rating":"4.3","premium":"false"}}
        ]"#
    )
    .expect("write records");

    let json = std::fs::read_to_string(file.path()).expect("read records back");
    let store = RecordStore::from_json(&json).expect("valid record file");
    let names: Vec<&str> = store.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["TechNova", "Sabor Mineiro"]);
    assert!(store.records()[0].premium);
    assert_eq!(store.records()[1].rating, 4.3);
}

#[test]
fn malformed_json_is_a_payload_error() {
    let err = RecordStore::from_json("not json").expect_err("must fail");
    assert!(matches!(err, bizdir_core::error::Error::Payload(_)));
}
