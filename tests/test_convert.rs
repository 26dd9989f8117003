//! Tests for roster CSV to JSON conversion

mod common;

use common::{create_temp_csv, member_names, read_json, sample_roster, ROSTER_HEADER};
use teamcsv::pipeline::{
    convert, ConversionPolicy, ConvertError, ConvertOptions, DelimiterChoice, MemberRecord,
    SkipReason,
};

fn strict() -> ConvertOptions {
    ConvertOptions::default()
}

fn lenient() -> ConvertOptions {
    ConvertOptions {
        policy: ConversionPolicy::lenient(),
        ..Default::default()
    }
}

#[test]
fn test_strict_conversion_of_sample_roster() {
    let (temp_dir, csv_path) = create_temp_csv("team.csv", &sample_roster());
    let json_path = temp_dir.path().join("team.json");

    let conversion = convert(&csv_path, &json_path, &strict()).unwrap();

    assert_eq!(conversion.rows_read, 5);
    assert_eq!(conversion.members.len(), 3);
    assert_eq!(conversion.skipped.len(), 1);
    assert_eq!(conversion.skipped[0].row, 6);
    assert_eq!(conversion.skipped[0].name, "Sam Lee");
    assert_eq!(conversion.skipped[0].reason, SkipReason::MissingPosition);

    let doc = read_json(&json_path);
    assert_eq!(
        member_names(&doc),
        vec!["Ravi Kumar", "Jane Doe", "Zoë Brandt"],
        "strict output should be ordered by position rank"
    );
}

#[test]
fn test_lenient_conversion_keeps_input_order_and_empty_positions() {
    let (temp_dir, csv_path) = create_temp_csv("team.csv", &sample_roster());
    let json_path = temp_dir.path().join("team.json");

    let conversion = convert(&csv_path, &json_path, &lenient()).unwrap();

    assert!(conversion.skipped.is_empty());
    let doc = read_json(&json_path);
    assert_eq!(
        member_names(&doc),
        vec!["Jane Doe", "Ravi Kumar", "Zoë Brandt", "Sam Lee"]
    );
    assert_eq!(doc[3]["position"], "");
}

#[test]
fn test_returned_members_match_written_file() {
    let (temp_dir, csv_path) = create_temp_csv("team.csv", &sample_roster());
    let json_path = temp_dir.path().join("team.json");

    let conversion = convert(&csv_path, &json_path, &strict()).unwrap();

    let text = std::fs::read_to_string(&json_path).unwrap();
    let written: Vec<MemberRecord> = serde_json::from_str(&text).unwrap();
    assert_eq!(written, conversion.members);
}

#[test]
fn test_default_image_and_social_normalisation() {
    let (temp_dir, csv_path) = create_temp_csv("team.csv", &sample_roster());
    let json_path = temp_dir.path().join("team.json");

    convert(&csv_path, &json_path, &lenient()).unwrap();
    let doc = read_json(&json_path);

    let jane = &doc[0];
    assert_eq!(jane["image"], "/img/team/jane_doe.jpg");
    assert_eq!(jane["social"]["email"], "jane@example.com");
    assert_eq!(jane["social"]["linkedin"], "https://linkedin.com/in/jd");
    assert!(jane["social"].get("instagram").is_none());

    let ravi = &doc[1];
    assert_eq!(ravi["image"], "/img/team/ravi.png");
    assert_eq!(ravi["social"]["instagram"], "https://instagram.com/ravi");

    let sam = &doc[3];
    assert_eq!(sam["social"]["facebook"], "https://facebook.com/sam");
}

#[test]
fn test_social_absent_when_all_fields_blank() {
    let (temp_dir, csv_path) = create_temp_csv("team.csv", &sample_roster());
    let json_path = temp_dir.path().join("team.json");

    convert(&csv_path, &json_path, &lenient()).unwrap();
    let doc = read_json(&json_path);

    let zoe = &doc[2];
    assert_eq!(zoe["name"], "Zoë Brandt");
    assert!(zoe.get("social").is_none(), "no social key expected: {}", zoe);
}

#[test]
fn test_social_keys_are_known_and_non_empty() {
    let (temp_dir, csv_path) = create_temp_csv("team.csv", &sample_roster());
    let json_path = temp_dir.path().join("team.json");

    convert(&csv_path, &json_path, &lenient()).unwrap();
    let doc = read_json(&json_path);

    for member in doc.as_array().unwrap() {
        let keys: Vec<&String> = member.as_object().unwrap().keys().collect();
        for key in &keys {
            assert!(
                ["name", "position", "image", "social"].contains(&key.as_str()),
                "unexpected key {}",
                key
            );
        }
        if let Some(social) = member.get("social") {
            let social = social.as_object().unwrap();
            assert!(!social.is_empty());
            for (key, value) in social {
                assert!(["email", "linkedin", "instagram", "facebook"].contains(&key.as_str()));
                assert!(!value.as_str().unwrap().is_empty());
            }
        }
    }
}

#[test]
fn test_strict_sort_by_position_hierarchy() {
    let csv = format!(
        "{}\nA,Executive,,,,,\nB,Coordinator,,,,,\nC,Panel Member,,,,,\nD,Overall Coordinator,,,,,\n",
        ROSTER_HEADER
    );
    let (temp_dir, csv_path) = create_temp_csv("team.csv", &csv);
    let json_path = temp_dir.path().join("team.json");

    let conversion = convert(&csv_path, &json_path, &strict()).unwrap();

    let positions: Vec<&str> = conversion
        .members
        .iter()
        .map(|m| m.position.as_str())
        .collect();
    assert_eq!(
        positions,
        vec!["Overall Coordinator", "Coordinator", "Panel Member", "Executive"]
    );
}

#[test]
fn test_convenor_spellings_share_a_rank() {
    let csv = "name,position\nA,Executive\nB,Convener\nC,Convenor\nD,Webmaster\nE,Convener\n";
    let (temp_dir, csv_path) = create_temp_csv("team.csv", csv);
    let json_path = temp_dir.path().join("team.json");

    convert(&csv_path, &json_path, &strict()).unwrap();

    let doc = read_json(&json_path);
    assert_eq!(member_names(&doc), vec!["B", "C", "E", "A", "D"]);
}

#[test]
fn test_conversion_is_idempotent() {
    let (temp_dir, csv_path) = create_temp_csv("team.csv", &sample_roster());
    let first = temp_dir.path().join("first.json");
    let second = temp_dir.path().join("second.json");

    convert(&csv_path, &first, &strict()).unwrap();
    convert(&csv_path, &second, &strict()).unwrap();
    let first_bytes = std::fs::read(&first).unwrap();

    // Overwriting an existing file gives the same bytes too
    convert(&csv_path, &first, &strict()).unwrap();

    assert_eq!(first_bytes, std::fs::read(&second).unwrap());
    assert_eq!(first_bytes, std::fs::read(&first).unwrap());
}

#[test]
fn test_output_is_pretty_printed_with_literal_unicode() {
    let (temp_dir, csv_path) = create_temp_csv("team.csv", "name,position\nZoë Brandt,Executive\n");
    let json_path = temp_dir.path().join("team.json");

    convert(&csv_path, &json_path, &strict()).unwrap();

    let text = std::fs::read_to_string(&json_path).unwrap();
    assert_eq!(
        text,
        "[\n  {\n    \"name\": \"Zoë Brandt\",\n    \"position\": \"Executive\",\n    \"image\": \"/img/team/zoë_brandt.jpg\"\n  }\n]\n"
    );
}

#[test]
fn test_missing_input_is_not_found_and_writes_nothing() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("does_not_exist.csv");
    let json_path = temp_dir.path().join("team.json");

    let err = convert(&csv_path, &json_path, &strict()).unwrap_err();

    assert!(matches!(err, ConvertError::NotFound { .. }));
    assert!(!json_path.exists(), "no output should be written");
}

#[test]
fn test_failure_leaves_existing_output_untouched() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("missing.csv");
    let json_path = temp_dir.path().join("team.json");
    std::fs::write(&json_path, "previous").unwrap();

    assert!(convert(&csv_path, &json_path, &strict()).is_err());
    assert_eq!(std::fs::read_to_string(&json_path).unwrap(), "previous");
}

#[test]
fn test_invalid_utf8_is_conversion_failure() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("team.csv");
    let json_path = temp_dir.path().join("team.json");
    std::fs::write(&csv_path, b"name,position\n\xC3\x28,Executive\n").unwrap();

    let err = convert(&csv_path, &json_path, &strict()).unwrap_err();

    assert!(matches!(err, ConvertError::ConversionFailure { .. }));
    assert!(!json_path.exists());
}

#[test]
fn test_semicolon_file_is_sniffed() {
    let csv = "name;position;linkedin\n\"Doe, Jane\";Executive;linkedin.com/in/jd\n";
    let (temp_dir, csv_path) = create_temp_csv("team.csv", csv);
    let json_path = temp_dir.path().join("team.json");

    let conversion = convert(&csv_path, &json_path, &strict()).unwrap();

    assert_eq!(conversion.delimiter, b';');
    assert_eq!(conversion.members[0].name, "Doe, Jane");
    assert_eq!(conversion.members[0].image, "/img/team/doe,_jane.jpg");
}

#[test]
fn test_explicit_delimiter_override() {
    // Commas are consistent on every line, so sniffing alone would split on them
    let csv = "name\tposition\tnotes, misc\nDoe, Jane\tExecutive\tnone\n";
    let (temp_dir, csv_path) = create_temp_csv("team.csv", csv);
    let json_path = temp_dir.path().join("team.json");
    let options = ConvertOptions {
        delimiter: DelimiterChoice::Fixed(b'\t'),
        ..Default::default()
    };

    let conversion = convert(&csv_path, &json_path, &options).unwrap();

    assert_eq!(conversion.members.len(), 1);
    assert_eq!(conversion.members[0].name, "Doe, Jane");
    assert_eq!(conversion.members[0].position, "Executive");
}

#[test]
fn test_bom_and_crlf_from_spreadsheet_export() {
    let csv = "\u{FEFF}name,position,email\r\nJane Doe,Coordinator,jane@example.com\r\n";
    let (temp_dir, csv_path) = create_temp_csv("team.csv", csv);
    let json_path = temp_dir.path().join("team.json");

    let conversion = convert(&csv_path, &json_path, &strict()).unwrap();

    assert_eq!(conversion.members.len(), 1);
    let member = &conversion.members[0];
    assert_eq!(member.name, "Jane Doe");
    assert_eq!(member.position, "Coordinator");
    assert_eq!(
        member.social.as_ref().and_then(|s| s.email.as_deref()),
        Some("jane@example.com")
    );
}

#[test]
fn test_whitespace_is_trimmed_everywhere() {
    let csv = format!(
        "{}\n  Jane Doe  ,  Executive ,  , jane@example.com ,  linkedin.com/in/jd  ,,\n",
        ROSTER_HEADER
    );
    let (temp_dir, csv_path) = create_temp_csv("team.csv", &csv);
    let json_path = temp_dir.path().join("team.json");

    let conversion = convert(&csv_path, &json_path, &strict()).unwrap();

    let member = &conversion.members[0];
    assert_eq!(member.name, "Jane Doe");
    assert_eq!(member.position, "Executive");
    assert_eq!(member.image, "/img/team/jane_doe.jpg");
    let social = member.social.as_ref().unwrap();
    assert_eq!(social.email.as_deref(), Some("jane@example.com"));
    assert_eq!(social.linkedin.as_deref(), Some("https://linkedin.com/in/jd"));
}

#[test]
fn test_header_only_file_writes_empty_array() {
    let (temp_dir, csv_path) = create_temp_csv("team.csv", &format!("{}\n", ROSTER_HEADER));
    let json_path = temp_dir.path().join("team.json");

    let conversion = convert(&csv_path, &json_path, &strict()).unwrap();

    assert!(conversion.members.is_empty());
    assert_eq!(std::fs::read_to_string(&json_path).unwrap(), "[]\n");
}
