use std::fs;
use std::io::Write;
use std::process::{Command, Output};

use edi_message::{Element, Message, MessageHeader, Segment};
use tempfile::NamedTempFile;

fn run_edi_doc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_edi-doc"))
        .args(args)
        .output()
        .expect("run edi-doc")
}

fn write_message_file(message: &Message) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temporary file should be creatable");
    let json = serde_json::to_string(message).expect("message should serialize");
    file.write_all(json.as_bytes())
        .expect("temporary file should be writable");
    file
}

fn despatch_message() -> Message {
    Message::with_segments(
        MessageHeader {
            reference: "ME000042".to_string(),
            message_type: "DESADV".to_string(),
            function: Some("9".to_string()),
        },
        vec![
            Segment::with_elements(
                "BGM",
                vec![
                    Element::simple("351"),
                    Element::simple("DES-881"),
                    Element::simple("9"),
                ],
            ),
            Segment::with_elements(
                "DTM",
                vec![Element::composite(["137", "20240115", "102"])],
            ),
            Segment::with_elements(
                "LIN",
                vec![
                    Element::simple("1"),
                    Element::simple(""),
                    Element::composite(["4000862141404", "EN"]),
                ],
            ),
        ],
    )
}

#[test]
fn parse_command_outputs_typed_document_json() {
    let input = write_message_file(&despatch_message());

    let output = run_edi_doc(&["parse", input.path().to_string_lossy().as_ref(), "--pretty"]);

    assert!(
        output.status.success(),
        "expected parse to succeed; stdout: {}; stderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).expect("stdout should be UTF-8");
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("stdout should contain valid JSON");
    let document = parsed
        .get("DespatchAdvice")
        .expect("output should be tagged DespatchAdvice");
    assert_eq!(
        document.get("document_number").and_then(|v| v.as_str()),
        Some("DES-881")
    );
    assert_eq!(
        document.get("document_date").and_then(|v| v.as_str()),
        Some("2024-01-15")
    );
}

#[test]
fn parse_command_writes_output_file() {
    let input = write_message_file(&despatch_message());
    let output_path = input.path().with_extension("out.json");

    let output = run_edi_doc(&[
        "parse",
        input.path().to_string_lossy().as_ref(),
        "--output",
        output_path.to_string_lossy().as_ref(),
    ]);

    assert!(output.status.success());
    let written = fs::read_to_string(&output_path).expect("output file should exist");
    assert!(written.contains("DES-881"));

    let _ = fs::remove_file(output_path);
}

#[test]
fn unsupported_message_type_exits_with_code_two() {
    let message = Message::new("PRICAT", "ME000001");
    let input = write_message_file(&message);

    let output = run_edi_doc(&["parse", input.path().to_string_lossy().as_ref()]);

    assert_eq!(output.status.code(), Some(2));
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("Unsupported message type: PRICAT"),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output.stdout.is_empty(), "no partial document is emitted");
}

#[test]
fn unreadable_input_exits_with_code_one() {
    let output = run_edi_doc(&["parse", "/path/that/does/not/exist.json"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERROR:"));
}

#[test]
fn inspect_command_lists_segment_tags() {
    let input = write_message_file(&despatch_message());

    let output = run_edi_doc(&["inspect", input.path().to_string_lossy().as_ref()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    assert!(stdout.contains("type:      DESADV"));
    assert!(stdout.contains("reference: ME000042"));
    assert!(stdout.contains("segments:  3"));
    assert!(stdout.contains("BGM x1"));
}
