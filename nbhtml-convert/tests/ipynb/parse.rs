//! Parsing tests for the notebook model

use nbhtml_convert::formats::ipynb::{Cell, MimeContent, Output};
use nbhtml_convert::{convert_notebook, ConvertError, HtmlOptions, Notebook};
use std::path::PathBuf;

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

#[test]
fn test_fixture_cells_in_order() {
    let nb = Notebook::from_json(&fixture("sample.ipynb")).unwrap();

    let kinds: Vec<_> = nb.cells.iter().map(Cell::kind).collect();
    assert_eq!(kinds, ["markdown", "code", "raw", "code", "markdown"]);
    assert_eq!(nb.metadata.title.as_deref(), Some("Working with Files"));
}

#[test]
fn test_fixture_outputs() {
    let nb = Notebook::from_json(&fixture("sample.ipynb")).unwrap();

    let Cell::Code {
        source,
        outputs,
        execution_count,
    } = &nb.cells[1]
    else {
        panic!("expected a code cell");
    };
    assert!(source.as_str().starts_with("import pandas as pd\n"));
    assert_eq!(*execution_count, Some(1));
    assert_eq!(outputs.len(), 2);

    match &outputs[1] {
        Output::ExecuteResult { data, .. } => match data.preferred() {
            Some(MimeContent::Html(html)) => assert!(html.starts_with("<table")),
            other => panic!("expected html payload, got {other:?}"),
        },
        other => panic!("expected execute_result, got {other:?}"),
    }

    let Cell::Code { outputs, .. } = &nb.cells[3] else {
        panic!("expected a code cell");
    };
    match &outputs[1] {
        Output::Error {
            ename,
            evalue,
            traceback,
        } => {
            assert_eq!(ename, "KeyError");
            assert_eq!(evalue.as_str(), "'missing'");
            assert_eq!(traceback.len(), 2);
        }
        other => panic!("expected error output, got {other:?}"),
    }
}

#[test]
fn test_malformed_json_reports_position() {
    let err = Notebook::from_json("{\"cells\": [").unwrap_err();
    assert!(matches!(err, ConvertError::Notebook(_)));
    assert!(err.to_string().starts_with("Malformed notebook:"));
    assert!(err.to_string().contains("line 1"));
}

#[test]
fn test_cell_without_type_is_rejected() {
    let err = Notebook::from_json(r#"{"cells": [{"source": ["x"]}]}"#).unwrap_err();
    assert!(err.to_string().contains("missing field `cell_type`"));
}

#[test]
fn test_wrong_source_shape_is_rejected() {
    assert!(Notebook::from_json(r#"{"cells": [{"cell_type": "code", "source": 42}]}"#).is_err());
}

// ============================================================================
// FIELDS THAT ARE NEVER RENDERED
// ============================================================================

#[test]
fn test_non_string_title_is_ignored() {
    let nb = Notebook::from_json(r#"{"cells": [], "metadata": {"title": ["A", "B"]}}"#).unwrap();
    assert_eq!(nb.metadata.title, None);

    let nb = Notebook::from_json(r#"{"cells": [], "metadata": null}"#).unwrap();
    assert_eq!(nb.metadata.title, None);
}

#[test]
fn test_null_stream_name_is_accepted() {
    let nb = Notebook::from_json(
        r#"{"cells": [{"cell_type": "code", "source": "",
            "outputs": [{"output_type": "stream", "name": null, "text": "hi"}]}]}"#,
    )
    .unwrap();

    let Cell::Code { outputs, .. } = &nb.cells[0] else {
        panic!("expected a code cell");
    };
    assert_eq!(
        outputs[0],
        Output::Stream {
            name: None,
            text: "hi".into(),
        }
    );
}

#[test]
fn test_string_traceback_is_accepted() {
    let nb = Notebook::from_json(
        r#"{"cells": [{"cell_type": "code", "source": "",
            "outputs": [{"output_type": "error", "ename": "E", "evalue": "v", "traceback": "tb"}]}]}"#,
    )
    .unwrap();

    let Cell::Code { outputs, .. } = &nb.cells[0] else {
        panic!("expected a code cell");
    };
    assert_eq!(
        outputs[0],
        Output::Error {
            ename: "E".to_string(),
            evalue: "v".into(),
            traceback: vec![],
        }
    );
}

#[test]
fn test_output_without_type_is_unknown() {
    let source = r#"{"cells": [{"cell_type": "code", "source": "x",
        "outputs": [{"text": "orphan"}, {"output_type": "stream", "text": "kept"}]}]}"#;
    let nb = Notebook::from_json(source).unwrap();

    let Cell::Code { outputs, .. } = &nb.cells[0] else {
        panic!("expected a code cell");
    };
    assert_eq!(outputs[0], Output::Unknown);
    assert!(matches!(outputs[1], Output::Stream { .. }));

    let html = convert_notebook(source, &HtmlOptions::default()).unwrap();
    assert!(!html.contains("orphan"));
    assert!(html.contains("<pre class=\"output-text\">kept</pre>"));
}

#[test]
fn test_typed_output_with_bad_payload_is_rejected() {
    let err = Notebook::from_json(
        r#"{"cells": [{"cell_type": "code", "source": "",
            "outputs": [{"output_type": "stream", "text": 42}]}]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConvertError::Notebook(_)));
}
