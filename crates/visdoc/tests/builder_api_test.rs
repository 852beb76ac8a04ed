//! Integration tests for the DocumentBuilder API
//!
//! These tests drive the public API end to end: raw text in, decorated
//! text out.

use visdoc::{
    DiagramElement, DiagramKind, DocumentBuilder, VisdocError,
    config::{AppConfig, Palette, Typography},
    profile::Profile,
};

const GUIDE: &str = "# Weather Station

This guide builds a small weather station.

## Components
- ESP32
- DHT22

## Wiring
GPIO 4 -> DHT22 data

```cpp
#include <DHT.h>
DHT dht(4, DHT22);
```

```python
a=1
b=2
```
";

#[test]
fn test_builder_api_exists() {
    let _builder = DocumentBuilder::default();
}

#[test]
fn test_parse_guide() {
    let builder = DocumentBuilder::default();
    let doc = builder.parse(GUIDE);

    assert_eq!(doc.title(), "Weather Station");
    assert_eq!(doc.code_blocks().len(), 2);
    assert_eq!(doc.code_blocks()[0].language(), "cpp");
    assert_eq!(
        doc.code_blocks()[0].code(),
        "#include <DHT.h>\nDHT dht(4, DHT22);"
    );
    assert_eq!(doc.code_blocks()[1].code(), "a=1\nb=2");
    assert!(doc.components().is_empty());
    assert!(doc.connections().is_empty());
}

#[test]
fn test_transform_iot() {
    let output = DocumentBuilder::default().transform(GUIDE, &Profile::Iot);

    assert!(output.starts_with("# Weather Station\n"));
    assert!(output.contains("## 1. System Architecture"));
    assert!(output.contains("## 3. Circuit Diagram"));
    assert!(output.contains("```python\na=1\nb=2\n```"));

    let cpp = output.find("```cpp\n#include <DHT.h>").unwrap();
    let python = output.find("```python\na=1").unwrap();
    assert!(cpp < python);
}

#[test]
fn test_transform_tutorial_matches_iot_minus_hardware_blocks() {
    let builder = DocumentBuilder::default();
    let iot = builder.transform(GUIDE, &Profile::Iot);
    let tutorial = builder.transform(GUIDE, &Profile::Tutorial);

    assert!(!tutorial.contains("## 1. System Architecture"));
    assert!(!tutorial.contains("## 3. Circuit Diagram"));
    assert!(tutorial.len() < iot.len());
    for heading in [
        "## Quick Overview",
        "## Table of Contents",
        "## 2. Hardware Components",
        "## 4. Software Setup",
        "## 5. Testing & Troubleshooting",
        "## 6. Next Steps",
    ] {
        assert!(iot.contains(heading), "iot is missing {heading}");
        assert!(tutorial.contains(heading), "tutorial is missing {heading}");
    }
}

#[test]
fn test_transform_empty_input() {
    let output = DocumentBuilder::default().transform("", &Profile::Api);

    assert!(output.starts_with("# \n"));
    assert!(!output.contains("## 4. Software Setup"));
    assert!(output.contains("## 6. Next Steps"));
}

#[test]
fn test_builder_with_config() {
    let config = AppConfig::new(
        Palette::new([("primary", "#000000")]),
        Typography::new("Georgia", "Menlo", 1.2),
    );
    let builder = DocumentBuilder::new(config.clone());

    assert_eq!(builder.config(), &config);

    // Styling tokens do not change the rendered text.
    let default_output = DocumentBuilder::default().transform(GUIDE, &Profile::Iot);
    assert_eq!(builder.transform(GUIDE, &Profile::Iot), default_output);
}

#[test]
fn test_builder_reusability() {
    let builder = DocumentBuilder::default();

    let first = builder.transform("# One\n```c\nx();\n```", &Profile::Iot);
    let second = builder.transform("# Two", &Profile::Iot);

    assert!(first.contains("```c\nx();\n```"));
    assert!(second.starts_with("# Two\n"));
    assert!(!second.contains("x();"));
}

#[test]
fn test_render_diagram_elements() {
    let builder = DocumentBuilder::default();
    let text = builder.render_diagram(
        DiagramKind::Sequence,
        &[
            DiagramElement::participant("Sensor"),
            DiagramElement::message("Sensor", "MCU", "Read Data"),
        ],
    );

    assert_eq!(
        text,
        "```mermaid\nsequenceDiagram\n    participant Sensor as Sensor\n    Sensor ->> MCU: Read Data\n```"
    );
}

#[test]
fn test_render_diagram_json_malformed_element() {
    let source = r#"[{"type": "node", "id": "A"}, {"type": "edge", "from": "A"}]"#;

    let err = DocumentBuilder::default()
        .render_diagram_json(DiagramKind::Flowchart, source)
        .unwrap_err();

    match err {
        VisdocError::Parse { err, src } => {
            assert_eq!(src, source);
            assert_eq!(err.diagnostics().len(), 1);
            assert_eq!(err.diagnostics()[0].message(), "malformed diagram element");
        }
        other => panic!("Expected parse error, got {other:?}"),
    }
}

#[test]
fn test_render_diagram_json_skips_untagged_elements() {
    let source = r#"[{"type":"node","id":"A"},{"id":"x"},{"type":"node","id":"B"}]"#;

    let text = DocumentBuilder::default()
        .render_diagram_json(DiagramKind::Flowchart, source)
        .unwrap();

    assert_eq!(text, "```mermaid\nflowchart TD\n    A[]\n    B[]\n```");
}
