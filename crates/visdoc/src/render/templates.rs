//! Static template blocks.
//!
//! These blocks are emitted as-is. None of them depends on the parsed
//! document.

/// Subtitle line under the document title.
pub(super) const TAGLINE: &str = "*Transform your technical content into beautiful documentation*\n";

/// Horizontal rule closing a block.
pub(super) const RULE: &str = "---\n";

/// Summary card with placeholder difficulty, time, and cost.
pub(super) const QUICK_OVERVIEW: &str = r##"
## Quick Overview

> A brief summary of the project and its objectives.

**Difficulty Level**: Beginner | **Time Required**: 2-3 hours | **Cost**: ~$25

---

"##;

/// Fixed anchor list. Anchors are listed even when a block is not rendered.
pub(super) const TABLE_OF_CONTENTS: &str = r##"
## Table of Contents

1. [Introduction](#introduction)
2. [System Architecture](#system-architecture)
3. [Hardware Components](#hardware-components)
4. [Circuit Diagram](#circuit-diagram)
5. [Software Setup](#software-setup)
6. [Step-by-Step Guide](#step-by-step-guide)
7. [Testing & Troubleshooting](#testing--troubleshooting)
8. [Next Steps](#next-steps)

---

"##;

/// Layered architecture graph and data-flow sequence. IoT profile only.
pub(super) const ARCHITECTURE: &str = r##"
## 1. System Architecture

### High-Level Architecture

```mermaid
graph TB
    subgraph "Physical Layer"
        A[Sensors] --> B[Microcontroller]
        B --> C[Actuators]
    end

    subgraph "Communication Layer"
        B --> D[Communication Module]
        D --> E[Cloud/Gateway]
    end

    subgraph "Application Layer"
        E --> F[Database]
        E --> G[API]
        G --> H[Web Dashboard]
    end

    style A fill:#e1f5ff
    style B fill:#fff4e1
    style C fill:#e1f5ff
    style E fill:#ffe1f5
```

### Data Flow

```mermaid
sequenceDiagram
    participant Sensor
    participant MCU
    participant Cloud
    participant User

    Sensor->>MCU: Read Data
    MCU->>MCU: Process Data
    MCU->>Cloud: Transmit
    Cloud->>User: Display
```

---

"##;

/// Illustrative component comparison table.
pub(super) const COMPONENTS_GALLERY: &str = r##"
## 2. Hardware Components

### Component Comparison

| Component | Model | Quantity | Purpose | Specs | Cost |
|-----------|-------|----------|---------|-------|------|
| Microcontroller | ESP32 | 1 | Central processing | 240MHz dual-core | $5 |
| Sensor | DHT22 | 1 | Temperature/Humidity | 0-100% RH | $5 |
| Display | OLED 128x64 | 1 | Show readings | I2C interface | $8 |
| Power | USB/Battery | 1 | Power system | 5V input | $2 |

---

"##;

/// Wiring graph and connection table. IoT profile only.
pub(super) const CIRCUIT_DIAGRAM: &str = r##"
## 3. Circuit Diagram

### Wiring Overview

```mermaid
graph LR
    ESP32[ESP32<br/>Microcontroller] -->|GPIO 4| DHT[DHT22<br/>Sensor]
    ESP32 -->|I2C SDA| OLED[OLED<br/>Display]
    ESP32 -->|I2C SCL| OLED
    ESP32 -->|5V| VCC[Power<br/>Supply]

    style ESP32 fill:#4CAF50,color:#fff
    style DHT fill:#2196F3,color:#fff
    style OLED fill:#FF9800,color:#fff
```

### Connection Table

| From (ESP32) | To (Component) | Pin | Wire Color |
|--------------|---------------|-----|------------|
| GPIO 4 | DHT22 | Data | Yellow |
| 3.3V | DHT22 | VCC | Red |
| GND | DHT22 | GND | Black |
| GPIO 21 | OLED | SDA | Green |
| GPIO 22 | OLED | SCL | Blue |

---

"##;

/// Common issues table and troubleshooting flowchart.
pub(super) const TROUBLESHOOTING: &str = r##"
## 5. Testing & Troubleshooting

### Common Issues

| Problem | Possible Cause | Solution |
|---------|---------------|----------|
| No sensor readings | Loose connection | Check wiring |
| Display blank | Power issue | Verify 3.3V supply |
| Wrong values | Wrong config | Update code |

### Troubleshooting Flowchart

```mermaid
flowchart TD
    A[Issue Detected] --> B{System Powers On?}
    B -->|No| C[Check Power Supply]
    B -->|Yes| D{Sensor Reading?}

    C --> E[Verify Connections]
    D -->|No| F[Check Wiring]
    D -->|Yes| G{Display Working?}

    F --> H[Verify Pin Configuration]
    G -->|No| I[Check I2C]

    style A fill:#ffcccc
    style H fill:#e1ffe1
    style I fill:#e1ffe1
```

---

"##;

/// Learning roadmap, resources, and support footer.
pub(super) const NEXT_STEPS: &str = r##"
## 6. Next Steps

### Project Enhancements

```mermaid
timeline
    title Learning Path
    section Current
        Basic Implementation : Core functionality
    section Next
        Add WiFi : Cloud connectivity
    section Future
        Machine Learning : Advanced features
```

### Learning Resources

- [Official Documentation](https://example.com)
- [Community Forum](https://forum.example.com)
- [Video Tutorials](https://youtube.com/example)

---

## Support

Need help? Join our community:
- Discord: [Link]
- GitHub: [Link]
- Email: support@example.com

---

**Did you find this helpful?** [Rate Guide] | [Report Issue]
"##;

/// Heading lines opening the code section.
pub(super) const CODE_SECTION_HEADINGS: [&str; 2] =
    ["## 4. Software Setup\n", "### Complete Firmware Code\n"];

/// Collapsible annotation placeholder following each code block.
pub(super) const CODE_ANNOTATIONS: [&str; 5] = [
    "**Code Annotations:**\n\n",
    "<details>\n",
    "<summary><strong>Line-by-Line Explanation</strong></summary>\n\n",
    "*Detailed explanations will be added here*\n\n",
    "</details>\n",
];
