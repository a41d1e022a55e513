use crate::app::{AppResponse, ExampleReport, PatternKind, Report};
use crate::clipboard::{ClipboardCapability, CopyStatus};
use crate::engine::config::DisplayConfig;
use crate::engine::InputError;
use crate::ui::render::render_result_box;
use crate::ui::theme::Painter;
use std::io::{self, Write};

pub fn write_startup<W: Write>(
    out: &mut W,
    painter: &Painter,
    capability: &ClipboardCapability,
) -> io::Result<()> {
    let status = capability.status_message();
    if capability.supports_copy() {
        writeln!(out, "{}", painter.success(&status))?;
    } else {
        writeln!(out, "{}", painter.warning(&status))?;
    }
    writeln!(
        out,
        "{}",
        painter.heading("Welcome to the Tilde Prefix Pattern Generator! 🌊")
    )
}

pub fn write_menu<W: Write>(out: &mut W, painter: &Painter) -> io::Result<()> {
    writeln!(out, "\n{}", painter.heading("📋 Options:"))?;
    writeln!(out, "1. Process your own text")?;
    writeln!(out, "2. Alternating stride pattern (2 or 3 colour codes)")?;
    writeln!(out, "3. View examples")?;
    writeln!(out, "4. Clipboard support")?;
    writeln!(out, "5. Quit")
}

pub fn write_input_banner<W: Write>(out: &mut W, painter: &Painter) -> io::Result<()> {
    writeln!(out, "{}", painter.heading("🌊 Colour Code Pattern Generator"))?;
    writeln!(out, "{}", "=".repeat(40))?;
    writeln!(
        out,
        "{}",
        painter.dimmed("All codes will automatically start with '~'")
    )
}

pub fn write_marker_hint<W: Write>(out: &mut W, painter: &Painter) -> io::Result<()> {
    writeln!(out, "\n🏷️  Enter prefixes separated by commas.")?;
    writeln!(
        out,
        "{}",
        painter.dimmed("Examples: '~W1,~W2' or 'R5,O5,Y5,G5,B5,M5,V5'")
    )?;
    writeln!(
        out,
        "{}",
        painter.dimmed("(Note: '~' will be automatically added if missing)")
    )
}

pub fn write_response<W: Write>(
    out: &mut W,
    painter: &Painter,
    display: &DisplayConfig,
    response: &AppResponse,
) -> io::Result<()> {
    match response {
        AppResponse::Decorated(report) => write_report(out, painter, display, report),
        AppResponse::Examples(examples) => write_examples(out, painter, display, examples),
        AppResponse::ClipboardHelp { capability, help } => {
            writeln!(out, "\n📦 {}", capability.status_message())?;
            writeln!(out, "{}", help)
        }
        AppResponse::Rejected(e) => write_rejection(out, painter, e),
        AppResponse::Goodbye => writeln!(out, "\n👋 Goodbye!"),
    }
}

pub fn write_rejection<W: Write>(
    out: &mut W,
    painter: &Painter,
    error: &InputError,
) -> io::Result<()> {
    let message = match error {
        InputError::InvalidChoice(_) => format!("❌ {}", error),
        _ => format!("❌ Error: {}", error),
    };
    writeln!(out, "{}", painter.error(&message))
}

pub fn write_report<W: Write>(
    out: &mut W,
    painter: &Painter,
    display: &DisplayConfig,
    report: &Report,
) -> io::Result<()> {
    let rule = "=".repeat(display.box_width() as usize);
    writeln!(out, "\n{}", rule)?;
    writeln!(out, "{}", painter.heading("COPYABLE OUTPUT"))?;
    writeln!(out, "{}", rule)?;

    writeln!(out, "Original: {}", report.original)?;
    writeln!(out, "Colours: {:?}", report.markers)?;
    if report.kind == PatternKind::Stride {
        writeln!(out, "Pattern: stride {:?}", report.normalized)?;
    }
    writeln!(out)?;

    writeln!(out, "{}", painter.heading("📋 RESULT (ready to copy):"))?;
    for row in render_result_box(&report.result, display.box_width()) {
        writeln!(out, "{}", row)?;
    }

    match &report.copy_status {
        CopyStatus::Copied => {
            writeln!(out, "{}", painter.success("✅ Automatically copied to clipboard!"))?
        }
        CopyStatus::Failed(reason) => {
            writeln!(
                out,
                "{}",
                painter.warning(&format!("⚠ Error copying to clipboard: {}", reason))
            )?;
            writeln!(out, "📝 Select and copy the text above manually")?;
        }
        CopyStatus::Unavailable => writeln!(out, "📝 Select and copy the text above manually")?,
    }

    let raw_rule = "-".repeat(display.rule_width);
    writeln!(out, "\n🔤 Raw text for manual copy:")?;
    writeln!(out, "{}", raw_rule)?;
    writeln!(out, "{}", report.result)?;
    writeln!(out, "{}", raw_rule)?;

    writeln!(out, "\n{}", painter.heading("📊 Statistics:"))?;
    writeln!(out, "   • Original letters: {}", report.stats.decoratable_chars)?;
    writeln!(out, "   • Result length: {} characters", report.stats.result_chars)?;
    writeln!(out, "   • Colour codes used: {}", report.stats.distinct_markers)
}

pub fn write_examples<W: Write>(
    out: &mut W,
    painter: &Painter,
    display: &DisplayConfig,
    examples: &[ExampleReport],
) -> io::Result<()> {
    let rule = "=".repeat(display.box_width() as usize);
    writeln!(out, "\n{}", rule)?;
    writeln!(
        out,
        "{}",
        painter.heading("EXAMPLES WITH TILDE PREFIXES - Each letter gets a prefix starting with '~'")
    )?;
    writeln!(out, "{}", rule)?;

    for example in examples {
        writeln!(out, "Text: '{}'", example.text)?;
        writeln!(out, "Input prefixes: {:?}", example.markers)?;
        writeln!(out, "Tilde prefixes: {:?}", example.normalized)?;
        writeln!(out, "Result: '{}'", painter.text(&example.result))?;
        writeln!(out, "{}", "-".repeat(50))?;
    }
    Ok(())
}
