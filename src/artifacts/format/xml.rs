use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::Event;
use std::io::Cursor;

const INDENT_SIZE: usize = 2;

/// Re-indents an XML document, dropping whitespace-only text between elements.
pub fn pretty(input: &str) -> anyhow::Result<String> {
    let mut reader = Reader::from_str(input);
    reader.config_mut().trim_text(true);

    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', INDENT_SIZE);
    let mut depth = 0usize;
    let mut seen_root = false;

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(e) => anyhow::bail!("invalid XML at byte {}: {e}", reader.buffer_position()),
        };

        match &event {
            Event::Eof => break,
            Event::Start(_) => {
                depth += 1;
                seen_root = true;
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Empty(_) => seen_root = true,
            Event::Text(_) | Event::CData(_) if depth == 0 => {
                anyhow::bail!("invalid XML: text outside the root element")
            }
            _ => {}
        }

        writer.write_event(event)?;
    }

    if !seen_root {
        anyhow::bail!("invalid XML: no root element");
    }
    if depth > 0 {
        anyhow::bail!("invalid XML: {depth} unclosed element(s)");
    }

    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}
