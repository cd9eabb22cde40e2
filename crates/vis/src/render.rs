mod chart;
mod output;
mod page;
mod script;

use serde::Serialize;

use crate::error::Result;

pub use crate::render::output::OutputFile;

pub trait OutputStream {
    fn write(&mut self, data: &str) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl OutputStream for String {
    fn write(&mut self, data: &str) -> Result<()> {
        self.push_str(data);
        Ok(())
    }
}

pub trait Render {
    fn render<O>(&self, output: &mut O) -> Result<()>
    where
        O: OutputStream;
}

/// Serializes `value` as JSON that can be embedded in a `<script>` element.
///
/// The markup characters `<`, `>` and `&` only occur inside JSON strings,
/// where their `\u` escapes decode to the same text.
pub(crate) fn script_json<T: Serialize>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value)?;
    let mut escaped = String::with_capacity(json.len());

    for c in json.chars() {
        match c {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            _ => escaped.push(c),
        }
    }

    Ok(escaped)
}

// A `</script` inside the element would end it early.
pub(crate) fn escape_script(text: &str) -> String {
    text.replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_json_cannot_close_the_element() -> Result<()> {
        let json = script_json(&vec!["</script><script>alert(1)"])?;

        assert_eq!(json, r#"["\u003c/script\u003e\u003cscript\u003ealert(1)"]"#);

        Ok(())
    }

    #[test]
    fn script_json_cannot_open_a_comment() -> Result<()> {
        let json = script_json(&vec!["<!--<script>", "a & b"])?;

        assert_eq!(
            json,
            r#"["\u003c!--\u003cscript\u003e","a \u0026 b"]"#
        );
        assert!(!json.contains('<'));

        Ok(())
    }

    #[test]
    fn inline_code_cannot_close_the_element() {
        assert_eq!(escape_script("a = '</script>';"), r"a = '<\/script>';");
    }
}
