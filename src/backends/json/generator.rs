use serde::ser::Serialize;
use serde_json::{
    ser::PrettyFormatter,
    Serializer,
};
use std::{
    fs::File,
    io::Write,
    path::Path,
};

use crate::{
    error::Result,
    grammar::RuleTable,
};

/// This is the main struct of the [`json`](crate::backends::json) backend. It turns a rule table into JSON.
pub struct JsonGenerator {
    indent: &'static [u8],
}

impl JsonGenerator {
    /// Create a new JsonGenerator.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            indent: b"    ",
        }
    }

    /// Serialize `table` into a JSON array of `{"name", "pattern", "emitter"}` objects.
    /// Rules keep their insertion order and an unset emitter becomes `null`.
    pub fn to_bytes(&self, table: &RuleTable) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(self.indent);
        let mut ser = Serializer::with_formatter(&mut buf, formatter);
        table.rules().serialize(&mut ser)?;
        Ok(buf)
    }

    /// Write the rules of `table` into the output file `path`.
    pub fn generate<P: AsRef<Path>>(self, path: P, table: &RuleTable) -> Result<()> {
        let buf = self.to_bytes(table)?;

        let mut file = File::create(path.as_ref())?;
        file.write_all(&buf)?;
        log::info!("Wrote {} rules to {}", table.len(), path.as_ref().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_generator() {
        let table = RuleTable::new()
            .with_rule("Digit", "[0-9]")
            .with_rule("Digit", "[a-f]")
            .with_emitter("Digit", "(lambda (x) x)")
            .unwrap();

        let bytes = JsonGenerator::new().to_bytes(&table).unwrap();
        let text = String::from_utf8(bytes.clone()).unwrap();
        assert!(text.contains("\n    {"));

        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value, json!([
            {"name": "Digit", "pattern": "[0-9]", "emitter": "(lambda (x) x)"},
            {"name": "Digit", "pattern": "[a-f]", "emitter": null},
        ]));
    }

    #[test]
    fn test_field_order() {
        let table = RuleTable::new().with_rule("A", "a");
        let text = String::from_utf8(JsonGenerator::new().to_bytes(&table).unwrap()).unwrap();

        let name = text.find("\"name\"").unwrap();
        let pattern = text.find("\"pattern\"").unwrap();
        let emitter = text.find("\"emitter\"").unwrap();
        assert!(name < pattern && pattern < emitter);
    }

    #[test]
    fn test_generate_file() {
        let path = std::env::temp_dir().join(format!("pegrules-json-{}.json", std::process::id()));
        let table = RuleTable::new().with_rule("A", "a");

        JsonGenerator::new().generate(&path, &table).unwrap();
        let value: Value = serde_json::from_reader(File::open(&path).unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(value, json!([{"name": "A", "pattern": "a", "emitter": null}]));
    }
}
