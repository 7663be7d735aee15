use std::io::Write;

use crate::output::domain::result_writer::ResultWriter;
use crate::shared::result_collection::ResultCollection;

/// Serializes the collection as a JSON array, one object per record with
/// the frame timestamp and the full per-face payloads.
pub struct JsonResultWriter {
    pretty: bool,
}

impl JsonResultWriter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Default for JsonResultWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultWriter for JsonResultWriter {
    fn write(
        &mut self,
        collection: &ResultCollection,
        out: &mut dyn Write,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *out, collection)?;
        } else {
            serde_json::to_writer(&mut *out, collection)?;
        }
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }
}
