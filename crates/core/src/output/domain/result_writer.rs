use std::io::Write;

use crate::shared::result_collection::ResultCollection;

/// Writes a completed result collection to an output stream.
///
/// Implementations own the encoding. The pipeline calls this exactly once
/// per run, after the drain loop has terminated, with the full collection.
/// An empty collection is a valid input and must produce well-formed output.
pub trait ResultWriter: Send {
    fn write(
        &mut self,
        collection: &ResultCollection,
        out: &mut dyn Write,
    ) -> Result<(), Box<dyn std::error::Error>>;
}
