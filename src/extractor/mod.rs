pub mod block;
pub mod table;

pub use block::{locate_enum_block, EnumBlock};
pub use table::TokenTable;

use crate::config::ExtractorConfig;
use crate::error::{Result, TokgenError};

/// Run the full extraction pipeline against the configured header file:
/// read, locate the enum block, normalize and tokenize its body.
///
/// The file handle is scoped to the read; nothing stays open while the
/// block is processed.
pub fn extract_token_table(config: &ExtractorConfig) -> Result<TokenTable> {
    if !config.input.is_file() {
        return Err(TokgenError::MissingInput {
            path: config.input.clone(),
        });
    }

    let contents = std::fs::read_to_string(&config.input)?;

    extract_from_str(
        &contents,
        &config.start_marker,
        &config.end_marker,
        &config.input.display().to_string(),
    )
}

/// Extraction over in-memory text; `source` only labels error messages.
pub fn extract_from_str(
    contents: &str,
    start_marker: &str,
    end_marker: &str,
    source: &str,
) -> Result<TokenTable> {
    let lines: Vec<&str> = contents.lines().collect();
    let block = locate_enum_block(&lines, start_marker, end_marker, source)?;

    Ok(TokenTable::from_block_lines(
        lines[block.start..block.end].iter().copied(),
    ))
}
