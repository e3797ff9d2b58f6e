use serde::{Deserialize, Serialize};

/// Settings for reading delimited text files with [`crate::io::load_txt_with_config`].
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LoadTxtConfig {
    /// Field separator byte.
    pub delimiter: u8,
    /// Drop the first line of the file.
    pub skip_header: bool,
    /// Lines starting with this byte are ignored.
    pub comment: Option<u8>,
}

impl Default for LoadTxtConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            skip_header: true,
            comment: None,
        }
    }
}

impl LoadTxtConfig {
    pub fn new(delimiter: u8, skip_header: bool) -> Self {
        Self {
            delimiter,
            skip_header,
            comment: None,
        }
    }

    /// Tab-separated files with a header row.
    pub fn tsv() -> Self {
        Self::new(b'\t', true)
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_skip_header(mut self, skip_header: bool) -> Self {
        self.skip_header = skip_header;
        self
    }

    pub fn with_comment(mut self, comment: Option<u8>) -> Self {
        self.comment = comment;
        self
    }
}
