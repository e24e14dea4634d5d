use std::io::Read;

use crate::config::DecodeOptions;
use crate::decode::{source_text, DecodeState, Unmatched};
use crate::error::IniError;
use crate::field::IniField;
use crate::model::build_model;

/// Decode `bytes` into `record`, returning unmatched lines alongside the outcome.
pub(crate) fn decode_bytes<T: IniField>(
    bytes: &[u8],
    record: &mut T,
    options: &DecodeOptions,
) -> (Result<(), IniError>, Vec<Unmatched>) {
    let (model, build_error) = build_model::<T>(options);
    let text = source_text(bytes);
    let mut state = DecodeState::new(&model, options, build_error);
    let outcome = state.run(text.lines(), record);
    (outcome, state.into_unmatched())
}

/// Reads an INI document from a byte stream and decodes it into records.
///
/// Each call to [`Decoder::decode`] reads the stream to its end before parsing.
/// Lines that matched nothing during the most recent call are kept for
/// inspection through [`Decoder::unmatched`].
#[derive(Debug)]
pub struct Decoder<Rd> {
    reader: Rd,
    options: DecodeOptions,
    unmatched: Vec<Unmatched>,
}

impl<Rd: Read> Decoder<Rd> {
    pub fn new(reader: Rd) -> Self {
        Self::with_options(reader, DecodeOptions::default())
    }

    pub fn with_options(reader: Rd, options: DecodeOptions) -> Self {
        Self {
            reader,
            options,
            unmatched: Vec::new(),
        }
    }

    pub fn decode<T: IniField>(&mut self, record: &mut T) -> Result<(), IniError> {
        self.unmatched.clear();

        let mut buf = Vec::new();
        self.reader.read_to_end(&mut buf)?;

        let (outcome, unmatched) = decode_bytes(&buf, record, &self.options);
        self.unmatched = unmatched;
        outcome
    }

    pub fn unmatched(&self) -> &[Unmatched] {
        &self.unmatched
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    pub fn into_inner(self) -> Rd {
        self.reader
    }
}
