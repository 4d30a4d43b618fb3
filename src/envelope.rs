use std::io::{self, Write};

use serde::Serialize;

use crate::extract::NicknameMap;

pub const STATUS_OK: u8 = 0;
pub const STATUS_ERROR: u8 = 1;

/// The one JSON object this tool ever prints, built once per run and
/// serialized as a single line. The constructors keep `content_type`
/// and the shape of `content` in agreement.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub status: u8,
    pub content_type: &'static str,
    pub cooldown: u64,
    pub content: EnvelopeContent,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum EnvelopeContent {
    Nicknames(NicknameMap),
    Error(String),
}

impl Envelope {
    pub fn nicknames(cooldown: u64, nicknames: NicknameMap) -> Self {
        Envelope {
            status: STATUS_OK,
            content_type: "nicknames",
            cooldown,
            content: EnvelopeContent::Nicknames(nicknames),
        }
    }

    pub fn error(cooldown: u64, message: String) -> Self {
        Envelope {
            status: STATUS_ERROR,
            content_type: "error",
            cooldown,
            content: EnvelopeContent::Error(message),
        }
    }

    /// Writes the envelope as one line of JSON. The sink is neither
    /// flushed nor closed here.
    pub fn send(&self, out: &mut impl Write) -> io::Result<()> {
        serde_json::to_writer(&mut *out, self)?;
        writeln!(out)
    }
}
