// protocol.rs - Device command schema
//
// Every command is POSTed as one JSON object whose "Command" field names the
// directive. Field names and casing are fixed by the device firmware.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;

use crate::frame::{PixelBuffer, FRAME_SIZE};

/// Picture pacing in milliseconds for single-frame uploads.
pub const PIC_SPEED: u32 = 1000;

/// Text layout used for `Draw/SendHttpText`.
pub const TEXT_Y: i32 = 24;
pub const TEXT_FONT: u32 = 2;
pub const TEXT_ALIGN_CENTER: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Clock = 0,
    Cloud = 1,
    Visualizer = 2,
    Custom = 3,
}

impl Channel {
    pub fn label(index: u8) -> &'static str {
        match index {
            0 => "Clock/Faces",
            1 => "Cloud Channel",
            2 => "Visualizer",
            3 => "Custom",
            _ => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "Command")]
pub enum Command {
    #[serde(rename = "Channel/SetBrightness")]
    SetBrightness {
        #[serde(rename = "Brightness")]
        brightness: u8,
    },
    #[serde(rename = "Channel/SetIndex")]
    SetChannel {
        #[serde(rename = "SelectIndex")]
        index: u8,
    },
    #[serde(rename = "Draw/ResetHttpGifId")]
    ResetGifId,
    #[serde(rename = "Draw/SendHttpGif")]
    SendGif {
        #[serde(rename = "PicID")]
        pic_id: u32,
        #[serde(rename = "PicNum")]
        pic_num: u32,
        #[serde(rename = "PicOffset")]
        pic_offset: u32,
        #[serde(rename = "PicWidth")]
        pic_width: u32,
        #[serde(rename = "PicSpeed")]
        pic_speed: u32,
        #[serde(rename = "PicData")]
        pic_data: String,
    },
    #[serde(rename = "Draw/SendHttpText")]
    SendText {
        #[serde(rename = "TextId")]
        text_id: u32,
        x: i32,
        y: i32,
        dir: u32,
        font: u32,
        #[serde(rename = "TextWidth")]
        text_width: u32,
        speed: u32,
        #[serde(rename = "TextString")]
        text: String,
        color: String,
        align: u32,
    },
}

impl Command {
    /// Wire name of the directive, as sent in the "Command" field.
    pub fn name(&self) -> &'static str {
        match self {
            Command::SetBrightness { .. } => "Channel/SetBrightness",
            Command::SetChannel { .. } => "Channel/SetIndex",
            Command::ResetGifId => "Draw/ResetHttpGifId",
            Command::SendGif { .. } => "Draw/SendHttpGif",
            Command::SendText { .. } => "Draw/SendHttpText",
        }
    }

    /// Single-frame upload of a 64x64 buffer. The caller checks the size.
    pub fn send_frame(frame: &PixelBuffer) -> Self {
        Command::SendGif {
            pic_id: 1,
            pic_num: 1,
            pic_offset: 0,
            pic_width: FRAME_SIZE as u32,
            pic_speed: PIC_SPEED,
            pic_data: encode_pixels(frame),
        }
    }

    /// Static, centered text.
    pub fn static_text(text: &str, color: &str) -> Self {
        Command::SendText {
            text_id: 1,
            x: 0,
            y: TEXT_Y,
            dir: 0,
            font: TEXT_FONT,
            text_width: FRAME_SIZE as u32,
            speed: 0,
            text: text.to_string(),
            color: color.to_string(),
            align: TEXT_ALIGN_CENTER,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Base64 of the row-major R,G,B bytes.
pub fn encode_pixels(frame: &PixelBuffer) -> String {
    STANDARD.encode(frame.to_rgb_bytes())
}
