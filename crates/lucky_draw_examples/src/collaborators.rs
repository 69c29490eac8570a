use lucky_draw::prelude::*;
use tracing::info;

/// Prints copied text to stdout and keeps the last copy.
#[derive(Debug, Default)]
pub struct StdoutClipboard {
    pub last: Option<String>,
}

impl Clipboard for StdoutClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        println!("[clipboard] {text}");
        self.last = Some(text.to_owned());
        Ok(())
    }
}

/// Logs share payloads instead of posting them.
#[derive(Debug, Default)]
pub struct ConsoleShare {
    pub sent: Vec<SharePayload>,
}

impl ShareSdk for ConsoleShare {
    fn is_available(&self) -> bool {
        true
    }

    fn invoke(&mut self, payload: &SharePayload) -> Result<()> {
        info!(
            "Share '{}' -> {} ({}).",
            payload.title, payload.link.web_url, payload.image_url
        );
        self.sent.push(payload.clone());
        Ok(())
    }
}
