use crate::areas::toolbox::Toolbox;
use crate::artifacts::convert::base64::{Alphabet, decode, encode};

#[derive(Debug, Clone, Default)]
pub struct Base64Options {
    pub text: Option<String>,
    pub decode: bool,
    pub url_safe: bool,
}

impl Toolbox {
    pub fn base64(&self, opts: &Base64Options) -> anyhow::Result<()> {
        let input = self.read_text(opts.text.as_deref())?;
        let alphabet = if opts.url_safe {
            Alphabet::UrlSafe
        } else {
            Alphabet::Standard
        };

        let output = if opts.decode {
            decode(&input, alphabet)?
        } else {
            encode(&input, alphabet)
        };

        self.emit(&output)
    }
}
