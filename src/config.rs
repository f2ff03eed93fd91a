use std::path::PathBuf;

use actix_web::cookie::Key;
use clap::Parser;

use crate::deck::DeckSource;

const MIN_SESSION_KEY_LEN: usize = 64;

/// Present a markdown file as a slide deck in the browser.
#[derive(Debug, Parser)]
#[command(name = "markdeck", version, about)]
pub struct Cli {
    /// Markdown file to present (slides separated by `---` lines)
    #[arg(env = "MARKDECK_FILE", required_unless_present = "remote", conflicts_with = "remote")]
    pub file: Option<PathBuf>,

    /// Present the deck served by another MarkDeck instance instead of a local file
    #[arg(long, env = "MARKDECK_REMOTE", value_name = "URL")]
    pub remote: Option<String>,

    #[arg(long, env = "MARKDECK_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(short, long, env = "MARKDECK_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Directory holding the viewer's script and stylesheet
    #[arg(long, env = "MARKDECK_STATIC_DIR", default_value = default_static_dir())]
    pub static_dir: PathBuf,
}

impl Cli {
    pub fn deck_source(&self) -> DeckSource {
        match (&self.file, &self.remote) {
            (_, Some(url)) => DeckSource::remote(url),
            (Some(path), None) => DeckSource::File(path.clone()),
            // clap enforces one of the two
            (None, None) => DeckSource::File(PathBuf::from("slides.md")),
        }
    }
}

pub fn default_static_dir() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/static")
}

/// Session signing key. Load from SESSION_KEY for sessions that survive restarts.
pub fn session_key() -> Key {
    match std::env::var("SESSION_KEY") {
        Ok(val) if val.len() >= MIN_SESSION_KEY_LEN => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Ok(val) => {
            log::warn!(
                "SESSION_KEY too short ({} bytes, need {MIN_SESSION_KEY_LEN}+), generating random key",
                val.len()
            );
            Key::generate()
        }
        Err(_) => {
            log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
            Key::generate()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_argument_selects_file_source() {
        let cli = Cli::try_parse_from(["markdeck", "talk.md", "--port", "9000"]).unwrap();
        assert_eq!(cli.deck_source(), DeckSource::File(PathBuf::from("talk.md")));
        assert_eq!(cli.port, 9000);
        assert_eq!(cli.host, "127.0.0.1");
    }

    #[test]
    fn remote_selects_remote_source() {
        let cli = Cli::try_parse_from(["markdeck", "--remote", "http://deck.local:8000"]).unwrap();
        assert_eq!(
            cli.deck_source(),
            DeckSource::Remote("http://deck.local:8000/api/slides".into())
        );
    }

    #[test]
    fn file_and_remote_conflict() {
        assert!(Cli::try_parse_from(["markdeck", "talk.md", "--remote", "http://x"]).is_err());
    }
}
