use anyhow::Result;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// File name for the song suggestion list.
pub const SONG_FILE: &str = "song_list.txt";
/// File name for the activity suggestion list.
pub const ACTIVITY_FILE: &str = "activity_list.txt";

/// Formats a song suggestion as one list line.
pub fn song_entry(title: &str, artist: &str) -> String {
    format!("{title} - {artist}")
}

/// One append-only suggestion list backed by a UTF-8 text file,
/// one entry per line. Lines are never mutated or removed.
#[derive(Debug, Clone)]
pub struct SuggestionList {
    path: PathBuf,
    empty_notice: &'static str,
}

impl SuggestionList {
    pub fn new(path: PathBuf, empty_notice: &'static str) -> Self {
        Self { path, empty_notice }
    }

    /// Appends one entry to the list, creating the file on first use.
    /// The entry is written verbatim; embedded delimiters are the
    /// submitter's problem.
    pub async fn append_line(&self, line: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.write_all(b"\n").await?;
        Ok(())
    }

    /// Full file contents, verbatim.
    pub async fn read_all(&self) -> Result<String> {
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }

    /// Trimmed file contents, or the fixed "nothing here yet" notice when
    /// the file is missing or blank.
    pub async fn read_or_notice(&self) -> Result<String> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => {
                let trimmed = contents.trim();
                if trimmed.is_empty() {
                    Ok(self.empty_notice.to_string())
                } else {
                    Ok(trimmed.to_string())
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(self.empty_notice.to_string()),
            Err(e) => Err(e.into()),
        }
    }
}

/// The two suggestion lists the bot maintains. Cheap to clone into
/// handlers; tests point it at a temp directory.
#[derive(Debug, Clone)]
pub struct ListStore {
    pub songs: SuggestionList,
    pub activities: SuggestionList,
}

impl ListStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            songs: SuggestionList::new(dir.join(SONG_FILE), "No songs available."),
            activities: SuggestionList::new(dir.join(ACTIVITY_FILE), "No activities available."),
        }
    }
}
