//! Song list model: bundled defaults plus files the user uploads.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SongOrigin {
    Default,
    Uploaded,
}

impl SongOrigin {
    /// Tag rendered next to the entry in the list.
    pub fn label(&self) -> &'static str {
        match self {
            SongOrigin::Default => "local",
            SongOrigin::Uploaded => "uploaded",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SongEntry {
    pub name: String,
    pub src: String,
    pub origin: SongOrigin,
}

// Placeholder loop only; no copyrighted audio ships with the scene.
pub const DEFAULT_SONGS: &[(&str, &str)] =
    &[("paradise demo (placeholder)", "assets/audio/demo-loop.mp3")];

#[derive(Clone, Debug, Default)]
pub struct SongLibrary {
    entries: Vec<SongEntry>,
}

impl SongLibrary {
    pub fn with_defaults() -> Self {
        let mut lib = Self::default();
        for (name, src) in DEFAULT_SONGS {
            lib.add(name, src, SongOrigin::Default);
        }
        lib
    }

    /// Append an entry and return its index.
    pub fn add(&mut self, name: &str, src: &str, origin: SongOrigin) -> usize {
        self.entries.push(SongEntry {
            name: name.to_string(),
            src: src.to_string(),
            origin,
        });
        self.entries.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&SongEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[SongEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
