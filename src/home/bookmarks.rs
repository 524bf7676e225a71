//! Bookmark grid shown on the home surface.

/// A bookmark tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookmarkEntry {
    /// Label under the glyph.
    pub label: &'static str,
    /// Location opened when the tile is activated.
    pub location: &'static str,
    /// Single glyph drawn on the tile.
    pub glyph: &'static str,
}

const fn site(label: &'static str, location: &'static str, glyph: &'static str) -> BookmarkEntry {
    BookmarkEntry {
        label,
        location,
        glyph,
    }
}

/// Sites shown on every new home surface.
pub const POPULAR_SITES: &[BookmarkEntry] = &[
    site("Google", "https://www.google.com", "🔍"),
    site("YouTube", "https://www.youtube.com", "📺"),
    site("GitHub", "https://www.github.com", "🐙"),
    site("Stack Overflow", "https://stackoverflow.com", "📚"),
    site("Reddit", "https://www.reddit.com", "🤖"),
    site("Twitter", "https://www.twitter.com", "🐦"),
    site("Facebook", "https://www.facebook.com", "📘"),
    site("Instagram", "https://www.instagram.com", "📷"),
    site("LinkedIn", "https://www.linkedin.com", "💼"),
    site("Amazon", "https://www.amazon.com", "🛒"),
    site("Netflix", "https://www.netflix.com", "🎬"),
    site("Spotify", "https://www.spotify.com", "🎵"),
];

/// Default number of tiles per row.
pub const DEFAULT_COLUMNS: usize = 6;

/// Bookmark grid state.
#[derive(Debug, Clone)]
pub struct BookmarkGrid {
    tiles: Vec<BookmarkEntry>,
    cursor: usize,
    columns: usize,
}

impl BookmarkGrid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self {
            tiles: Vec::new(),
            cursor: 0,
            columns: DEFAULT_COLUMNS,
        }
    }

    /// Fill the grid from [`POPULAR_SITES`].
    pub fn generate(&mut self) {
        self.tiles = POPULAR_SITES.to_vec();
        self.cursor = 0;
    }

    /// Fill the grid only if it has no tiles yet. Returns whether it filled.
    pub fn generate_if_empty(&mut self) -> bool {
        if !self.tiles.is_empty() {
            return false;
        }
        self.generate();
        true
    }

    /// Tiles in display order.
    pub fn tiles(&self) -> &[BookmarkEntry] {
        &self.tiles
    }

    /// Whether the grid has tiles.
    pub fn is_populated(&self) -> bool {
        !self.tiles.is_empty()
    }

    /// Selected tile index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Tiles per row.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Change the row length, e.g. after a resize. Zero is treated as one.
    pub fn set_columns(&mut self, columns: usize) {
        self.columns = columns.max(1);
    }

    /// The selected tile.
    pub fn selected(&self) -> Option<&BookmarkEntry> {
        self.tiles.get(self.cursor)
    }

    /// Location of the tile at `index`.
    pub fn activate(&self, index: usize) -> Option<&'static str> {
        self.tiles.get(index).map(|tile| tile.location)
    }

    /// Move selection one tile left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move selection one tile right.
    pub fn move_right(&mut self) {
        if self.cursor + 1 < self.tiles.len() {
            self.cursor += 1;
        }
    }

    /// Move selection one row up.
    pub fn move_up(&mut self) {
        if self.cursor >= self.columns {
            self.cursor -= self.columns;
        }
    }

    /// Move selection one row down.
    pub fn move_down(&mut self) {
        if self.cursor + self.columns < self.tiles.len() {
            self.cursor += self.columns;
        }
    }
}

impl Default for BookmarkGrid {
    fn default() -> Self {
        Self::new()
    }
}
