// Page element ids and web-only audio settings.

pub const CANVAS_ID: &str = "app-canvas";
pub const SONG_LIST_ID: &str = "songs";
pub const UPLOAD_ID: &str = "upload";
pub const PLAY_BUTTON_ID: &str = "playPause";
pub const NOW_PLAYING_ID: &str = "now";

// Output level of the shared bus every track is routed through.
pub const MASTER_GAIN: f32 = 1.0;
