/// Source and output constants shared by the fetcher, extractor and writer

// MediaWiki endpoint for the StarCraft II wiki
pub const LIQUIPEDIA_API: &str = "https://liquipedia.net/starcraft2/api.php";
pub const PATCHES_PAGE: &str = "Patches";

// Liquipedia asks API clients to identify themselves
pub const USER_AGENT: &str = "sc2-patch-scraper/1.0 (contact: you@example.com) reqwest";
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Class carried by data tables, as opposed to layout and navbox tables
pub const MARKER_CLASS: &str = "wikitable";

pub const DEFAULT_OUTPUT: &str = "data/patch_timeline.csv";
pub const CSV_HEADER: [&str; 3] = ["patch_id", "build", "release_date_na"];
