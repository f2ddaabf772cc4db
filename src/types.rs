use chrono::NaiveDate;

/// One row of the patch timeline.
///
/// Rows are only ever built by the table extractor once the patch cell has
/// been recognized as a version, so `patch_id` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchRow {
    patch_id: String,
    build: Option<String>,
    release_date_na: Option<NaiveDate>,
}

impl PatchRow {
    pub fn new(
        patch_id: String,
        build: Option<String>,
        release_date_na: Option<NaiveDate>,
    ) -> Self {
        Self {
            patch_id,
            build,
            release_date_na,
        }
    }

    /// Canonical version, e.g. `4.1.3` or `4.0.2 BU`
    pub fn patch_id(&self) -> &str {
        &self.patch_id
    }

    pub fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }

    /// North American release date
    pub fn release_date_na(&self) -> Option<NaiveDate> {
        self.release_date_na
    }
}
