//! File naming for one batch run

use std::path::{Path, PathBuf};

use super::RowIndex;

/// Where a run's generated configs, simulator results and report live
///
/// Every file sits next to the template and is named from the template's
/// stem, so `teams/xiao.txt` produces `teams/xiao_1.txt`,
/// `teams/result_xiao_1.json` and `teams/sheet_xiao.csv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunLayout {
    dir: PathBuf,
    base_name: String,
}

impl RunLayout {
    pub fn new(dir: impl Into<PathBuf>, base_name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            base_name: base_name.into(),
        }
    }

    /// Derive the layout from the template's path
    pub fn for_template(template: &Path) -> Self {
        let dir = template
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let base_name = template
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::new(dir, base_name)
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Identifier of one generated config, e.g. `xiao_3`
    pub fn config_id(&self, index: RowIndex) -> String {
        format!("{}_{}", self.base_name, index)
    }

    pub fn config_path(&self, index: RowIndex) -> PathBuf {
        self.dir.join(format!("{}.txt", self.config_id(index)))
    }

    pub fn result_path(&self, index: RowIndex) -> PathBuf {
        self.dir.join(format!("result_{}.json", self.config_id(index)))
    }

    pub fn sheet_path(&self) -> PathBuf {
        self.dir.join(format!("sheet_{}.csv", self.base_name))
    }
}
