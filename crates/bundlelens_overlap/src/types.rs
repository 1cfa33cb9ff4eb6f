use anyhow::Result;

use bundlelens_core::{
    BundleData, BundleNetwork, FileDetail, FileOverlap, LineOverlap, NetworkView, OutputFile,
    Summary, filter_network, rank_file_overlap, source_view,
};

/// Everything one run of the inspector produced.
#[derive(Debug, Clone)]
pub struct Inspection {
    pub data: BundleData,
    pub network: BundleNetwork,
    pub summary: Summary,
    /// The selection in effect; `None` for the summary view
    pub selection: Option<String>,
    /// Set when a requested selection matched nothing
    pub fallback: bool,
}

impl Inspection {
    pub fn view(&self) -> Result<NetworkView<'_>> {
        Ok(filter_network(self.selection.as_deref(), &self.network)?)
    }

    /// The selected file, when the selection names one in the source map.
    pub fn selected_file(&self) -> Option<&str> {
        self.selection.as_deref().filter(|s| self.data.source_files.contains_key(*s))
    }

    /// The output record of the selected bundle, if the document lists one.
    pub fn selected_output(&self) -> Option<&OutputFile> {
        let name = self.selection.as_deref()?;
        self.data.output_files.iter().find(|o| o.name == name)
    }

    pub fn source_rows(&self) -> Option<Vec<LineOverlap<'_>>> {
        self.selected_file().and_then(|file| source_view(&self.data, file).ok())
    }

    pub fn detail(&self) -> Option<FileDetail> {
        let file = self.selected_file()?;
        let lines = self.data.source_files.get(file)?.source.as_slice();
        Some(FileDetail(FileOverlap::compute(file, &self.data, lines)))
    }

    pub fn ranking(&self) -> Vec<FileOverlap> {
        rank_file_overlap(&self.data)
    }

    /// The current view as `{ "nodes": [...], "links": [...] }` for a graph renderer.
    pub fn network_json(&self) -> Result<String> {
        let view = self.view()?;
        Ok(serde_json::to_string_pretty(&view)?)
    }
}
