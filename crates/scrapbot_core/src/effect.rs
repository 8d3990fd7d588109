/// IO requested by the core; executed by the gateway layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    IngestUrl { url: String, max_depth: u32 },
    AskQuestion { question: String },
    ResetEmbeddings,
}
