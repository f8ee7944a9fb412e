// Pipeline module - drives fetch, load and prepare, then serves remove and search

mod driver;
mod state;

pub use driver::{DictionaryPipeline, PipelineError};
pub use state::{
    PipelineState, PipelineStateError, PipelineStateMachine, DATA_MISSING, DOWNLOAD_FAILED,
    READ_FAILED,
};
