pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod source;
pub mod timeline;
pub mod types;

pub use config::WordTimeConfig;
pub use error::WordTimeError;
pub use pipeline::builder::TimelinePostprocessorBuilder;
pub use pipeline::runtime::TimelinePostprocessor;
pub use pipeline::traits::{BoundaryClamper, GapFiller, OverlapFilter};
pub use report::{StructuralMetrics, TimelineReport};
pub use source::AlignedTranscript;
pub use types::{
    PartialScript, PartialWordTime, ScriptTimeUnit, Timeline, TimelineInput, WordTimeUnit,
};
