//! Sheetpull engine: the fetch-parse-write pipeline and its worker loop.
mod engine;
mod export_url;
mod fetch;
mod filename;
mod parse;
mod persist;
mod types;
mod workbook;

pub use engine::{
    run_pipeline, ChannelStatusSink, Clock, PipelineConfig, PipelineHandle, RunStarter, StatusSink,
};
pub use export_url::csv_export_url;
pub use fetch::{FetchSettings, RawPayload, ReqwestFetcher, RetrievalError, SheetFetcher};
pub use filename::timestamped_filename;
pub use parse::{parse_table, ParseError, Table};
pub use persist::{check_destination_dir, AtomicFileWriter, PersistError};
pub use types::{FailureKind, Phase, PipelineEvent, RunId, RunOutcome, WriteSummary};
pub use workbook::{display_widths, WorkbookWriter, WriteError, MAX_COLUMN_WIDTH};
