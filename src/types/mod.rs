pub mod error;
pub mod model;

pub use error::{HeaderGenError, Result, ResultExt};
pub use model::{
    AggregateScope, DirectoryMap, FileNaming, ForwardEntryGroup, GlobalFileIndex, HeaderFile,
    NsPath, ScanResult,
};
