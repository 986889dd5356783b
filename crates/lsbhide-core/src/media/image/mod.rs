mod channel;
mod ignore_list;
pub mod lsb_codec;
mod signature;
mod traversal;

pub use channel::{Channel, ColorMode, PixelColor};
pub use ignore_list::IgnoreList;
pub use lsb_codec::{EmbedReport, Extraction, LsbCodec};
pub use signature::{FormatHint, SignatureStatus};
pub use traversal::{Direction, Traversal};
