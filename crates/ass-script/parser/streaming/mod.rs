//! Line-at-a-time script ingestion
//!
//! [`StreamParser`] consumes ASS lines as they arrive and tracks which
//! section is active. [`Stream`] abstracts where those lines come from.
//!
//! # Example
//!
//! ```rust
//! use ass_script::parser::streaming::{StreamParser, Stream, StringStream};
//! use ass_script::parser::ParserConfig;
//!
//! let mut stream = StringStream::new("[Script Info]\nPlayResY: 720\n");
//! let mut parser = StreamParser::new(ParserConfig::default());
//! while let Some(line) = stream.next_line()? {
//!     parser.feed_line(&line)?;
//! }
//! assert_eq!(parser.finish()?.properties().resolution_y(), 720);
//! # Ok::<(), ass_script::CoreError>(())
//! ```

mod processor;
mod state;
mod stream;

pub use processor::StreamParser;
pub use state::SectionKind;
pub use stream::{ReaderStream, Stream, StringStream};
