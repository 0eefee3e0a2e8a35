//! Packet output.
//!
//! The composed packet is written once, after every action succeeded.
//!
//! # Important
//!
//! - **stdout**: packet bytes only, no framing, no trailing newline (raw)
//! - **stderr**: logs and diagnostics
//!
//! # Example
//!
//! ```
//! use sew::output::{write_packet, OutputFormat};
//!
//! let mut out = Vec::new();
//! write_packet(&mut out, &[0x81, 0x00, 0x00, 0x07], OutputFormat::Hex).unwrap();
//! assert_eq!(out, b"00000000  81 00 00 07\n");
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;

use crate::action::ActionRegistry;

/// Bytes per line in the hex dump.
pub const HEX_DUMP_WIDTH: usize = 16;

/// How the packet is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Bytes verbatim.
    #[default]
    Raw,
    /// Offset-prefixed text dump, 16 bytes per line.
    Hex,
}

/// Write the packet to `writer` in the given format and flush.
pub fn write_packet<W: Write>(
    writer: &mut W,
    packet: &[u8],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Raw => writer.write_all(packet)?,
        OutputFormat::Hex => {
            for (line, chunk) in packet.chunks(HEX_DUMP_WIDTH).enumerate() {
                write!(writer, "{:08x} ", line * HEX_DUMP_WIDTH)?;
                for byte in chunk {
                    write!(writer, " {byte:02x}")?;
                }
                writer.write_all(b"\n")?;
            }
        }
    }
    writer.flush()
}

/// Write the packet to stdout.
pub fn write_stdout(packet: &[u8], format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_packet(&mut handle, packet, format)
}

/// Create (or truncate) `path` and write the packet into it.
pub fn write_file(path: &Path, packet: &[u8], format: OutputFormat) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_packet(&mut writer, packet, format)
}

/// Write one `name<TAB>usage` line per registered action.
pub fn write_action_list<W: Write>(writer: &mut W, registry: &ActionRegistry) -> io::Result<()> {
    for action in registry.iter() {
        writeln!(writer, "{}\t{}", action.name, action.usage)?;
    }
    writer.flush()
}
