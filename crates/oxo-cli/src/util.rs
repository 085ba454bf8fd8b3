use std::io::{self, Write as _};

use anyhow::Context;

/// Writes `value` as pretty-printed JSON followed by a newline to stdout.
pub fn print_json<T>(value: &T) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let mut writer = io::stdout().lock();
    serde_json::to_writer_pretty(&mut writer, value).context("Failed to write JSON to stdout")?;
    writeln!(writer).context("Failed to write newline after JSON to stdout")?;
    writer.flush().context("Failed to flush stdout")?;
    Ok(())
}
