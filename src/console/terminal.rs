use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};

/// Line-oriented prompt/print pair over any async reader and writer.
pub struct Terminal<R, W> {
    lines: Lines<R>,
    out: W,
}

impl<R, W> Terminal<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, out: W) -> Self {
        Self {
            lines: reader.lines(),
            out,
        }
    }

    pub async fn say(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        self.out.write_all(text.as_ref().as_bytes()).await?;
        self.out.write_all(b"\n").await?;
        self.out.flush().await
    }

    /// Prints `prompt` and reads one trimmed line. `None` at end of input.
    pub async fn ask(&mut self, prompt: impl AsRef<str>) -> io::Result<Option<String>> {
        self.out.write_all(prompt.as_ref().as_bytes()).await?;
        self.out.flush().await?;
        Ok(self.lines.next_line().await?.map(|line| line.trim().to_string()))
    }

    #[allow(dead_code)]
    pub fn into_output(self) -> W {
        self.out
    }
}
