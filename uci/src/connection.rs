use super::commands::{UciInput, UciOutput};
use super::decoder::Decoder;
use super::encoder::Encoder;
use log::debug;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread::{self, JoinHandle};

pub struct UciConnection {
    output_tx: Sender<UciOutput>,
    printer: JoinHandle<io::Result<()>>,
}

impl Default for UciConnection {
    fn default() -> Self {
        Self::new()
    }
}

impl UciConnection {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        // Create a channel for UCI outputs
        let (output_tx, output_rx) = channel();

        // Spawn a thread to handle output printing
        let printer = Self::spawn_output_handler(output_rx, writer);

        Self { output_tx, printer }
    }

    /// Reads commands from stdin until `quit` or end of input.
    pub fn listen<F>(&mut self, callback: F) -> io::Result<()>
    where
        F: FnMut(&UciInput, Sender<UciOutput>) -> Result<(), Box<dyn Error>>,
    {
        let stdin = io::stdin();
        self.listen_to(stdin.lock(), callback)
    }

    pub fn listen_to<R, F>(&mut self, reader: R, mut callback: F) -> io::Result<()>
    where
        R: BufRead,
        F: FnMut(&UciInput, Sender<UciOutput>) -> Result<(), Box<dyn Error>>,
    {
        let decoder = Decoder::new();

        for in_line in reader.lines() {
            let in_line = in_line?;
            let in_line = in_line.trim();
            if in_line.is_empty() {
                continue;
            }
            debug!("Input: {:?}", in_line);

            let input = decoder.decode(in_line);

            // Handle potential errors from callback
            if let Err(e) = callback(&input, self.output_tx.clone()) {
                debug!("Callback error: {:?}", e);
            }

            if matches!(input, UciInput::Quit) {
                break;
            }
        }

        Ok(())
    }

    /// Closes the output channel and waits until everything queued has been written.
    pub fn close(self) -> io::Result<()> {
        let Self { output_tx, printer } = self;
        drop(output_tx);

        printer
            .join()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "output thread panicked"))?
    }

    fn spawn_output_handler<W: Write + Send + 'static>(
        output_rx: Receiver<UciOutput>,
        mut writer: W,
    ) -> JoinHandle<io::Result<()>> {
        thread::spawn(move || {
            let encoder = Encoder;

            while let Ok(output) = output_rx.recv() {
                let out_line = encoder.encode(&output);
                debug!("Output: {:?}", out_line);
                writeln!(writer, "{}", out_line)?;
                writer.flush()?;
            }

            Ok(())
        })
    }
}
