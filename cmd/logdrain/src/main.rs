//! logdrain - Demo tool draining deferred log lines through a fixed ring queue.
//!
//! A logger that must stay out of interrupt context hands each formatted
//! line to a callback, and the callback pushes it into a fixed ring queue;
//! the main loop drains the queue when it is safe to do slow output. This
//! tool plays both roles in sequence so the transport behavior (overwrite
//! loss, bounded rejection, batched draining) can be observed directly.

use anyhow::Result;
use clap::Parser;
use embq_buffer::{FixedStr, LineRing, QueueError, RingBuffer};
use tracing::{debug, info};

/// Payload capacity of one queued line, including the terminator.
const LINE_BYTES: usize = 64;

/// Number of lines the queue retains.
const QUEUE_DEPTH: usize = 16;

/// Demo tool for the deferred-logging transport pattern.
#[derive(Parser, Debug)]
#[command(name = "logdrain")]
#[command(about = "Drain deferred log lines through a fixed ring queue")]
struct Args {
    /// Number of lines the producer emits
    #[arg(short, long, default_value_t = 24)]
    messages: usize,

    /// Lines pulled per drain batch
    #[arg(short, long, default_value_t = 4)]
    batch: usize,

    /// Reject new lines instead of overwriting the oldest when full
    #[arg(long)]
    no_overwrite: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(false)
            .init();
    }

    anyhow::ensure!(
        (1..=QUEUE_DEPTH).contains(&args.batch),
        "batch must be between 1 and {QUEUE_DEPTH}"
    );

    let mut queue: LineRing<LINE_BYTES, QUEUE_DEPTH> = RingBuffer::new();

    // Producer phase: stands in for the logger callback that runs where
    // slow output is not allowed.
    let mut overwritten = 0usize;
    let mut rejected = 0usize;
    for seq in 0..args.messages {
        let line = format!("sample {seq}: adc={}", 1000 + seq * 3);

        if args.no_overwrite {
            match queue.try_push(FixedStr::from_str_lossy(&line)) {
                Ok(()) => {}
                Err(QueueError::Full) => rejected += 1,
                Err(err) => return Err(err.into()),
            }
        } else {
            if queue.is_full() {
                overwritten += 1;
            }
            queue.push_str(&line);
        }

        debug!(seq, queued = queue.len(), "produced line");
    }

    info!(
        queued = queue.len(),
        overwritten, rejected, "producer finished"
    );

    // Drain phase: the main loop empties the queue in batches, as it would
    // between units of real work.
    let mut drained = 0usize;
    let mut batch_buf = [FixedStr::<LINE_BYTES>::new(); QUEUE_DEPTH];
    loop {
        match queue.pull_into(&mut batch_buf[..args.batch]) {
            Ok(n) => {
                for line in &batch_buf[..n] {
                    println!("{line}");
                }
                drained += n;
                debug!(batch = n, remaining = queue.len(), "drained batch");
            }
            Err(QueueError::Empty) => break,
            Err(err) => return Err(err.into()),
        }
    }

    println!();
    println!(
        "produced {} lines, drained {}, overwrote {}, rejected {}",
        args.messages, drained, overwritten, rejected
    );

    Ok(())
}
