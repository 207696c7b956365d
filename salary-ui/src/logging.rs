//! Front-end logging.
//!
//! Log records go to stderr so that stdout carries only the results view.
//! A log file can be attached at any point after start-up, and the level
//! can be changed at runtime.

use std::{
    fs::File,
    io::{self, IsTerminal, Write},
    path::Path,
    sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError},
};

use anyhow::Result;
use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        FmtContext, MakeWriter,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
};

/// Local timestamp, level, source location, then the event fields.
struct LocalTimeFormat;

impl<S, N> FormatEvent<S, N> for LocalTimeFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();
        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");

        if ansi {
            write!(writer, "\x1b[2m{timestamp}\x1b[0m ")?;
            let color = match *meta.level() {
                Level::ERROR => "\x1b[1;31m",
                Level::WARN => "\x1b[1;33m",
                Level::INFO => "\x1b[1;32m",
                Level::DEBUG => "\x1b[1;34m",
                Level::TRACE => "\x1b[1;35m",
            };
            write!(writer, "{color}{:>5}\x1b[0m ", meta.level())?;
        } else {
            write!(writer, "{timestamp} {:>5} ", meta.level())?;
        }

        if let (Some(file), Some(line)) = (meta.file(), meta.line()) {
            let file = file.strip_prefix("src/").unwrap_or(file);
            if ansi {
                write!(writer, "\x1b[36m{file}:{line}\x1b[0m ")?;
            } else {
                write!(writer, "{file}:{line} ")?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

type SharedFile = Arc<Mutex<Option<File>>>;

/// Writer target that discards output until a file is attached.
#[derive(Clone)]
struct FileSlot(SharedFile);

struct SlotWriter<'a>(MutexGuard<'a, Option<File>>);

impl Write for SlotWriter<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        match &mut *self.0 {
            Some(f) => f.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut *self.0 {
            Some(f) => f.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for FileSlot {
    type Writer = SlotWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        SlotWriter(self.0.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

type SetLevelFn = Box<dyn Fn(&str) -> Result<()> + Send + Sync>;

static SET_LOG_LEVEL: OnceLock<SetLevelFn> = OnceLock::new();
static FILE_SLOT: OnceLock<SharedFile> = OnceLock::new();

/// `RUST_LOG` when set, otherwise `default_level`.
fn make_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

fn parse_level(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level.to_lowercase())
        .map_err(|e| anyhow::anyhow!("invalid log level '{level}': {e}"))
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init_logging(default_level: &str) {
    let file: SharedFile = Arc::new(Mutex::new(None));
    let (level_filter, level_handle) = reload::Layer::new(make_filter(default_level));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalTimeFormat)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr);

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalTimeFormat)
        .with_ansi(false)
        .with_writer(FileSlot(file.clone()));

    if tracing_subscriber::registry()
        .with(level_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .is_ok()
    {
        let _ = FILE_SLOT.set(file);
        let _ = SET_LOG_LEVEL.set(Box::new(move |level: &str| {
            level_handle
                .reload(parse_level(level)?)
                .map_err(|e| anyhow::anyhow!("filter reload failed: {e}"))
        }));
    }
}

/// Changes the active filter. Accepts a bare level or any `EnvFilter`
/// directive.
pub fn set_log_level(level: &str) -> Result<()> {
    match SET_LOG_LEVEL.get() {
        Some(set) => set(level),
        None => anyhow::bail!("logging not yet initialized"),
    }
}

/// Applies the configured level unless `RUST_LOG` is set.
pub fn apply_configured_level(level: &str) -> Result<()> {
    if std::env::var_os("RUST_LOG").is_some() {
        return Ok(());
    }
    set_log_level(level)
}

/// Appends log records to `path`, replacing any file already attached.
pub fn enable_file_logging(path: &Path) -> Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| anyhow::anyhow!("cannot open log file '{}': {e}", path.display()))?;

    match FILE_SLOT.get() {
        Some(slot) => {
            *slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(file);
            Ok(())
        }
        None => anyhow::bail!("logging not yet initialized"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_level_accepts_levels_and_directives() {
        assert!(parse_level("DEBUG").is_ok());
        assert!(parse_level("info,salary_ui=trace").is_ok());
    }

    #[test]
    fn parse_level_rejects_garbage() {
        assert!(parse_level("salary_ui=loud").is_err());
    }

    #[test]
    fn set_log_level_before_init_is_an_error() {
        assert!(set_log_level("debug").is_err());
    }

    #[test]
    fn slot_without_file_discards_writes() {
        let slot = FileSlot(Arc::new(Mutex::new(None)));
        let mut writer = slot.make_writer();

        assert_eq!(writer.write(b"dropped").unwrap(), 7);
        assert!(writer.flush().is_ok());
    }
}
