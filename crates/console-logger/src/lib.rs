//! Console Logger
//!
//! A `tracing` layer that writes events to the browser console.
//! Off-wasm (native tests) the same lines go to stderr.

use std::fmt;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

/// Level used when the configured level does not parse
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::INFO;

/// Install the console layer as the global subscriber.
///
/// Only the first call takes effect. `log` records from dependencies are
/// bridged through `tracing-subscriber`'s log integration.
pub fn init(level: &str) {
    let subscriber = tracing_subscriber::registry()
        .with(parse_level(level))
        .with(ConsoleLayer);

    let _ = subscriber.try_init();
}

/// Parse a level name (`error`, `warn`, `info`, `debug`, `trace`, `off`)
pub fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(DEFAULT_LEVEL)
}

/// Layer that formats each event into a single console line
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleLayer;

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let mut fields = FieldCollector::default();
        event.record(&mut fields);

        let line = format_line(meta.level(), meta.target(), &fields.message, &fields.extra);
        emit(meta.level(), &line);
    }
}

#[derive(Default)]
struct FieldCollector {
    message: String,
    extra: Vec<(&'static str, String)>,
}

impl Visit for FieldCollector {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.extra.push((field.name(), value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.extra.push((field.name(), format!("{:?}", value)));
        }
    }
}

/// `[LEVEL target] message key=value ...`
pub fn format_line(level: &Level, target: &str, message: &str, fields: &[(&str, String)]) -> String {
    let mut line = format!("[{} {}] {}", level, target, message);
    for (name, value) in fields {
        line.push(' ');
        line.push_str(name);
        line.push('=');
        line.push_str(value);
    }
    line
}

#[cfg(target_arch = "wasm32")]
fn emit(level: &Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match *level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        Level::INFO => web_sys::console::info_1(&value),
        _ => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: &Level, line: &str) {
    eprintln!("{}", line);
}
