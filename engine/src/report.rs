//! Utilities for structured reporting of experimental results.
//!
//! Values are reported under keys into a tree of JSON objects and collections.
//! The tree mirrors the call structure: RAII guards open nested contexts and close them when dropped.
//! When the `ReportingGuard` returned by `enable_reporting` is dropped, the whole tree is printed to stdout as one JSON object.
//! Without an enabled reporter all reporting calls are no-ops, so algorithm code can report unconditionally.
//! The reporter is thread local.

use crate::built_info;
use serde_json::{Map, Value};
use std::cell::RefCell;

pub use serde_json::json;

#[derive(Debug)]
enum Context {
    Object(Map<String, Value>),
    Collection(Vec<Value>),
}

#[derive(Debug)]
struct Frame {
    // key in the parent object, `None` for collection items and the root
    key: Option<String>,
    context: Context,
}

#[derive(Debug)]
struct Reporter {
    stack: Vec<Frame>,
}

impl Default for Reporter {
    fn default() -> Self {
        Reporter {
            stack: vec![Frame {
                key: None,
                context: Context::Object(Map::new()),
            }],
        }
    }
}

impl Reporter {
    fn current(&mut self) -> &mut Context {
        &mut self.stack.last_mut().expect("reporting context stack empty").context
    }

    fn push_object_under_key(&mut self, key: String) {
        assert!(matches!(self.current(), Context::Object(_)), "Cannot create object at key in collection");
        self.stack.push(Frame {
            key: Some(key),
            context: Context::Object(Map::new()),
        });
    }

    fn push_collection_under_key(&mut self, key: String) {
        assert!(matches!(self.current(), Context::Object(_)), "Cannot create collection at key in collection");
        self.stack.push(Frame {
            key: Some(key),
            context: Context::Collection(Vec::new()),
        });
    }

    fn push_collection_item(&mut self) {
        assert!(matches!(self.current(), Context::Collection(_)), "Cannot create collection item in object");
        self.stack.push(Frame {
            key: None,
            context: Context::Object(Map::new()),
        });
    }

    fn report(&mut self, key: String, val: Value) {
        match self.current() {
            Context::Object(object) => {
                let prev = object.insert(key, val);
                assert!(prev.is_none(), "value reported twice under the same key");
            }
            Context::Collection(_) => panic!("Cannot report value on collection"),
        }
    }

    fn pop_context(&mut self) {
        assert!(self.stack.len() > 1, "tried to pop the root context");
        let Frame { key, context } = self.stack.pop().expect("tried to pop from empty context");
        let value = match context {
            Context::Object(object) => Value::Object(object),
            Context::Collection(collection) => Value::Array(collection),
        };

        match (self.current(), key) {
            (Context::Object(parent), Some(key)) => {
                let prev = parent.insert(key, value);
                assert!(prev.is_none(), "context reported twice under the same key");
            }
            (Context::Collection(parent), None) => parent.push(value),
            _ => panic!("Inconsistent context stack"),
        }
    }

    fn finish(mut self) -> Value {
        assert_eq!(self.stack.len(), 1, "reporting contexts still open");
        match self.stack.pop().map(|frame| frame.context) {
            Some(Context::Object(object)) => Value::Object(object),
            _ => panic!("broken root object for reporting"),
        }
    }
}

thread_local! {
    static REPORTER: RefCell<Option<Reporter>> = RefCell::new(None);
}

fn with_reporter(f: impl FnOnce(&mut Reporter)) {
    REPORTER.with(|reporter| {
        if let Some(r) = reporter.borrow_mut().as_mut() {
            f(r)
        }
    });
}

/// Keeps an object context open, closes it on drop.
#[must_use]
pub struct ContextGuard(());

impl Drop for ContextGuard {
    fn drop(&mut self) {
        with_reporter(Reporter::pop_context);
    }
}

/// Open a nested object under `key` in the current object.
pub fn push_context(key: String) -> ContextGuard {
    with_reporter(|r| r.push_object_under_key(key));
    ContextGuard(())
}

/// Keeps a collection context open, closes it on drop.
#[must_use]
pub struct CollectionContextGuard(());

impl Drop for CollectionContextGuard {
    fn drop(&mut self) {
        with_reporter(Reporter::pop_context);
    }
}

/// Open a collection under `key` in the current object.
pub fn push_collection_context(key: String) -> CollectionContextGuard {
    with_reporter(|r| r.push_collection_under_key(key));
    CollectionContextGuard(())
}

impl CollectionContextGuard {
    /// Append a new object to the collection, subsequent reports go into this object.
    pub fn push_collection_item(&mut self) -> CollectionItemContextGuard {
        with_reporter(Reporter::push_collection_item);
        CollectionItemContextGuard(self)
    }
}

#[must_use]
pub struct CollectionItemContextGuard<'a>(&'a CollectionContextGuard);

impl<'a> Drop for CollectionItemContextGuard<'a> {
    fn drop(&mut self) {
        with_reporter(Reporter::pop_context);
    }
}

/// Report `val` under `key` and echo it to stderr.
pub fn report(key: String, val: Value) {
    if cfg!(feature = "report-to-stderr") {
        eprintln!("{}: {}", key, val);
    }
    report_silent(key, val)
}

fn report_silent(key: String, val: Value) {
    with_reporter(|r| r.report(key, val));
}

/// Prints the collected report when dropped.
#[must_use]
pub struct ReportingGuard(());

impl Drop for ReportingGuard {
    fn drop(&mut self) {
        REPORTER.with(|reporter| {
            if let Some(r) = reporter.borrow_mut().take() {
                println!("{}", r.finish());
            }
        });
    }
}

#[macro_export]
macro_rules! report {
    ($k:expr, $($json:tt)+) => { $crate::report::report($k.to_string(), $crate::report::json!($($json)+)) };
}

/// Start collecting a report for `program`.
/// Records build information, the start time and the command line.
pub fn enable_reporting(program: &str) -> ReportingGuard {
    REPORTER.with(|reporter| reporter.replace(Some(Reporter::default())));

    report!("program", program);
    report!("package_version", built_info::PKG_VERSION);
    report!("build_target", built_info::TARGET);
    report!("build_profile", built_info::PROFILE);
    report!("feature_flags", built_info::FEATURES_STR);
    report!("build_with_rustc", built_info::RUSTC_VERSION);

    let start_time = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc2822)
        .unwrap_or_default();
    report!("start_time", start_time);
    report!("args", std::env::args().collect::<Vec<String>>());

    ReportingGuard(())
}

/// Run `f` with reporting enabled and return the collected report instead of printing it.
pub fn collect_report<Out>(f: impl FnOnce() -> Out) -> (Out, Value) {
    REPORTER.with(|reporter| reporter.replace(Some(Reporter::default())));
    let res = f();
    let report = REPORTER
        .with(|reporter| reporter.borrow_mut().take())
        .map_or(Value::Null, Reporter::finish);
    (res, report)
}

pub mod benchmark;
pub use benchmark::*;
