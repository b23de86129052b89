mod common;

use std::io;
use std::sync::{Arc, Mutex};

use cerif_core::{ConversionOptions, convert};
use cerif_ingest::InputTables;
use cerif_standards::Catalog;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

use common::{relation, researcher, unit};

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().expect("log buffer").clone()).expect("utf-8 logs")
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn placeholder_logs_hide_name_and_federated_id() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .finish();
    let tables = InputTables {
        researchers: vec![researcher("Alice", Some("R1"))],
        research_groups: vec![unit("AI Lab", "G1")],
        research_group_relations: vec![relation("G1", Some("EXT-77"), "Visitor, Vera", "no")],
        ..InputTables::default()
    };

    let conversion = tracing::subscriber::with_default(subscriber, || {
        convert(
            &tables,
            &Catalog::builtin(),
            &ConversionOptions::default().with_seed("logs"),
        )
    })
    .expect("convert");

    assert_eq!(conversion.report.placeholders(), 1);
    let text = logs.text();
    assert!(text.contains("synthesized placeholder person"), "{text}");
    assert!(text.contains("[REDACTED]"), "{text}");
    assert!(!text.contains("EXT-77"), "{text}");
    assert!(!text.contains("Vera"), "{text}");
}
