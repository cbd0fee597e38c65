//! Shared helpers: a hand-rolled encoder for the metadata wire format and a
//! fake `MetadataLoader` that serves blobs from memory while counting how
//! often each resource is opened.

use std::collections::HashMap;
use std::io::{self, Cursor, Read};
use std::sync::{Arc, Mutex, Once};

use crate::MetadataLoader;

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .init();
    });
}

// ---------------------------------------------------------------------------
// Wire-format encoding. The reader under test consumes the protobuf wire
// format; fixtures are encoded by hand so the tests stay independent of any
// generation tooling.
// ---------------------------------------------------------------------------

pub fn varint(mut value: u64, out: &mut Vec<u8>) {
    loop {
        let mut byte = (value & 0x7f) as u8;
        value >>= 7;
        if value != 0 {
            byte |= 0x80;
        }
        out.push(byte);
        if value == 0 {
            break;
        }
    }
}

pub fn tag(field: u32, wire_type: u32, out: &mut Vec<u8>) {
    varint(u64::from((field << 3) | wire_type), out);
}

pub fn varint_field(field: u32, value: u64, out: &mut Vec<u8>) {
    tag(field, 0, out);
    varint(value, out);
}

pub fn string_field(field: u32, value: &str, out: &mut Vec<u8>) {
    tag(field, 2, out);
    varint(value.len() as u64, out);
    out.extend_from_slice(value.as_bytes());
}

pub fn message_field(field: u32, body: &[u8], out: &mut Vec<u8>) {
    tag(field, 2, out);
    varint(body.len() as u64, out);
    out.extend_from_slice(body);
}

/// PhoneNumberDesc with only a national number pattern set.
pub fn desc_with_pattern(pattern: &str) -> Vec<u8> {
    let mut out = Vec::new();
    string_field(2, pattern, &mut out);
    out
}

/// PhoneMetadata record with the fields most fixtures need.
pub fn metadata_record(id: &str, country_code: i32, general_desc_pattern: Option<&str>) -> Vec<u8> {
    let mut out = Vec::new();
    if let Some(pattern) = general_desc_pattern {
        message_field(1, &desc_with_pattern(pattern), &mut out);
    }
    string_field(9, id, &mut out);
    varint_field(10, country_code as u64, &mut out);
    out
}

pub fn collection(records: &[Vec<u8>]) -> Vec<u8> {
    let mut out = Vec::new();
    for record in records {
        message_field(1, record, &mut out);
    }
    out
}

// ---------------------------------------------------------------------------
// Fake loader.
// ---------------------------------------------------------------------------

enum Resource {
    Bytes(Vec<u8>),
    ReadError,
}

#[derive(Default)]
struct Inner {
    resources: Mutex<HashMap<String, Resource>>,
    opens: Mutex<HashMap<String, usize>>,
}

/// In-memory `MetadataLoader`. Clones share state, so a test can keep a
/// handle for assertions after moving a clone into the source under test.
#[derive(Clone, Default)]
pub struct FakeMetadataLoader {
    inner: Arc<Inner>,
}

impl FakeMetadataLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, name: &str, bytes: Vec<u8>) {
        self.inner
            .resources
            .lock()
            .unwrap()
            .insert(name.to_owned(), Resource::Bytes(bytes));
    }

    /// Registers a resource whose stream fails on the first read.
    pub fn put_read_error(&self, name: &str) {
        self.inner
            .resources
            .lock()
            .unwrap()
            .insert(name.to_owned(), Resource::ReadError);
    }

    pub fn open_count(&self, name: &str) -> usize {
        self.inner
            .opens
            .lock()
            .unwrap()
            .get(name)
            .copied()
            .unwrap_or_default()
    }

    pub fn total_opens(&self) -> usize {
        self.inner.opens.lock().unwrap().values().sum()
    }
}

impl MetadataLoader for FakeMetadataLoader {
    fn load_metadata(&self, metadata_file_name: &str) -> Option<Box<dyn Read>> {
        *self
            .inner
            .opens
            .lock()
            .unwrap()
            .entry(metadata_file_name.to_owned())
            .or_insert(0) += 1;
        match self.inner.resources.lock().unwrap().get(metadata_file_name)? {
            Resource::Bytes(bytes) => Some(Box::new(Cursor::new(bytes.clone()))),
            Resource::ReadError => Some(Box::new(BrokenReader)),
        }
    }
}

struct BrokenReader;

impl Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(
            io::ErrorKind::Other,
            "broken metadata stream",
        ))
    }
}
